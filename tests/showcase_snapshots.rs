use fnkit::showcase::registry::DEMOS;

fn full_transcript() -> String {
    DEMOS
        .iter()
        .flat_map(|demo| demo.transcript().into_lines())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn full_run_snapshot() {
    let transcript = full_transcript();
    insta::with_settings!({
        snapshot_path => "snapshots/showcase",
        prepend_module_to_snapshot => false,
        omit_expression => true,
    }, {
        insta::assert_snapshot!("full_run", transcript);
    });
}

#[test]
fn per_demo_snapshots() {
    for demo in DEMOS {
        let transcript = demo.transcript().into_lines().join("\n");
        insta::with_settings!({
            snapshot_path => "snapshots/showcase",
            prepend_module_to_snapshot => false,
            omit_expression => true,
        }, {
            insta::assert_snapshot!(demo.name, transcript);
        });
    }
}
