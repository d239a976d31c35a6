use std::io::{self, Write};

use crate::showcase::{demo::Demo, registry::DEMOS};

/// Runs every registered demonstration in order, writing each transcript
/// line to `out`.
pub fn run_all(out: &mut dyn Write, annotate: bool) -> io::Result<()> {
    for demo in DEMOS {
        run_demo(demo, out, annotate)?;
    }
    Ok(())
}

/// Runs a single demonstration. With `annotate` set, the output is preceded
/// by a `== name ==` header.
pub fn run_demo(demo: &Demo, out: &mut dyn Write, annotate: bool) -> io::Result<()> {
    if annotate {
        writeln!(out, "== {} ==", demo.name)?;
    }
    for line in demo.transcript().lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::registry::get_demo;

    fn capture(run: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_run_produces_the_fixed_lines() {
        let output = capture(|out| run_all(out, false));
        assert_eq!(output, "3\n3\n3\n3\n3\n3\n3\ntrue\ndemo\ndemo\n");
    }

    #[test]
    fn annotated_run_prefixes_each_demo() {
        let output = capture(|out| run_all(out, true));
        for demo in DEMOS {
            assert!(
                output.contains(&format!("== {} ==\n", demo.name)),
                "missing header for `{}`:\n{}",
                demo.name,
                output
            );
        }
        assert!(output.starts_with("== closure-add ==\n3\n"));
    }

    #[test]
    fn single_demo_runs_alone() {
        let demo = get_demo("blank-predicate").unwrap();
        let output = capture(|out| run_demo(demo, out, false));
        assert_eq!(output, "true\n");
    }
}
