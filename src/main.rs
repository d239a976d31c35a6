use std::{env, io};

use fnkit::showcase::{
    registry::{catalog, get_demo},
    runner::{run_all, run_demo},
};

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let annotate = args.iter().any(|arg| arg == "--annotate");
    let json = args.iter().any(|arg| arg == "--json");
    if annotate {
        args.retain(|arg| arg != "--annotate");
    }
    if json {
        args.retain(|arg| arg != "--json");
    }

    if args.len() < 2 {
        run_showcase(None, annotate);
        return;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "run" => {
            run_showcase(args.get(2).map(String::as_str), annotate);
        }
        "list" => {
            if json {
                list_json();
            } else {
                list_table();
            }
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
        }
    }
}

fn run_showcase(name: Option<&str>, annotate: bool) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match name {
        Some(name) => match get_demo(name) {
            Some(demo) => run_demo(demo, &mut out, annotate),
            None => {
                eprintln!("Unknown demonstration: {}", name);
                eprintln!("Run `fnkit list` to see the registered names.");
                return;
            }
        },
        None => run_all(&mut out, annotate),
    };

    if let Err(err) = result {
        eprintln!("Error: failed to write output: {}", err);
    }
}

fn list_table() {
    let catalog = catalog();
    let width = catalog.iter().map(|info| info.name.len()).max().unwrap_or(0);
    for info in &catalog {
        println!("{:<width$}  {}", info.name, info.summary, width = width);
    }
}

fn list_json() {
    match serde_json::to_string_pretty(&catalog()) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => eprintln!("Error: failed to render catalog: {}", err),
    }
}

fn print_help() {
    println!(
        "\
fnkit v{}

Usage:
  fnkit                  Run the full showcase
  fnkit run [<name>]     Run the full showcase, or a single demonstration
  fnkit list [--json]    List the registered demonstrations
  fnkit help             Show this help message

Flags:
  --annotate             Precede each demonstration's output with its name",
        env!("CARGO_PKG_VERSION")
    );
}
