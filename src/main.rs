//! forge – command-line layout → HTML/CSS compiler.
//!
//! Usage:
//!   forge <layout.json> [output.html] [--stdout] [--title "My Page"]
//!
//! If `output.html` is omitted the document is written next to the input
//! file with the same stem (e.g. `landing.json` → `landing.html`), and the
//! stylesheet beside it as `landing.css`.

use std::{env, fs, path::PathBuf, process};

use markup_forge::pipeline::compile_json;
use markup_forge::Layout;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut to_stdout = false;
    let mut title: Option<String> = None;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--stdout" | "-s" => to_stdout = true,
            "--title" | "-t" => match iter.next() {
                Some(v) => title = Some(v.clone()),
                None => {
                    eprintln!("Error: --title requires a value.");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    input_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    let input = match input_path {
        Some(p) => p,
        None => {
            eprintln!("Error: no input file specified.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let json = match fs::read_to_string(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", input.display());
            process::exit(1);
        }
    };

    // An explicit --title overrides the layout's own title.
    let json = match title {
        Some(t) => match Layout::from_json(&json) {
            Ok(mut layout) => {
                layout.title = Some(t);
                layout.to_json()
            }
            Err(_) => json,
        },
        None => json,
    };

    let output = match compile_json(&json) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error compiling '{}': {e}", input.display());
            process::exit(1);
        }
    };

    if to_stdout {
        println!("{}", output.html);
        return;
    }

    // Default output: same directory + same stem as input, but with .html
    let html_path = output_path.unwrap_or_else(|| {
        let mut o = input.clone();
        o.set_extension("html");
        o
    });
    let css_path = html_path.with_extension("css");

    if let Some(parent) = html_path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating output directory: {e}");
                process::exit(1);
            }
        }
    }

    if let Err(e) = fs::write(&html_path, &output.html) {
        eprintln!("Error writing '{}': {e}", html_path.display());
        process::exit(1);
    }
    if let Err(e) = fs::write(&css_path, &output.css) {
        eprintln!("Error writing '{}': {e}", css_path.display());
        process::exit(1);
    }

    eprintln!(
        "Wrote '{}' ({} bytes) and '{}' ({} bytes)",
        html_path.display(),
        output.html.len(),
        css_path.display(),
        output.css.len()
    );
}

fn print_usage(prog: &str) {
    eprintln!("forge – layout to HTML/CSS compiler (markup-forge)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <layout.json> [output.html] [--stdout] [--title \"My Page\"]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <layout.json>  Layout description to compile");
    eprintln!("  [output.html]  Output path (default: same stem as input with .html;");
    eprintln!("                 the stylesheet is written beside it with .css)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --title, -t    Override the layout's title");
    eprintln!("  --stdout, -s   Print the HTML document to stdout instead of writing files");
    eprintln!("  --help         Print this message");
}
