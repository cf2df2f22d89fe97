//! Command-line interface for breaktest
//! This binary converts a downloaded `GraphemeBreakTest.txt` fixture into a
//! structured test corpus in one of the registered output formats.
//!
//! The fixture itself is fetched outside this tool, e.g.:
//!   curl -o GraphemeBreakTest.txt \
//!     https://www.unicode.org/Public/UCD/latest/ucd/auxiliary/GraphemeBreakTest.txt
//!
//! Usage:
//!   breaktest `<path>` [--format `<format>`] [--escapes `<style>`]
//!   breaktest --list-formats

use clap::{Arg, ArgAction, Command};

use breaktest::fixture::{parse_fixture, EscapeStyle, FormatRegistry, GoEscapes, RustEscapes};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("breaktest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Unicode grapheme break-test fixtures into test corpora")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the downloaded GraphemeBreakTest.txt fixture")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("go-test"),
        )
        .arg(
            Arg::new("escapes")
                .long("escapes")
                .short('e')
                .help("Codepoint escape style: 'go', 'rust', or 'auto' (match the format)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches.get_one::<String>("format").unwrap();
    let escapes = matches.get_one::<String>("escapes").unwrap();
    handle_convert_command(path, format, escapes);
}

/// Handle the convert command
fn handle_convert_command(path: &str, format: &str, escapes: &str) {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    }

    let escapes = resolve_escapes(escapes, format).unwrap_or_else(|| {
        eprintln!("Unknown escape style '{}'; use 'go', 'rust', or 'auto'", escapes);
        std::process::exit(1);
    });

    let fixture = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Could not read fixture '{}': {}", path, e);
        std::process::exit(1);
    });

    let cases = parse_fixture(fixture.lines(), escapes.as_ref()).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });

    let rendered = registry.render(&cases, format).unwrap_or_else(|e| {
        eprintln!("Rendering error: {}", e);
        std::process::exit(1);
    });

    print!("{}", rendered);
}

/// Pick the escape style, resolving "auto" from the output format the way
/// the generated source expects (rust-test wants rust escapes, everything
/// else gets the original go style).
fn resolve_escapes(escapes: &str, format: &str) -> Option<Box<dyn EscapeStyle>> {
    match escapes {
        "go" => Some(Box::new(GoEscapes)),
        "rust" => Some(Box::new(RustEscapes)),
        "auto" => {
            if format == "rust-test" {
                Some(Box::new(RustEscapes))
            } else {
                Some(Box::new(GoEscapes))
            }
        }
        _ => None,
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|f| f.description().to_string())
            .unwrap_or_default();
        println!("  {} - {}", name, description);
    }
}
