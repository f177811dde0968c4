use notare::{error, App, Result, TuiApplication};
use std::path::PathBuf;

fn main() -> Result<()> {
    error::setup_panic_handler();

    let initial_file = parse_args(&std::env::args().skip(1).collect::<Vec<String>>());

    let mut app = App::new();
    if let Some(path) = initial_file {
        app.open_initial_file(&path);
    }

    TuiApplication::new(app).run()
}

/// 引数解析（最初の非オプション引数を開くファイルとして扱う）
fn parse_args(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("notare {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            _ if !arg.starts_with('-') => return Some(PathBuf::from(arg)),
            _ => {}
        }
    }
    None
}

fn print_usage() {
    println!("notare - Minimal notepad-style text editor");
    println!();
    println!("Usage: notare [FILE]");
    println!();
    println!("Keys:");
    println!("  Ctrl+O  open file    Ctrl+S  save");
    println!("  Ctrl+Z  undo         Ctrl+Y  redo");
    println!("  Ctrl+W  word count   Ctrl+F  search");
    println!("  Ctrl+Q  quit");
}
