use clap::Parser;

use metacrawl_cli::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = metacrawl_cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
