use clap::Parser;
use settlement_routes::app;

fn main() {
    let cli = app::Cli::parse();
    if let Err(e) = app::run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
