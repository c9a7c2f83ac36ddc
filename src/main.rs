use colored::Colorize;
use human_panic::setup_panic;

use methodscan::cli_ui;
use methodscan::config::Config;
use methodscan::probe;

#[tokio::main]
async fn main() {
    let config = match Config::get() {
        Ok(config) => config,
        Err(_) => std::process::exit(1),
    };

    setup_panic!();

    cli_ui::print_banner();
    cli_ui::print_host(&config.host);

    if let Err(e) = probe::run(&config).await {
        eprintln!("Error: {}", format!("{}", e).red());
        std::process::exit(1);
    }
}
