use clap::Parser;
use snapsight::config::SnapConfig;
use snapsight::{logging, pipeline};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = logging::init_logger();

    let config = SnapConfig::parse();

    if let Err(e) = pipeline::run(&config).await {
        error!("{:#}", e);
        println!("[!] {:#}", e);
        std::process::exit(1);
    }
}
