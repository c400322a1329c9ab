use std::io;
use std::process::ExitCode;

use clap::Parser;
use ordo_gateway::{BinanceFutures, Credentials, GatewayConfig};
use ordo_runner::{Cli, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_file) {
        println!("Error: {}", e);
        return ExitCode::from(e.exit_code());
    }

    let connect = |config: GatewayConfig, credentials: Credentials| async move {
        BinanceFutures::authenticate(&config, &credentials).await
    };

    match run(&cli, connect, &mut io::stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("\nError: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
