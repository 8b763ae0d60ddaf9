// Tienda - product inventory
// Binary entry point

use std::process::ExitCode;

use clap::Parser;
use tienda::cli::Cli;
use tienda::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tienda::init_tracing();

    let cli = Cli::parse();
    match tienda::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already shown as an alert
        Err(AppError::Rejected(_)) | Err(AppError::Database(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {}", console::style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
