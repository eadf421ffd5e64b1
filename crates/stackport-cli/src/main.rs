//! Binary entrypoint for the Stackport CLI.

use std::process;

#[tokio::main]
async fn main() {
    let exit_code = stackport_cli::run().await;
    process::exit(exit_code);
}
