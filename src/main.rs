use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Run the CLI
    tocsmith::cli::run().await
}
