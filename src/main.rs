use std::process::ExitCode;

use clap::Parser;
use stateflow::cli::{self, Cli};
use stateflow::logging::init_tracing;
use stateflow::ui::login::LoginStatus;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match cli::run(&cli, &mut stdout).await {
        Ok(LoginStatus::Success { .. }) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, "Login run failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
