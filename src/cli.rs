//! Command-line driver standing in for the login screen.
//!
//! Fills the two fields from arguments, presses login, prints the status as it
//! moves through `Loading` to a result, shows the result dialog, then confirms
//! it (which clears the screen back to `Empty`).

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{AttemptPolicy, Config, ConfigError};
use crate::login::LoginStateController;
use crate::ui::login::{DialogModel, LoginStatus, ScreenModel};

#[derive(Debug, Parser)]
#[command(name = "stateflow", version, about = "Run a simulated login attempt")]
pub struct Cli {
    /// Username field value
    #[arg(short, long, default_value = "")]
    pub username: String,

    /// Password field value
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Simulated network delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// How a newer attempt or a reset treats a pending attempt
    #[arg(long, value_enum)]
    pub policy: Option<AttemptPolicy>,

    /// Config file path (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print statuses as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Log to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(delay_ms) = self.delay_ms {
            config.login.delay_ms = delay_ms;
        }
        if let Some(policy) = self.policy {
            config.login.policy = policy;
        }
        config.validate()?;
        Ok(config)
    }
}

struct StatusPrinter {
    json: bool,
}

impl StatusPrinter {
    fn status(&self, out: &mut impl Write, status: &LoginStatus) -> anyhow::Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(status)?)?;
            return Ok(());
        }
        match status.message() {
            Some(message) => writeln!(out, "status: {} - {}", status.label(), message)?,
            None => writeln!(out, "status: {}", status.label())?,
        }
        Ok(())
    }

    fn dialog(&self, out: &mut impl Write, dialog: &DialogModel) -> anyhow::Result<()> {
        // JSON consumers already have the message from the status line.
        if !self.json {
            writeln!(out, "{}: {} [{}]", dialog.title, dialog.message, dialog.confirm)?;
        }
        Ok(())
    }
}

/// Run one attempt to completion. Returns the resolved status.
pub async fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<LoginStatus> {
    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;

    let controller = LoginStateController::new(config.login);
    let printer = StatusPrinter { json: cli.json };
    let mut subscription = controller.subscribe();
    printer.status(out, &subscription.current())?;

    let attempt = controller.attempt_login(cli.username.as_str(), cli.password.as_str());
    tracing::debug!(attempt_id = %attempt.id(), "Waiting for login attempt");
    // `attempt_login` has published `Loading` before returning, but with a
    // zero delay the watch channel may already hold the result.
    printer.status(out, &LoginStatus::Loading)?;

    let Some(resolved) = subscription.wait_for(LoginStatus::is_terminal).await else {
        anyhow::bail!("login controller closed before the attempt resolved");
    };
    printer.status(out, &resolved)?;

    if let Some(dialog) = ScreenModel::from_status(&resolved).dialog {
        printer.dialog(out, &dialog)?;
    }
    controller.acknowledge();
    printer.status(out, &controller.current_status())?;
    out.flush()?;

    Ok(resolved)
}
