//! Startup sequence shared by the window and `--print` modes.

use anyhow::Context as _;
use tip_core::TipForm;
use tracing::{debug, info, warn};

use crate::{cli::Cli, config::AppConfig, gui, logging};

/// Loads configuration, applies it to logging, then either logs the summary
/// (`--print`) or runs the window until it is closed.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    logging::apply_config(&config.logging).context("configuring logging")?;

    info!(app = logging::app_name(), "starting");
    let form = cli.initial_form();
    debug!(%form, "initial form");

    if cli.print {
        for warning in cli.input_warnings() {
            warn!("{}", warning);
        }
        info!("\n{}", summary_report(&form));
        return Ok(());
    }

    gui::launch(form, &config);
    info!("shutting down");
    Ok(())
}

/// The text `--print` logs: the inputs followed by the computed amounts.
pub fn summary_report(form: &TipForm) -> String {
    format!("{form}\n{}", form.summary())
}
