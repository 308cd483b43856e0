use clap::Parser;

use tip_ui::{app, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    app::run(cli)
}
