use clap::Parser;
use colorstrip_config::{Overrides, Settings, random_seed};
use tracing::info;

mod app;
mod canvas;
mod cli;
mod dump;
mod logging;
mod scene;

use app::App;
use cli::{Cli, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play);
    logging::init(cli.log_file.as_deref(), command != Command::Play)?;

    let settings = resolve_settings(&cli)?;
    info!(
        seed = settings.seed,
        theme = %settings.theme,
        strips = settings.strip_count,
        "resolved settings"
    );

    match command {
        Command::Play => {
            let app = App::new(settings)?;
            let terminal = ratatui::init();
            let result = app.run(terminal);
            ratatui::restore();
            result
        }
        Command::Dump {
            frames,
            width,
            height,
            time_increment,
        } => dump::run(settings, frames, width, height, time_increment),
        Command::Config => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

/// Layer config file, parameter fragment and flags, lowest priority first.
fn resolve_settings(cli: &Cli) -> color_eyre::Result<Settings> {
    let file = match &cli.config {
        Some(path) => Overrides::load(path)?,
        None => Overrides::load_default()?,
    };
    let fragment = match &cli.params {
        Some(params) => Overrides::from_fragment(params)?,
        None => Overrides::default(),
    };
    let settings = file
        .merge(fragment)
        .merge(cli.options.overrides())
        .resolve(random_seed())?;
    Ok(settings)
}
