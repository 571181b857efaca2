use std::io::Write;

use bedside_cli::cli::{Cli, Commands, ConfigAction};
use bedside_cli::commands::{self, EvaluateOptions};
use bedside_cli::{config, logging};
use bedside_store::CsvRecordStore;
use clap::Parser;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Evaluate {
            input,
            save,
            format,
            ack,
            store,
        } => {
            let config = config::load_or_default(&config_path)?;
            let mut store = CsvRecordStore::new(commands::store_path(store, &config));
            let form = commands::read_form(&input)?;
            let opts = EvaluateOptions { save, format, ack };
            commands::evaluate(&form, &opts, &config, &mut store, &mut out)?;
        }
        Commands::Score { scale, input } => {
            let form = commands::read_form(&input)?;
            commands::score_one(&scale, &form, &mut out)?;
        }
        Commands::Scales => commands::list_scales(&mut out)?,
        Commands::Template => commands::template(&mut out)?,
        Commands::Export { out: target, store } => {
            let config = config::load_or_default(&config_path)?;
            let store = CsvRecordStore::new(commands::store_path(store, &config));
            commands::export(&store, target.as_deref(), &mut out)?;
        }
        Commands::List { store } => {
            let config = config::load_or_default(&config_path)?;
            let store = CsvRecordStore::new(commands::store_path(store, &config));
            commands::list(&store, &mut out)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config_init(&config_path, force, &mut out)?,
            ConfigAction::Show => {
                let config = config::load_or_default(&config_path)?;
                commands::config_show(&config, &mut out)?;
            }
            ConfigAction::Path => writeln!(out, "{}", config_path.display())?,
        },
    }

    out.flush()?;
    Ok(())
}
