pub mod app;
pub mod args;
pub mod config;
pub mod files;
pub mod output;
pub mod ui;

use std::fs::OpenOptions;

use clap::Parser;
use color_eyre::eyre::Error;
use linecode::{
    BitSequence,
    timeline,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::App,
    args::{
        Args,
        Command,
        EncodeArgs,
    },
    config::Config,
    files::AppFiles,
    ui::keybinds::Keybinds,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    color_eyre::install()?;

    let args = Args::parse();
    let app_files = AppFiles::new()?;

    // the viewer owns the terminal, so we never log to stdout/stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(app_files.log_file())?,
        )
        .init();

    tracing::info!("Starting linecode-cli");
    tracing::debug!(?args);

    let config = if let Some(path) = &args.config {
        Config::from_path(path)?
    }
    else {
        app_files.config()?
    };

    let result = match args.command.unwrap_or_default() {
        Command::Encode(encode_args) => encode(encode_args, &config),
        Command::Schemes => output::write_schemes(std::io::stdout().lock()),
        Command::View(view_args) => {
            let keybinds = if let Some(path) = &args.keybinds {
                Keybinds::from_path(path)?
            }
            else {
                app_files.keybinds()?
            };

            App::new(view_args, &config, keybinds)?.run().await
        }
    };

    if let Err(error) = &result {
        tracing::error!(?error);
    }
    else {
        tracing::info!("Program exiting");
    }

    result
}

fn encode(args: EncodeArgs, config: &Config) -> Result<(), Error> {
    let scheme = args.scheme.unwrap_or(config.default_scheme);

    let bits = if args.strict || config.strict {
        BitSequence::parse_strict(&args.bits)?
    }
    else {
        BitSequence::from(args.bits.as_str())
    };

    let timeline = timeline::project(&scheme.encode(&bits), scheme.time_base());
    let points = if args.stepped {
        timeline.stepped()
    }
    else {
        timeline.into_points()
    };

    output::write_points(std::io::stdout().lock(), args.format, scheme, &points)
}
