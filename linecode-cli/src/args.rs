use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use linecode::Scheme;

#[derive(Debug, Parser)]
#[clap(about = "Digital line coding encoder and waveform viewer")]
pub struct Args {
    /// Configuration file. Defaults to `config.toml` in the config directory.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keybinds file. Defaults to `keybinds.json` in the config directory.
    #[clap(long, global = true)]
    pub keybinds: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a bit string and print the resulting waveform.
    Encode(EncodeArgs),

    /// List the supported line coding schemes.
    Schemes,

    /// Interactive waveform viewer. This is the default.
    View(ViewArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::View(ViewArgs::default())
    }
}

#[derive(Debug, clap::Args)]
pub struct EncodeArgs {
    /// Bits to encode. Every character other than `1` is a zero bit, unless
    /// --strict is given.
    pub bits: String,

    /// Line coding scheme, e.g. "NRZ-L" or "Differential Manchester".
    #[clap(short, long)]
    pub scheme: Option<Scheme>,

    #[clap(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print the corner points of the step plot instead of the raw samples.
    #[clap(long)]
    pub stepped: bool,

    /// Reject characters other than `0` and `1`.
    #[clap(long)]
    pub strict: bool,
}

#[derive(Debug, Default, clap::Args)]
pub struct ViewArgs {
    /// Initial input text.
    pub bits: Option<String>,

    /// Initially selected scheme.
    #[clap(short, long)]
    pub scheme: Option<Scheme>,

    /// Redraw the screen every X milliseconds.
    #[clap(long)]
    pub redraw_interval: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}
