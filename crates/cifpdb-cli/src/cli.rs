use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cifpdb - Convert PDBx/mmCIF structure files to best-effort PDB bundle files and back.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an mmCIF file into a set of PDB bundle files plus a
    /// chain-id mapping table.
    ToPdb(ToPdbArgs),
    /// Convert a PDB file into an mmCIF file with a minimal atom_site loop.
    ToCif(ToCifArgs),
}

/// Arguments for the `to-pdb` subcommand.
#[derive(Args, Debug)]
pub struct ToPdbArgs {
    /// Path to the input mmCIF file. Use '-' to read from standard input;
    /// a '.gz' suffix is decompressed transparently.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory the output files are written into. Defaults to the
    /// current directory.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file name prefix, replacing the entry id from the input.
    #[arg(short, long, value_name = "NAME")]
    pub prefix: Option<String>,

    /// Convert the polymer sequences into SEQRES records.
    #[arg(long)]
    pub seqres: bool,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `to-cif` subcommand.
#[derive(Args, Debug)]
pub struct ToCifArgs {
    /// Path to the input PDB file. Use '-' to read from standard input;
    /// a '.gz' suffix is decompressed transparently.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output mmCIF file. Defaults to '<entry>.cif' in the
    /// current directory; a '.gz' suffix enables compression.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Restrict the output to these chain ids (comma-separated).
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub chain: Vec<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
