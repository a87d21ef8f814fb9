use artifact_io::cli::{decode_file, encode_file, file_size, make_dirs, show_json, show_yaml};
use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Artifact I/O: inspect and convert the YAML, JSON and image artifacts of an ML pipeline
#[derive(Parser)]
#[command(name = "artio", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source settings from, skipped if missing
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a YAML config, or one dotted key of it
    ReadYaml {
        /// The YAML file to read
        file: PathBuf,

        /// Dotted path of a single field, e.g. training.params.epochs
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Print a JSON record, or one dotted key of it
    JsonGet {
        /// The JSON file to read
        file: PathBuf,

        /// Dotted path of a single field, e.g. scores.accuracy
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Create directories and any missing parents
    Mkdirs {
        /// Directories to create
        #[arg(required = true)]
        dirs: Vec<String>,

        /// Do not log each created directory
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the approximate size of a file in KB
    Size {
        /// The file to measure
        file: PathBuf,
    },

    /// Base64-encode an image file
    Encode {
        /// The image to encode
        file: PathBuf,

        /// Write the encoded text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a file of base64 text back into an image
    Decode {
        /// File holding the base64 payload
        payload: PathBuf,

        /// Image file to write
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match dotenvy::from_filename(&cli.env) {
        Err(e) if !e.not_found() => return Err(e.into()),
        _ => {}
    }

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Commands::ReadYaml { file, key } => {
            log::debug!("Reading YAML config {}", file.display().bright_black());
            println!("{}", show_yaml(&file, key.as_deref())?);
        }
        Commands::JsonGet { file, key } => {
            log::debug!("Reading JSON record {}", file.display().bright_black());
            println!("{}", show_json(&file, key.as_deref())?);
        }
        Commands::Mkdirs { dirs, quiet } => {
            let count = make_dirs(&dirs, quiet)?;
            log::info!("{} director(ies) ready", count.cyan());
        }
        Commands::Size { file } => {
            println!("{}", file_size(&file)?);
        }
        Commands::Encode { file, output } => {
            match encode_file(&file, output.as_deref())? {
                Some(encoded) => println!("{}", encoded),
                None => log::info!(
                    "Encoded {} into {}",
                    file.display().bright_black(),
                    output.unwrap_or_default().display().bright_black()
                ),
            }
        }
        Commands::Decode { payload, output } => {
            decode_file(&payload, &output)?;
        }
    }

    Ok(())
}
