use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use hashdemo_cli::config::{self, AppConfig, ConfigManager};
use hashdemo_cli::error::{CliError, CliResult, ErrorContext, ExitCode};
use hashdemo_cli::orchestrators::crack_orchestrator::{CrackOptions, CrackOrchestrator};
use hashdemo_cli::output::{self, OutputFormat};
use hashdemo_cli::terminal;
use hashdemo_core::{AlgorithmRegistry, HashAlgorithm, SearchMode};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hashdemo")]
#[command(author, version, about = "Password hash strength demonstrator - see how fast weak passwords fall", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the password behind a digest
    Crack {
        /// Target digest in hexadecimal
        hash: String,

        /// Hash algorithm that produced the digest
        #[arg(short, long, value_enum, default_value = "md5")]
        algorithm: HashAlgorithmArg,

        /// Attack mode
        #[arg(short, long, value_enum, default_value = "brute-force")]
        mode: ModeArg,

        /// Word list for dictionary mode, one candidate per line
        #[arg(short, long, value_name = "PATH")]
        wordlist: Option<PathBuf>,

        /// Longest brute-force candidate (overrides search.max_length)
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Disable progress bar display
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the digest(s) of a plaintext
    Hash {
        /// Plaintext to hash
        plaintext: String,

        /// Hash algorithm to use
        #[arg(short, long, value_enum, default_value = "md5")]
        algorithm: HashAlgorithmArg,

        /// Print every available algorithm
        #[arg(long, conflicts_with = "algorithm")]
        all: bool,

        /// Output format (defaults to output.default_format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., search.max_length)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., search.max_length)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,

    /// Print the configuration file path
    Path,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum HashAlgorithmArg {
    Md5,
    Sha1,
    Ntlm,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    BruteForce,
    Dictionary,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

impl From<HashAlgorithmArg> for HashAlgorithm {
    fn from(arg: HashAlgorithmArg) -> Self {
        match arg {
            HashAlgorithmArg::Md5 => HashAlgorithm::MD5,
            HashAlgorithmArg::Sha1 => HashAlgorithm::SHA1,
            HashAlgorithmArg::Ntlm => HashAlgorithm::NTLM,
        }
    }
}

impl From<ModeArg> for SearchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::BruteForce => SearchMode::BruteForce,
            ModeArg::Dictionary => SearchMode::Dictionary,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    // Initialize logging based on debug flag
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("hashdemo_core", log::LevelFilter::Debug)
            .filter_module("hashdemo_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprint!("{}", error.format_for_user(debug));
            error.exit_code()
        }
    };

    // process::exit skips destructors, so flush buffered output first
    let _ = std::io::stdout().flush();
    std::process::exit(exit_code.code());
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Commands::Crack {
            hash,
            algorithm,
            mode,
            wordlist,
            max_length,
            format,
            no_progress,
        } => {
            let mut config = load_config()?;
            config.apply_cli_overrides(max_length);

            let show_progress = !no_progress
                && config.output.progress_enabled
                && terminal::should_show_progress_by_default();
            let options = CrackOptions {
                digest: hash,
                algorithm: algorithm.into(),
                mode: mode.into(),
                wordlist,
                show_progress,
            };

            let orchestrator = CrackOrchestrator::new(&config)?;
            let result = orchestrator.crack(&options).await?;

            let formatter = output::create_formatter(
                output_format(format, &config)?,
                terminal::use_color(config.output.color_enabled),
            );
            print!("{}", formatter.format_result(&result)?);

            Ok(ExitCode::from(&result.outcome))
        }
        Commands::Hash {
            plaintext,
            algorithm,
            all,
            format,
        } => {
            let config = load_config()?;
            let algorithms = if all {
                AlgorithmRegistry::global().list()
            } else {
                vec![algorithm.into()]
            };

            let digests = algorithms
                .into_iter()
                .map(|algorithm| {
                    hashdemo_core::hash(&plaintext, algorithm)
                        .map(|digest| (algorithm, digest))
                        .map_err(hashdemo_core::Error::from)
                })
                .collect::<Result<Vec<_>, _>>()?;

            let formatter = output::create_formatter(
                output_format(format, &config)?,
                terminal::use_color(config.output.color_enabled),
            );
            print!("{}", formatter.format_digests(&plaintext, &digests)?);

            Ok(ExitCode::Success)
        }
        Commands::Config { command } => {
            config_command(command)?;
            Ok(ExitCode::Success)
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(ExitCode::Success)
        }
    }
}

fn load_config() -> CliResult<AppConfig> {
    let manager = ConfigManager::new();
    manager.load().map_err(|e| {
        CliError::general(&format!("{e:#}"))
            .with_context("config", &manager.get_config_path().display().to_string())
    })
}

/// Command line flag first, then the configured default
fn output_format(arg: Option<FormatArg>, config: &AppConfig) -> CliResult<OutputFormat> {
    match arg {
        Some(format) => Ok(format.into()),
        None => OutputFormat::from_string(&config.output.default_format)
            .map_err(|e| CliError::misuse(&e.to_string()).with_context("key", "output.default_format")),
    }
}

fn check_key(key: &str) -> CliResult<()> {
    if config::KNOWN_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(CliError::unknown_name(
            "configuration key",
            key,
            config::KNOWN_KEYS,
        ))
    }
}

fn config_command(command: ConfigCommand) -> CliResult<()> {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => {
            check_key(&key)?;
            println!("{}", manager.get(&key)?);
        }
        ConfigCommand::Set { key, value } => {
            check_key(&key)?;
            manager
                .set(&key, &value)
                .map_err(|e| CliError::misuse(&format!("{e:#}")).with_context("key", &key))?;
            eprintln!("{}", format!("Set {key} = {value}").green());
            eprintln!(
                "Configuration saved to: {}",
                manager.get_config_path().display()
            );
        }
        ConfigCommand::List => {
            let items = manager.list()?;
            eprintln!("{}", "Configuration:".bold().blue());
            eprintln!("Config file: {}", manager.get_config_path().display());
            eprintln!();

            let mut sections: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
            for (key, value) in items {
                if let Some((section, field)) = key.split_once('.') {
                    sections
                        .entry(section.to_string())
                        .or_default()
                        .push((field.to_string(), value));
                }
            }

            for (section, items) in sections {
                println!("[{}]", section.yellow());
                for (field, value) in items {
                    println!("  {} = {}", field.cyan(), value);
                }
                println!();
            }
        }
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
