use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use mdpress_lib::config as mdpress_config;
use mdpress_lib::exit_codes::exit;

mod file_processor;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"], help = "Control colored output: auto, always, never")]
    color: String,

    /// Path to configuration file
    #[arg(long, global = true, help = "Path to configuration file")]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(
        long,
        global = true,
        help = "Ignore all configuration files and use built-in defaults"
    )]
    no_config: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown files to HTML fragments
    Render(RenderArgs),
    /// Initialize a new configuration file
    Init,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Files or directories to render (use '-' for stdin; defaults to
    /// the current directory)
    #[arg(required = false)]
    paths: Vec<String>,

    /// Read from stdin instead of files
    #[arg(long, help = "Read from stdin instead of files")]
    stdin: bool,

    /// Write one .html file per input into this directory instead of
    /// printing to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML-escape text content before emphasis substitution
    #[arg(long, overrides_with = "no_escape")]
    escape: bool,

    /// Emit text content verbatim even if the config enables escaping
    #[arg(long, overrides_with = "escape")]
    no_escape: bool,

    /// Print rendered output only, suppressing per-file status messages
    #[arg(short, long)]
    quiet: bool,

    /// Show detailed output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {}
    }

    match cli.command {
        Commands::Render(args) => {
            let config = load_config_with_cli_error_handling(cli.config.as_deref(), cli.no_config);
            let mut options = config.render_options();
            if args.escape {
                options.escape = true;
            } else if args.no_escape {
                options.escape = false;
            }
            std::process::exit(file_processor::process(&args, &config, &options));
        }
        Commands::Init => {
            let path = ".mdpress.toml";
            match mdpress_config::create_default_config(path) {
                Ok(()) => {
                    println!("Created configuration file: {path}");
                    exit::success();
                }
                Err(e) => {
                    eprintln!("{}: {}", "Error".red().bold(), e);
                    exit::tool_error();
                }
            }
        }
    }
}

/// Initialize logging from the environment; `--verbose` raises the
/// default level to debug.
fn init_logging(cli: &Cli) {
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Load configuration with standard CLI error handling: an explicit
/// `--config` path must load, discovery failures are fatal too, and
/// `--no-config` short-circuits to the built-in defaults.
fn load_config_with_cli_error_handling(
    config_path: Option<&str>,
    no_config: bool,
) -> mdpress_config::Config {
    if no_config {
        return mdpress_config::Config::default();
    }

    let result = match config_path {
        Some(path) => mdpress_config::Config::load(Path::new(path)),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|e| {
                eprintln!(
                    "{}: Failed to get current directory: {}",
                    "Error".red().bold(),
                    e
                );
                exit::tool_error();
            });
            mdpress_config::Config::discover(&cwd)
        }
    };

    result.unwrap_or_else(|e| {
        eprintln!("{}: {}", "Config error".red().bold(), e);
        exit::tool_error();
    })
}
