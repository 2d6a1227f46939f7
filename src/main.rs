use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use listing_render::{
    build_prompt, google_fonts_link, render_model_output, ListingError, ListingMode, Platform,
    RenderConfig, StyleSanitizer,
};

#[derive(Parser)]
#[command(name = "listing-render", version, about = "Render model-written listings into safe HTML")]
struct Cli {
    /// Log sanitizer decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read raw model output on stdin and write listing HTML to stdout
    Render {
        /// Expect the flat standard schema instead of the premium document
        #[arg(long)]
        standard: bool,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Read CSS on stdin and write the sanitized stylesheet to stdout
    SanitizeCss {
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the Google Fonts link tag for the given families
    Fonts {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the prompt sent to the model
    Prompt {
        #[arg(long, value_enum)]
        platform: Platform,
        /// Ask for the premium document
        #[arg(long)]
        pro: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(RenderConfig::default()),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

fn exit_retryable(error: &ListingError) -> ! {
    match error {
        ListingError::Parse(_) => {
            eprintln!("Couldn't understand the AI response, please try again.")
        }
        _ => eprintln!("Listing generation failed, please try again."),
    }
    eprintln!("  {}", error);
    process::exit(2);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Render { standard, config } => {
            let config = load_config(config.as_ref())?;
            let mode = if standard {
                ListingMode::Standard
            } else {
                ListingMode::Premium
            };
            match render_model_output(&read_stdin()?, mode, &config) {
                Ok(html) => html,
                Err(e) if e.is_retryable() => exit_retryable(&e),
                Err(e) => return Err(e.into()),
            }
        }
        Command::SanitizeCss { config } => {
            let style = load_config(config.as_ref())?.style_config();
            StyleSanitizer::new(&style).sanitize(&read_stdin()?)
        }
        Command::Fonts { names } => google_fonts_link(&names),
        Command::Prompt { platform, pro } => build_prompt(platform, pro),
    };

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
