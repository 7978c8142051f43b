use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use s2_navigator::cli::{analyze, checklist, enhance, map, server, validate};
use s2_navigator::models::MappingMode;
use s2_navigator::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "s2nav")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "IFRS S2 mapping, validation and enhancement engine", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./s2nav.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the text to process comes from
#[derive(Args)]
struct InputArgs {
    /// Text to process
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file (stdin when neither is given)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Map disclosure text to IFRS S2 paragraph codes
    Map {
        #[command(flatten)]
        input: InputArgs,

        /// Industry of the reporting entity
        #[arg(long)]
        industry: Option<String>,

        /// Applicable framework variant (IFRS, K-IFRS, ...)
        #[arg(long)]
        jurisdiction: Option<String>,

        /// Decision strategy: fast, accurate or auto
        #[arg(short, long)]
        mode: Option<MappingMode>,
    },

    /// Check a draft against the requirement groups named by CODES
    Validate {
        /// Target codes (e.g. S2-5 22 29(a))
        #[arg(required = true)]
        codes: Vec<String>,

        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        industry: Option<String>,
    },

    /// Detect missing elements of a paragraph and complete it
    Enhance {
        /// Requirement code (e.g. 14, "22–23,25", "29(a)–29(c)")
        code: String,

        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        industry: Option<String>,

        /// Additional request passed to the writer
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Evaluate a document against every registered requirement
    Checklist {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        industry: Option<String>,
    },

    /// Report gaps sentence by sentence
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long)]
        jurisdiction: Option<String>,
    },

    /// Start the HTTP server (REST API + MCP endpoint)
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Serve MCP over stdio
    Mcp,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "s2_navigator=debug" } else { "s2_navigator=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries command output and the MCP stdio channel
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Map {
            input,
            industry,
            jurisdiction,
            mode,
        } => {
            let args = map::MapArgs {
                text: input.text,
                file: input.file,
                industry,
                jurisdiction,
                mode,
                json: input.json,
            };
            map::run(args, config).await?;
        }

        Commands::Validate {
            codes,
            input,
            industry,
        } => {
            let args = validate::ValidateArgs {
                codes,
                text: input.text,
                file: input.file,
                industry,
                json: input.json,
            };
            validate::run(args, config).await?;
        }

        Commands::Enhance {
            code,
            input,
            industry,
            message,
        } => {
            let args = enhance::EnhanceArgs {
                code,
                text: input.text,
                file: input.file,
                industry,
                message,
                json: input.json,
            };
            enhance::run(args, config).await?;
        }

        Commands::Checklist { input, industry } => {
            let args = checklist::ChecklistArgs {
                text: input.text,
                file: input.file,
                industry,
                json: input.json,
            };
            checklist::run(args, config).await?;
        }

        Commands::Analyze {
            input,
            industry,
            jurisdiction,
        } => {
            let args = analyze::AnalyzeArgs {
                text: input.text,
                file: input.file,
                industry,
                jurisdiction,
                json: input.json,
            };
            analyze::run(args, config).await?;
        }

        Commands::Serve { host, port } => {
            server::run_http(config, host, port).await?;
        }

        Commands::Mcp => {
            server::run_stdio(config).await?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "s2nav", &mut io::stdout());
        }
    }

    Ok(())
}
