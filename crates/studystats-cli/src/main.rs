use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use studystats_core::{logging, Config, LoggingConfig};

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "studystats", version, about = "StudyStats CLI")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Menu-driven console mode (default)
    Interactive,
    /// Analyze a single study session
    Session(commands::session::SessionArgs),
    /// Summarize several sessions from observation lists
    Summarize(commands::summarize::SummarizeArgs),
    /// Render a session summary JSON document as text
    Render(commands::summarize::RenderArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// HTTP API playground
    Api {
        #[command(subcommand)]
        action: commands::api::ApiAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load();
    let mut logging_config = match &loaded {
        Ok(config) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    match cli.verbose {
        0 => {}
        1 => logging_config.level = "debug".into(),
        _ => logging_config.level = "trace".into(),
    }
    logging::init(&logging_config);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "config not loaded, logging with defaults");
    }

    let result = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => commands::interactive::run(),
        Commands::Session(args) => commands::session::run(args),
        Commands::Summarize(args) => commands::summarize::run(args),
        Commands::Render(args) => commands::summarize::run_render(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Api { action } => commands::api::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "studystats", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
