use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use wander_catalog::{CatalogRepository, InMemoryCatalog, TourPackage};
use wander_config::{AdvisorSettings, Config, ConfigManager};
use wander_core::{ChatMessage, MessageDraft};
use wander_engine::{Advisor, AdvisorOptions, SynthesizerConfig};
use wander_llm::{AuthConfig, ClientConfig, OpenAiClient};
use wander_session::ConversationStore;

#[derive(Parser)]
#[command(name = "wander")]
#[command(about = "Travel recommendation chat over the wander catalog")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, env = "WANDER_CONFIG")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Chat,
    /// Ask a single question and print the reply
    Ask {
        /// The question
        message: String,
    },
    /// Browse the catalog
    Catalog(CatalogArgs),
    /// Config management commands
    Config(ConfigArgs),
}

#[derive(Args, Clone)]
struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommands,
}

#[derive(Subcommand, Clone)]
enum CatalogCommands {
    /// List all tour packages
    Tours,
    /// List all destinations
    Destinations,
}

#[derive(Args, Clone)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Get a config value
    Get {
        /// Config key (e.g. llm.model, advisor.default_budget)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key (e.g. llm.model, advisor.default_budget)
        key: String,
        /// New value
        value: String,
    },
    /// Initialize the default config
    Init {
        /// Overwrite an existing config
        #[arg(long, default_value = "false")]
        force: bool,
    },
    /// Show the current config
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config_path = resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Chat => run_chat(&config_path).await,
        Commands::Ask { message } => run_ask(&config_path, &message).await,
        Commands::Catalog(args) => run_catalog(args),
        Commands::Config(args) => handle_config(args, &config_path).await,
    }
}

fn resolve_config_path(arg: Option<&str>) -> anyhow::Result<PathBuf> {
    match arg {
        Some(path) => Ok(wander_config::expand_tilde(path)
            .unwrap_or_else(|| PathBuf::from(path))),
        None => wander_config::default_config_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine home directory")),
    }
}

fn synthesizer_config(settings: &AdvisorSettings) -> SynthesizerConfig {
    SynthesizerConfig {
        default_budget: settings.default_budget,
        frugal_budget: settings.frugal_budget,
        default_group_size: settings.default_group_size,
        default_duration_days: settings.default_duration_days,
        weekend_duration_days: settings.weekend_duration_days,
        duration_tolerance_days: settings.duration_tolerance_days,
        max_recommendations: settings.max_recommendations,
        featured_fallback_count: settings.featured_fallback_count,
    }
}

/// Build the advisor from config: seeded catalog, local pipeline, and the
/// remote client when enabled and an API key is present.
fn build_advisor(config: &Config) -> anyhow::Result<Advisor> {
    let catalog = Arc::new(InMemoryCatalog::seeded()?);
    let mut advisor = Advisor::new(catalog, synthesizer_config(&config.advisor));

    if config.llm.enabled {
        match AuthConfig::from_env(&config.llm.api_key_env) {
            Some(auth) => {
                let mut client_config = ClientConfig::new(config.llm.base_url.as_str())
                    .with_model(config.llm.model.as_str())
                    .with_timeout(std::time::Duration::from_secs(config.llm.timeout_seconds));
                client_config.auth = auth;

                let client = OpenAiClient::new(client_config)?;
                advisor = advisor.with_remote(
                    Arc::new(client),
                    AdvisorOptions {
                        model: config.llm.model.clone(),
                        temperature: config.llm.temperature,
                        max_tokens: config.llm.max_tokens,
                    },
                );
            }
            None => {
                eprintln!(
                    "{}",
                    format!(
                        "{} not set; answering with the local pipeline only",
                        config.llm.api_key_env
                    )
                    .dimmed()
                );
            }
        }
    }

    Ok(advisor)
}

async fn run_chat(config_path: &PathBuf) -> anyhow::Result<()> {
    let manager = ConfigManager::load(config_path).await?;
    let config = manager.snapshot().await;
    let advisor = build_advisor(&config)?;

    let store = ConversationStore::new();
    let conversation_id = store.create_conversation();

    println!("{}", "🧭 wander travel assistant".cyan().bold());
    println!(
        "{}",
        "Ask about destinations, budgets, durations or group trips.".dimmed()
    );
    println!(
        "{}",
        "Type '/history' to review, '/clear' to start over, 'exit' to leave.".dimmed()
    );
    println!();

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("{}", "👋 Happy travels!".cyan());
            break;
        }
        if input == "/history" {
            for message in store.history(&conversation_id)? {
                print_transcript_line(&message);
            }
            continue;
        }
        if input == "/clear" {
            store.clear(&conversation_id)?;
            println!("{}", "Conversation cleared.".dimmed());
            continue;
        }

        // The pending guard stands in for the web widget's disabled input:
        // one in-flight request at a time, refused rather than queued.
        if !store.try_begin_pending(&conversation_id)? {
            println!("{}", "Still thinking about the last one...".yellow());
            continue;
        }

        let history = store.history(&conversation_id)?;
        store.append_message(&conversation_id, MessageDraft::user(input))?;

        let reply = advisor.respond(input, &history).await;
        let message = store.append_message(&conversation_id, reply.into_draft())?;
        store.finish_pending(&conversation_id)?;

        print_assistant_message(&message);
    }

    Ok(())
}

async fn run_ask(config_path: &PathBuf, message: &str) -> anyhow::Result<()> {
    let manager = ConfigManager::load(config_path).await?;
    let config = manager.snapshot().await;
    let advisor = build_advisor(&config)?;

    let store = ConversationStore::new();
    let conversation_id = store.create_conversation();
    store.append_message(&conversation_id, MessageDraft::user(message))?;

    let reply = advisor.respond(message, &[]).await;
    let reply_message = store.append_message(&conversation_id, reply.into_draft())?;

    print_assistant_message(&reply_message);
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = InMemoryCatalog::seeded()?;

    match args.command {
        CatalogCommands::Tours => {
            println!("{}", "📦 Tour packages".cyan().bold());
            for tour in catalog.tours() {
                print_tour_line(&catalog, tour);
            }
        }
        CatalogCommands::Destinations => {
            println!("{}", "🗺️  Destinations".cyan().bold());
            for destination in catalog.destinations() {
                println!(
                    "  {} {} — {}",
                    destination.name.green().bold(),
                    format!("({}, {})", destination.region, destination.category).dimmed(),
                    destination.description
                );
            }
        }
    }

    Ok(())
}

async fn handle_config(args: ConfigArgs, config_path: &PathBuf) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Get { key } => {
            let manager = ConfigManager::load(config_path).await?;
            let config = manager.snapshot().await;
            match config.get_value(&key) {
                Some(value) => println!("{}", format!("{key} = {value}").green()),
                None => {
                    println!("{}", format!("❌ Key not found: {key}").red());
                    std::process::exit(1);
                }
            }
        }
        ConfigCommands::Set { key, value } => {
            let manager = ConfigManager::load(config_path).await?;
            let mut failure = None;
            manager
                .update(|config| {
                    if let Err(e) = config.set_value(&key, &value) {
                        failure = Some(e);
                    }
                })
                .await?;
            if let Some(e) = failure {
                println!("{}", format!("❌ Failed to set value: {e}").red());
                std::process::exit(1);
            }
            manager.save().await?;
            println!("{}", format!("✅ Set {key} = {value}").green());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                println!(
                    "{}",
                    format!("⚠️  Config already exists at {config_path:?}").yellow()
                );
                println!("{}", "Use --force to overwrite".dimmed());
                return Ok(());
            }

            wander_config::init_wander_dirs().await?;
            let manager = ConfigManager::new(Config::default(), config_path.clone());
            manager.save().await?;
            println!(
                "{}",
                format!("✅ Config initialized at {config_path:?}").green()
            );
        }
        ConfigCommands::Show => {
            let manager = ConfigManager::load(config_path).await?;
            let config = manager.snapshot().await;
            println!("{}", "📋 Current configuration:".cyan().bold());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn print_transcript_line(message: &ChatMessage) {
    let label = match message.sender {
        wander_core::Sender::User => "You:".cyan().bold(),
        wander_core::Sender::Assistant => "Assistant:".green().bold(),
    };
    println!("{} {} {}", format!("[{}]", message.id).dimmed(), label, message.text);
}

fn print_assistant_message(message: &ChatMessage) {
    println!("{} {}", "Assistant:".green().bold(), message.text);

    if let Some(recommendations) = &message.recommendations {
        for tour in recommendations {
            println!(
                "  • {} {}",
                tour.title.green(),
                format!(
                    "₹{} · {} days · ★{} ({} reviews)",
                    tour.price, tour.duration_days, tour.rating, tour.review_count
                )
                .dimmed()
            );
        }
    }

    if let Some(quick_actions) = &message.quick_actions {
        println!("{}", format!("Try: {}", quick_actions.join(" | ")).dimmed());
    }
    println!();
}

fn print_tour_line(catalog: &InMemoryCatalog, tour: &TourPackage) {
    let destination = catalog
        .destination_of(tour)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| tour.destination_id.clone());
    let featured = if tour.featured { " ⭐" } else { "" };
    println!(
        "  {}{} — {} · ₹{} · {} days · {}-{} travellers · ★{}",
        tour.title.green().bold(),
        featured,
        destination,
        tour.price,
        tour.duration_days,
        tour.group_min,
        tour.group_max,
        tour.rating
    );
}
