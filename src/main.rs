use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use wordday_bot::application::messaging::{MessageDispatcher, MessageParser};
use wordday_bot::application::services::GameService;
use wordday_bot::domain::entities::{word::is_valid_word, DailyWord};
use wordday_bot::domain::traits::{Bot, SystemClock, WordProvider};
use wordday_bot::infrastructure::adapters::console::ConsoleAdapter;
use wordday_bot::infrastructure::adapters::telegram::{polling, webhook, TelegramAdapter};
use wordday_bot::infrastructure::config::{Config, Transport};
use wordday_bot::infrastructure::storage::MemorySessionStore;
use wordday_bot::infrastructure::words::{CachedWordProvider, LlmWordGenerator, StaticWordProvider};

#[derive(Parser)]
#[command(name = "wordday-bot")]
#[command(about = "A daily five-letter word game for Telegram", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run {
        /// Long polling and no daily limit
        #[arg(long)]
        dev: bool,
    },
    /// Play in the terminal without Telegram
    Play {
        /// Practice with a fixed word instead of generating one
        #[arg(long)]
        word: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { dev } => {
            let mut config = load_config(&cli.config, cli.token)?;
            config.bot.dev_mode |= dev;
            run_bot(config).await?;
        }
        Commands::Play { word } => {
            let config = load_config(&cli.config, cli.token)?;
            play_console(config, word).await?;
        }
        Commands::Version => {
            println!("wordday-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config)?;
        }
    }

    Ok(())
}

/// File (if present), then environment, then CLI overrides
fn load_config(path: &str, token_override: Option<String>) -> anyhow::Result<Config> {
    let mut config = if std::path::Path::new(path).exists() {
        Config::load(path).with_context(|| format!("loading {}", path))?
    } else {
        tracing::debug!("{} not found, using defaults", path);
        Config::default()
    };

    config.apply_env();

    if let Some(token) = token_override {
        config.telegram.token = Some(token);
    }

    Ok(config)
}

fn build_dispatcher(config: &Config, words: Arc<dyn WordProvider>, bot_username: Option<&str>) -> MessageDispatcher {
    let game = GameService::new(Arc::new(MemorySessionStore::new()), words, Arc::new(SystemClock))
        .with_bypass_daily_limit(config.bot.dev_mode);

    let mut parser = MessageParser::new(&config.bot.prefix);
    if let Some(username) = bot_username {
        parser = parser.with_bot_username(username);
    }

    MessageDispatcher::new(parser, game)
}

fn generated_words(config: &Config) -> Arc<dyn WordProvider> {
    let generator = LlmWordGenerator::from_config(&config.llm);
    if generator.is_configured() {
        tracing::info!("Generating words with {:?} ({})", config.llm.provider, config.llm.model());
    }
    Arc::new(CachedWordProvider::new(generator))
}

async fn run_bot(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    let token = config.token().context("telegram.token is required")?.to_string();

    tracing::info!(
        "Starting {} ({})",
        config.bot.name,
        if config.bot.dev_mode { "development" } else { "production" }
    );

    let mut bot = TelegramAdapter::new(&token);
    bot.fetch_bot_info().await.context("fetching bot info")?;
    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    if let Err(e) = bot.start().await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    let dispatcher = build_dispatcher(&config, generated_words(&config), Some(&info.username));

    match config.transport() {
        Transport::LongPolling => {
            polling::run_polling(&bot, &dispatcher).await?;
        }
        Transport::Webhook => {
            if let Some(public_url) = &config.webhook.public_url {
                bot.set_webhook(&webhook::webhook_url(public_url, &token)).await?;
            }

            let listener = tokio::net::TcpListener::bind(config.listen_addr()?)
                .await
                .with_context(|| format!("binding {}", config.webhook.listen))?;
            let state = webhook::WebhookState::new(&token, Arc::new(bot), dispatcher);
            webhook::serve(listener, webhook::router(state)).await?;
        }
    }

    Ok(())
}

async fn play_console(mut config: Config, word: Option<String>) -> anyhow::Result<()> {
    // Local games are never limited to one per day
    config.bot.dev_mode = true;

    let words: Arc<dyn WordProvider> = match word {
        Some(word) => {
            if !is_valid_word(&word) {
                anyhow::bail!("--word must be exactly 5 letters, got {:?}", word);
            }
            Arc::new(StaticWordProvider::new(DailyWord::new(word, "No definition for practice words.")))
        }
        None => generated_words(&config),
    };

    let bot = ConsoleAdapter::new();
    let dispatcher = build_dispatcher(&config, words, None);
    bot.start().await?;
    bot.run(&dispatcher).await?;
    Ok(())
}

fn init_config(path: &str) -> anyhow::Result<()> {
    if std::path::Path::new(path).exists() {
        anyhow::bail!("{} already exists", path);
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path))?;
    println!("Wrote default config to {}", path);
    Ok(())
}
