use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use redisify::{
    Environment, RedisUrl, RedisifySettings, Source, provider_for, redact, redisify, resolve,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "redisify")]
#[command(about = "Build cache settings from Redis URLs found in the environment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cache settings built from the environment as JSON
    Caches {
        /// URL used for the default cache when the environment has none
        #[arg(short = 'f', long)]
        fallback: Option<String>,

        /// Database index used when a URL has no path
        #[arg(long)]
        default_db: Option<u32>,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Parse a single Redis URL and print its fields
    Parse {
        /// Redis URL to parse
        url: String,

        /// Print the password instead of masking it
        #[arg(long)]
        show_password: bool,
    },
    /// List which variable each cache comes from
    Sources {
        /// URL used for the default cache when the environment has none
        #[arg(short = 'f', long)]
        fallback: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    redisify_observability::init_logging();

    let cli = Cli::parse();
    let env = Environment::capture();
    let settings = RedisifySettings::from_environment(&env);

    match cli.command {
        Commands::Caches {
            fallback,
            default_db,
            compact,
        } => handle_caches(&env, settings, fallback, default_db, compact),
        Commands::Parse { url, show_password } => handle_parse(&url, show_password),
        Commands::Sources { fallback } => handle_sources(&env, settings, fallback),
    }
}

fn handle_caches(
    env: &Environment,
    mut settings: RedisifySettings,
    fallback: Option<String>,
    default_db: Option<u32>,
    compact: bool,
) -> anyhow::Result<()> {
    if let Some(url) = fallback {
        settings = settings.with_fallback_url(url);
    }
    if let Some(index) = default_db {
        settings = settings.with_default_database_index(index);
    }

    let caches = redisify(env, &settings).context("Failed to build cache settings")?;

    let output = if compact {
        serde_json::to_string(&caches)?
    } else {
        serde_json::to_string_pretty(&caches)?
    };
    println!("{output}");

    Ok(())
}

fn handle_parse(raw: &str, show_password: bool) -> anyhow::Result<()> {
    let url: RedisUrl = raw.parse().context("Failed to parse Redis URL")?;

    let password = match (&url.password, show_password) {
        (Some(password), true) => json!(password),
        (Some(_), false) => json!("***"),
        (None, _) => json!(null),
    };

    let output = json!({
        "host": url.host,
        "port": url.port,
        "username": url.username,
        "password": password,
        "database_index": url.database_index,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn handle_sources(
    env: &Environment,
    settings: RedisifySettings,
    fallback: Option<String>,
) -> anyhow::Result<()> {
    let fallback = fallback.or(settings.fallback_url);
    let resolved = resolve(env, fallback.as_deref());

    if resolved.is_empty() {
        println!("No Redis URLs found");
        return Ok(());
    }

    for (name, resolved_url) in resolved.iter() {
        let origin = match &resolved_url.source {
            Source::Variable(variable) => match provider_for(variable) {
                Some(provider) => format!("{variable} ({provider})"),
                None => variable.clone(),
            },
            Source::Fallback => "fallback".to_string(),
        };
        println!("{name}\t{origin}\t{}", redact(&resolved_url.url));
    }

    Ok(())
}
