use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldnote_slug::application::{
    ports::{SlugGeneratorPort, SlugLookupPort},
    services::ApplicationServices,
};
use fieldnote_slug::config::AppConfig;
use fieldnote_slug::domain::slug::{EntityKind, generate_base_slug, generate_friendly_name};
use fieldnote_slug::infrastructure::{
    database, repositories::PostgresSlugLookup, util::DefaultSlugGenerator,
};

#[derive(Debug, Parser)]
#[command(name = "fieldnote-slug", version, about = "Slugs for the field-recording catalogue")]
struct Cli {
    /// Print results as JSON objects.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize text into a slug without consulting the database.
    Base { text: String },
    /// Print random friendly names.
    Friendly {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Resolve a slug that is unused within the given kind.
    Unique {
        #[arg(long)]
        kind: EntityKind,
        /// Record being renamed; its own slug does not count as taken.
        #[arg(long)]
        exclude_id: Option<i64>,
        text: String,
    },
}

#[derive(Serialize)]
struct SlugOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<EntityKind>,
    slug: &'a str,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Base { text } => emit(cli.json, None, &generate_base_slug(&text))?,
        Command::Friendly { count } => {
            for _ in 0..count {
                emit(cli.json, None, &generate_friendly_name())?;
            }
        }
        Command::Unique {
            kind,
            exclude_id,
            text,
        } => {
            let services = connect().await?;
            let slug = services.slug_for(&text, kind, exclude_id).await?;
            emit(cli.json, Some(kind), slug.as_str())?;
        }
    }

    Ok(())
}

async fn connect() -> Result<ApplicationServices> {
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
    }

    let lookup: Arc<SlugLookupPort> = Arc::new(PostgresSlugLookup::new(pool));
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    Ok(ApplicationServices::new(lookup, slugger))
}

fn emit(json: bool, kind: Option<EntityKind>, slug: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&SlugOutput { kind, slug })?);
    } else {
        println!("{slug}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
