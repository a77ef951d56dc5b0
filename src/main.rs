use rocket_landing::adapters::inbound::InMemoryEventStore;
use rocket_landing::adapters::outbound::{init_combined_logger, init_tracing_logger};
use rocket_landing::application::LandingService;
use rocket_landing::domains::landing::{LandingCommandActor, LandingEventActor, Platform, Rocket};
use rocket_landing::Config;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "landing.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = if tokio::fs::try_exists(CONFIG_PATH).await.unwrap_or(false) {
        Config::from_file(CONFIG_PATH).await?
    } else {
        Config::default()
    };

    // The file logger claims the global `log` backend, so it goes first.
    let logger = match &config.logging.file {
        Some(path) => init_combined_logger(path, config.logging.level_filter()?),
        None => init_tracing_logger(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    info!("Starting rocket landing control");

    let platform = Platform::from_config(&config)?;
    info!(
        platform = %platform.platform_bounds(),
        landing_area = %platform.landing_area_bounds(),
        "Platform ready"
    );

    let (event_sender, event_receiver) = mpsc::channel(100);
    let event_store = Arc::new(InMemoryEventStore::new());
    let event_actor = LandingEventActor::new(event_store.clone(), event_receiver);
    let event_task = tokio::spawn(event_actor.run());

    let command_actor = LandingCommandActor::new(platform, event_sender);
    command_actor.publish_pending().await?;
    let service = LandingService::new(command_actor, logger);

    // One line per request: `<rocket-name> <x> <y>`
    let mut rockets: HashMap<String, Rocket> = HashMap::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, x, y) = match parse_request(line) {
            Some(request) => request,
            None => {
                warn!("Skipping malformed request: {:?}", line);
                continue;
            }
        };

        let rocket = rockets.entry(name.to_string()).or_default();
        match service.check_for_landing(rocket, x, y).await {
            Ok(outcome) => println!("{}", outcome.token()),
            Err(e) => {
                error!("Landing check failed: {}", e);
                break;
            }
        }
    }

    let platform_id = service.command_actor().platform_id().await;
    drop(service);
    event_task.await?;
    info!(
        platform_id = %platform_id,
        events = event_store.stream_len(&platform_id).await,
        "Shutting down rocket landing control"
    );

    Ok(())
}

fn parse_request(line: &str) -> Option<(&str, i32, i32)> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((name, x, y))
}
