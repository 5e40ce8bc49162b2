use eventosia::catalog::EventCatalog;
use eventosia::config::env_loader::load_config;
use eventosia::config::model::{Config, SourceConfig};
use eventosia::eventos::api::EventLoader;
use eventosia::eventos::model::Event;
use eventosia::eventos::source::{DirectorySource, EventSource, HttpSource};
use eventosia::tracing::setup_loki;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;
    let config = load_config();

    info!(
        "Loading events from {} starting after {}",
        config.source, config.cutoff_date
    );

    let source: Box<dyn EventSource> = match &config.source {
        SourceConfig::Http(url) => Box::new(HttpSource::new(url)),
        SourceConfig::Directory(path) => Box::new(DirectorySource::new(path.clone())),
    };

    let catalog = EventCatalog::new(load_events(source, &config).await);

    catalog.events().iter().for_each(|event| {
        info!(
            "Got event {} on {} at {}: {}",
            event.id, event.date, event.location, event.title
        )
    });

    let limit = match config.debug_config.event_limit {
        Some(limit) if limit >= 0 => limit as usize,
        _ => catalog.len(),
    };
    let shown: Vec<&Event> = catalog.events().iter().take(limit).collect();

    match serde_json::to_string_pretty(&shown) {
        Ok(json) => println!("{}", json),
        Err(err) => error!("Failed to serialize events: {}", err),
    }

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;

        if let Err(err) = handle.await {
            error!("Loki background task failed: {}", err);
        }
    }
}

async fn load_events(source: Box<dyn EventSource>, config: &Config) -> Vec<Event> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    EventLoader::new(source, config.cutoff_date).load(rng).await
}
