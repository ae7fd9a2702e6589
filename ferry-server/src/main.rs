use std::error::Error;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ferry_server::config::{AppConfig, SegmentsConfig};
use ferry_server::store::{HttpSegmentStore, InMemorySegmentStore, SegmentSource};
use ferry_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ferry_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let source = match &config.segments {
        SegmentsConfig::File(path) => {
            let store = InMemorySegmentStore::from_json_file(path)?;
            info!(path = %path.display(), segments = store.len().await, "loaded segment table");
            SegmentSource::File(store)
        }
        SegmentsConfig::Remote(remote) => {
            info!(url = %remote.base_url, "using remote segment table");
            SegmentSource::Remote(HttpSegmentStore::new(remote.clone())?)
        }
    };

    let state = AppState::new(source, &config.cache, config.routes.clone());

    // Periodically re-read the segment file and drop cached lookups
    if let SegmentsConfig::File(path) = &config.segments {
        if config.reload_interval.is_zero() {
            info!("segment reloading disabled");
        } else if let SegmentSource::File(store) = state.store().inner() {
            let store = store.clone();
            let refresh_state = state.clone();
            let path = path.clone();
            let period = config.reload_interval;
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(period);
                interval.tick().await; // First tick is immediate, skip it
                loop {
                    interval.tick().await;
                    match store.reload(&path).await {
                        Ok(count) => {
                            refresh_state.store().invalidate_all();
                            info!(segments = count, "reloaded segment table");
                        }
                        Err(e) => error!(error = %e, "failed to reload segment table, keeping previous"),
                    }
                }
            });
        }
    }

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Island transfer planner listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
