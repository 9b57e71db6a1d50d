use bus_tracker::catalog::RouteCatalog;
use bus_tracker::config::ServerConfig;
use bus_tracker::web::{AppState, create_router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;

    // Bad timetable data is a startup failure, not a runtime one
    let catalog = RouteCatalog::load()?;
    info!(routes = catalog.len(), "loaded route catalog");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let state = AppState::new(catalog.routes().to_vec(), &mut rng);
    info!(buses = state.snapshot().await.fleet.len(), "generated fleet");

    // Regenerate occupancy and timestamps on the dashboards' refresh cadence
    let refresh_state = state.clone();
    let refresh_interval = config.refresh_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            let count = refresh_state.refresh(&mut rng).await;
            if count == 0 {
                warn!("fleet refresh produced no buses");
            }
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "bus tracker listening");
    info!("  GET  /health           - Health check");
    info!("  GET  /api/buses        - Buses (query, route, status, sort)");
    info!("  GET  /api/buses/:num   - One bus");
    info!("  GET  /api/routes       - Route filter options");
    info!("  GET  /api/suggestions  - Autocomplete (q)");

    axum::serve(listener, app).await?;
    Ok(())
}
