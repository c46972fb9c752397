use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use validator::Validate;

use venue_rank::config::Settings;
use venue_rank::models::{NearbyQuery, TopRatedQuery};
use venue_rank::services::{load_venues, ListingWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting venue listing generation...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully ({} stations)", settings.stations.len());

    let venues = load_venues(&settings.dataset.path).map_err(|e| {
        error!("Failed to load venue dataset: {}", e);
        e
    })?;

    let ranker = settings.ranker();
    info!("Ranker initialized with weights: {:?}", ranker.weights());

    let writer = ListingWriter::new(&settings.output.dir)?;

    let mut written = 0;
    for station in &settings.stations {
        let query = NearbyQuery {
            latitude: station.latitude,
            longitude: station.longitude,
            radius_km: settings.query.radius_km,
            limit: settings.query.limit,
            mode: settings.query.mode,
        };

        if let Err(errors) = query.validate() {
            warn!("Skipping station {}: invalid query: {}", station.slug, errors);
            continue;
        }

        let listing =
            ranker.station_listing(station, &venues, query.radius_km, query.mode, query.limit);

        info!(
            "Station {}: {} venues within {}km (from {} candidates)",
            station.slug,
            listing.result.total_matches,
            query.radius_km,
            listing.result.total_candidates
        );

        writer.write(&station.slug, &listing)?;
        written += 1;
    }

    let top_query = TopRatedQuery {
        limit: settings.query.top_rated_limit,
        mode: settings.query.mode,
    };

    match top_query.validate() {
        Ok(()) => {
            let listing = ranker.top_rated_listing(&top_query, &venues);
            writer.write("top-rated", &listing)?;
            written += 1;
        }
        Err(errors) => warn!("Skipping top-rated listing: {}", errors),
    }

    info!("Wrote {} listings to {}", written, writer.output_dir().display());

    Ok(())
}
