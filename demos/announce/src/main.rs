//! Logs in with a pre-issued token, binds a session and announces the
//! player's position a few times.
//!
//! ```text
//! POGO_TOKEN=... POGO_LAT=40.7589 POGO_LNG=-73.9851 cargo run -p announce
//! ```
//!
//! `POGO_PROVIDER` defaults to `ptc`, `POGO_ALT` to `0`, and
//! `POGO_ROUNDS` to `3`. Set `POGO_DEBUG=1` to log full envelopes.

use std::sync::Arc;
use std::time::Duration;

use pogo::prelude::*;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

struct Settings {
    provider: String,
    token: String,
    coordinate: Coordinate,
    rounds: u32,
    debug: bool,
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse<T: std::str::FromStr>(name: &str, default: Option<T>) -> Result<T, PogoError> {
    match var(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| PogoError::Config(format!("{name} is not a valid number: {raw}"))),
        None => default.ok_or_else(|| PogoError::Config(format!("{name} must be set"))),
    }
}

impl Settings {
    fn from_env() -> Result<Self, PogoError> {
        Ok(Self {
            provider: var("POGO_PROVIDER").unwrap_or_else(|| "ptc".into()),
            token: var("POGO_TOKEN").unwrap_or_default(),
            coordinate: Coordinate::new(
                parse("POGO_LAT", None)?,
                parse("POGO_LNG", None)?,
                parse("POGO_ALT", Some(0.0))?,
            ),
            rounds: parse("POGO_ROUNDS", Some(3))?,
            debug: var("POGO_DEBUG").is_some_and(|v| v != "0"),
        })
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pogo::init_tracing("info,pogo_session=debug")?;

    let settings = Settings::from_env()?;
    tracing::info!(coordinate = %settings.coordinate, "starting session");

    let provider = Arc::new(StaticTokenProvider::new(settings.provider, settings.token));
    let config = SessionConfig {
        debug: settings.debug,
        ..SessionConfig::default()
    };
    let mut session = Session::new(provider, HttpTransport::new(), settings.coordinate, config);

    session.init().await?;

    let player = session.get_player().await?;
    if let Some(data) = &player.player_data {
        tracing::info!(username = %data.username, team = data.team, "player profile");
    }

    for round in 1..=settings.rounds {
        match session.announce().await {
            Ok(Announcement {
                map_objects,
                outcome,
            }) => {
                let wild: usize = map_objects
                    .map_cells
                    .iter()
                    .map(|cell| cell.wild_pokemons.len())
                    .sum();
                tracing::info!(
                    round,
                    %outcome,
                    cells = map_objects.map_cells.len(),
                    wild,
                    "announced"
                );
            }
            Err(e) => tracing::warn!(round, error = %e, "announce failed"),
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    Ok(())
}
