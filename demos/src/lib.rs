//! Shared helpers for the impulso demos.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging, honouring `RUST_LOG` and falling back to `level`.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;

    Ok(())
}

/// Returns `count` consecutive weekdays starting at `start`.
pub fn trading_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut day = start;
    while days.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(day);
        }
        day += Duration::days(1);
    }
    days
}

/// Deterministic synthetic closing prices: a drifting oscillation around
/// `base`.
pub fn synthetic_closes(base: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            base * (1.0 + 0.002 * t + 0.03 * (t / 4.0).sin() + 0.01 * (t / 1.7).cos())
        })
        .collect()
}
