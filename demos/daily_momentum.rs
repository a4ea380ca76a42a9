//! Momentum of a daily closing-price series.
//!
//! This example demonstrates:
//! - Building a date-keyed `TimeSeries` of closes
//! - Computing momentum with every differential/method combination
//! - Reading the right-aligned output back against its dates
//!
//! Run with `RUST_LOG=debug` to see the indicator's log events.

use chrono::NaiveDate;
use impulso::{Differential, Method, Momentum, MomentumConfig, TimeSeries};
use impulso_demos::{init_logging, synthetic_closes, trading_days};

/// Number of trading days of synthetic history.
const HISTORY_DAYS: usize = 60;

/// Momentum window in trading days (approx 1 month).
const PERIOD: usize = 21;

/// Rows printed per combination.
const TAIL_ROWS: usize = 5;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_logging("info")?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 2)
        .ok_or_else(|| anyhow::anyhow!("invalid start date"))?;
    let dates = trading_days(start, HISTORY_DAYS);
    let closes = synthetic_closes(100.0, HISTORY_DAYS);
    let series = TimeSeries::new(dates, closes)?;

    tracing::info!(
        observations = series.len(),
        period = PERIOD,
        "Loaded synthetic closes"
    );

    for differential in [Differential::Last, Differential::Mean] {
        for method in [Method::Normal, Method::Roc, Method::RocLog] {
            let config = MomentumConfig::new(PERIOD)
                .with_differential(differential)
                .with_method(method);
            let out = Momentum::new(config).compute_series(&series)?;

            println!("\n{differential}/{method} ({} values)", out.len());
            println!("{:<12} {:>12}", "Date", "Momentum");
            println!("{}", "─".repeat(25));
            for (date, value) in out.iter().skip(out.len().saturating_sub(TAIL_ROWS)) {
                println!("{:<12} {:>12.4}", date, value);
            }
        }
    }

    Ok(())
}
