//! Momentum over a table of independent series.
//!
//! This example demonstrates:
//! - Building a Polars DataFrame with a date column and one column per symbol
//! - Computing momentum for every symbol column in one call
//! - How the date column is trimmed to the rows with a full window

use chrono::NaiveDate;
use impulso::{Differential, Method, Momentum, MomentumConfig};
use impulso_demos::{init_logging, synthetic_closes, trading_days};
use polars::prelude::*;

/// Symbols in the synthetic universe, with their base prices.
const UNIVERSE: &[(&str, f64)] = &[("AAA", 50.0), ("BBB", 120.0), ("CCC", 310.0)];

/// Number of trading days of synthetic history.
const HISTORY_DAYS: usize = 30;

/// Momentum window in trading days (approx 2 weeks).
const PERIOD: usize = 10;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_logging("info")?;

    let start = NaiveDate::from_ymd_opt(2024, 6, 3)
        .ok_or_else(|| anyhow::anyhow!("invalid start date"))?;
    let dates = trading_days(start, HISTORY_DAYS);

    let mut columns = vec![Column::new("date".into(), dates)];
    for (symbol, base) in UNIVERSE {
        columns.push(Column::new((*symbol).into(), synthetic_closes(*base, HISTORY_DAYS)));
    }
    let prices = DataFrame::new(columns)?;

    tracing::info!(
        rows = prices.height(),
        symbols = UNIVERSE.len(),
        "Built price table"
    );

    let config = MomentumConfig::new(PERIOD)
        .with_differential(Differential::Mean)
        .with_method(Method::RocLog);
    let momentum = Momentum::new(config).compute_frame(&prices, Some("date"))?;

    println!(
        "\n{}/{}, period {PERIOD} ({} rows)\n",
        config.differential,
        config.method,
        momentum.height()
    );

    let dates: Vec<Option<NaiveDate>> = momentum
        .column("date")?
        .as_materialized_series()
        .date()?
        .into_iter()
        .map(|d: Option<i32>| d.and_then(|d| NaiveDate::from_num_days_from_ce_opt(d + 719_163)))
        .collect();

    print!("{:<12}", "Date");
    for (symbol, _) in UNIVERSE {
        print!(" {symbol:>10}");
    }
    println!();
    println!("{}", "─".repeat(12 + 11 * UNIVERSE.len()));

    let mut values = Vec::with_capacity(UNIVERSE.len());
    for (symbol, _) in UNIVERSE {
        values.push(impulso::traits::frame::column_values(momentum.column(symbol)?)?);
    }

    for (row, date) in dates.iter().enumerate() {
        let label = date.map_or_else(|| "-".to_string(), |d| d.to_string());
        print!("{label:<12}");
        for column in &values {
            print!(" {:>10.4}", column[row]);
        }
        println!();
    }

    Ok(())
}
