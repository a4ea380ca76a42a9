//! Applying indicators to Polars tables.
//!
//! A table is a set of independent numeric series sharing one index. Each
//! value column is transformed on its own and the optional index column is
//! sliced to the tail the outputs cover.

use crate::{ImpulsoError, Indicator, Result};
use polars::prelude::*;

/// Applies `indicator` to every non-index column of `df`.
///
/// Value columns are cast strictly to `Float64`; null cells are read as
/// `NaN`. The index column, when given, is carried over as the tail slice
/// matching the output length. Column order is preserved.
///
/// # Errors
///
/// Returns [`ImpulsoError::MissingColumn`] if `index_column` is not in the
/// table, a Polars error if a value column is not numeric, or any error the
/// indicator itself reports.
///
/// # Example
///
/// ```no_run
/// use impulso_traits::{frame::apply_to_frame, Indicator};
/// use polars::prelude::*;
///
/// fn run(indicator: &dyn Indicator) -> impulso_traits::Result<DataFrame> {
///     let df = df! {
///         "date" => &["2024-01-02", "2024-01-03", "2024-01-04"],
///         "close" => &[10.0, 11.0, 12.5],
///     }?;
///     apply_to_frame(indicator, &df, Some("date"))
/// }
/// ```
pub fn apply_to_frame<I>(indicator: &I, df: &DataFrame, index_column: Option<&str>) -> Result<DataFrame>
where
    I: Indicator + ?Sized,
{
    let index_position = index_column
        .map(|name| {
            df.get_column_index(name)
                .ok_or_else(|| ImpulsoError::MissingColumn(name.to_string()))
        })
        .transpose()?;

    let height = df.height();
    let mut output_len = None;
    let mut columns = Vec::with_capacity(df.width());

    for (position, column) in df.get_columns().iter().enumerate() {
        if Some(position) == index_position {
            continue;
        }

        let values = column_values(column)?;
        let computed = indicator.compute(&values)?;

        tracing::debug!(
            indicator = indicator.name(),
            column = %column.name(),
            input_len = values.len(),
            output_len = computed.len(),
            "Computed indicator column"
        );

        match output_len {
            None => output_len = Some(computed.len()),
            Some(len) if len != computed.len() => {
                return Err(ImpulsoError::InvalidData(format!(
                    "column '{}' produced {} values, expected {}",
                    column.name(),
                    computed.len(),
                    len
                )));
            }
            Some(_) => {}
        }

        columns.push(Column::new(column.name().clone(), computed));
    }

    // Without value columns the output length follows from the window alone.
    let output_len = output_len.unwrap_or_else(|| {
        height.saturating_sub(indicator.lookback().saturating_sub(1))
    });

    let offset = height.checked_sub(output_len).ok_or_else(|| {
        ImpulsoError::InvalidData(format!(
            "cannot align {output_len} values onto a table of {height} rows"
        ))
    })?;

    if let Some(position) = index_position {
        let index = df.get_columns()[position].slice(offset as i64, output_len);
        columns.insert(position, index);
    }

    Ok(DataFrame::new(columns)?)
}

/// Reads a column as `f64` values, mapping nulls to `NaN`.
pub fn column_values(column: &Column) -> Result<Vec<f64>> {
    let series = column
        .as_materialized_series()
        .strict_cast(&DataType::Float64)?;

    Ok(series
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}
