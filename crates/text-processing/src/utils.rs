//! Shared utilities for moving cell values in and out of Polars columns.
//!
//! Column-mapped steps work on [`Value`]s; these helpers are the only place
//! where a `Series` is unpacked into values or rebuilt from them.

use crate::error::{PreprocessingError, Result, ResultExt};
use crate::types::Value;
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is an integer type.
#[inline]
pub fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Check if a DataType is a floating point type.
#[inline]
pub fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Check if a DataType is a list of strings (a token column).
#[inline]
pub fn is_token_list_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::List(inner) if **inner == DataType::String)
}

/// Check whether a DataFrame has a column with the given name.
#[inline]
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

// =============================================================================
// Series <-> Value Conversion
// =============================================================================

/// Unpack a Series into one [`Value`] per row.
///
/// Integer columns are widened to `i64` (unsigned values above `i64::MAX`
/// are rejected) and float columns to `f64`. A null list becomes
/// [`Value::Null`]; a null entry inside a list is rejected.
pub fn series_to_values(series: &Series) -> Result<Vec<Value>> {
    let dtype = series.dtype();

    let values = match dtype {
        DataType::Null => vec![Value::Null; series.len()],
        DataType::String => series.str()?.into_iter().map(Value::from).collect(),
        DataType::Boolean => series.bool()?.into_iter().map(Value::from).collect(),
        d if is_integer_dtype(d) => {
            let widened = series.strict_cast(&DataType::Int64).map_err(|_| {
                PreprocessingError::ValueOutOfRange {
                    column: series.name().to_string(),
                    dtype: d.to_string(),
                }
            })?;
            widened.i64()?.into_iter().map(Value::from).collect()
        }
        d if is_float_dtype(d) => {
            let widened = series.cast(&DataType::Float64)?;
            widened.f64()?.into_iter().map(Value::from).collect()
        }
        d if is_token_list_dtype(d) => {
            let lists = series.list()?;
            let mut values = Vec::with_capacity(lists.len());
            for (row, opt_list) in lists.into_iter().enumerate() {
                match opt_list {
                    Some(inner) => {
                        let tokens = inner
                            .str()?
                            .into_iter()
                            .map(|token| {
                                token.map(str::to_string).ok_or_else(|| {
                                    PreprocessingError::NullToken {
                                        column: series.name().to_string(),
                                        row,
                                    }
                                })
                            })
                            .collect::<Result<Vec<String>>>()?;
                        values.push(Value::Tokens(tokens));
                    }
                    None => values.push(Value::Null),
                }
            }
            values
        }
        other => {
            return Err(PreprocessingError::UnsupportedDtype {
                column: series.name().to_string(),
                dtype: other.to_string(),
            });
        }
    };

    Ok(values)
}

/// Dtype of a token column.
pub fn token_list_dtype() -> DataType {
    DataType::List(Box::new(DataType::String))
}

/// Build a Series named `name` from row values.
///
/// The dtype follows the first non-null value; every other non-null value
/// must be of the same kind. A column without any non-null value (including
/// an empty one) gets `empty_dtype`.
pub fn values_to_series(name: &str, values: &[Value], empty_dtype: &DataType) -> Result<Series> {
    let Some(first) = values.iter().find(|v| !v.is_null()) else {
        return Ok(Series::full_null(name.into(), values.len(), empty_dtype));
    };

    if let Some(other) = values
        .iter()
        .find(|v| !v.is_null() && std::mem::discriminant(*v) != std::mem::discriminant(first))
    {
        return Err(PreprocessingError::MixedValueTypes {
            column: name.to_string(),
            first: first.kind(),
            second: other.kind(),
        });
    }

    let series = match first {
        Value::Text(_) => {
            let texts: Vec<Option<&str>> = values.iter().map(Value::as_text).collect();
            Series::new(name.into(), texts)
        }
        Value::Bool(_) => {
            let flags: Vec<Option<bool>> = values
                .iter()
                .map(|v| match v {
                    Value::Bool(b) => Some(*b),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), flags)
        }
        Value::Int(_) => {
            let ints: Vec<Option<i64>> = values
                .iter()
                .map(|v| match v {
                    Value::Int(i) => Some(*i),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), ints)
        }
        Value::Float(_) => {
            let floats: Vec<Option<f64>> = values
                .iter()
                .map(|v| match v {
                    Value::Float(f) => Some(*f),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), floats)
        }
        Value::Tokens(_) => {
            let lists: ListChunked = values
                .iter()
                .map(|v| {
                    v.as_tokens()
                        .map(|tokens| Series::new(PlSmallStr::EMPTY, tokens))
                })
                .collect();
            lists.with_name(name.into()).into_series()
        }
        Value::Null => Series::full_null(name.into(), values.len(), empty_dtype),
    };

    Ok(series)
}

/// Read a whole column of `df` as values, reporting a missing column on
/// behalf of `step`.
pub fn column_values(df: &DataFrame, step: &str, column: &str) -> Result<Vec<Value>> {
    if !has_column(df, column) {
        return Err(PreprocessingError::ColumnNotFound {
            step: step.to_string(),
            column: column.to_string(),
        });
    }
    let series = df
        .column(column)
        .context(format!("Reading column '{}'", column))?
        .as_materialized_series();
    series_to_values(series)
}
