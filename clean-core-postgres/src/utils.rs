use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

fn bounded<const N: usize>(
    col_name: &str,
    value: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for column '{col_name}' is too long (max {N} chars)").into())
}

/// Reads a NOT NULL text column into a bounded string.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let value: String = row.try_get(col_name)?;
    bounded(col_name, &value)
}

/// Reads a nullable text column into a bounded string.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let value: Option<String> = row.try_get(col_name)?;
    value.map(|v| bounded(col_name, &v)).transpose()
}

/// Reads a text column holding an enum key and parses it.
pub fn get_parsed<T>(row: &PgRow, col_name: &str) -> Result<T, Box<dyn Error + Send + Sync>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value: String = row.try_get(col_name)?;
    value
        .parse::<T>()
        .map_err(|e| format!("Invalid value for column '{col_name}': {e}").into())
}
