use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// The hash is stable across runs and hosts, so it can be stored and used
/// for equality lookups on index columns.
pub fn hash_as_i64<T: Serialize + ?Sized>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Hash used for email lookups; addresses compare case-insensitively.
pub fn email_hash(email: &str) -> Result<i64, String> {
    hash_as_i64(email.trim().to_lowercase().as_str())
}
