//! JSON body reader.

use httputils_core::{HttpUtilsError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads `reader` to the end and decodes the bytes as JSON into `data`.
///
/// `data` is only replaced once decoding has fully succeeded; on either
/// failure it keeps whatever it held before the call.
///
/// # Example
///
/// ```
/// use httputils_extract::read_json_data;
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize, PartialEq)]
/// struct Todo {
///     title: String,
///     order: i64,
/// }
///
/// let mut todo = Todo::default();
/// read_json_data(&br#"{"title": "test", "order": 23}"#[..], &mut todo).unwrap();
/// assert_eq!(todo, Todo { title: "test".into(), order: 23 });
/// ```
pub fn read_json_data<R, T>(mut reader: R, data: &mut T) -> Result<()>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| HttpUtilsError::read("unable to read the JSON data", e))?;

    *data = serde_json::from_slice(&bytes)
        .map_err(|e| HttpUtilsError::decode("unable to unmarshal the JSON data", e))?;

    Ok(())
}
