
///
/// Serde derives and the formats used across the workspace.
///
pub use serde::{Serialize, Deserialize};
pub use serde::de::DeserializeOwned;

///
/// Parses a TOML document into any deserializable object.
///
pub fn from_toml<T: DeserializeOwned> (s: & str) -> super::error::Result<T>
{
    Ok(toml::from_str(s)?)
}

///
/// Writes any serializable object as a single line of JSON.
///
pub fn to_json<T: Serialize> (value: & T) -> super::error::Result<String>
{
    Ok(serde_json::to_string(value)?)
}
