use serde::{de, Deserialize, Deserializer, Serialize};

/// Wire shape of a list endpoint response: `{"list": [...], "totalPages": N}`.
///
/// Elements stay raw JSON until the aggregator decodes them into the
/// caller's type. `totalPages` arrives as a number or a numeric string.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    #[serde(default, deserialize_with = "total_pages_from_any")]
    pub total_pages: i64,
    #[serde(default, deserialize_with = "list_or_null")]
    pub list: Vec<serde_json::Value>,
}

fn total_pages_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
        Null(()),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) if s.trim().is_empty() => Ok(0),
        NumberOrString::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid totalPages '{}'", s))),
        NumberOrString::Null(()) => Ok(0),
    }
}

fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default())
}
