use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A catalog entry as the remote API stores it.
///
/// Records persisted without secondary images omit `imagesUrl` entirely, and
/// `is_enabled` comes back as whatever integer the admin client last sent, so
/// every field deserializes tolerantly with a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub origin_price: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default, deserialize_with = "truthy")]
    pub is_enabled: bool,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default, rename = "imagesUrl")]
    pub images_url: Vec<String>,
}

/// The commit shape sent to the create/update endpoints inside `{"data": …}`.
///
/// Prices are `None` when the draft's text did not parse as a number; they
/// serialize as `null` and the server rejects them, which keeps malformed
/// input a server-side concern. The id never travels in the body; updates
/// carry it in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    pub category: String,
    pub unit: String,
    pub description: String,
    pub content: String,
    pub origin_price: Option<f64>,
    pub price: Option<f64>,
    pub is_enabled: u8,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "imagesUrl")]
    pub images_url: Vec<String>,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(num) => num.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        _ => false,
    })
}
