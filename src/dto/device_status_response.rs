use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightStatus {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeviceStatusResponse {
    #[serde(rename = "deviceId", deserialize_with = "device_id_from_text_or_number")]
    pub device_id: u32,

    pub status: LightStatus,

    #[serde(deserialize_with = "timestamp_from_text")]
    pub timestamp: NaiveDateTime,
}

// the server echoes the query parameter, so the id usually arrives as a string
#[derive(Deserialize)]
#[serde(untagged)]
enum DeviceId {
    Number(u32),
    Text(String),
}

fn device_id_from_text_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match DeviceId::deserialize(deserializer)? {
        DeviceId::Number(id) => Ok(id),
        DeviceId::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}

fn timestamp_from_text<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(de::Error::custom)
}
