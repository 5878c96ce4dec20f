use serde::{Deserialize, Serialize};

/// One listing entry with an associated downloadable photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct House {
    pub id: i64,
    pub address: String,
    pub homeowner: String,
    pub price: i64,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

/// Raw listing payload for one page. Failure payloads carry no `houses` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub houses: Vec<House>,
    #[serde(default)]
    pub message: String,
    pub ok: bool,
}
