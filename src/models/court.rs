use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Court {
    pub id: u32,
    pub name: String,
    pub venue: VenueType,
    pub price_per_hour: u32,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Indoor,
    Outdoor,
}
