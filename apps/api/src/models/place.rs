use serde::{Deserialize, Serialize};

/// Search links for a place on the three map services the kiosk offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLinks {
    pub naver: String,
    pub kakao: String,
    pub google: String,
}

/// A single recommended place, recovered from generated text. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecommendation {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Signature menu item or attraction.
    pub highlight: String,
    pub address: String,
    pub map_links: MapLinks,
}
