use serde::Deserialize;
use std::collections::HashMap;

/// Display-text overrides for one room. Missing fields fall back to the base catalog.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RoomTranslation {
    pub name: Option<String>,
    pub features: Option<Vec<String>>,
}

/// Display-text overrides for one property in one locale.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTranslation {
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub neighborhood: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub nearby_landmarks: Option<Vec<String>>,
    #[serde(default)]
    pub rooms: HashMap<String, RoomTranslation>,
}

/// locale code -> property id -> overrides
pub type TranslationTable = HashMap<String, HashMap<String, PropertyTranslation>>;
