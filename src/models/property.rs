use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Weekly rate in whole Canadian dollars. Biweekly and monthly amounts are derived.
    pub price: u32,
    pub price_unit: String,
    pub beds: u8,
    pub baths: u8,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub area: String,
    pub neighborhood: String,
    pub short_description: String,
    pub description: String,
    pub hero_image: String,
    pub amenities: Vec<String>,
    pub rooms: Vec<Room>,
    pub nearby_landmarks: Vec<String>,
}

impl Property {
    /// Cheapest weekly rate across the property's rooms, used for "from C$X/week".
    /// `None` only for a property without rooms, which the catalog rejects at load.
    pub fn lowest_price(&self) -> Option<u32> {
        self.rooms.iter().map(|room| room.price).min()
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    pub fn matches_key(&self, key: &str) -> bool {
        self.id == key || self.slug == key
    }
}

/// A room flattened together with the property it belongs to.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomListing {
    #[serde(flatten)]
    pub room: Room,
    pub property_name: String,
    pub property_slug: String,
    pub area: String,
}
