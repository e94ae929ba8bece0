use std::collections::HashSet;
use thiserror::Error;

use crate::models::{
    locale::Locale,
    property::{Property, Room, RoomListing},
    translation::{PropertyTranslation, TranslationTable},
};

const PROPERTIES_JSON: &str = include_str!("../../data/properties.json");
const TRANSLATIONS_JSON: &str = include_str!("../../data/property-translations.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate property id: {0}")]
    DuplicatePropertyId(String),
    #[error("duplicate property slug: {0}")]
    DuplicateSlug(String),
    #[error("duplicate room id: {0}")]
    DuplicateRoomId(String),
    #[error("property {0} has no rooms")]
    NoRooms(String),
    #[error("translation for locale {locale} names unknown property {property_id}")]
    UnknownTranslatedProperty { locale: String, property_id: String },
    #[error("translation for {locale}/{property_id} names unknown room {room_id}")]
    UnknownTranslatedRoom {
        locale: String,
        property_id: String,
        room_id: String,
    },
}

/// Read-only property catalog plus its locale overlay table. Built once at startup
/// and shared across workers; nothing mutates it afterwards.
#[derive(Debug)]
pub struct Catalog {
    properties: Vec<Property>,
    translations: TranslationTable,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(PROPERTIES_JSON, TRANSLATIONS_JSON)
    }

    pub fn from_json(properties: &str, translations: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = serde_json::from_str(properties)?;
        let translations: TranslationTable = serde_json::from_str(translations)?;
        Self::new(properties, translations)
    }

    pub fn new(
        properties: Vec<Property>,
        translations: TranslationTable,
    ) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        let mut room_ids = HashSet::new();

        for property in &properties {
            if !ids.insert(property.id.as_str()) {
                return Err(CatalogError::DuplicatePropertyId(property.id.clone()));
            }
            if !slugs.insert(property.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(property.slug.clone()));
            }
            if property.rooms.is_empty() {
                return Err(CatalogError::NoRooms(property.id.clone()));
            }
            for room in &property.rooms {
                if !room_ids.insert(room.id.as_str()) {
                    return Err(CatalogError::DuplicateRoomId(room.id.clone()));
                }
            }
        }

        // Overlays may only re-label existing rooms, never add structure.
        for (locale, entries) in &translations {
            for (property_id, translation) in entries {
                let Some(property) = properties.iter().find(|p| &p.id == property_id) else {
                    return Err(CatalogError::UnknownTranslatedProperty {
                        locale: locale.clone(),
                        property_id: property_id.clone(),
                    });
                };
                if let Some(room_id) = translation
                    .rooms
                    .keys()
                    .find(|room_id| property.room(room_id).is_none())
                {
                    return Err(CatalogError::UnknownTranslatedRoom {
                        locale: locale.clone(),
                        property_id: property_id.clone(),
                        room_id: room_id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            properties,
            translations,
        })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks a property up by id or slug.
    pub fn get_property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.matches_key(key))
    }

    pub fn get_property_by_slug(&self, slug: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.slug == slug)
    }

    /// A room, only if it belongs to the given property.
    pub fn find_room(&self, property_key: &str, room_id: &str) -> Option<(&Property, &Room)> {
        let property = self.get_property(property_key)?;
        property.room(room_id).map(|room| (property, room))
    }

    pub fn all_rooms(&self) -> Vec<RoomListing> {
        self.properties
            .iter()
            .flat_map(|p| {
                p.rooms.iter().map(|room| RoomListing {
                    room: room.clone(),
                    property_name: p.name.clone(),
                    property_slug: p.slug.clone(),
                    area: p.area.clone(),
                })
            })
            .collect()
    }

    pub fn translation(&self, locale: Locale, property_id: &str) -> Option<&PropertyTranslation> {
        self.translations.get(locale.code())?.get(property_id)
    }
}
