use crate::{
    models::{locale::Locale, property::Property},
    services::catalog_service::Catalog,
};

pub struct LocalizationService;

impl LocalizationService {
    /// Overlays the locale's display text onto a property. Prices, ids, capacities and
    /// images always come from the base record; rooms are mapped one-for-one so the
    /// overlay cannot add or drop rooms.
    pub fn localize_property(catalog: &Catalog, property: &Property, locale: Locale) -> Property {
        let Some(translation) = catalog.translation(locale, &property.id) else {
            return property.clone();
        };

        let mut localized = property.clone();
        if let Some(short_description) = &translation.short_description {
            localized.short_description = short_description.clone();
        }
        if let Some(description) = &translation.description {
            localized.description = description.clone();
        }
        if let Some(neighborhood) = &translation.neighborhood {
            localized.neighborhood = neighborhood.clone();
        }
        if let Some(amenities) = &translation.amenities {
            localized.amenities = amenities.clone();
        }
        if let Some(landmarks) = &translation.nearby_landmarks {
            localized.nearby_landmarks = landmarks.clone();
        }

        for room in &mut localized.rooms {
            let Some(room_translation) = translation.rooms.get(&room.id) else {
                continue;
            };
            if let Some(name) = &room_translation.name {
                room.name = name.clone();
            }
            if let Some(features) = &room_translation.features {
                room.features = Some(features.clone());
            }
        }

        localized
    }

    pub fn localized_properties(catalog: &Catalog, locale: Locale) -> Vec<Property> {
        catalog
            .properties()
            .iter()
            .map(|p| Self::localize_property(catalog, p, locale))
            .collect()
    }

    pub fn localized_property_by_slug(
        catalog: &Catalog,
        slug: &str,
        locale: Locale,
    ) -> Option<Property> {
        catalog
            .get_property_by_slug(slug)
            .map(|p| Self::localize_property(catalog, p, locale))
    }
}
