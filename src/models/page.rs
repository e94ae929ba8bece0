use serde::Serialize;

use crate::models::{
    booking::{BookingDraft, BookingSummary},
    campaign::CampaignParams,
    locale::Locale,
    property::Property,
};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub area: String,
    pub neighborhood: String,
    pub short_description: String,
    pub hero_image: String,
    pub lowest_price: Option<u32>,
    pub room_count: usize,
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub locale: Locale,
    pub properties: Vec<PropertyCard>,
    pub book_path: String,
    pub tour_path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLink {
    pub room_id: String,
    pub book_path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPage {
    pub locale: Locale,
    pub property: Property,
    pub lowest_price: Option<u32>,
    pub room_links: Vec<RoomLink>,
    pub tour_path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLabel {
    pub index: usize,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub locale: Locale,
    pub steps: Vec<StepLabel>,
    pub duration_options: &'static [u32],
    pub draft: BookingDraft,
    pub summary: BookingSummary,
    pub can_advance: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPropertyOption {
    pub name: String,
    pub rooms: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPage {
    pub locale: Locale,
    pub selected_property: Option<String>,
    pub selected_room: Option<String>,
    pub properties: Vec<ApplyPropertyOption>,
    pub lease_durations: &'static [&'static str],
    pub occupations: &'static [&'static str],
    pub referral_sources: &'static [&'static str],
    pub campaign: CampaignParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPage {
    pub locale: Locale,
    pub properties: Vec<String>,
    pub time_slots: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub locale: Locale,
    pub properties: Vec<PropertyCard>,
    pub highlighted_property_id: Option<String>,
    pub apply_url: String,
    pub whatsapp_url: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum PageData {
    Home(ListingPage),
    Locations(ListingPage),
    Location(PropertyPage),
    Book(BookPage),
    Apply(ApplyPage),
    Tour(TourPage),
    Landing(LandingPage),
}

#[derive(Debug, Serialize)]
pub struct Sitemap {
    pub paths: Vec<String>,
}
