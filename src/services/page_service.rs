use crate::{
    models::{
        booking::WizardStep,
        campaign::PageQuery,
        locale::Locale,
        page::{
            ApplyPage, ApplyPropertyOption, BookPage, LandingPage, ListingPage, PageData,
            PropertyCard, PropertyPage, RoomLink, StepLabel, TourPage,
        },
        property::Property,
    },
    services::{
        catalog_service::Catalog,
        localization_service::LocalizationService,
        routing_service::{with_query, Page},
        wizard_service::{BookingWizard, DURATION_CHIPS},
    },
};

pub const LEASE_DURATIONS: [&str; 4] = ["3 months", "6 months", "12 months", "Other"];
pub const OCCUPATIONS: [&str; 4] = [
    "Student",
    "Working Professional",
    "Freelancer / Remote Worker",
    "Other",
];
pub const REFERRAL_SOURCES: [&str; 6] =
    ["Instagram", "TikTok", "Google", "Friend", "University", "Other"];
pub const TOUR_TIME_SLOTS: [&str; 3] = ["morning", "afternoon", "evening"];

const BRAND: &str = "Coliville";

/// Assembles the data each localized page renders. Holds no state of its own.
pub struct PageService<'a> {
    catalog: &'a Catalog,
    wizard: BookingWizard<'a>,
    whatsapp_number: &'a str,
}

impl<'a> PageService<'a> {
    pub fn new(catalog: &'a Catalog, wizard: BookingWizard<'a>, whatsapp_number: &'a str) -> Self {
        Self {
            catalog,
            wizard,
            whatsapp_number,
        }
    }

    /// `None` when the page names a property slug the catalog does not have.
    pub fn render(&self, page: &Page, locale: Locale, query: &PageQuery) -> Option<PageData> {
        let data = match page {
            Page::Home => PageData::Home(self.listing(locale)),
            Page::Locations => PageData::Locations(self.listing(locale)),
            Page::Location(slug) => PageData::Location(self.location(slug, locale)?),
            Page::Book => PageData::Book(self.book(locale, query)),
            Page::Apply => PageData::Apply(self.apply(locale, query)),
            Page::Tour => PageData::Tour(self.tour(locale)),
            Page::Landing => PageData::Landing(self.landing(locale, query)),
        };
        Some(data)
    }

    fn cards(&self, locale: Locale) -> Vec<PropertyCard> {
        LocalizationService::localized_properties(self.catalog, locale)
            .into_iter()
            .map(|property| card(property, locale))
            .collect()
    }

    fn listing(&self, locale: Locale) -> ListingPage {
        ListingPage {
            locale,
            properties: self.cards(locale),
            book_path: Page::Book.path(locale),
            tour_path: Page::Tour.path(locale),
        }
    }

    fn location(&self, slug: &str, locale: Locale) -> Option<PropertyPage> {
        let property = LocalizationService::localized_property_by_slug(self.catalog, slug, locale)?;
        let book_path = Page::Book.path(locale);
        let room_links = property
            .rooms
            .iter()
            .map(|room| RoomLink {
                room_id: room.id.clone(),
                book_path: with_query(
                    &book_path,
                    [("property", property.slug.as_str()), ("room", room.id.as_str())],
                ),
            })
            .collect();

        Some(PropertyPage {
            locale,
            lowest_price: property.lowest_price(),
            room_links,
            tour_path: Page::Tour.path(locale),
            property,
        })
    }

    fn book(&self, locale: Locale, query: &PageQuery) -> BookPage {
        let draft = self.wizard.seed(query);
        BookPage {
            locale,
            steps: WizardStep::ALL
                .iter()
                .map(|step| StepLabel {
                    index: step.index(),
                    label: step.label(locale),
                })
                .collect(),
            duration_options: &DURATION_CHIPS,
            summary: self.wizard.summary(&draft, locale),
            can_advance: self.wizard.can_advance(&draft, draft.current_step),
            draft,
        }
    }

    /// The application form works with display names: the seeded property/room are
    /// resolved from `?property=&room=` and sent back by name on submit.
    fn apply(&self, locale: Locale, query: &PageQuery) -> ApplyPage {
        let properties = LocalizationService::localized_properties(self.catalog, locale);
        let selected = query
            .property
            .as_deref()
            .and_then(|key| properties.iter().find(|p| p.matches_key(key)));
        let selected_room = selected.and_then(|property| {
            query
                .room
                .as_deref()
                .and_then(|room_id| property.room(room_id))
                .map(|room| room.name.clone())
        });

        ApplyPage {
            locale,
            selected_property: selected.map(|p| p.name.clone()),
            selected_room,
            properties: properties
                .iter()
                .map(|p| ApplyPropertyOption {
                    name: p.name.clone(),
                    rooms: p.rooms.iter().map(|r| r.name.clone()).collect(),
                })
                .collect(),
            lease_durations: &LEASE_DURATIONS,
            occupations: &OCCUPATIONS,
            referral_sources: &REFERRAL_SOURCES,
            campaign: query.campaign.clone(),
        }
    }

    fn tour(&self, locale: Locale) -> TourPage {
        TourPage {
            locale,
            properties: self.catalog.properties().iter().map(|p| p.name.clone()).collect(),
            time_slots: &TOUR_TIME_SLOTS,
        }
    }

    fn landing(&self, locale: Locale, query: &PageQuery) -> LandingPage {
        let target = query
            .property
            .as_deref()
            .and_then(|slug| self.catalog.get_property_by_slug(slug));

        LandingPage {
            locale,
            properties: self.cards(locale),
            highlighted_property_id: target.map(|p| p.id.clone()),
            apply_url: apply_url(locale, target, query),
            whatsapp_url: whatsapp_url(self.whatsapp_number, target),
        }
    }
}

fn card(property: Property, locale: Locale) -> PropertyCard {
    PropertyCard {
        lowest_price: property.lowest_price(),
        room_count: property.rooms.len(),
        path: Page::Location(property.slug.clone()).path(locale),
        id: property.id,
        slug: property.slug,
        name: property.name,
        area: property.area,
        neighborhood: property.neighborhood,
        short_description: property.short_description,
        hero_image: property.hero_image,
    }
}

/// Apply link for a landing page. The four `utm_*` values are always present and
/// passed through as received, empty when the landing URL had none.
pub fn apply_url(locale: Locale, target: Option<&Property>, query: &PageQuery) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(5);
    if let Some(property) = target {
        pairs.push(("property", property.slug.as_str()));
    }
    pairs.extend(query.campaign.pairs());
    with_query(&Page::Apply.path(locale), pairs)
}

pub fn whatsapp_url(number: &str, target: Option<&Property>) -> String {
    let text = match target {
        Some(property) => format!(
            "Hi, I'm interested in a room at {} ({})",
            property.name, BRAND
        ),
        None => format!("Hi, I'm interested in a room at {}", BRAND),
    };
    with_query(&format!("https://wa.me/{}", number), [("text", text.as_str())])
}
