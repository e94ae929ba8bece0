use url::form_urlencoded;

use crate::{models::locale::Locale, services::catalog_service::Catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Locations,
    Book,
    Tour,
    Apply,
    Landing,
}

impl Section {
    const ALL: [Section; 5] = [
        Section::Locations,
        Section::Book,
        Section::Tour,
        Section::Apply,
        Section::Landing,
    ];

    fn token(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Section::Locations) => "locations",
            (Locale::En, Section::Book) => "book",
            (Locale::En, Section::Tour) => "tour",
            (Locale::En, Section::Apply) => "apply",
            (Locale::Fr, Section::Locations) => "emplacements",
            (Locale::Fr, Section::Book) => "reserver",
            (Locale::Fr, Section::Tour) => "visite",
            (Locale::Fr, Section::Apply) => "postuler",
            (_, Section::Landing) => "lp",
        }
    }

    fn from_token(locale: Locale, token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token(locale) == token)
    }
}

/// A page of the site, independent of locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Locations,
    Location(String),
    Book,
    Tour,
    Apply,
    Landing,
}

impl Page {
    /// Localized path under the locale prefix, e.g. `/fr/emplacements/gramercy`.
    pub fn path(&self, locale: Locale) -> String {
        let prefix = locale.code();
        match self {
            Page::Home => format!("/{}", prefix),
            Page::Locations => format!("/{}/{}", prefix, Section::Locations.token(locale)),
            Page::Location(slug) => {
                format!("/{}/{}/{}", prefix, Section::Locations.token(locale), slug)
            }
            Page::Book => format!("/{}/{}", prefix, Section::Book.token(locale)),
            Page::Tour => format!("/{}/{}", prefix, Section::Tour.token(locale)),
            Page::Apply => format!("/{}/{}", prefix, Section::Apply.token(locale)),
            Page::Landing => format!("/{}/{}", prefix, Section::Landing.token(locale)),
        }
    }

    /// Resolves the path segments after the locale prefix. Tokens of the other locale
    /// do not resolve. Location slugs are not checked against the catalog here.
    pub fn resolve(locale: Locale, tail: &str) -> Option<Page> {
        let segments: Vec<&str> = tail.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Page::Home),
            [token] => match Section::from_token(locale, token)? {
                Section::Locations => Some(Page::Locations),
                Section::Book => Some(Page::Book),
                Section::Tour => Some(Page::Tour),
                Section::Apply => Some(Page::Apply),
                Section::Landing => Some(Page::Landing),
            },
            [token, slug] if Section::from_token(locale, token) == Some(Section::Locations) => {
                Some(Page::Location((*slug).to_string()))
            }
            _ => None,
        }
    }
}

/// Appends a query string, keeping pairs in the given order.
pub fn with_query<'a>(path: &str, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Every page path for every locale: the set rendered by a static export.
pub fn static_paths(catalog: &Catalog) -> Vec<String> {
    let mut pages = vec![
        Page::Home,
        Page::Locations,
        Page::Book,
        Page::Tour,
        Page::Apply,
        Page::Landing,
    ];
    pages.extend(
        catalog
            .properties()
            .iter()
            .map(|p| Page::Location(p.slug.clone())),
    );

    Locale::ALL
        .iter()
        .flat_map(|locale| pages.iter().map(move |page| page.path(*locale)))
        .collect()
}
