use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::{error::ApiError, models::locale::Locale};

/// Extracts the `{locale}` path segment. Anything other than a supported locale
/// code is a 404, the same as an unknown page.
impl FromRequest for Locale {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let locale = req
            .match_info()
            .get("locale")
            .and_then(|code| code.parse::<Locale>().ok())
            .ok_or(ApiError::NotFound);
        ready(locale)
    }
}
