use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{
    error::ApiError,
    models::locale::Locale,
    services::{catalog_service::Catalog, localization_service::LocalizationService},
};

#[derive(Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    locale: Locale,
}

/*
    /api/properties?locale=fr
*/
pub async fn get_properties(
    catalog: web::Data<Catalog>,
    query: web::Query<LocaleQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(LocalizationService::localized_properties(
        &catalog,
        query.locale,
    ))
}

/*
    /api/properties/{key}?locale=fr
    key is the property id or slug
*/
pub async fn get_property(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
    query: web::Query<LocaleQuery>,
) -> Result<HttpResponse, ApiError> {
    let property = catalog
        .get_property(&path.into_inner())
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(LocalizationService::localize_property(
        &catalog,
        property,
        query.locale,
    )))
}

/*
    /api/rooms
*/
pub async fn get_rooms(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.all_rooms())
}
