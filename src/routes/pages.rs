use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;

use crate::{
    config::AppConfig,
    error::ApiError,
    models::{campaign::PageQuery, locale::Locale, page::Sitemap},
    services::{
        catalog_service::Catalog,
        page_service::PageService,
        routing_service::{static_paths, Page},
        wizard_service::BookingWizard,
    },
};

/*
    /{locale}
    /{locale}/{tail:.*}
*/
pub async fn get_page(
    req: HttpRequest,
    locale: Locale,
    query: web::Query<PageQuery>,
    catalog: web::Data<Catalog>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let tail = req.match_info().get("tail").unwrap_or_default();
    let page = Page::resolve(locale, tail).ok_or(ApiError::NotFound)?;

    let today = Local::now().date_naive();
    let wizard = BookingWizard::new(&catalog, config.booking, today);
    let pages = PageService::new(&catalog, wizard, &config.whatsapp_number);

    let data = pages
        .render(&page, locale, &query)
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(data))
}

/*
    /api/sitemap
*/
pub async fn sitemap(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(Sitemap {
        paths: static_paths(&catalog),
    })
}
