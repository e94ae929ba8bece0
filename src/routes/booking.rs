use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::{
    config::AppConfig,
    models::{
        booking::{BookingDraft, BookingSummary, WizardAction},
        locale::Locale,
    },
    services::{catalog_service::Catalog, wizard_service::BookingWizard},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    #[serde(default)]
    pub draft: BookingDraft,
    pub action: WizardAction,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub draft: BookingDraft,
    pub summary: BookingSummary,
    pub can_advance: bool,
}

/*
    /api/booking/transition
    Applies one wizard action to a client-held draft. The draft is normalized first;
    rejected actions return it unchanged.
*/
pub async fn transition(
    catalog: web::Data<Catalog>,
    config: web::Data<AppConfig>,
    body: web::Json<TransitionRequest>,
) -> HttpResponse {
    let TransitionRequest {
        draft,
        action,
        locale,
    } = body.into_inner();

    let wizard = BookingWizard::new(&catalog, config.booking, Local::now().date_naive());
    let draft = wizard.apply(wizard.normalize(draft), action);

    HttpResponse::Ok().json(TransitionResponse {
        summary: wizard.summary(&draft, locale),
        can_advance: wizard.can_advance(&draft, draft.current_step),
        draft,
    })
}
