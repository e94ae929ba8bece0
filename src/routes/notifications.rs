use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::{
    error::ApiError,
    models::notification::{ApplicationRequest, NotificationResponse, TourRequest},
    services::notification::{
        interface::{Notifier, NotifyError, OutgoingEmail},
        templates::{application_email, tour_request_email},
    },
};

const APPLICATION_SENT: &str = "Application sent successfully";
const APPLICATION_FAILED: &str = "Failed to send application";
const TOUR_SENT: &str = "Tour request sent successfully";
const TOUR_FAILED: &str = "Failed to send tour request";

/*
    /api/send-application
*/
pub async fn send_application(
    notifier: web::Data<dyn Notifier>,
    body: web::Json<ApplicationRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let full_name = request.full_name.as_deref().unwrap_or_default();
    let email = request.email.as_deref().unwrap_or_default();

    if !notifier.is_configured() {
        error!(
            "SMTP not configured; application from {} <{}> was not delivered",
            full_name, email
        );
        return Err(ApiError::NotifierUnavailable);
    }

    info!("Application received from {} <{}>", full_name, email);
    deliver(notifier.get_ref(), application_email(&request), APPLICATION_FAILED).await?;
    Ok(HttpResponse::Ok().json(NotificationResponse::sent(APPLICATION_SENT)))
}

/*
    /api/send-tour-request
*/
pub async fn send_tour_request(
    notifier: web::Data<dyn Notifier>,
    body: web::Json<TourRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let first_name = request.first_name.as_deref().unwrap_or_default();
    let last_name = request.last_name.as_deref().unwrap_or_default();
    let property = request.property.as_deref().unwrap_or_default();

    if !notifier.is_configured() {
        error!(
            "SMTP not configured; tour request from {} {} for {} was not delivered",
            first_name, last_name, property
        );
        return Err(ApiError::NotifierUnavailable);
    }

    info!(
        "Tour request received from {} {} for {}",
        first_name, last_name, property
    );
    deliver(notifier.get_ref(), tour_request_email(&request), TOUR_FAILED).await?;
    Ok(HttpResponse::Ok().json(NotificationResponse::sent(TOUR_SENT)))
}

async fn deliver(
    notifier: &dyn Notifier,
    email: OutgoingEmail,
    failure: &'static str,
) -> Result<(), ApiError> {
    match notifier.deliver(email).await {
        Ok(()) => Ok(()),
        Err(NotifyError::NotConfigured) => Err(ApiError::NotifierUnavailable),
        Err(e) => {
            error!("{}: {}", failure, e);
            Err(ApiError::SendFailed(failure))
        }
    }
}
