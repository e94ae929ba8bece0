#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{body::MessageBody, middleware::Logger, web, App};
use async_trait::async_trait;

use coliville_api::{
    config::AppConfig,
    routes,
    services::{
        catalog_service::Catalog,
        notification::interface::{Notifier, NotifyError, OutgoingEmail},
    },
};

#[derive(Clone, Copy, PartialEq)]
pub enum NotifierMode {
    Deliver,
    Fail,
    Unconfigured,
}

/// Keeps every delivered email in memory instead of talking to SMTP.
pub struct RecordingNotifier {
    mode: NotifierMode,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingNotifier {
    pub fn new(mode: NotifierMode) -> Self {
        Self {
            mode,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, email: OutgoingEmail) -> Result<(), NotifyError> {
        match self.mode {
            NotifierMode::Deliver => {
                self.sent.lock().unwrap().push(email);
                Ok(())
            }
            NotifierMode::Fail => Err(NotifyError::Delivery("connection refused".to_string())),
            NotifierMode::Unconfigured => Err(NotifyError::NotConfigured),
        }
    }

    fn is_configured(&self) -> bool {
        self.mode != NotifierMode::Unconfigured
    }
}

pub struct TestApp {
    pub catalog: web::Data<Catalog>,
    pub config: web::Data<AppConfig>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_notifier(NotifierMode::Deliver)
    }

    pub fn with_notifier(mode: NotifierMode) -> Self {
        let catalog = Catalog::embedded().expect("embedded catalog should load");
        Self {
            catalog: web::Data::new(catalog),
            config: web::Data::new(AppConfig::default()),
            notifier: Arc::new(RecordingNotifier::new(mode)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let notifier: Arc<dyn Notifier> = self.notifier.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(self.catalog.clone())
            .app_data(self.config.clone())
            .app_data(web::Data::from(notifier))
            .configure(routes::config)
    }
}
