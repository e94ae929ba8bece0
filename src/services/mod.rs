pub mod catalog_service;
pub mod localization_service;
pub mod notification;
pub mod page_service;
pub mod pricing_service;
pub mod routing_service;
pub mod wizard_service;
