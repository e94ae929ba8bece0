pub mod booking;
pub mod campaign;
pub mod locale;
pub mod notification;
pub mod page;
pub mod property;
pub mod translation;
