pub mod interface;
pub mod smtp;
pub mod templates;
