pub mod footer;
pub mod hero;
pub mod navbar;
pub mod page;
pub mod services;
pub mod whatsapp;

pub use page::PublicSite;
