pub mod stat_card;
pub mod ui;

pub use stat_card::StatCard;
