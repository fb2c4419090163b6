pub mod team_section;

pub use team_section::TeamSection;
