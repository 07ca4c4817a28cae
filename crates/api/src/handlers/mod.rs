pub mod analytics;
pub mod auth;
pub mod cta;
pub mod designs;
pub mod entries;
pub mod interior_orders;
pub mod leads;
pub mod materials;
pub mod media;
pub mod milestones;
pub mod orders;
pub mod projects;
pub mod users;
