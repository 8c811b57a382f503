//! HTTP handlers, one module per exposed record kind plus status/stats.

pub mod amenities;
pub mod cities;
pub mod places;
pub mod reviews;
pub mod states;
pub mod status;
pub mod users;
