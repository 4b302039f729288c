pub mod airport;
pub mod api_client;
pub mod currency;
pub mod drill_down;
pub mod fallback;
pub mod session;
pub mod travel_service;
pub mod validation;
