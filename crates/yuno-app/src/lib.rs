//! Application service layer - config, fleet session, booking

pub mod booking;
pub mod config;
pub mod format;
pub mod render;
pub mod repository;
pub mod session;
