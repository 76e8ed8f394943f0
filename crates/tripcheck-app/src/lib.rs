//! Application service layer - config, location resolution, trip planning

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
