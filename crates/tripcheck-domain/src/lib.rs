//! Trip planning domain: data model, geo math and the hours-of-service engine

pub mod model;
pub mod repository;
pub mod service;
