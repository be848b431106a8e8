//! SeaORM queries for each catalog table. The repository impls delegate here.

pub mod owner_service;
pub mod property_service;
pub mod property_image_service;
pub mod property_trace_service;
