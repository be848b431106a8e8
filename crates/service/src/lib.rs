//! Service layer for the realty catalog.
//! - Entity stores behind one repository trait per entity (SeaORM and in-memory).
//! - Record services that validate input and check referenced parents.
//! - The property filter and its SQL translation.

pub mod errors;
pub mod domain;
pub mod runtime;
pub mod db;
pub mod repo;
pub mod owner;
pub mod property;
pub mod property_image;
pub mod property_trace;
#[cfg(test)]
pub mod test_support;

pub use errors::{ServiceError, WriteOutcome};
pub use owner::OwnerService;
pub use property::{PropertyFilter, PropertyService};
pub use property_image::PropertyImageService;
pub use property_trace::PropertyTraceService;
pub use repo::{memory::MemoryCatalogStore, seaorm::SeaOrmCatalogStore, CatalogStore};
