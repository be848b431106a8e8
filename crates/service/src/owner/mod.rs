//! Owners: the root of the catalog's ownership tree.

pub mod repository;
pub mod service;

pub use repository::OwnerRepository;
pub use service::OwnerService;
