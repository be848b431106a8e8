//! Properties, their search filter and the service that serves both.

pub mod filter;
pub mod repository;
pub mod service;

pub use filter::PropertyFilter;
pub use repository::PropertyRepository;
pub use service::PropertyService;
