pub mod repository;
pub mod service;

pub use repository::PropertyImageRepository;
pub use service::PropertyImageService;
