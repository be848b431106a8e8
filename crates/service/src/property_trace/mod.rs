pub mod repository;
pub mod service;

pub use repository::PropertyTraceRepository;
pub use service::PropertyTraceService;
