pub mod errors;
pub mod extract;
pub mod observability;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;
pub mod upload;

pub use startup::run;
