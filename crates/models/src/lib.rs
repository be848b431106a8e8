pub mod errors;
pub mod db;
pub mod validation;
pub mod owner;
pub mod property;
pub mod property_image;
pub mod property_trace;
pub mod seed;

#[cfg(test)]
mod tests;
