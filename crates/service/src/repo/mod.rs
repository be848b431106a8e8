//! Catalog store implementations.

pub mod memory;
pub mod seaorm;

use crate::owner::OwnerRepository;
use crate::property::PropertyRepository;
use crate::property_image::PropertyImageRepository;
use crate::property_trace::PropertyTraceRepository;

/// A store that persists all four catalog entities.
pub trait CatalogStore: OwnerRepository + PropertyRepository + PropertyImageRepository + PropertyTraceRepository {}

impl<T> CatalogStore for T where T: OwnerRepository + PropertyRepository + PropertyImageRepository + PropertyTraceRepository {}
