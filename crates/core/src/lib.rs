//! `zonebook-core` — identity and error building blocks.
//!
//! This crate contains the primitives shared by every layer: sequential
//! identifiers, their allocator, the `Entity` trait and the domain error model.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{FileId, IdAllocator, RecordId, SequentialId, ZoneId};
