//! Core types and errors for the gridworld environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the engine: grid positions, entity
//! categories, the [`Entity`] record, the validated
//! [`EntityCollection`], movement [`Direction`]s, and [`GridError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod direction;
pub mod entity;
pub mod error;

pub use collection::EntityCollection;
pub use direction::Direction;
pub use entity::{Category, Entity, Position, CHANNEL_COUNT};
pub use error::GridError;
