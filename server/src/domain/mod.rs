//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod pack_list;

pub use entity::{DomainError, DomainResult, Entity};
pub use pack_list::{NewPackList, PackItem, PackList, PackListSummary, ReplacePackList};
