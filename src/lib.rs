//! Metadata-driven parsing, validation, classification and formatting of
//! international phone numbers, entirely offline.
//!
//! A [`PhoneEngine`] is built once from a serialized numbering-plan payload
//! and is afterwards read-only: parsing and formatting are reentrant and can
//! be called concurrently from any number of threads.

pub mod metadata;

mod engine;
mod regexp_cache;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use engine::engine::PhoneEngine;
pub use engine::enums::{LengthKind, LineType, PhoneNumberFormat};
pub use engine::errors::{MetadataError, ParseError};
pub use engine::record::PhoneNumberRecord;
pub use regexp_cache::{InvalidPatternError, PatternCache};
