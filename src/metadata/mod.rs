//! Decoded numbering-plan metadata and the indexed, immutable store built
//! from it once per engine instance.

pub mod schema;
mod store;

pub use schema::{FormatRule, NumberTypeDescriptor, PossibleLengths, Territory};
pub use store::MetadataStore;
