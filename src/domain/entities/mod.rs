//! Domain Entities
//!
//! - `GenerationDocument` - operations and fragments for one generation pass
//! - `GenerationRequest` - a validated request plus its `OptionSet`
//! - `Schema` - the resolved type system

mod document;
mod request;
mod schema;

pub use document::{
    Definition, FragmentDefinition, GenerationDocument, OperationDefinition, OperationKind,
};
pub use request::{GenerationRequest, OptionSet, DEFAULT_TAG_NAME, GENERATED_DIR};
pub use schema::Schema;
