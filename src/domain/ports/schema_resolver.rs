//! SchemaResolver port

use crate::domain::entities::Schema;
use crate::error::GenResult;

/// Resolves the schema operations are generated against.
///
/// Called once per generation pass; may be slow.
pub trait SchemaResolver {
    /// Fails with `GenError::SchemaLoad`
    fn resolve(&self, tag: Option<&str>) -> GenResult<Schema>;
}
