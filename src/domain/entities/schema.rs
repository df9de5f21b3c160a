//! Resolved schema

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::OperationKind;

/// A resolved type system, kept as SDL plus the facts generation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub sdl: String,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
    pub type_names: BTreeSet<String>,
}

impl Schema {
    /// Root type name for an operation kind, if the schema defines one
    pub fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.type_names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_type_per_kind() {
        let schema = Schema {
            sdl: String::new(),
            query_type: Some("Query".to_string()),
            mutation_type: None,
            subscription_type: Some("Events".to_string()),
            type_names: BTreeSet::new(),
        };
        assert_eq!(schema.root_type(OperationKind::Query), Some("Query"));
        assert_eq!(schema.root_type(OperationKind::Mutation), None);
        assert_eq!(schema.root_type(OperationKind::Subscription), Some("Events"));
    }
}
