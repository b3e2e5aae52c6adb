use std::fmt;

use serde_json::{Map, Value};

use crate::{
    attribute::Attribute,
    data::{item::TypeTag, schema::Schema},
};

/// A problem found while type-tagging an attribute document.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// The key is not a declared attribute.
    UnknownAttribute(String),
    /// The value does not have the shape its type tag declares.
    TypeMismatch {
        attribute: Attribute,
        expected: TypeTag,
        actual: Value,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnknownAttribute(name) => write!(f, "unknown attribute {name:?}"),
            Finding::TypeMismatch {
                attribute,
                expected,
                actual,
            } => write!(f, "{attribute}: expected {expected}, found {actual}"),
        }
    }
}

impl Schema {
    /// Type-tag every key of a flat attribute document.
    ///
    /// Findings are reported in the document's key order. Missing
    /// attributes are not reported; the element falls back to defaults or
    /// to the caller for those.
    pub fn check_document(&self, doc: &Map<String, Value>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (key, value) in doc {
            let Ok(attribute) = key.parse::<Attribute>() else {
                findings.push(Finding::UnknownAttribute(key.clone()));
                continue;
            };
            let expected = self.get(attribute).ty;
            if !expected.matches(value) {
                findings.push(Finding::TypeMismatch {
                    attribute,
                    expected,
                    actual: value.clone(),
                });
            }
        }
        findings
    }
}
