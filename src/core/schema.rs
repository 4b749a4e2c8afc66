//! Field schemas for block inputs and outputs
//!
//! This module defines the declarative shape descriptions a host uses to render
//! block configuration forms and to document block output. Schemas are data only:
//! nothing in this crate validates runtime values against them.

use serde::{Deserialize, Serialize};

/// Shape of a field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldKind {
    /// Object with named properties
    Object {
        /// Property schemas, in declaration order
        properties: Vec<(String, FieldKind)>,
        /// Names of properties that are always present
        required: Vec<String>,
    },
    /// Array of homogeneous items
    Array {
        /// Schema for array items
        items: Box<FieldKind>,
    },
    /// Primitive value
    Primitive {
        /// Primitive type
        prim_type: PrimitiveType,
    },
}

/// Primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// UTF-8 string
    String,
    /// Integer number
    Integer,
    /// Floating point number
    Number,
    /// Boolean
    Boolean,
}

impl FieldKind {
    pub fn string() -> Self {
        FieldKind::Primitive {
            prim_type: PrimitiveType::String,
        }
    }

    pub fn integer() -> Self {
        FieldKind::Primitive {
            prim_type: PrimitiveType::Integer,
        }
    }

    pub fn number() -> Self {
        FieldKind::Primitive {
            prim_type: PrimitiveType::Number,
        }
    }

    pub fn boolean() -> Self {
        FieldKind::Primitive {
            prim_type: PrimitiveType::Boolean,
        }
    }

    /// Array whose items have the given shape
    pub fn array(items: FieldKind) -> Self {
        FieldKind::Array {
            items: Box::new(items),
        }
    }

    /// Object with no declared properties (free-form JSON object)
    pub fn any_object() -> Self {
        FieldKind::Object {
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Object whose properties are all optional
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldKind)>,
        S: Into<String>,
    {
        FieldKind::Object {
            properties: properties
                .into_iter()
                .map(|(name, kind)| (name.into(), kind))
                .collect(),
            required: Vec::new(),
        }
    }

    /// Mark properties of an object schema as always present.
    ///
    /// Has no effect on array or primitive schemas.
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let FieldKind::Object { required, .. } = &mut self {
            required.extend(names.into_iter().map(Into::into));
        }
        self
    }

    /// The standard LaunchDarkly collection envelope: `items` plus optional
    /// `totalCount` and `_links`
    pub fn collection(item: FieldKind) -> Self {
        FieldKind::object([
            ("items", FieldKind::array(item)),
            ("totalCount", FieldKind::integer()),
            ("_links", FieldKind::any_object()),
        ])
        .with_required(["items"])
    }

    /// Look up a property schema on an object
    pub fn property(&self, name: &str) -> Option<&FieldKind> {
        match self {
            FieldKind::Object { properties, .. } => properties
                .iter()
                .find(|(prop, _)| prop == name)
                .map(|(_, kind)| kind),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldKind::Primitive { .. })
    }
}

/// One named input field a host collects before invoking a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Field name, as it appears in the invocation inputs
    pub name: String,
    /// Expected value shape
    pub kind: FieldKind,
    /// Whether the host must collect a value
    pub required: bool,
    /// Human-readable description
    pub description: String,
}

impl ConfigField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            description: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
