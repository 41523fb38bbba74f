// Strongly-typed model of a service description. Everything downstream
// (registry, resolver, renderer) dispatches on `TypeDef` exhaustively.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker carried by pointer type names (`*User`).
pub const POINTER_MARKER: char = '*';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDef {
    Primitive { name: String },
    /// `members` is empty when the struct is only referenced by name.
    Struct {
        name: String,
        #[serde(default)]
        members: Vec<Member>,
    },
    Pointer { name: String, inner: Box<TypeDef> },
    Map { name: String, key: Box<TypeDef>, value: Box<TypeDef> },
    Array { name: String, value: Box<TypeDef> },
    Interface { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Empty for embedded fields.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub request_type: Option<TypeDef>,
    #[serde(default)]
    pub response_type: Option<TypeDef>,
    /// Annotation entries in declaration order; `title` is reserved.
    #[serde(default)]
    pub doc: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl TypeDef {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDef::Primitive { name: name.into() }
    }
    pub fn structure(name: impl Into<String>, members: Vec<Member>) -> Self {
        TypeDef::Struct { name: name.into(), members }
    }
    /// A struct known only by name; the registry holds its members.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::structure(name, Vec::new())
    }
    pub fn pointer(inner: TypeDef) -> Self {
        TypeDef::Pointer {
            name: format!("{POINTER_MARKER}{}", inner.name()),
            inner: Box::new(inner),
        }
    }
    pub fn array(value: TypeDef) -> Self {
        TypeDef::Array { name: format!("[]{}", value.name()), value: Box::new(value) }
    }
    pub fn map(key: TypeDef, value: TypeDef) -> Self {
        TypeDef::Map {
            name: format!("map[{}]{}", key.name(), value.name()),
            key: Box::new(key),
            value: Box::new(value),
        }
    }
    pub fn interface(name: impl Into<String>) -> Self {
        TypeDef::Interface { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDef::Primitive { name }
            | TypeDef::Struct { name, .. }
            | TypeDef::Pointer { name, .. }
            | TypeDef::Map { name, .. }
            | TypeDef::Array { name, .. }
            | TypeDef::Interface { name } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TypeDef::Primitive { .. } => "primitive",
            TypeDef::Struct { .. } => "struct",
            TypeDef::Pointer { .. } => "pointer",
            TypeDef::Map { .. } => "map",
            TypeDef::Array { .. } => "array",
            TypeDef::Interface { .. } => "interface",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDef::Primitive { .. })
    }

    /// Registry key: the name with one leading pointer marker stripped.
    pub fn search_name(&self) -> &str {
        let name = self.name();
        name.strip_prefix(POINTER_MARKER).unwrap_or(name)
    }
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeDef, tag: impl Into<String>) -> Self {
        Member { name: name.into(), tag: tag.into(), comment: None, ty }
    }
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Route {
    pub fn title(&self) -> &str {
        self.doc.get("title").map(String::as_str).unwrap_or_default()
    }

    /// Non-title annotations as `key: value` lines, declaration order.
    pub fn comments(&self) -> Vec<String> {
        self.doc
            .iter()
            .filter(|(k, _)| k.as_str() != "title")
            .map(|(k, v)| format!("{k}: {}", v.trim()))
            .collect()
    }
}
