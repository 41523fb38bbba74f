//! Render API reference documentation from a service description.
//!
//! A route's request and response types are resolved into the closure of
//! every struct they reach, rendered as Go-style definitions, and
//! substituted into a text template.
pub mod assemble;
pub mod error;
pub mod ir;
pub mod path_de;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod template;

pub use assemble::{assemble, build_doc, describe_type, DocOptions};
pub use error::{DocError, Result};
pub use ir::{Member, Route, ServiceSpec, TypeDef};
pub use registry::TypeRegistry;
pub use resolve::{resolve, ResolvedSet};
pub use template::Template;
