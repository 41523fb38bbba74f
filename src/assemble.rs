//! Per-route orchestration: resolve, render, fence, fill the template.
use log::{debug, info};

use crate::error::{DocError, Result};
use crate::ir::{Route, ServiceSpec, TypeDef};
use crate::registry::TypeRegistry;
use crate::render::render;
use crate::resolve::resolve;
use crate::template::{Record, Template};

#[derive(Debug, Clone)]
pub struct DocOptions {
    /// Info string of the fenced code blocks.
    pub fence_language: String,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self { fence_language: "golang".into() }
    }
}

/// Resolve and render one root type as a fenced code block.
/// Absent or unnamed roots produce an empty string.
pub fn build_doc(root: Option<&TypeDef>, registry: &TypeRegistry, opts: &DocOptions) -> Result<String> {
    let Some(root) = root.filter(|r| !r.name().is_empty()) else {
        return Ok(String::new());
    };
    let set = resolve(declared(root, registry), registry)?;
    let body = render(&set)?;
    Ok(format!("\n\n```{}\n{body}\n```\n", opts.fence_language))
}

/// The flat record a template sees for one route. `index` is 0-based here.
pub fn route_record(
    index: usize,
    route: &Route,
    registry: &TypeRegistry,
    opts: &DocOptions,
) -> Result<Record> {
    let request_content = build_doc(route.request_type.as_ref(), registry, opts)?;
    let response_content = build_doc(route.response_type.as_ref(), registry, opts)?;

    let mut record = Record::new();
    record.insert("index", (index + 1).to_string());
    record.insert("title", route.title().to_string());
    record.insert("routeComment", route.comments().join("\n\n"));
    record.insert("method", route.method.to_uppercase());
    record.insert("uri", route.path.clone());
    record.insert("requestType", quoted_type_name(route.request_type.as_ref()));
    record.insert("responseType", quoted_type_name(route.response_type.as_ref()));
    record.insert("requestContent", request_content);
    record.insert("responseContent", response_content);
    Ok(record)
}

/// Render every route through `template`, in declaration order.
/// The first failure aborts the whole document.
pub fn assemble(spec: &ServiceSpec, template: &Template, opts: &DocOptions) -> Result<String> {
    let registry = TypeRegistry::new(spec.types.iter().cloned());
    info!("documenting {} route(s) over {} type(s)", spec.routes.len(), registry.len());

    let mut out = String::new();
    for (index, route) in spec.routes.iter().enumerate() {
        debug!("route #{}: {} {}", index + 1, route.method, route.path);
        let rendered = route_record(index, route, &registry, opts)
            .and_then(|record| template.render(&record))
            .map_err(|e| DocError::Route {
                index: index + 1,
                path: route.path.clone(),
                source: Box::new(e),
            })?;
        out.push_str(&rendered);
    }
    Ok(out)
}

/// Resolve and render a single declared type by name, unfenced.
pub fn describe_type(spec: &ServiceSpec, name: &str) -> Result<String> {
    let registry = TypeRegistry::new(spec.types.iter().cloned());
    let root = registry
        .lookup(name)
        .ok_or_else(|| DocError::UnknownType { name: name.to_string() })?;
    render(&resolve(root, &registry)?)
}

/// Routes usually reference their struct by name only; prefer the
/// declaration so the root block lists its members.
fn declared<'a>(root: &'a TypeDef, registry: &'a TypeRegistry) -> &'a TypeDef {
    match root {
        TypeDef::Struct { name, members } if members.is_empty() => {
            registry.lookup(name).unwrap_or(root)
        }
        _ => root,
    }
}

fn quoted_type_name(ty: Option<&TypeDef>) -> String {
    let name = ty.map(TypeDef::name).filter(|n| !n.is_empty()).unwrap_or("-");
    format!("`{name}`")
}
