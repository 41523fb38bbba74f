//! Dependency resolution: the transitive closure of types reachable from a
//! root struct, through struct members, pointers, maps and arrays.
//!
//! Traversal is an explicit depth-first worklist. Every original name is
//! expanded at most once, so self-referencing and mutually-referencing
//! structs terminate. The result keeps first-insertion order (root first),
//! which is what the renderer walks.
use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use crate::error::{DocError, Result};
use crate::ir::TypeDef;
use crate::registry::TypeRegistry;

/// Original (unstripped) name → definition, in discovery order.
pub type ResolvedSet = IndexMap<String, TypeDef>;

/// Resolve everything `root` depends on.
///
/// An unnamed root yields an empty set: the route simply has no body.
/// A named root that is not a struct cannot be documented.
pub fn resolve(root: &TypeDef, registry: &TypeRegistry) -> Result<ResolvedSet> {
    let mut set = ResolvedSet::new();
    if root.name().is_empty() {
        return Ok(set);
    }
    if !matches!(root, TypeDef::Struct { .. }) {
        return Err(DocError::UnsupportedTypeKind {
            name: root.name().to_string(),
            kind: root.kind(),
        });
    }
    set.insert(root.name().to_string(), root.clone());

    let mut resolver = Resolver { registry, set, expanded: HashSet::new(), stack: vec![root] };
    while let Some(ty) = resolver.stack.pop() {
        resolver.expand(ty);
    }
    debug!("resolved `{}` into {} type(s)", root.name(), resolver.set.len());
    Ok(resolver.set)
}

struct Resolver<'a> {
    registry: &'a TypeRegistry,
    set: ResolvedSet,
    expanded: HashSet<&'a str>,
    stack: Vec<&'a TypeDef>,
}

impl<'a> Resolver<'a> {
    fn expand(&mut self, ty: &'a TypeDef) {
        let name = ty.name();
        if !self.expanded.insert(name) {
            return;
        }

        let saved = self.registry.lookup(ty.search_name());
        if let Some(saved) = saved {
            if !self.set.contains_key(name) {
                debug!("registering `{name}` as `{}`", saved.name());
                self.set.insert(name.to_string(), saved.clone());
            }
        }

        // Undeclared pointers and containers are unwrapped in place.
        let target = saved.unwrap_or(ty);
        let next: Vec<&'a TypeDef> = match target {
            TypeDef::Pointer { inner, .. } => vec![inner.as_ref()],
            TypeDef::Struct { members, .. } => {
                members.iter().filter_map(|m| member_dependency(&m.ty)).collect()
            }
            TypeDef::Map { value, .. } | TypeDef::Array { value, .. } => {
                non_primitive(value).into_iter().collect()
            }
            TypeDef::Primitive { .. } | TypeDef::Interface { .. } => Vec::new(),
        };

        // reversed so the first member is expanded first
        for dep in next.into_iter().rev() {
            if !self.expanded.contains(dep.name()) {
                self.stack.push(dep);
            }
        }
    }
}

/// What a struct member contributes to the worklist.
///
/// Pointers are followed as the pointer itself, so the target is
/// registered under the pointer's name as well.
fn member_dependency(ty: &TypeDef) -> Option<&TypeDef> {
    match ty {
        TypeDef::Struct { .. } | TypeDef::Pointer { .. } => Some(ty),
        TypeDef::Map { value, .. } | TypeDef::Array { value, .. } => non_primitive(value),
        TypeDef::Primitive { .. } | TypeDef::Interface { .. } => None,
    }
}

fn non_primitive(ty: &TypeDef) -> Option<&TypeDef> {
    (!ty.is_primitive()).then_some(ty)
}
