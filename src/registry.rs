use std::collections::HashMap;

use log::warn;

use crate::ir::TypeDef;

/// Every declared type, keyed by name. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDef>,
}

impl TypeRegistry {
    pub fn new<I>(types: I) -> Self
    where
        I: IntoIterator<Item = TypeDef>,
    {
        let mut map = HashMap::new();
        for ty in types {
            let name = ty.name().to_string();
            if map.insert(name.clone(), ty).is_some() {
                warn!("type `{name}` declared more than once; keeping the last declaration");
            }
        }
        Self { types: map }
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDef> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDef>>(iter: I) -> Self {
        Self::new(iter)
    }
}
