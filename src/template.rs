//! `{{.key}}` placeholder substitution over a flat string record.
//!
//! Deliberately tiny: no conditionals, loops or pipelines. Any other
//! `{{ ... }}` action is rejected when the template is parsed.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DocError, Result};

static ACTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("valid action regex"));

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*$").expect("valid placeholder regex"));

/// Bundled markdown layout used when no template file is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/markdown.tpl");

/// Flat key → value record handed to a template.
pub type Record = IndexMap<&'static str, String>;

#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    keys: Vec<String>,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut keys = Vec::new();
        for caps in ACTION.captures_iter(&source) {
            match PLACEHOLDER.captures(&caps[1]) {
                Some(key) => keys.push(key[1].to_string()),
                None => {
                    return Err(DocError::UnsupportedTemplateAction { action: caps[0].to_string() });
                }
            }
        }
        Ok(Self { source, keys })
    }

    /// The bundled markdown template.
    pub fn markdown() -> Result<Self> {
        Self::parse(DEFAULT_TEMPLATE)
    }

    /// Placeholder keys in order of appearance.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Fails on the first placeholder missing from `record`.
    pub fn check(&self, record: &Record) -> Result<()> {
        match self.keys.iter().find(|k| !record.contains_key(k.as_str())) {
            Some(key) => Err(DocError::UnknownTemplateKey { key: key.clone() }),
            None => Ok(()),
        }
    }

    pub fn render(&self, record: &Record) -> Result<String> {
        self.check(record)?;
        // every action was validated as a placeholder by `parse`
        let out = ACTION.replace_all(&self.source, |caps: &regex::Captures| {
            PLACEHOLDER
                .captures(&caps[1])
                .and_then(|key| record.get(&key[1]).cloned())
                .unwrap_or_default()
        });
        Ok(out.into_owned())
    }
}
