use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocError>;

#[derive(Debug, Error)]
pub enum DocError {
    /// A type is not a struct where a struct is required.
    #[error("unsupported struct type: {name} ({kind})")]
    UnsupportedTypeKind { name: String, kind: &'static str },

    #[error("malformed struct {name:?}: {reason}")]
    MalformedType { name: String, reason: String },

    #[error("type {name} generate error")]
    Render {
        name: String,
        #[source]
        source: Box<DocError>,
    },

    #[error("route #{index} ({path})")]
    Route {
        index: usize,
        path: String,
        #[source]
        source: Box<DocError>,
    },

    #[error("template references unknown key `{key}`")]
    UnknownTemplateKey { key: String },

    /// Anything between `{{` and `}}` other than a plain `.key`.
    #[error("unsupported template action `{action}`")]
    UnsupportedTemplateAction { action: String },

    #[error("no type named `{name}` is declared")]
    UnknownType { name: String },

    #[error("at JSON path {path} → {message}")]
    Decode { path: String, message: String },
}

impl DocError {
    pub(crate) fn render(name: impl Into<String>, source: DocError) -> Self {
        DocError::Render { name: name.into(), source: Box::new(source) }
    }
}
