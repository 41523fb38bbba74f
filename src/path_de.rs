use serde::de::DeserializeOwned;

use crate::error::{DocError, Result};
use crate::ir::ServiceSpec;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| DocError::Decode {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

/// Parse a service description dump.
pub fn load_service(src: &str) -> Result<ServiceSpec> {
    from_str_with_path(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_carries_json_path() {
        let src = r#"{"types": [{"kind": "struct", "name": "A",
            "members": [{"name": "x", "type": {"kind": "tuple", "name": "?"}}]}]}"#;
        let err = load_service(src).unwrap_err();
        let DocError::Decode { path, .. } = &err else { panic!("unexpected {err:?}") };
        // tagged enums are buffered, so the path stops at the enclosing type
        assert!(path.starts_with("types[0]"), "{path}");
        assert!(err.to_string().contains("tuple"));
    }

    #[test]
    fn empty_document_is_an_empty_service() {
        let spec = load_service("{}").unwrap();
        assert!(spec.types.is_empty());
        assert!(spec.routes.is_empty());
    }
}
