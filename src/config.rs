use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{MountError, Result};

/// Options accepted by `TicTacToe.mount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MountOptions {
    /// Id of the element to render into. `None` renders into `document.body`.
    pub container_id: Option<String>,
}

impl MountOptions {
    /// `undefined` and `null` give the defaults.
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|err| MountError::InvalidOptions(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_renders_into_body() {
        let options: MountOptions = serde_json::from_str("{}").unwrap();

        assert_eq!(options, MountOptions::default());
        assert_eq!(options.container_id, None);
    }

    #[test]
    fn container_id_is_camel_case() {
        let options: MountOptions = serde_json::from_str(r#"{"containerId":"game"}"#).unwrap();

        assert_eq!(options.container_id.as_deref(), Some("game"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<MountOptions>(r#"{"container_id":"game"}"#).unwrap_err();

        assert!(err.to_string().contains("unknown field"));
    }
}
