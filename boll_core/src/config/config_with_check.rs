use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::common::boll_error::{BollError, ErrCode};

/// Key/value config that remembers which keys were never read.
///
/// Every `get` consumes its key; `check` fails if anything is left over, so a
/// misspelled parameter is reported instead of silently ignored.
#[derive(Debug, Default)]
pub struct ConfigWithCheck {
    conf: HashMap<String, Value>,
}

impl ConfigWithCheck {
    pub fn new(conf: HashMap<String, Value>) -> Self {
        Self { conf }
    }

    /// Take `key` out of the config, deserialized as `T`.
    /// A missing key is `Ok(None)`; a key of the wrong type is an error.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, BollError> {
        match self.conf.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v.clone()).map(Some).map_err(|e| {
                BollError::new(
                    format!("invalid value {} for {}: {}", v, key, e),
                    ErrCode::ConfigError,
                )
            }),
        }
    }

    pub fn check(&self) -> Result<(), BollError> {
        if self.conf.is_empty() {
            return Ok(());
        }
        let mut keys: Vec<&str> = self.conf.keys().map(String::as_str).collect();
        keys.sort_unstable();
        Err(BollError::new(
            format!("unknown para = {}", keys.join(", ")),
            ErrCode::ParaError,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conf(v: Value) -> ConfigWithCheck {
        let map: HashMap<String, Value> = serde_json::from_value(v).unwrap();
        ConfigWithCheck::new(map)
    }

    #[test]
    fn test_get_consumes_keys() {
        let mut c = conf(json!({"length": 10, "offset": -2}));
        assert_eq!(c.get::<usize>("length").unwrap(), Some(10));
        assert!(c.check().is_err());
        assert_eq!(c.get::<i64>("offset").unwrap(), Some(-2));
        assert!(c.check().is_ok());
    }

    #[test]
    fn test_missing_and_null() {
        let mut c = conf(json!({"offset": null}));
        assert_eq!(c.get::<i64>("offset").unwrap(), None);
        assert_eq!(c.get::<i64>("length").unwrap(), None);
        assert!(c.check().is_ok());
    }

    #[test]
    fn test_wrong_type() {
        let mut c = conf(json!({"length": "twenty"}));
        let err = c.get::<usize>("length").unwrap_err();
        assert_eq!(err.errcode, ErrCode::ConfigError);
    }

    #[test]
    fn test_unknown_keys_listed() {
        let c = conf(json!({"lenght": 20, "colour": "red"}));
        let err = c.check().unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
        assert_eq!(err.msg, "unknown para = colour, lenght");
    }
}
