//! Model Defaults
//!
//! Choosing a model on the tool form fills in its service interval and,
//! when the model has one, its price.

use serde_json::Value;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefaults {
    pub service_interval: Option<String>,
    /// Price as the server formats it (decimals arrive as strings)
    pub price: Option<String>,
}

impl ModelDefaults {
    /// Decode `/model_object/`. The record is a Django-serialized list,
    /// either embedded as a string under `model` or sent directly.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let records = match value.get("model") {
            Some(Value::String(inner)) => serde_json::from_str(inner)?,
            Some(other) => other.clone(),
            None => value,
        };
        let record = match &records {
            Value::Array(list) => list.first().ok_or(Error::MissingModel)?,
            obj @ Value::Object(_) => obj,
            _ => return Err(Error::MissingModel),
        };
        let fields = record.get("fields").ok_or(Error::MissingModel)?;

        Ok(Self {
            service_interval: fields.get("service_interval").and_then(scalar_text),
            price: fields.get("price").and_then(scalar_text),
        })
    }

    /// New value for the price input. A zero or missing price keeps what the
    /// user already typed.
    pub fn price_update(&self) -> Option<&str> {
        let price = self.price.as_deref()?;
        match price.trim().parse::<f64>() {
            Ok(p) if p == 0.0 => None,
            Ok(_) => Some(price),
            Err(_) => None,
        }
    }
}

fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(price: &str) -> String {
        let inner = format!(
            r#"[{{"pk": 4, "model": "tools.toolmodel", "fields": {{"name": "Boremaskine", "service_interval": 6, "price": {price}}}}}]"#
        );
        serde_json::json!({ "model": inner }).to_string()
    }

    #[test]
    fn test_nonzero_price_overwrites() {
        let d = ModelDefaults::from_body(&body("150")).unwrap();
        assert_eq!(d.service_interval.as_deref(), Some("6"));
        assert_eq!(d.price_update(), Some("150"));
    }

    #[test]
    fn test_zero_price_keeps_input() {
        assert_eq!(ModelDefaults::from_body(&body("0")).unwrap().price_update(), None);
        assert_eq!(ModelDefaults::from_body(&body("\"0.00\"")).unwrap().price_update(), None);
        assert_eq!(
            ModelDefaults::from_body(&body("\"150.00\"")).unwrap().price_update(),
            Some("150.00")
        );
    }

    #[test]
    fn test_direct_array_body() {
        let d = ModelDefaults::from_body(r#"[{"fields": {"service_interval": 12, "price": null}}]"#)
            .unwrap();
        assert_eq!(d.service_interval.as_deref(), Some("12"));
        assert_eq!(d.price_update(), None);
    }

    #[test]
    fn test_missing_record() {
        assert!(matches!(ModelDefaults::from_body(r#"{"model": "[]"}"#), Err(Error::MissingModel)));
        assert!(matches!(ModelDefaults::from_body("nope"), Err(Error::Json(_))));
    }
}
