//! Payload DTOs submitted to the registry.
//!
//! # Design
//! `Payload` is the generic field-name to string mapping sent as a flat JSON
//! object. `Registration` is the typed form the `/register` endpoint expects;
//! it converts into a `Payload` so both go through the same request builder.
//! These types mirror the mock-server's schema but are defined
//! independently. Integration tests catch schema drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key/value data submitted as a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Request payload for the `/register` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub registry_message: String,
}

impl Registration {
    pub fn new(first_name: impl Into<String>, registry_message: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            registry_message: registry_message.into(),
        }
    }
}

impl From<&Registration> for Payload {
    fn from(registration: &Registration) -> Self {
        Payload::new()
            .with("firstName", registration.first_name.as_str())
            .with("registryMessage", registration.registry_message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_converts_to_camel_case_payload() {
        let payload = Payload::from(&Registration::new("Ada", "hello"));
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("firstName"), Some("Ada"));
        assert_eq!(payload.get("registryMessage"), Some("hello"));
    }

    #[test]
    fn payload_serializes_as_flat_object() {
        let payload: Payload = [("a", "1"), ("b", "2")].into_iter().collect();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn registration_payload_matches_typed_serialization() {
        let registration = Registration::new("Grace", "hi there");
        let typed = serde_json::to_value(&registration).unwrap();
        let generic = serde_json::to_value(Payload::from(&registration)).unwrap();
        assert_eq!(typed, generic);
    }

    #[test]
    fn insert_overwrites_existing_field() {
        let payload = Payload::new().with("firstName", "Ada").with("firstName", "Grace");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("firstName"), Some("Grace"));
    }
}
