//! Units Module
//!
//! Apartment unit records and the REST backend that owns them.

pub mod client;
#[cfg(test)]
pub mod memory;
pub mod view;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::HttpUnitsApi;
pub use view::{SortColumn, SortDirection, UnitRow};

/// Editable part of a unit record; also the create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFields {
    pub resident_name: String,
    pub floor: i64,
    pub unit_number: i64,
    pub phone_number: String,
    pub block: String,
}

/// A unit record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: UnitFields,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid backend URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The four operations the backend exposes for the unit collection.
pub trait UnitsApi {
    fn list(&self) -> ApiResult<Vec<Unit>>;
    fn create(&self, fields: &UnitFields) -> ApiResult<()>;
    fn update(&self, id: &str, fields: &UnitFields) -> ApiResult<()>;
    fn delete(&self, id: &str) -> ApiResult<()>;

    /// Human readable location of the backend, shown in the status line.
    fn location(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_json_uses_camel_case() {
        let unit = Unit {
            id: "1".to_string(),
            fields: UnitFields {
                resident_name: "X".to_string(),
                floor: 2,
                unit_number: 3,
                phone_number: "555".to_string(),
                block: "A".to_string(),
            },
        };
        let value = serde_json::to_value(&unit).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["residentName"], "X");
        assert_eq!(value["unitNumber"], 3);
        assert_eq!(value["phoneNumber"], "555");
        assert_eq!(value["floor"], 2);
    }

    #[test]
    fn test_unit_accepts_mongo_style_id() {
        let json = r#"{"_id":"64ab","residentName":"Ayse","floor":4,"unitNumber":12,"phoneNumber":"0555","block":"B"}"#;
        let unit: Unit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.id, "64ab");
        assert_eq!(unit.fields.unit_number, 12);
        assert_eq!(unit.fields.block, "B");
    }

    #[test]
    fn test_fields_body_has_no_id() {
        let fields = UnitFields {
            resident_name: "X".to_string(),
            floor: 1,
            unit_number: 1,
            phone_number: String::new(),
            block: "A".to_string(),
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
