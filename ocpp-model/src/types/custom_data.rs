//! Vendor extension object carried by nearly every message

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint::{check_length, within_length};
use crate::error::Result;
use crate::messages::Validate;
use crate::repr::Repr;
use crate::value::AnyValue;

const VENDOR_ID_MAX: usize = 255;

/// Custom data
///
/// Fields are public; a hand-built value is checked when it is attached to a
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomData {
    pub vendor_id: String,

    /// Vendor-defined properties, flattened next to `vendorId` on the wire
    #[serde(flatten)]
    pub properties: BTreeMap<String, AnyValue>,
}

impl CustomData {
    pub fn new(vendor_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            vendor_id: check_length("vendorId", vendor_id.into(), VENDOR_ID_MAX)?,
            properties: BTreeMap::new(),
        })
    }

    /// Add a vendor-defined property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl Validate for CustomData {
    fn validate(&self) -> bool {
        within_length(&self.vendor_id, VENDOR_ID_MAX) && !self.properties.contains_key("vendorId")
    }
}

impl fmt::Display for CustomData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = AnyValue::Object(self.properties.clone());
        Repr::new(f, "CustomData")
            .field("vendorId", &self.vendor_id)
            .field("properties", &properties)
            .finish(self.validate())
    }
}
