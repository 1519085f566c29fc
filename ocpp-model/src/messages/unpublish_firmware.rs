//! UnpublishFirmware (CSMS -> Local Controller)
//!
//! Asks a Local Controller to stop serving a firmware image it published,
//! identified by the image's MD5 checksum.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Action, Confirmation, Message, Request, Validate};
use crate::constraint::{check_composite, check_length, optional_valid, required, within_length};
use crate::error::Result;
use crate::repr::Repr;
use crate::types::{CustomData, UnpublishFirmwareStatus};

const CHECKSUM_MAX: usize = 32;

// ============================================================================
// Request
// ============================================================================

/// UnpublishFirmware request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnpublishFirmwareRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// MD5 checksum over the entire firmware file as a hexadecimal string of length 32
    checksum: String,
}

impl UnpublishFirmwareRequest {
    /// Create a request; fails if `checksum` is longer than 32 characters
    pub fn new(checksum: impl Into<String>) -> Result<Self> {
        Ok(Self {
            custom_data: None,
            checksum: check_length("checksum", checksum.into(), CHECKSUM_MAX)?,
        })
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    /// Set custom data; an invalid value is rejected and the previous one kept
    pub fn set_custom_data(&mut self, custom_data: Option<CustomData>) -> Result<()> {
        self.custom_data = check_composite("customData", custom_data)?;
        Ok(())
    }

    pub fn with_custom_data(mut self, custom_data: Option<CustomData>) -> Result<Self> {
        self.set_custom_data(custom_data)?;
        Ok(self)
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn set_checksum(&mut self, checksum: impl Into<String>) -> Result<()> {
        self.checksum = check_length("checksum", checksum.into(), CHECKSUM_MAX)?;
        Ok(())
    }
}

impl Validate for UnpublishFirmwareRequest {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref()) && within_length(&self.checksum, CHECKSUM_MAX)
    }
}

/// `UnpublishFirmwareRequest` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnpublishFirmwareRequestFields {
    custom_data: Option<CustomData>,
    checksum: Option<String>,
}

impl Message for UnpublishFirmwareRequest {
    const NAME: &'static str = "UnpublishFirmwareRequest";
    const ACTION: Action = Action::UnpublishFirmware;

    type Fields = UnpublishFirmwareRequestFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("checksum", fields.checksum)
            .and_then(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
    }
}

impl Request for UnpublishFirmwareRequest {
    type Response = UnpublishFirmwareResponse;
    const TRANSACTION_RELATED: bool = false;
}

impl fmt::Display for UnpublishFirmwareRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("checksum", &self.checksum)
            .finish(self.validate())
    }
}

// ============================================================================
// Response
// ============================================================================

/// UnpublishFirmware response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnpublishFirmwareResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// Whether the image was unpublished
    status: UnpublishFirmwareStatus,
}

impl UnpublishFirmwareResponse {
    pub fn new(status: UnpublishFirmwareStatus) -> Self {
        Self {
            custom_data: None,
            status,
        }
    }

    pub fn custom_data(&self) -> Option<&CustomData> {
        self.custom_data.as_ref()
    }

    pub fn set_custom_data(&mut self, custom_data: Option<CustomData>) -> Result<()> {
        self.custom_data = check_composite("customData", custom_data)?;
        Ok(())
    }

    pub fn with_custom_data(mut self, custom_data: Option<CustomData>) -> Result<Self> {
        self.set_custom_data(custom_data)?;
        Ok(self)
    }

    pub fn status(&self) -> UnpublishFirmwareStatus {
        self.status
    }

    pub fn set_status(&mut self, status: UnpublishFirmwareStatus) {
        self.status = status;
    }
}

impl Validate for UnpublishFirmwareResponse {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
    }
}

/// `UnpublishFirmwareResponse` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnpublishFirmwareResponseFields {
    custom_data: Option<CustomData>,
    status: Option<UnpublishFirmwareStatus>,
}

impl Message for UnpublishFirmwareResponse {
    const NAME: &'static str = "UnpublishFirmwareResponse";
    const ACTION: Action = Action::UnpublishFirmware;

    type Fields = UnpublishFirmwareResponseFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("status", fields.status)
            .map(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
    }
}

impl Confirmation for UnpublishFirmwareResponse {}

impl fmt::Display for UnpublishFirmwareResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("status", &self.status)
            .finish(self.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    const MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn test_request_with_valid_checksum() {
        let req = UnpublishFirmwareRequest::new(MD5_EMPTY).unwrap();
        assert!(req.validate());
        assert_eq!(req.checksum(), MD5_EMPTY);
        assert!(!req.transaction_related());
    }

    #[test]
    fn test_request_rejects_long_checksum() {
        let err = UnpublishFirmwareRequest::new(format!("{}0", MD5_EMPTY)).unwrap_err();
        assert_eq!(err.field, "checksum");
        assert_eq!(err.violation, Violation::TooLong { max: 32, len: 33 });
    }

    #[test]
    fn test_request_rejects_missing_checksum() {
        let err = serde_json::from_str::<UnpublishFirmwareRequest>("{}").unwrap_err();
        assert!(err.to_string().contains("checksum"));

        let err = serde_json::from_str::<UnpublishFirmwareRequest>(r#"{"checksum": null}"#)
            .unwrap_err();
        assert!(err.to_string().contains("required value is missing"));
    }

    #[test]
    fn test_failed_set_keeps_previous_state() {
        let mut req = UnpublishFirmwareRequest::new(MD5_EMPTY).unwrap();
        let before = req.clone();

        assert!(req.set_checksum("f".repeat(40)).is_err());
        assert_eq!(req, before);

        let bad = CustomData {
            vendor_id: "v".repeat(256),
            properties: Default::default(),
        };
        assert!(req.set_custom_data(Some(bad)).is_err());
        assert_eq!(req, before);
    }

    #[test]
    fn test_invalid_messages_still_compare_equal() {
        // Only reachable from inside the module
        let a = UnpublishFirmwareRequest {
            custom_data: None,
            checksum: "0".repeat(64),
        };
        let b = a.clone();
        assert!(!a.validate());
        assert_eq!(a, b);
        assert!(a.to_string().ends_with("isValid=false}"));
    }

    #[test]
    fn test_invalid_message_is_not_encoded() {
        let req = UnpublishFirmwareRequest {
            custom_data: None,
            checksum: "0".repeat(64),
        };
        assert!(crate::payload::encode(&req).is_err());
        assert!(crate::payload::Call::new(req).is_err());
    }

    #[test]
    fn test_request_display() {
        let req = UnpublishFirmwareRequest::new(MD5_EMPTY).unwrap();
        assert_eq!(
            req.to_string(),
            format!(
                "UnpublishFirmwareRequest{{customData=null, checksum={}, isValid=true}}",
                MD5_EMPTY
            )
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let resp = UnpublishFirmwareResponse::new(UnpublishFirmwareStatus::Unpublished);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Unpublished"}));

        let parsed: UnpublishFirmwareResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, resp);
        assert!(parsed.validate());
    }

    #[test]
    fn test_response_rejects_unknown_fields() {
        let json = r#"{"status": "NoFirmware", "extra": 1}"#;
        assert!(serde_json::from_str::<UnpublishFirmwareResponse>(json).is_err());
    }
}
