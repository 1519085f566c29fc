//! Reason attached to a non-trivial response status

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CustomData;
use crate::constraint::{
    check_composite, check_length, check_optional_length, optional_valid, optional_within_length,
    within_length,
};
use crate::error::Result;
use crate::messages::Validate;
use crate::repr::Repr;

const REASON_CODE_MAX: usize = 20;
const ADDITIONAL_INFO_MAX: usize = 512;

/// Element providing more information about a status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,

    /// Predefined case-insensitive code for the reason
    pub reason_code: String,

    /// Free text for the reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl StatusInfo {
    pub fn new(reason_code: impl Into<String>) -> Result<Self> {
        Ok(Self {
            custom_data: None,
            reason_code: check_length("reasonCode", reason_code.into(), REASON_CODE_MAX)?,
            additional_info: None,
        })
    }

    pub fn with_additional_info(mut self, additional_info: Option<String>) -> Result<Self> {
        self.additional_info =
            check_optional_length("additionalInfo", additional_info, ADDITIONAL_INFO_MAX)?;
        Ok(self)
    }

    pub fn with_custom_data(mut self, custom_data: Option<CustomData>) -> Result<Self> {
        self.custom_data = check_composite("customData", custom_data)?;
        Ok(self)
    }
}

impl Validate for StatusInfo {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
            && within_length(&self.reason_code, REASON_CODE_MAX)
            && optional_within_length(self.additional_info.as_deref(), ADDITIONAL_INFO_MAX)
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, "StatusInfo")
            .opt_field("customData", self.custom_data.as_ref())
            .field("reasonCode", &self.reason_code)
            .opt_field("additionalInfo", self.additional_info.as_ref())
            .finish(self.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    #[test]
    fn test_new_status_info() {
        let info = StatusInfo::new("NoFirmware")
            .unwrap()
            .with_additional_info(Some("nothing published".to_string()))
            .unwrap();
        assert!(info.validate());
        assert_eq!(info.additional_info.as_deref(), Some("nothing published"));

        let cleared = info.with_additional_info(None).unwrap();
        assert!(cleared.additional_info.is_none());
    }

    #[test]
    fn test_additional_info_bound() {
        let err = StatusInfo::new("Busy")
            .unwrap()
            .with_additional_info(Some("i".repeat(513)))
            .unwrap_err();
        assert_eq!(err.field, "additionalInfo");
        assert_eq!(err.violation, Violation::TooLong { max: 512, len: 513 });
    }

    #[test]
    fn test_reason_code_bound() {
        assert!(StatusInfo::new("x".repeat(20)).is_ok());
        let err = StatusInfo::new("x".repeat(21)).unwrap_err();
        assert_eq!(err.field, "reasonCode");
        assert_eq!(err.violation, Violation::TooLong { max: 20, len: 21 });
    }

    #[test]
    fn test_nested_custom_data_is_checked() {
        let mut info = StatusInfo::new("Busy").unwrap();
        info.custom_data = Some(CustomData {
            vendor_id: "v".repeat(256),
            properties: Default::default(),
        });
        assert!(!info.validate());

        let bad = info.custom_data.clone();
        let err = StatusInfo::new("Busy").unwrap().with_custom_data(bad).unwrap_err();
        assert_eq!(err.violation, Violation::InvalidComposite);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_value(StatusInfo::new("Busy").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"reasonCode": "Busy"}));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let json = serde_json::json!({"reasonCode": "Busy", "bogus": 1});
        assert!(serde_json::from_value::<StatusInfo>(json).is_err());

        // customData keeps accepting vendor properties
        let json = serde_json::json!({
            "reasonCode": "Busy",
            "customData": {"vendorId": "acme", "rev": 2}
        });
        let info: StatusInfo = serde_json::from_value(json).unwrap();
        assert!(info.validate());
    }
}
