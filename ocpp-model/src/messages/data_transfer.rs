//! DataTransfer (bidirectional)
//!
//! Vendor-specific exchange; `data` has no schema beyond being JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Action, Confirmation, Message, Request, Validate};
use crate::constraint::{
    check_composite, check_length, check_optional_length, optional_valid,
    optional_within_length, required, within_length,
};
use crate::error::Result;
use crate::repr::Repr;
use crate::types::{CustomData, DataTransferStatus, StatusInfo};
use crate::value::AnyValue;

const VENDOR_ID_MAX: usize = 255;
const MESSAGE_ID_MAX: usize = 50;

// ============================================================================
// Request
// ============================================================================

/// DataTransfer request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// May be used to indicate a specific message or implementation
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<String>,

    /// Data without specified length or format
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<AnyValue>,

    /// Identifies the vendor-specific implementation
    vendor_id: String,
}

impl DataTransferRequest {
    pub fn new(vendor_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            custom_data: None,
            message_id: None,
            data: None,
            vendor_id: check_length("vendorId", vendor_id.into(), VENDOR_ID_MAX)?,
        })
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

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn set_message_id(&mut self, message_id: Option<String>) -> Result<()> {
        self.message_id = check_optional_length("messageId", message_id, MESSAGE_ID_MAX)?;
        Ok(())
    }

    pub fn with_message_id(mut self, message_id: Option<String>) -> Result<Self> {
        self.set_message_id(message_id)?;
        Ok(self)
    }

    pub fn data(&self) -> Option<&AnyValue> {
        self.data.as_ref()
    }

    /// Unconstrained; any JSON shape is accepted
    /// Set the data; JSON `null` is stored as absent
    pub fn set_data(&mut self, data: Option<AnyValue>) {
        self.data = data.filter(|d| !d.is_null());
    }

    pub fn with_data(mut self, data: Option<AnyValue>) -> Self {
        self.set_data(data);
        self
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn set_vendor_id(&mut self, vendor_id: impl Into<String>) -> Result<()> {
        self.vendor_id = check_length("vendorId", vendor_id.into(), VENDOR_ID_MAX)?;
        Ok(())
    }
}

impl Validate for DataTransferRequest {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
            && optional_within_length(self.message_id.as_deref(), MESSAGE_ID_MAX)
            && within_length(&self.vendor_id, VENDOR_ID_MAX)
    }
}

/// `DataTransferRequest` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataTransferRequestFields {
    custom_data: Option<CustomData>,
    message_id: Option<String>,
    data: Option<AnyValue>,
    vendor_id: Option<String>,
}

impl Message for DataTransferRequest {
    const NAME: &'static str = "DataTransferRequest";
    const ACTION: Action = Action::DataTransfer;

    type Fields = DataTransferRequestFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("vendorId", fields.vendor_id)
            .and_then(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
            .and_then(|msg| msg.with_message_id(fields.message_id))
            .map(|msg| msg.with_data(fields.data))
    }
}

impl Request for DataTransferRequest {
    type Response = DataTransferResponse;
    const TRANSACTION_RELATED: bool = false;
}

impl fmt::Display for DataTransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .opt_field("messageId", self.message_id.as_ref())
            .opt_field("data", self.data.as_ref())
            .field("vendorId", &self.vendor_id)
            .finish(self.validate())
    }
}

// ============================================================================
// Response
// ============================================================================

/// DataTransfer response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// Success or failure of the data transfer
    status: DataTransferStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    status_info: Option<StatusInfo>,

    /// Data without specified length or format, in response to the request
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<AnyValue>,
}

impl DataTransferResponse {
    pub fn new(status: DataTransferStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
            data: None,
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

    pub fn status(&self) -> DataTransferStatus {
        self.status
    }

    pub fn set_status(&mut self, status: DataTransferStatus) {
        self.status = status;
    }

    pub fn status_info(&self) -> Option<&StatusInfo> {
        self.status_info.as_ref()
    }

    pub fn set_status_info(&mut self, status_info: Option<StatusInfo>) -> Result<()> {
        self.status_info = check_composite("statusInfo", status_info)?;
        Ok(())
    }

    pub fn with_status_info(mut self, status_info: Option<StatusInfo>) -> Result<Self> {
        self.set_status_info(status_info)?;
        Ok(self)
    }

    pub fn data(&self) -> Option<&AnyValue> {
        self.data.as_ref()
    }

    /// Set the data; JSON `null` is stored as absent
    pub fn set_data(&mut self, data: Option<AnyValue>) {
        self.data = data.filter(|d| !d.is_null());
    }

    pub fn with_data(mut self, data: Option<AnyValue>) -> Self {
        self.set_data(data);
        self
    }
}

impl Validate for DataTransferResponse {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref()) && optional_valid(self.status_info.as_ref())
    }
}

/// `DataTransferResponse` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataTransferResponseFields {
    custom_data: Option<CustomData>,
    status: Option<DataTransferStatus>,
    status_info: Option<StatusInfo>,
    data: Option<AnyValue>,
}

impl Message for DataTransferResponse {
    const NAME: &'static str = "DataTransferResponse";
    const ACTION: Action = Action::DataTransfer;

    type Fields = DataTransferResponseFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("status", fields.status)
            .map(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
            .and_then(|msg| msg.with_status_info(fields.status_info))
            .map(|msg| msg.with_data(fields.data))
    }
}

impl Confirmation for DataTransferResponse {}

impl fmt::Display for DataTransferResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("status", &self.status)
            .opt_field("statusInfo", self.status_info.as_ref())
            .opt_field("data", self.data.as_ref())
            .finish(self.validate())
    }
}
