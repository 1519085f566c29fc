//! RequestStopTransaction (CSMS -> CP)
//!
//! Targets a running transaction, so dispatch must bind it to that
//! transaction's context.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Action, Confirmation, Message, Request, Validate};
use crate::constraint::{check_composite, check_length, optional_valid, required, within_length};
use crate::error::Result;
use crate::repr::Repr;
use crate::types::{CustomData, RequestStartStopStatus, StatusInfo};

const TRANSACTION_ID_MAX: usize = 36;

/// RequestStopTransaction request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStopTransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// Transaction to stop
    transaction_id: String,
}

impl RequestStopTransactionRequest {
    pub fn new(transaction_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            custom_data: None,
            transaction_id: check_length(
                "transactionId",
                transaction_id.into(),
                TRANSACTION_ID_MAX,
            )?,
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

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn set_transaction_id(&mut self, transaction_id: impl Into<String>) -> Result<()> {
        self.transaction_id =
            check_length("transactionId", transaction_id.into(), TRANSACTION_ID_MAX)?;
        Ok(())
    }
}

impl Validate for RequestStopTransactionRequest {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
            && within_length(&self.transaction_id, TRANSACTION_ID_MAX)
    }
}

/// `RequestStopTransactionRequest` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestStopTransactionRequestFields {
    custom_data: Option<CustomData>,
    transaction_id: Option<String>,
}

impl Message for RequestStopTransactionRequest {
    const NAME: &'static str = "RequestStopTransactionRequest";
    const ACTION: Action = Action::RequestStopTransaction;

    type Fields = RequestStopTransactionRequestFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("transactionId", fields.transaction_id)
            .and_then(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
    }
}

impl Request for RequestStopTransactionRequest {
    type Response = RequestStopTransactionResponse;
    const TRANSACTION_RELATED: bool = true;
}

impl fmt::Display for RequestStopTransactionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("transactionId", &self.transaction_id)
            .finish(self.validate())
    }
}

/// RequestStopTransaction response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStopTransactionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    status: RequestStartStopStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    status_info: Option<StatusInfo>,
}

impl RequestStopTransactionResponse {
    pub fn new(status: RequestStartStopStatus) -> Self {
        Self {
            custom_data: None,
            status,
            status_info: None,
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

    pub fn status(&self) -> RequestStartStopStatus {
        self.status
    }

    pub fn set_status(&mut self, status: RequestStartStopStatus) {
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
}

impl Validate for RequestStopTransactionResponse {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref()) && optional_valid(self.status_info.as_ref())
    }
}

/// `RequestStopTransactionResponse` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestStopTransactionResponseFields {
    custom_data: Option<CustomData>,
    status: Option<RequestStartStopStatus>,
    status_info: Option<StatusInfo>,
}

impl Message for RequestStopTransactionResponse {
    const NAME: &'static str = "RequestStopTransactionResponse";
    const ACTION: Action = Action::RequestStopTransaction;

    type Fields = RequestStopTransactionResponseFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("status", fields.status)
            .map(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
            .and_then(|msg| msg.with_status_info(fields.status_info))
    }
}

impl Confirmation for RequestStopTransactionResponse {}

impl fmt::Display for RequestStopTransactionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("status", &self.status)
            .opt_field("statusInfo", self.status_info.as_ref())
            .finish(self.validate())
    }
}
