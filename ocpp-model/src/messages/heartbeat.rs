//! Heartbeat (CP -> CSMS)

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Action, Confirmation, Message, Request, Validate};
use crate::constraint::{check_composite, optional_valid, required};
use crate::error::Result;
use crate::repr::Repr;
use crate::types::CustomData;

/// Heartbeat request
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,
}

impl HeartbeatRequest {
    pub fn new() -> Self {
        Self::default()
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
}

impl Validate for HeartbeatRequest {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
    }
}

/// `HeartbeatRequest` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeartbeatRequestFields {
    custom_data: Option<CustomData>,
}

impl Message for HeartbeatRequest {
    const NAME: &'static str = "HeartbeatRequest";
    const ACTION: Action = Action::Heartbeat;

    type Fields = HeartbeatRequestFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        Self::new().with_custom_data(fields.custom_data)
    }
}

impl Request for HeartbeatRequest {
    type Response = HeartbeatResponse;
    const TRANSACTION_RELATED: bool = false;
}

impl fmt::Display for HeartbeatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .finish(self.validate())
    }
}

/// Heartbeat response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// Current time of the CSMS
    current_time: DateTime<Utc>,
}

impl HeartbeatResponse {
    pub fn new(current_time: DateTime<Utc>) -> Self {
        Self {
            custom_data: None,
            current_time,
        }
    }

    /// Response stamped with the local clock
    pub fn now() -> Self {
        Self::new(Utc::now())
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

    pub fn current_time(&self) -> DateTime<Utc> {
        self.current_time
    }

    pub fn set_current_time(&mut self, current_time: DateTime<Utc>) {
        self.current_time = current_time;
    }
}

impl Validate for HeartbeatResponse {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
    }
}

/// `HeartbeatResponse` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeartbeatResponseFields {
    custom_data: Option<CustomData>,
    current_time: Option<DateTime<Utc>>,
}

impl Message for HeartbeatResponse {
    const NAME: &'static str = "HeartbeatResponse";
    const ACTION: Action = Action::Heartbeat;

    type Fields = HeartbeatResponseFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("currentTime", fields.current_time)
            .map(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
    }
}

impl Confirmation for HeartbeatResponse {}

impl fmt::Display for HeartbeatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("currentTime", &self.current_time.to_rfc3339())
            .finish(self.validate())
    }
}
