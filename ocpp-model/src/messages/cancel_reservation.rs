//! CancelReservation (CSMS -> CP)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Action, Confirmation, Message, Request, Validate};
use crate::constraint::{check_composite, check_integer, optional_valid, required};
use crate::error::Result;
use crate::repr::Repr;
use crate::types::{CancelReservationStatus, CustomData, StatusInfo};

/// CancelReservation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// Id of the reservation to cancel
    reservation_id: i32,
}

impl CancelReservationRequest {
    pub fn new(reservation_id: i32) -> Self {
        Self {
            custom_data: None,
            reservation_id,
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

    pub fn reservation_id(&self) -> i32 {
        self.reservation_id
    }

    pub fn set_reservation_id(&mut self, reservation_id: i32) {
        self.reservation_id = reservation_id;
    }
}

impl Validate for CancelReservationRequest {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref())
    }
}

/// `CancelReservationRequest` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CancelReservationRequestFields {
    custom_data: Option<CustomData>,
    reservation_id: Option<i64>,
}

impl Message for CancelReservationRequest {
    const NAME: &'static str = "CancelReservationRequest";
    const ACTION: Action = Action::CancelReservation;

    type Fields = CancelReservationRequestFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("reservationId", fields.reservation_id)
            .and_then(|id| check_integer("reservationId", id))
            .map(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
    }
}

impl Request for CancelReservationRequest {
    type Response = CancelReservationResponse;
    const TRANSACTION_RELATED: bool = false;
}

impl fmt::Display for CancelReservationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("reservationId", &self.reservation_id)
            .finish(self.validate())
    }
}

/// CancelReservation response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<CustomData>,

    /// Whether the reservation was cancelled
    status: CancelReservationStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    status_info: Option<StatusInfo>,
}

impl CancelReservationResponse {
    pub fn new(status: CancelReservationStatus) -> Self {
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

    pub fn status(&self) -> CancelReservationStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CancelReservationStatus) {
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

impl Validate for CancelReservationResponse {
    fn validate(&self) -> bool {
        optional_valid(self.custom_data.as_ref()) && optional_valid(self.status_info.as_ref())
    }
}

/// `CancelReservationResponse` payload fields before any constraint is checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CancelReservationResponseFields {
    custom_data: Option<CustomData>,
    status: Option<CancelReservationStatus>,
    status_info: Option<StatusInfo>,
}

impl Message for CancelReservationResponse {
    const NAME: &'static str = "CancelReservationResponse";
    const ACTION: Action = Action::CancelReservation;

    type Fields = CancelReservationResponseFields;

    fn from_fields(fields: Self::Fields) -> Result<Self> {
        required("status", fields.status)
            .map(Self::new)
            .and_then(|msg| msg.with_custom_data(fields.custom_data))
            .and_then(|msg| msg.with_status_info(fields.status_info))
    }
}

impl Confirmation for CancelReservationResponse {}

impl fmt::Display for CancelReservationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Repr::new(f, Self::NAME)
            .opt_field("customData", self.custom_data.as_ref())
            .field("status", &self.status)
            .opt_field("statusInfo", self.status_info.as_ref())
            .finish(self.validate())
    }
}
