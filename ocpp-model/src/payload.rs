//! Boundary between message objects and JSON payloads
//!
//! - `encode`/`decode`: typed payload conversion; invalid messages are never
//!   encoded and every schema violation fails decoding
//! - `Call`/`CallResult`: a message paired with the correlation id the
//!   dispatch layer routes on
//!
//! Framing (`[2, id, action, payload]`) and transport are not handled here.

use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::PayloadError;
use crate::messages::{Action, Confirmation, Message, Request};

/// Encode a message payload, refusing messages that do not validate
pub fn encode<M: Message>(message: &M) -> Result<Value, PayloadError> {
    if !message.validate() {
        warn!("Refusing to encode invalid {}: {}", M::NAME, message);
        return Err(PayloadError::Invalid { kind: M::NAME });
    }

    debug!("Encoding {} payload", M::NAME);
    Ok(serde_json::to_value(message)?)
}

/// Decode a message payload
///
/// Shape errors come back as `PayloadError::Json`; a well-formed payload that
/// breaks a field constraint comes back as `PayloadError::Constraint` naming
/// the field.
pub fn decode<M: Message>(payload: Value) -> Result<M, PayloadError> {
    let fields = serde_json::from_value::<M::Fields>(payload).map_err(|e| {
        warn!("Rejected {} payload: {}", M::NAME, e);
        PayloadError::Json(e)
    })?;
    let message = M::from_fields(fields).map_err(|e| {
        warn!("Rejected {} payload: {}", M::NAME, e);
        PayloadError::Constraint(e)
    })?;

    debug!("Decoded {}", message);
    Ok(message)
}

/// Outgoing request with its correlation id
#[derive(Debug, Clone, PartialEq)]
pub struct Call<R: Request> {
    pub message_id: String,
    request: R,
}

impl<R: Request> Call<R> {
    /// Wrap a request under a fresh message id
    pub fn new(request: R) -> Result<Self, PayloadError> {
        Self::with_id(Uuid::new_v4().to_string(), request)
    }

    /// Wrap a request under a known message id
    pub fn with_id(message_id: impl Into<String>, request: R) -> Result<Self, PayloadError> {
        if !request.validate() {
            return Err(PayloadError::Invalid { kind: R::NAME });
        }
        Ok(Self {
            message_id: message_id.into(),
            request,
        })
    }

    pub fn action(&self) -> Action {
        R::ACTION
    }

    pub fn transaction_related(&self) -> bool {
        self.request.transaction_related()
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    pub fn into_request(self) -> R {
        self.request
    }

    pub fn payload(&self) -> Result<Value, PayloadError> {
        encode(&self.request)
    }

    /// Pair a response with this call's id
    pub fn respond(&self, response: R::Response) -> Result<CallResult<R::Response>, PayloadError> {
        CallResult::new(self.message_id.clone(), response)
    }
}

/// Response answering a `Call`
#[derive(Debug, Clone, PartialEq)]
pub struct CallResult<C: Confirmation> {
    pub message_id: String,
    response: C,
}

impl<C: Confirmation> CallResult<C> {
    pub fn new(message_id: impl Into<String>, response: C) -> Result<Self, PayloadError> {
        if !response.validate() {
            return Err(PayloadError::Invalid { kind: C::NAME });
        }
        Ok(Self {
            message_id: message_id.into(),
            response,
        })
    }

    /// Decode a response payload received for `message_id`
    pub fn parse(message_id: impl Into<String>, payload: Value) -> Result<Self, PayloadError> {
        let response = decode::<C>(payload)?;
        Self::new(message_id, response)
    }

    pub fn action(&self) -> Action {
        C::ACTION
    }

    pub fn response(&self) -> &C {
        &self.response
    }

    pub fn into_response(self) -> C {
        self.response
    }

    pub fn payload(&self) -> Result<Value, PayloadError> {
        encode(&self.response)
    }
}
