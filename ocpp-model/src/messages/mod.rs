//! OCPP 2.0.1 message catalog
//!
//! Every operation is a Request/Response pair built on the same template:
//! - required fields are constructor parameters, checked before the value exists
//! - optional fields have `set_*` (check, then commit) and consuming `with_*`
//! - `validate()` re-checks every present field, recursing into composites
//! - equality and hashing cover all fields and ignore validity
//! - `Display` renders every field plus `isValid`
//!
//! Messages own their composites; there is no `&mut` access to a nested
//! value, so a composite accepted by a setter cannot be invalidated later.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PayloadError;

pub mod cancel_reservation;
pub mod data_transfer;
pub mod heartbeat;
pub mod request_stop_transaction;
pub mod unpublish_firmware;

pub use cancel_reservation::{CancelReservationRequest, CancelReservationResponse};
pub use data_transfer::{DataTransferRequest, DataTransferResponse};
pub use heartbeat::{HeartbeatRequest, HeartbeatResponse};
pub use request_stop_transaction::{RequestStopTransactionRequest, RequestStopTransactionResponse};
pub use unpublish_firmware::{UnpublishFirmwareRequest, UnpublishFirmwareResponse};

/// `Deserialize` through `Message::from_fields`, so a payload is held to the
/// same constraints as the constructors
macro_rules! deserialize_from_fields {
    ($($name:ident),+ $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $name {
                fn deserialize<D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> std::result::Result<Self, D::Error> {
                    let fields =
                        <<$name as Message>::Fields as serde::Deserialize>::deserialize(deserializer)?;
                    <$name as Message>::from_fields(fields).map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

deserialize_from_fields!(
    HeartbeatRequest,
    HeartbeatResponse,
    UnpublishFirmwareRequest,
    UnpublishFirmwareResponse,
    CancelReservationRequest,
    CancelReservationResponse,
    RequestStopTransactionRequest,
    RequestStopTransactionResponse,
    DataTransferRequest,
    DataTransferResponse,
);

/// Side-effect-free validity check over current state
pub trait Validate {
    fn validate(&self) -> bool;
}

/// Shape shared by every request and response
pub trait Message:
    Validate + Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + fmt::Display
{
    /// Type name used in diagnostics
    const NAME: &'static str;

    /// Operation this message belongs to
    const ACTION: Action;

    /// Payload fields as they arrive, before any constraint is checked
    type Fields: DeserializeOwned;

    /// Build the message from decoded fields through the checking constructors
    fn from_fields(fields: Self::Fields) -> crate::error::Result<Self>;
}

/// Request half of an operation
pub trait Request: Message {
    type Response: Confirmation;

    /// Whether dispatch must bind this request to an active transaction
    const TRANSACTION_RELATED: bool;

    fn transaction_related(&self) -> bool {
        Self::TRANSACTION_RELATED
    }
}

/// Response (confirmation) half of an operation
pub trait Confirmation: Message {}

/// OCPP action names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // CP -> CSMS
    Heartbeat,

    // CSMS -> CP
    UnpublishFirmware,
    CancelReservation,
    RequestStopTransaction,

    // Bidirectional
    DataTransfer,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::Heartbeat,
        Action::UnpublishFirmware,
        Action::CancelReservation,
        Action::RequestStopTransaction,
        Action::DataTransfer,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::str::FromStr for Action {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Heartbeat" => Ok(Action::Heartbeat),
            "UnpublishFirmware" => Ok(Action::UnpublishFirmware),
            "CancelReservation" => Ok(Action::CancelReservation),
            "RequestStopTransaction" => Ok(Action::RequestStopTransaction),
            "DataTransfer" => Ok(Action::DataTransfer),
            _ => Err(PayloadError::UnknownAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_round_trip() {
        for action in Action::ALL {
            let parsed: Action = action.to_string().parse().unwrap();
            assert_eq!(parsed, *action);
        }
        assert!(matches!(
            "BootNotification".parse::<Action>(),
            Err(PayloadError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_transaction_related_is_per_type() {
        assert!(RequestStopTransactionRequest::TRANSACTION_RELATED);
        assert!(!UnpublishFirmwareRequest::TRANSACTION_RELATED);
        assert!(!DataTransferRequest::TRANSACTION_RELATED);
        assert!(!HeartbeatRequest::TRANSACTION_RELATED);
        assert!(!CancelReservationRequest::TRANSACTION_RELATED);
    }
}
