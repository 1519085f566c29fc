//! Run-time selection of a message type by action and direction
//!
//! Used where the concrete type is only known from the wire (action name in
//! the frame, request or response by position in the exchange).

use std::fmt;

use serde_json::Value;

use crate::error::PayloadError;
use crate::messages::*;
use crate::payload::{decode, encode};

/// Which half of an operation a payload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Request,
    Response,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Request => write!(f, "request"),
            Direction::Response => write!(f, "response"),
        }
    }
}

macro_rules! catalog {
    ($($action:ident => $request:ident, $response:ident;)+) => {
        /// Any message of the catalog
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyMessage {
            $(
                $request($request),
                $response($response),
            )+
        }

        impl AnyMessage {
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        AnyMessage::$request(_) => $request::NAME,
                        AnyMessage::$response(_) => $response::NAME,
                    )+
                }
            }

            pub fn action(&self) -> Action {
                match self {
                    $(
                        AnyMessage::$request(_) | AnyMessage::$response(_) => Action::$action,
                    )+
                }
            }

            pub fn direction(&self) -> Direction {
                match self {
                    $(
                        AnyMessage::$request(_) => Direction::Request,
                        AnyMessage::$response(_) => Direction::Response,
                    )+
                }
            }

            /// `None` for responses; the flag only exists on requests
            pub fn transaction_related(&self) -> Option<bool> {
                match self {
                    $(
                        AnyMessage::$request(m) => Some(m.transaction_related()),
                        AnyMessage::$response(_) => None,
                    )+
                }
            }

            pub fn payload(&self) -> Result<Value, PayloadError> {
                match self {
                    $(
                        AnyMessage::$request(m) => encode(m),
                        AnyMessage::$response(m) => encode(m),
                    )+
                }
            }
        }

        impl Validate for AnyMessage {
            fn validate(&self) -> bool {
                match self {
                    $(
                        AnyMessage::$request(m) => m.validate(),
                        AnyMessage::$response(m) => m.validate(),
                    )+
                }
            }
        }

        impl fmt::Display for AnyMessage {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        AnyMessage::$request(m) => fmt::Display::fmt(m, f),
                        AnyMessage::$response(m) => fmt::Display::fmt(m, f),
                    )+
                }
            }
        }

        $(
            impl From<$request> for AnyMessage {
                fn from(m: $request) -> Self {
                    AnyMessage::$request(m)
                }
            }

            impl From<$response> for AnyMessage {
                fn from(m: $response) -> Self {
                    AnyMessage::$response(m)
                }
            }
        )+

        /// Decode `payload` as the message `action`/`direction` names
        pub fn decode_dynamic(
            action: Action,
            direction: Direction,
            payload: Value,
        ) -> Result<AnyMessage, PayloadError> {
            match (action, direction) {
                $(
                    (Action::$action, Direction::Request) => {
                        decode::<$request>(payload).map(AnyMessage::$request)
                    }
                    (Action::$action, Direction::Response) => {
                        decode::<$response>(payload).map(AnyMessage::$response)
                    }
                )+
            }
        }
    };
}

catalog! {
    Heartbeat => HeartbeatRequest, HeartbeatResponse;
    UnpublishFirmware => UnpublishFirmwareRequest, UnpublishFirmwareResponse;
    CancelReservation => CancelReservationRequest, CancelReservationResponse;
    RequestStopTransaction => RequestStopTransactionRequest, RequestStopTransactionResponse;
    DataTransfer => DataTransferRequest, DataTransferResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dynamic_picks_type() {
        let msg = decode_dynamic(
            Action::DataTransfer,
            Direction::Request,
            serde_json::json!({"vendorId": "acme", "data": [1, 2]}),
        )
        .unwrap();

        assert_eq!(msg.name(), "DataTransferRequest");
        assert_eq!(msg.action(), Action::DataTransfer);
        assert_eq!(msg.direction(), Direction::Request);
        assert_eq!(msg.transaction_related(), Some(false));
        assert!(msg.validate());
    }

    #[test]
    fn test_response_has_no_transaction_flag() {
        let msg = decode_dynamic(
            Action::RequestStopTransaction,
            Direction::Response,
            serde_json::json!({"status": "Accepted"}),
        )
        .unwrap();
        assert_eq!(msg.transaction_related(), None);
        assert!(msg.to_string().starts_with("RequestStopTransactionResponse{"));
    }

    #[test]
    fn test_wrong_direction_is_rejected() {
        // A request payload is not a valid response
        let result = decode_dynamic(
            Action::UnpublishFirmware,
            Direction::Response,
            serde_json::json!({"checksum": "d41d8cd98f00b204e9800998ecf8427e"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_round_trip() {
        let original = AnyMessage::from(CancelReservationRequest::new(5));
        let payload = original.payload().unwrap();
        let decoded = decode_dynamic(original.action(), original.direction(), payload).unwrap();
        assert_eq!(decoded, original);
    }
}
