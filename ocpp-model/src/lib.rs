//! # OCPP Model
//!
//! Self-validating message objects for OCPP 2.0.1.
//!
//! Each protocol operation is a Request/Response pair of value types that
//! check their own fields. A message cannot be constructed with a required
//! field missing or out of bounds, a setter never commits a value that fails
//! its constraint, and `validate()` re-checks the whole object graph at any
//! time.
//!
//! ## Layers
//!
//! ```text
//! constraint   leaf predicates (length, range, presence)
//!      │
//! types        enums, CustomData, StatusInfo
//!      │
//! messages     Request / Response pairs
//!      │
//! payload      JSON payloads + correlation ids (for the dispatch layer)
//! ```
//!
//! ## Usage
//!
//! ```
//! use ocpp_model::{DataTransferResponse, DataTransferStatus, StatusInfo, Validate};
//!
//! let response = DataTransferResponse::new(DataTransferStatus::Rejected)
//!     .with_status_info(Some(StatusInfo::new("UnknownMessage").unwrap()))
//!     .unwrap();
//!
//! assert!(response.validate());
//! assert!(response.to_string().ends_with("isValid=true}"));
//! ```

pub mod error;
pub mod constraint;
pub mod repr;
pub mod value;
pub mod types;
pub mod messages;
pub mod payload;
pub mod catalog;

pub use error::{ConstraintViolation, PayloadError, Result, Violation};
pub use value::AnyValue;
pub use types::*;
pub use messages::*;
pub use payload::{Call, CallResult};
pub use catalog::{decode_dynamic, AnyMessage, Direction};
