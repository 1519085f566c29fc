//! Reusable protocol types
//!
//! - `enums`: protocol enumerations with their wire spellings
//! - `custom_data`: vendor extension object
//! - `status_info`: reason attached to a response status

pub mod enums;
pub mod custom_data;
pub mod status_info;

pub use enums::*;
pub use custom_data::CustomData;
pub use status_info::StatusInfo;
