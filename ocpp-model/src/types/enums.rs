//! Protocol enumerations
//!
//! Each enum is declared once with its wire spelling; `wire_enum!` derives the
//! serde mapping, `Display`, `FromStr` and the variant list from that table.

use crate::error::{ConstraintViolation, Violation};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire spelling
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ConstraintViolation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ConstraintViolation::new($field, &s, Violation::UnknownVariant)),
                }
            }
        }
    };
}

wire_enum! {
    /// Outcome of a DataTransfer
    DataTransferStatus as "status" {
        Accepted => "Accepted",
        Rejected => "Rejected",
        UnknownMessageId => "UnknownMessageId",
        UnknownVendorId => "UnknownVendorId",
    }
}

wire_enum! {
    /// Outcome of an UnpublishFirmware
    UnpublishFirmwareStatus as "status" {
        DownloadOngoing => "DownloadOngoing",
        NoFirmware => "NoFirmware",
        Unpublished => "Unpublished",
    }
}

wire_enum! {
    /// Outcome of a CancelReservation
    CancelReservationStatus as "status" {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// Outcome of RequestStartTransaction / RequestStopTransaction
    RequestStartStopStatus as "status" {
        Accepted => "Accepted",
        Rejected => "Rejected",
    }
}
