//! Human-readable representation of message objects
//!
//! Renders `TypeName{field=value, ..., isValid=bool}`. Absent optional
//! values render as `null`; fields keep declaration order so the output is
//! deterministic.

use std::fmt;

/// Field-by-field `Display` builder
pub struct Repr<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> Repr<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        let result = write!(f, "{}{{", name);
        Self {
            f,
            result,
            has_fields: false,
        }
    }

    pub fn field(mut self, name: &str, value: &dyn fmt::Display) -> Self {
        if self.result.is_ok() {
            let sep = if self.has_fields { ", " } else { "" };
            self.result = write!(self.f, "{}{}={}", sep, name, value);
            self.has_fields = true;
        }
        self
    }

    pub fn opt_field<T: fmt::Display>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self.field(name, &"null"),
        }
    }

    /// Close the representation with the current validity
    pub fn finish(self, valid: bool) -> fmt::Result {
        self.field("isValid", &valid).finish_plain()
    }

    /// Close without a validity marker (for plain enums or values)
    pub fn finish_plain(self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}
