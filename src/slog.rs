//! Adapter for emitting secrets through `slog`.
//!
//! This module connects [`Secret`] to `slog` by implementing `slog::Value`
//! for containers whose inner type is `Display`able.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the redaction placeholder, never
//!   the true value. Log sinks are uncontrolled, so the attached policy is
//!   deliberately not consulted on this path — the same rule as `Display`.
//!
//! It does not configure `slog` or define redaction policy.

use std::fmt;

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::Secret;

impl<T: fmt::Display> SlogValue for Secret<T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{self}"))
    }
}
