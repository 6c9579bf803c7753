//! Secret-tagged value containers with policy-gated JSON redaction.
//!
//! This crate separates:
//! - **Containment**: [`Secret<T>`] wraps a value and a redaction placeholder.
//! - **Policy**: [`RedactionPolicy`] decides, at read time, whether structured
//!   serialization emits the real value or the placeholder.
//!
//! Key rules:
//! - `Display` and `Debug` always render the placeholder, regardless of policy.
//!   Textual sinks (terminals, log aggregators) are treated as uncontrolled,
//!   so no policy setting can make them leak.
//! - JSON serialization consults the attached policy: redacted by default,
//!   cleartext only when the policy says so.
//! - Deserialization is policy-agnostic: the wire format carries no trace of
//!   the container, so decoding a `Secret<T>` field reads exactly what a bare
//!   `T` field would.
//! - Cleartext is reachable only through [`Secret::expose_secret`] and
//!   [`Secret::into_secret`] — both greppable by the `secret` stem, so every
//!   deliberate unwrap is visible in review.
//!
//! Policies come in two variants:
//! - `Fixed`: decided at construction, never changes.
//! - `Shared`: a cheaply cloneable handle to one mutable flag. Binding several
//!   secrets to the same [`SharedFlag`] forms a group that a single toggle
//!   reveals or redacts transactionally.
//!
//! What this crate does not do:
//! - encrypt, store, or zeroize secrets
//! - perform I/O or logging (a `slog` adapter is available behind the `slog`
//!   feature)
//! - scan output for leaks
//!
//! ## Example
//!
//! ```rust
//! use secretfields::{RedactionPolicy, Secret};
//!
//! let name = Secret::with_placeholder("Hiro Protagonist".to_string(), "<hidden>".to_string());
//!
//! // Stringification always redacts.
//! assert_eq!(name.to_string(), "<hidden>");
//!
//! // Cleartext requires the explicit escape hatch.
//! assert_eq!(name.expose_secret(), "Hiro Protagonist");
//!
//! // JSON output is gated by the policy (redacted by default).
//! # #[cfg(feature = "serde")] {
//! assert_eq!(serde_json::to_string(&name).unwrap(), "\"<hidden>\"");
//! let open = name.with_policy(RedactionPolicy::fixed(true));
//! assert_eq!(serde_json::to_string(&open).unwrap(), "\"Hiro Protagonist\"");
//! // Display still redacts.
//! assert_eq!(open.to_string(), "<hidden>");
//! # }
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod secret;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use secret::{RedactionPolicy, Secret, SharedFlag};
