//! The secret container and its redaction policies.
//!
//! This module ties the pieces together:
//!
//! - **`policy`**: Policy layer - when does serialization reveal cleartext
//!   ([`RedactionPolicy`], [`SharedFlag`])
//! - **`container`**: Domain layer - the [`Secret`] wrapper and its textual
//!   conversions
//! - **`serde`**: Boundary layer - the policy-gated `Serialize`/`Deserialize`
//!   implementations (behind the `serde` feature)

mod container;
mod policy;
#[cfg(feature = "serde")]
mod serde;

pub use container::Secret;
pub use policy::{RedactionPolicy, SharedFlag};
