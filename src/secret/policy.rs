//! Redaction policies for secret containers.
//!
//! A policy answers exactly one question at serialization time: should this
//! secret be written in cleartext? Policies never affect `Display`/`Debug`
//! output, which always redacts.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A cheaply cloneable handle to one mutable cleartext flag.
///
/// Every clone refers to the same underlying flag, so a group of secrets
/// bound to clones of one handle is revealed or redacted by a single
/// [`SharedFlag::set_cleartext`] call.
///
/// Loads and stores use relaxed atomic ordering: each individual read and
/// write is well-defined, but no ordering is guaranteed between a toggle on
/// one thread and a read on another. Callers that need a toggle to be
/// observed before a specific serialization must synchronize externally.
#[derive(Clone, Debug, Default)]
pub struct SharedFlag {
    cleartext: Arc<AtomicBool>,
}

impl SharedFlag {
    /// Creates a new flag group seeded with the given cleartext state.
    #[must_use]
    pub fn new(cleartext: bool) -> Self {
        Self {
            cleartext: Arc::new(AtomicBool::new(cleartext)),
        }
    }

    /// Returns the current cleartext state.
    #[must_use]
    pub fn is_cleartext(&self) -> bool {
        self.cleartext.load(Ordering::Relaxed)
    }

    /// Sets the cleartext state, observed by every clone of this handle.
    ///
    /// This is the only mutator in the crate.
    pub fn set_cleartext(&self, cleartext: bool) {
        self.cleartext.store(cleartext, Ordering::Relaxed);
    }

    /// Returns `true` if `other` refers to the same underlying flag.
    #[must_use]
    pub fn same_group(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cleartext, &other.cleartext)
    }
}

/// Decides whether a secret serializes in cleartext.
///
/// Two variants:
/// - [`RedactionPolicy::Fixed`]: the answer is decided at construction and
///   never changes. Cloning produces an independent copy.
/// - [`RedactionPolicy::Shared`]: the answer is read from a [`SharedFlag`]
///   at call time. Cloning shares the flag, so clones stay in the same group.
///
/// The default policy is `Fixed(false)`: redact on serialize. It is an
/// ordinary value, not ambient global state; callers that want a different
/// default pass one explicitly.
#[derive(Clone, Debug)]
pub enum RedactionPolicy {
    /// Cleartext decision made once at construction.
    Fixed(bool),
    /// Cleartext decision read from a shared mutable flag at call time.
    Shared(SharedFlag),
}

impl RedactionPolicy {
    /// Constructs an immutable policy with the given cleartext state.
    #[must_use]
    pub fn fixed(cleartext: bool) -> Self {
        Self::Fixed(cleartext)
    }

    /// Constructs a policy backed by a fresh shared flag group.
    ///
    /// Clone the returned policy (or the [`SharedFlag`] inside it) onto other
    /// secrets to make them all follow the same toggle.
    #[must_use]
    pub fn shared(cleartext: bool) -> Self {
        Self::Shared(SharedFlag::new(cleartext))
    }

    /// Returns whether serialization should currently emit cleartext.
    ///
    /// Total and side-effect free; safe to call from multiple readers.
    #[must_use]
    pub fn is_cleartext(&self) -> bool {
        match self {
            Self::Fixed(cleartext) => *cleartext,
            Self::Shared(flag) => flag.is_cleartext(),
        }
    }

    /// Snapshots the current state into an independent [`RedactionPolicy::Fixed`].
    ///
    /// For a shared policy this breaks the sharing relation: later toggles of
    /// the original flag no longer affect the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self::Fixed(self.is_cleartext())
    }

    /// Converts into a shared policy seeded with the current state.
    ///
    /// A fixed policy becomes a fresh single-member group; a shared policy is
    /// returned unchanged, keeping its existing group.
    #[must_use]
    pub fn into_shared(self) -> Self {
        match self {
            Self::Fixed(cleartext) => Self::shared(cleartext),
            shared @ Self::Shared(_) => shared,
        }
    }
}

impl Default for RedactionPolicy {
    /// The process-wide default: redact on serialize.
    fn default() -> Self {
        Self::Fixed(false)
    }
}

impl From<SharedFlag> for RedactionPolicy {
    fn from(flag: SharedFlag) -> Self {
        Self::Shared(flag)
    }
}
