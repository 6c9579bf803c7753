//! The [`Secret`] container.
//!
//! A `Secret<T>` holds the true value, a redaction placeholder, and a policy
//! binding. The true value is reachable only through the explicitly named
//! escape hatches; every other conversion path goes through redaction.

use std::fmt;

use super::policy::RedactionPolicy;

/// A value tagged as sensitive.
///
/// The container is transparent to the surrounding data shape: when
/// serialized it occupies exactly the position a bare `T` would, and its
/// content is either the true value or the placeholder depending on the
/// attached [`RedactionPolicy`]. Stringification ignores the policy and
/// always renders the placeholder.
///
/// `T` is unconstrained; secrets compose (a `Secret<U>` nested anywhere
/// inside `T` behaves independently), and aggregate records may carry as
/// many secret fields as they like, including self-referential ones.
#[derive(Clone)]
pub struct Secret<T> {
    /// The true value. Never mutated by the container; replace the whole
    /// container to change content.
    secret_value: T,
    /// The value substituted on redaction. Never mutated after construction.
    redacted_value: T,
    policy: RedactionPolicy,
}

impl<T: Default> Secret<T> {
    /// Wraps `value` as a secret with the zero value of `T` as placeholder
    /// and the default (redacting) policy.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_placeholder(value, T::default())
    }
}

impl<T> Secret<T> {
    /// Wraps `value` as a secret with an explicit redaction placeholder
    /// (e.g. `"REDACTED"`) and the default (redacting) policy.
    #[must_use]
    pub fn with_placeholder(value: T, placeholder: T) -> Self {
        Self {
            secret_value: value,
            redacted_value: placeholder,
            policy: RedactionPolicy::default(),
        }
    }

    /// Returns the true value in cleartext, bypassing all policy checks.
    ///
    /// This is the single sanctioned read path for cleartext outside of
    /// policy-gated serialization. The name is deliberately greppable so
    /// deliberate unwraps stand out in review.
    #[must_use]
    pub fn expose_secret(&self) -> &T {
        &self.secret_value
    }

    /// Consumes the container and returns the true value in cleartext.
    ///
    /// Consuming form of [`Secret::expose_secret`], with the same greppable
    /// intent.
    #[must_use]
    pub fn into_secret(self) -> T {
        self.secret_value
    }

    /// Returns the redaction placeholder.
    #[must_use]
    pub fn redacted(&self) -> &T {
        &self.redacted_value
    }

    /// Returns the currently bound policy.
    #[must_use]
    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }

    /// Rebinds this secret to `policy`.
    ///
    /// Rebinding replaces the reference, it never mutates policy internals.
    /// Other secrets are unaffected unless `policy` is a shared handle they
    /// already hold.
    pub fn bind_policy(&mut self, policy: RedactionPolicy) {
        self.policy = policy;
    }

    /// Builder-style form of [`Secret::bind_policy`].
    #[must_use]
    pub fn with_policy(mut self, policy: RedactionPolicy) -> Self {
        self.bind_policy(policy);
        self
    }
}

impl<T: Default> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// The zero value of `Secret<T>` wraps the zero value of `T`. Required for
/// secrets to compose: `Secret<Secret<T>>` needs an inner zero placeholder.
impl<T: Default> Default for Secret<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Always renders the placeholder. Textual output is an uncontrolled sink,
/// so the policy is deliberately not consulted here.
impl<T: fmt::Display> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.redacted_value, f)
    }
}

/// Always renders the placeholder, so deriving `Debug` on structs containing
/// secrets is leak-safe.
impl<T: fmt::Debug> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&self.redacted_value).finish()
    }
}

/// Compares value and placeholder; the policy binding does not participate.
impl<T: PartialEq> PartialEq for Secret<T> {
    fn eq(&self, other: &Self) -> bool {
        self.secret_value == other.secret_value && self.redacted_value == other.redacted_value
    }
}

impl<T: Eq> Eq for Secret<T> {}

#[cfg(test)]
mod tests {
    use super::{RedactionPolicy, Secret};
    use crate::SharedFlag;

    #[test]
    fn expose_secret_returns_the_wrapped_value() {
        let secret = Secret::new("Hiro Protagonist".to_string());
        assert_eq!(secret.expose_secret(), "Hiro Protagonist");
        assert_eq!(secret.into_secret(), "Hiro Protagonist");
    }

    #[test]
    fn placeholder_defaults_to_the_zero_value() {
        let text = Secret::new("password".to_string());
        assert_eq!(text.redacted(), "");

        let number = Secret::new(30_u32);
        assert_eq!(*number.redacted(), 0);
    }

    #[test]
    fn display_renders_the_placeholder() {
        let secret = Secret::with_placeholder("hunter2".to_string(), "REDACTED".to_string());
        assert_eq!(secret.to_string(), "REDACTED");
    }

    #[test]
    fn display_ignores_a_cleartext_policy() {
        let secret = Secret::with_placeholder("hunter2".to_string(), "REDACTED".to_string())
            .with_policy(RedactionPolicy::fixed(true));
        assert_eq!(secret.to_string(), "REDACTED");
    }

    #[test]
    fn debug_renders_the_placeholder() {
        let secret = Secret::new("hunter2".to_string());
        let debugged = format!("{secret:?}");
        assert!(!debugged.contains("hunter2"));
        assert_eq!(debugged, "Secret(\"\")");
    }

    #[test]
    fn rebinding_affects_only_this_instance() {
        let mut first = Secret::new(1_u32);
        let second = Secret::new(2_u32);

        first.bind_policy(RedactionPolicy::fixed(true));

        assert!(first.policy().is_cleartext());
        assert!(!second.policy().is_cleartext());
    }

    #[test]
    fn clones_of_a_shared_bound_secret_stay_in_the_group() {
        let flag = SharedFlag::new(false);
        let secret = Secret::new("s".to_string()).with_policy(flag.clone().into());
        let clone = secret.clone();

        flag.set_cleartext(true);

        assert!(secret.policy().is_cleartext());
        assert!(clone.policy().is_cleartext());
    }

    #[test]
    fn equality_ignores_the_policy_binding() {
        let plain = Secret::new("s".to_string());
        let bound = Secret::new("s".to_string()).with_policy(RedactionPolicy::fixed(true));
        assert_eq!(plain, bound);

        let other_placeholder = Secret::with_placeholder("s".to_string(), "x".to_string());
        assert_ne!(plain, other_placeholder);
    }
}
