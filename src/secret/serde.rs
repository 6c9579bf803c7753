//! Policy-gated `serde` implementations for [`Secret`].
//!
//! The container is invisible on the wire: a `Secret<T>` field serializes to
//! exactly the node a bare `T` would produce at the same position, with no
//! wrapper and no type tag. Which value gets written — the true one or the
//! placeholder — is decided by the attached policy at the moment of the
//! `serialize` call.
//!
//! Deserialization is policy-agnostic. Secret-ness is never part of the wire
//! format, so decoding reads a plain `T` into the secret value, leaves the
//! placeholder at the zero value, and binds the default (redacting) policy.
//! The only failure mode is the deserializer's own error for a malformed or
//! type-mismatched node; it is propagated untouched.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::container::Secret;

impl<T: Serialize> Serialize for Secret<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.policy().is_cleartext() {
            self.expose_secret().serialize(serializer)
        } else {
            self.redacted().serialize(serializer)
        }
    }
}

impl<'de, T> Deserialize<'de> for Secret<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::{RedactionPolicy, Secret};

    #[test]
    fn serializes_the_placeholder_by_default() {
        let secret = Secret::with_placeholder("hunter2".to_string(), "REDACTED".to_string());
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"REDACTED\"");
    }

    #[test]
    fn serializes_cleartext_when_the_policy_allows() {
        let secret = Secret::new("hunter2".to_string()).with_policy(RedactionPolicy::fixed(true));
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"hunter2\"");
    }

    #[test]
    fn deserializes_a_bare_node_into_the_secret_value() {
        let secret: Secret<String> = serde_json::from_str("\"YT\"").unwrap();
        assert_eq!(secret.expose_secret(), "YT");
        assert_eq!(secret.redacted(), "");
        assert!(!secret.policy().is_cleartext());
    }

    #[test]
    fn deserialization_fails_on_a_type_mismatch() {
        let result: Result<Secret<String>, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}
