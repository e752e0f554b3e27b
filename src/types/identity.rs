//! Participant identity type
//!
//! An [`Identity`] is the opaque token that names a participant everywhere in
//! the ledger: account owners, depositors, withdrawal requesters and
//! approvers. It wraps a fixed 20-byte value (the shape of an externally
//! assigned address) and is compared bytewise; the core never interprets the
//! bytes. Authentication of the caller behind an identity is the job of the
//! layer above the engine.

use crate::types::error::LedgerError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque 20-byte participant identity
///
/// Identities are cheap to copy and totally ordered, so they can be used as
/// map keys and stored in sorted collections. The textual form is a
/// `0x`-prefixed lowercase hex string, both for display and for serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity([u8; Identity::LEN]);

impl Identity {
    /// Byte length of an identity
    pub const LEN: usize = 20;

    /// Create an identity from its raw bytes
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Identity(bytes)
    }

    /// The raw bytes of this identity
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; Identity::LEN]> for Identity {
    fn from(bytes: [u8; Identity::LEN]) -> Self {
        Identity(bytes)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Identity {
    type Err = LedgerError;

    /// Parse a `0x`-prefixed (or bare) hex string into an identity
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidIdentity`] if the string is not valid hex
    /// or does not decode to exactly [`Identity::LEN`] bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(digits).map_err(|_| LedgerError::invalid_identity(s))?;
        let bytes: [u8; Self::LEN] = decoded
            .try_into()
            .map_err(|_| LedgerError::invalid_identity(s))?;
        Ok(Identity(bytes))
    }
}

impl Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdentityVisitor;

        impl Visitor<'_> for IdentityVisitor {
            type Value = Identity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a 0x-prefixed hex string of {} bytes", Identity::LEN)
            }

            fn visit_str<E>(self, value: &str) -> Result<Identity, E>
            where
                E: de::Error,
            {
                value.parse().map_err(|_| {
                    E::invalid_value(de::Unexpected::Str(value), &self)
                })
            }
        }

        deserializer.deserialize_str(IdentityVisitor)
    }
}
