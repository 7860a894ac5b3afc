//! Strongly-typed identifiers for RUVDS resources.
//!
//! RUVDS addresses resources by numeric IDs. These wrappers keep server,
//! SSH key, and notification identifiers apart at compile time while
//! serializing as plain numbers on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate strongly-typed numeric identifier types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new identifier from a raw value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Generate all identifier types
id_type!(ServerId, "Virtual server identifier");
id_type!(SshKeyId, "SSH key identifier");
id_type!(NotificationId, "Notification identifier");
id_type!(DatacenterId, "Datacenter identifier");
id_type!(TariffId, "Tariff identifier (server or drive plans)");
id_type!(OsId, "Operating system image identifier");
id_type!(CurrencyId, "Billing currency identifier");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_number() {
        assert_eq!(ServerId::new(1232).to_string(), "1232");
        assert_eq!(SshKeyId::new(42).to_string(), "42");
    }

    #[test]
    fn test_from_str() {
        let id: NotificationId = "17".parse().unwrap();
        assert_eq!(id, NotificationId::new(17));
        assert!("seventeen".parse::<NotificationId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = TariffId::new(14);
        assert_eq!(serde_json::to_string(&id).unwrap(), "14");
        let back: TariffId = serde_json::from_str("14").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_conversions() {
        let id = OsId::from(52);
        assert_eq!(id.value(), 52);
        assert_eq!(u64::from(id), 52);
    }
}
