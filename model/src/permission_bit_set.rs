use crate::Permission;
use crate::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fmt::Formatter;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionBitSet(pub u64);

impl PermissionBitSet {
    pub fn of(permissions: &[Permission]) -> PermissionBitSet {
        let mut bits = 0;
        permissions
            .iter()
            .copied()
            .for_each(|perm| bits |= perm as u64);

        PermissionBitSet(bits)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        let perm = permission as u64;
        self.0 & perm == perm
    }
}

impl Serialize for PermissionBitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

// The registry emits the bit field as a decimal string, but accepts either
// encoding on the way in. Normalize both to the string form.
impl<'de> Deserialize<'de> for PermissionBitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(PermissionBitSet(i));
        }

        if let Some(s) = value.as_str() {
            return Ok(PermissionBitSet(s.parse().map_err(Error::custom)?));
        }

        Err(Error::invalid_type(
            util::to_unexpected(value),
            &"a non-negative integer bit field, as a string or u64",
        ))
    }
}

impl fmt::Display for PermissionBitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PermissionBitSet {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PermissionBitSet(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_sums_bits() {
        let bits = PermissionBitSet::of(&[Permission::KickMembers, Permission::BanMembers]);

        assert_eq!(bits.0, 6);
        assert!(bits.has_permission(Permission::KickMembers));
        assert!(!bits.has_permission(Permission::Administrator));
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&PermissionBitSet(8)).unwrap();
        assert_eq!(json, r#""8""#);
    }

    #[test]
    fn test_deserialize_from_string_or_int() {
        let from_str: PermissionBitSet = serde_json::from_str(r#""1099511627776""#).unwrap();
        let from_int: PermissionBitSet = serde_json::from_str("1099511627776").unwrap();

        assert_eq!(from_str, from_int);
    }

    #[test]
    fn test_deserialize_rejects_invalid_encodings() {
        assert!(serde_json::from_str::<PermissionBitSet>("-5").is_err());
        assert!(serde_json::from_str::<PermissionBitSet>(r#""not a number""#).is_err());
        assert!(serde_json::from_str::<PermissionBitSet>("true").is_err());
    }
}
