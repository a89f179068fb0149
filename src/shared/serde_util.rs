//! Custom serde helpers for oracle wire formats.

/// Serializes a `U256` as a decimal string and accepts either a decimal
/// string, a `0x`-prefixed hex string, or a plain JSON integer.
///
/// Accumulators routinely exceed `u64`, so oracles send them as strings.
pub mod u256_string {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(u64),
    }

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Str(s) => U256::from_str(s.trim())
                .map_err(|e| serde::de::Error::custom(format!("Invalid U256 '{}': {}", s, e))),
            Raw::Int(n) => Ok(U256::from(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Wrapper {
        #[serde(with = "super::u256_string")]
        value: U256,
    }

    #[test]
    fn test_u256_decimal_string() {
        let w: Wrapper = serde_json::from_str(r#"{"value":"1000000000000000000000"}"#).unwrap();
        assert_eq!(w.value, U256::from(10u128.pow(21)));
        assert_eq!(
            serde_json::to_string(&w).unwrap(),
            r#"{"value":"1000000000000000000000"}"#
        );
    }

    #[test]
    fn test_u256_hex_string() {
        let w: Wrapper = serde_json::from_str(r#"{"value":"0xff"}"#).unwrap();
        assert_eq!(w.value, U256::from(255u64));
    }

    #[test]
    fn test_u256_integer() {
        let w: Wrapper = serde_json::from_str(r#"{"value":42}"#).unwrap();
        assert_eq!(w.value, U256::from(42u64));
    }

    #[test]
    fn test_u256_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"12abc"}"#).is_err());
    }
}
