use ethers::types::{H256, U256, U64};
use serde::{Serialize, Serializer};

/// Outcome of an on-chain payment check. Exactly one of `valid = true`
/// with no `error`, or `valid = false` with a non-empty `error`, ever
/// holds; failure paths keep whatever fields were determined before the
/// failure so callers can log useful context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerification {
    pub valid: bool,
    pub tx_hash: H256,
    pub chain_id: u64,
    pub chain_name: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    #[serde(serialize_with = "as_decimal_string")]
    pub amount_raw: U256,
    #[serde(serialize_with = "as_decimal_string")]
    pub block_number: U64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaymentVerification {
    /// An all-zero record for a transaction nothing is known about yet.
    pub fn unverified(tx_hash: H256, chain_id: u64, chain_name: String) -> Self {
        Self {
            valid: false,
            tx_hash,
            chain_id,
            chain_name,
            from: String::new(),
            to: String::new(),
            amount: "0".to_string(),
            amount_raw: U256::zero(),
            block_number: U64::zero(),
            timestamp: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub balance: String,
    #[serde(serialize_with = "as_decimal_string")]
    pub balance_raw: U256,
}

// U256/U64 serialize as hex by default; the marketplace API expects
// lossless decimal strings for amountRaw and blockNumber.
fn as_decimal_string<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_with_decimal_big_ints() {
        let record = PaymentVerification {
            valid: true,
            tx_hash: H256::zero(),
            chain_id: 8453,
            chain_name: "Base".to_string(),
            from: "0xabc".to_string(),
            to: "0xdef".to_string(),
            amount: "1.5".to_string(),
            amount_raw: U256::from(1_500_000u64),
            block_number: U64::from(12345u64),
            timestamp: Some(1_700_000_000),
            error: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["chainName"], "Base");
        assert_eq!(json["amountRaw"], "1500000");
        assert_eq!(json["blockNumber"], "12345");
        assert_eq!(json["timestamp"], 1_700_000_000);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn unverified_record_is_zeroed() {
        let record = PaymentVerification::unverified(H256::zero(), 137, "Unknown".to_string());
        assert!(!record.valid);
        assert_eq!(record.amount, "0");
        assert_eq!(record.amount_raw, U256::zero());
        assert_eq!(record.block_number, U64::zero());
        assert_eq!(record.from, "");
        assert_eq!(record.to, "");
        assert!(record.timestamp.is_none());
    }
}
