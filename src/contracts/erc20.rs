use ethers::prelude::*;
use std::str::FromStr;

// Minimal ERC-20 surface: the verifier only reads balances.
abigen!(
    Erc20,
    r#"[
        function balanceOf(address owner) view returns (uint256)
    ]"#
);

/// keccak256("Transfer(address,address,uint256)") — topic0 of every ERC-20
/// Transfer log.
pub fn transfer_event_topic() -> H256 {
    H256::from_str("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        .expect("static topic literal")
}

/// Indexed address parameters arrive left-padded to a 32-byte topic word;
/// the address is the last 20 bytes.
pub fn address_from_word(word: &H256) -> Address {
    Address::from_slice(&word.as_bytes()[12..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_32_bytes() {
        assert_eq!(transfer_event_topic().as_bytes().len(), 32);
        assert_eq!(transfer_event_topic().as_bytes()[0], 0xdd);
        assert_eq!(transfer_event_topic().as_bytes()[31], 0xef);
    }

    #[test]
    fn extracts_last_20_bytes_of_word() {
        let addr = Address::from_str("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913").unwrap();
        let word = H256::from(addr);
        assert_eq!(address_from_word(&word), addr);

        // Padding bytes must not leak into the address.
        let mut raw = [0u8; 32];
        raw[..12].copy_from_slice(&[0xff; 12]);
        raw[12..].copy_from_slice(addr.as_bytes());
        assert_eq!(address_from_word(&H256::from(raw)), addr);
    }
}
