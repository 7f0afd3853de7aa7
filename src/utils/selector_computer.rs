use alloy::{
    hex,
    primitives::{FixedBytes, Keccak256},
};

/// Derives 4-byte selectors from Solidity declaration signatures, the same
/// derivation solc applies to function and custom error declarations.
#[derive(Default)]
pub struct SelectorComputer {}

impl SelectorComputer {
    /// Full Keccak-256 digest of the signature's UTF-8 bytes.
    pub fn compute_digest(&self, signature: &str) -> FixedBytes<32> {
        let mut hasher = Keccak256::new();
        hasher.update(signature.as_bytes());
        hasher.finalize()
    }

    /// Selector as a `0x`-prefixed string of 8 lowercase hex digits.
    pub fn compute_selector(&self, signature: &str) -> String {
        let digest = self.compute_digest(signature);
        format!("0x{}", hex::encode(&digest[..4]))
    }
}
