use sha2::{Digest, Sha256};

use crate::types::WinnerPayout;

/// Hash a resolution manifest so the contest record can commit to it without
/// persisting every leg.
///
/// `manifest_hash = sha256( 0x02 || for each leg: len_u32_be || wallet_bytes || payout_u128_be )`
///
/// Legs are hashed in manifest order, so reordering winners changes the hash.
/// The wallet is hashed as the submitted string.
pub fn compute_manifest_hash(winners: &[WinnerPayout]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([0x02]);
    for leg in winners {
        let wallet = leg.wallet.as_bytes();
        hasher.update((wallet.len() as u32).to_be_bytes());
        hasher.update(wallet);
        hasher.update(leg.payout.u128().to_be_bytes());
    }
    hasher.finalize().into()
}

/// Hex-encoded [`compute_manifest_hash`].
pub fn manifest_hash_hex(winners: &[WinnerPayout]) -> String {
    hex::encode(compute_manifest_hash(winners))
}

/// Check a manifest against a stored hex hash.
pub fn verify_manifest(expected_hex: &str, winners: &[WinnerPayout]) -> bool {
    let expected = match hex::decode(expected_hex) {
        Ok(v) => v,
        Err(_) => return false,
    };
    expected.as_slice() == compute_manifest_hash(winners).as_slice()
}
