//! # Deterministic Record Address Derivation
//!
//! Pure mapping from `(registry_id, wallet_id)` to the storage address of
//! the wallet's membership record.
//!
//! ## Algorithm
//!
//! Keccak-256 over a fixed domain prefix, the registry id, the wallet id,
//! and a one-byte bump. The bump is searched downward from 255 until the
//! candidate avoids the reserved all-zero address; in practice the first
//! candidate wins. The winning bump is persisted in the resulting
//! `WalletRecord` so removal can reconstruct the exact address without
//! re-running the search.
//!
//! Distinct `(registry, wallet)` pairs yield distinct addresses with
//! overwhelming probability; collisions would require a Keccak collision.

use super::{RegistryError, RegistryId, StorageAddress, WalletId, RESERVED_ADDRESS};
use sha3::{Digest, Keccak256};

/// Domain separation prefix for wallet record addresses.
const RECORD_DOMAIN: &[u8] = b"whitelist/wallet-record/v1";

/// Compute the candidate address for a specific bump.
///
/// Used directly when the bump is already known (stored in the record);
/// removal reconstructs the address this way instead of searching.
pub fn record_address_with_bump(
    registry: &RegistryId,
    wallet: &WalletId,
    bump: u8,
) -> StorageAddress {
    let mut hasher = Keccak256::new();
    hasher.update(RECORD_DOMAIN);
    hasher.update(registry);
    hasher.update(wallet);
    hasher.update([bump]);
    hasher.finalize().into()
}

/// Derive the storage address and bump for a wallet's membership record.
///
/// Pure and deterministic: the same `(registry, wallet)` always yields the
/// same `(address, bump)`. Fails only on malformed inputs (the reserved
/// all-zero identity) or if every bump candidate is reserved, which is
/// unreachable in practice.
pub fn derive_record_address(
    registry: &RegistryId,
    wallet: &WalletId,
) -> Result<(StorageAddress, u8), RegistryError> {
    if *registry == RESERVED_ADDRESS || *wallet == RESERVED_ADDRESS {
        return Err(RegistryError::MalformedIdentity);
    }

    for bump in (0..=255u8).rev() {
        let candidate = record_address_with_bump(registry, wallet, bump);
        if candidate != RESERVED_ADDRESS {
            return Ok((candidate, bump));
        }
    }

    Err(RegistryError::BumpExhausted {
        registry: *registry,
        wallet: *wallet,
    })
}
