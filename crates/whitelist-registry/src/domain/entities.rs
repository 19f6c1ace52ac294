//! # Domain Entities for the Whitelist Registry
//!
//! Core data structures.
//!
//! ## Type Decisions
//!
//! - Identities and storage addresses are 32-byte values. Registries,
//!   wallets, and derived record slots all live in the same address space,
//!   so one width serves every key.
//! - `deposit: u128` - Deposits are denominated in base units of whatever
//!   funding asset backs storage allocation. u128 covers all practical
//!   ranges while keeping arithmetic simple.

use serde::{Deserialize, Serialize};

/// Identity of a registry; doubles as the storage address of its config.
pub type RegistryId = [u8; 32];
/// Identity of a wallet (principal).
pub type WalletId = [u8; 32];
/// Location of a stored record in the arena.
pub type StorageAddress = [u8; 32];
/// Key in the deposit ledger. Both wallet identities and storage
/// addresses hold balances, so the ledger is keyed by the shared width.
pub type AccountId = [u8; 32];

/// The all-zero address is reserved: derivation never lands on it and
/// no identity may use it.
pub const RESERVED_ADDRESS: StorageAddress = [0u8; 32];

/// Per-registry configuration record. One per registry, created once,
/// never deleted.
///
/// The registry's own id is the storage address of this record, stable
/// for its lifetime. `authority` is the sole principal permitted to
/// mutate the registry; it is never null once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistConfig {
    /// Current holder of mutation rights over this registry.
    pub authority: WalletId,
    /// Number of live membership records under this registry. Kept in
    /// lockstep with record allocation: incremented per add, decremented
    /// per remove, with checked arithmetic.
    pub member_count: u64,
}

impl WhitelistConfig {
    /// Fresh config with no members.
    pub fn new(authority: WalletId) -> Self {
        Self {
            authority,
            member_count: 0,
        }
    }
}

/// Membership record. Exists at `derive(registry_id, wallet_id)` iff the
/// wallet is currently whitelisted under the registry.
///
/// The record is a marker: its presence is the membership predicate, not
/// any flag inside it. The stored `bump` lets removal reconstruct the
/// exact address without re-running the derivation search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    /// The whitelisted wallet this record attests.
    pub owner_wallet: WalletId,
    /// Back-reference to the owning registry. A lookup key, not an
    /// ownership pointer; already encoded in the derived address.
    pub registry_id: RegistryId,
    /// Disambiguation nonce consumed by the address derivation.
    pub bump: u8,
    /// Storage deposit held by this record, refunded on destruction.
    pub deposit: u128,
}

/// Deposit amounts charged for storage allocation.
#[derive(Clone, Debug)]
pub struct RegistryPolicy {
    /// Deposit consumed when a `WhitelistConfig` is allocated.
    pub config_deposit: u128,
    /// Deposit consumed per `WalletRecord`, refunded on removal.
    pub record_deposit: u128,
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        Self {
            config_deposit: 2_000,
            record_deposit: 1_000,
        }
    }
}
