//! # whitelist-registry
//!
//! Permissioned wallet whitelist registry.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Authoritative membership state per registry
//! - **Existence-Based Membership**: A `WalletRecord` at the derived address
//!   *is* the membership predicate; there is no list to scan
//! - **Capability Authorization**: One mutable authority per registry gates
//!   every mutation
//!
//! ## Operation Flow
//!
//! ```text
//! [Caller] ──create/add/remove/check/set_authority──→ [WhitelistService]
//!                                                          │
//!                           ┌──────────────┬───────────────┤
//!                           ↓              ↓               ↓
//!                   [Address Derivation] [Guard]    [RegistryStore]
//!                    (keccak + bump)   (authority ==)  (arena by address)
//! ```
//!
//! Every call resolves the target storage address deterministically,
//! validates authorization for mutations, then reads/writes the store as
//! one indivisible unit. Concurrent calls are serialized by the storage
//! layer; a race on the same derived address resolves first-committed-wins.

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use events::*;
pub use ports::*;
