//! # Event Payloads for the Whitelist Registry
//!
//! Each successful mutation returns one of these payloads so callers and
//! external observers can react without re-reading the store.
//!
//! - `WhitelistCreatedPayload`: from create_whitelist
//! - `WalletAddedPayload`: from add_wallet
//! - `WalletRemovedPayload`: from remove_wallet
//! - `AuthorityTransferredPayload`: from set_authority

pub mod payloads;

pub use payloads::*;
