use crate::domain::{RegistryId, StorageAddress, WalletId};
use serde::{Deserialize, Serialize};

/// Published after a new registry is allocated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistCreatedPayload {
    pub registry: RegistryId,
    pub authority: WalletId,
    pub deposit: u128,
}

/// Published after a wallet is whitelisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAddedPayload {
    pub registry: RegistryId,
    pub wallet: WalletId,
    pub record_address: StorageAddress,
    pub bump: u8,
    pub added_by: WalletId,
    pub deposit: u128,
}

/// Published after a wallet's membership record is destroyed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRemovedPayload {
    pub registry: RegistryId,
    pub wallet: WalletId,
    pub record_address: StorageAddress,
    pub removed_by: WalletId,
    pub refund_recipient: WalletId,
    pub refunded: u128,
}

/// Published after mutation rights move to a new authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityTransferredPayload {
    pub registry: RegistryId,
    pub previous_authority: WalletId,
    pub new_authority: WalletId,
}
