use super::{RegistryId, StorageAddress, WalletId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unauthorized signer: {}", hex::encode(.signer))]
    Unauthorized { signer: WalletId },

    #[error("storage address already occupied: {}", hex::encode(.address))]
    AlreadyExists { address: StorageAddress },

    #[error("wallet already whitelisted: {}", hex::encode(.wallet))]
    AlreadyWhitelisted { wallet: WalletId },

    #[error("wallet not whitelisted: {}", hex::encode(.wallet))]
    NotWhitelisted { wallet: WalletId },

    #[error("registry not found: {}", hex::encode(.registry))]
    RegistryNotFound { registry: RegistryId },

    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u128, available: u128 },

    #[error("malformed identity: the reserved all-zero value is not a valid id")]
    MalformedIdentity,

    #[error("no valid bump for ({}, {})", hex::encode(.registry), hex::encode(.wallet))]
    BumpExhausted {
        registry: RegistryId,
        wallet: WalletId,
    },

    #[error("member count out of range")]
    MemberCountOverflow,

    #[error("storage lock poisoned")]
    LockPoisoned,
}
