use crate::domain::{AccountId, RegistryError};

/// Deposit ledger abstraction.
///
/// Tracks the funding balances that back storage allocation. Wallet
/// identities hold spendable funds; storage addresses hold the deposits
/// locked by the records that live there. A deposit is exclusively owned
/// by its record and only moves again when the record is destroyed.
pub trait DepositLedger: Send + Sync {
    fn balance_of(&self, account: &AccountId) -> Result<u128, RegistryError>;

    /// Add funds to an account (funding source for tests and callers).
    fn credit(&self, account: &AccountId, amount: u128) -> Result<(), RegistryError>;

    /// Move funds between accounts. Fails with `InsufficientFunds` if the
    /// source balance does not cover `amount`; balances never go negative.
    fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), RegistryError>;
}
