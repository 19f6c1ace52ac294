//! In-memory implementations of the storage and ledger ports.
//!
//! One arena per store: configs and wallet records share a single address
//! space, so occupancy checks cover both kinds. Suitable for tests and for
//! embedding; a persistent adapter would back the same traits with a real
//! transactional engine.

use crate::domain::{AccountId, RegistryError, StorageAddress, WalletRecord, WhitelistConfig};
use crate::ports::{DepositLedger, RegistryStore};
use std::collections::HashMap;
use std::sync::RwLock;

/// A record in the arena. The address keys the entry; the kind tells
/// which record type was allocated there.
#[derive(Clone, Debug)]
enum ArenaEntry {
    Config(WhitelistConfig),
    Record(WalletRecord),
}

/// In-memory implementation of RegistryStore.
pub struct InMemoryRegistryStore {
    arena: RwLock<HashMap<StorageAddress, ArenaEntry>>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self {
            arena: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn insert_config(
        &self,
        address: StorageAddress,
        config: WhitelistConfig,
    ) -> Result<(), RegistryError> {
        let mut arena = self.arena.write().map_err(|_| RegistryError::LockPoisoned)?;
        if arena.contains_key(&address) {
            return Err(RegistryError::AlreadyExists { address });
        }
        arena.insert(address, ArenaEntry::Config(config));
        Ok(())
    }

    fn get_config(
        &self,
        address: &StorageAddress,
    ) -> Result<Option<WhitelistConfig>, RegistryError> {
        let arena = self.arena.read().map_err(|_| RegistryError::LockPoisoned)?;
        match arena.get(address) {
            Some(ArenaEntry::Config(config)) => Ok(Some(config.clone())),
            _ => Ok(None),
        }
    }

    fn update_config(
        &self,
        address: &StorageAddress,
        config: WhitelistConfig,
    ) -> Result<(), RegistryError> {
        let mut arena = self.arena.write().map_err(|_| RegistryError::LockPoisoned)?;
        match arena.get_mut(address) {
            Some(ArenaEntry::Config(existing)) => {
                *existing = config;
                Ok(())
            }
            _ => Err(RegistryError::RegistryNotFound { registry: *address }),
        }
    }

    fn insert_record(
        &self,
        address: StorageAddress,
        record: WalletRecord,
    ) -> Result<(), RegistryError> {
        let mut arena = self.arena.write().map_err(|_| RegistryError::LockPoisoned)?;
        if arena.contains_key(&address) {
            return Err(RegistryError::AlreadyExists { address });
        }
        arena.insert(address, ArenaEntry::Record(record));
        Ok(())
    }

    fn get_record(&self, address: &StorageAddress) -> Result<Option<WalletRecord>, RegistryError> {
        let arena = self.arena.read().map_err(|_| RegistryError::LockPoisoned)?;
        match arena.get(address) {
            Some(ArenaEntry::Record(record)) => Ok(Some(record.clone())),
            _ => Ok(None),
        }
    }

    fn remove_record(
        &self,
        address: &StorageAddress,
    ) -> Result<Option<WalletRecord>, RegistryError> {
        let mut arena = self.arena.write().map_err(|_| RegistryError::LockPoisoned)?;
        // Configs are never deleted; only wallet records leave the arena.
        if !matches!(arena.get(address), Some(ArenaEntry::Record(_))) {
            return Ok(None);
        }
        match arena.remove(address) {
            Some(ArenaEntry::Record(record)) => Ok(Some(record)),
            _ => Ok(None),
        }
    }
}

/// In-memory implementation of DepositLedger.
pub struct InMemoryDepositLedger {
    balances: RwLock<HashMap<AccountId, u128>>,
}

impl InMemoryDepositLedger {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryDepositLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl DepositLedger for InMemoryDepositLedger {
    fn balance_of(&self, account: &AccountId) -> Result<u128, RegistryError> {
        let balances = self
            .balances
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        Ok(balances.get(account).copied().unwrap_or(0))
    }

    fn credit(&self, account: &AccountId, amount: u128) -> Result<(), RegistryError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;
        *balances.entry(*account).or_insert(0) += amount;
        Ok(())
    }

    fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), RegistryError> {
        let mut balances = self
            .balances
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;

        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(RegistryError::InsufficientFunds {
                required: amount,
                available,
            });
        }

        *balances.entry(*from).or_insert(0) -= amount;
        *balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }
}
