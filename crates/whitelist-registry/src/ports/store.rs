use crate::domain::{RegistryError, StorageAddress, WalletRecord, WhitelistConfig};

/// Arena storage abstraction, keyed by derived address.
///
/// Insertions are occupancy-checked inside the store so that two calls
/// racing on the same address resolve deterministically: the first commit
/// wins, the loser observes `AlreadyExists`.
pub trait RegistryStore: Send + Sync {
    /// Allocate a config record. Fails with `AlreadyExists` if any record
    /// occupies the address.
    fn insert_config(
        &self,
        address: StorageAddress,
        config: WhitelistConfig,
    ) -> Result<(), RegistryError>;

    fn get_config(&self, address: &StorageAddress)
        -> Result<Option<WhitelistConfig>, RegistryError>;

    /// Overwrite an existing config in place. Fails with `RegistryNotFound`
    /// if no config lives at the address.
    fn update_config(
        &self,
        address: &StorageAddress,
        config: WhitelistConfig,
    ) -> Result<(), RegistryError>;

    /// Allocate a wallet record. Fails with `AlreadyExists` if any record
    /// occupies the address.
    fn insert_record(
        &self,
        address: StorageAddress,
        record: WalletRecord,
    ) -> Result<(), RegistryError>;

    fn get_record(&self, address: &StorageAddress) -> Result<Option<WalletRecord>, RegistryError>;

    /// Destroy a wallet record, returning it if it existed.
    fn remove_record(
        &self,
        address: &StorageAddress,
    ) -> Result<Option<WalletRecord>, RegistryError>;
}
