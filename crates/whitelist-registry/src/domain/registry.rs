//! # Registry Operations
//!
//! The five state-transition entry points, composed from address
//! derivation, the authorization guard, and the storage/ledger ports.
//!
//! ## Atomicity
//!
//! Each operation treats its store mutation as the commit point. For
//! allocations the deposit transfer happens first and is handed back if
//! the occupancy-checked insert finds the address taken, so a lost race
//! on the same derived address surfaces as the domain error and strands
//! nothing at the address. Removal drives its not-found answer off the
//! destructive remove itself, so only the caller that actually took the
//! record out performs the refund. A rejected call therefore leaves both
//! the store and the deposit ledger exactly as it found them.

use crate::domain::{
    authorize, derive_record_address, record_address_with_bump, RegistryError, RegistryId,
    RegistryPolicy, WalletId, WalletRecord, WhitelistConfig, RESERVED_ADDRESS,
};
use crate::events::{
    AuthorityTransferredPayload, WalletAddedPayload, WalletRemovedPayload, WhitelistCreatedPayload,
};
use crate::ports::{DepositLedger, RegistryStore};
use tracing::{debug, info};

/// Whitelist registry service.
///
/// Stateless over its inputs: all registry state lives behind the store
/// port, all funding state behind the ledger port. Each registry is an
/// independently addressable instance; operations on different registries
/// never interact.
pub struct WhitelistService<S: RegistryStore, L: DepositLedger> {
    store: S,
    ledger: L,
    policy: RegistryPolicy,
}

impl<S: RegistryStore, L: DepositLedger> WhitelistService<S, L> {
    /// Create a service with default deposit amounts.
    pub fn new(store: S, ledger: L) -> Self {
        Self::with_policy(store, ledger, RegistryPolicy::default())
    }

    /// Create a service with custom deposit amounts.
    pub fn with_policy(store: S, ledger: L, policy: RegistryPolicy) -> Self {
        Self {
            store,
            ledger,
            policy,
        }
    }

    /// Deposit amounts in effect.
    pub fn policy(&self) -> &RegistryPolicy {
        &self.policy
    }

    /// The backing store, for direct reads by embedding callers.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backing deposit ledger, for funding and balance inspection.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Allocate a new registry with the given authority.
    ///
    /// The registry id is the storage address of the config record itself.
    /// The fee payer funds the allocation deposit, which stays locked at
    /// the registry address for the life of the config.
    pub fn create_whitelist(
        &self,
        registry: RegistryId,
        authority: WalletId,
        fee_payer: &WalletId,
    ) -> Result<WhitelistCreatedPayload, RegistryError> {
        if registry == RESERVED_ADDRESS || authority == RESERVED_ADDRESS {
            return Err(RegistryError::MalformedIdentity);
        }

        let deposit = self.policy.config_deposit;
        self.ledger.transfer(fee_payer, &registry, deposit)?;

        // Commit point: the occupancy-checked insert decides the race. A
        // loser takes its deposit back before reporting the collision.
        if let Err(err) = self
            .store
            .insert_config(registry, WhitelistConfig::new(authority))
        {
            self.ledger.transfer(&registry, fee_payer, deposit)?;
            return Err(err);
        }

        info!(
            registry = %hex::encode(registry),
            authority = %hex::encode(authority),
            "whitelist created"
        );

        Ok(WhitelistCreatedPayload {
            registry,
            authority,
            deposit,
        })
    }

    /// Whitelist a wallet under a registry.
    ///
    /// Requires the registry's current authority as signer. The fee payer
    /// funds the record deposit, which stays locked at the derived address
    /// until the record is removed.
    pub fn add_wallet(
        &self,
        registry: &RegistryId,
        wallet: WalletId,
        signer: &WalletId,
        fee_payer: &WalletId,
    ) -> Result<WalletAddedPayload, RegistryError> {
        let config = self.load_config(registry)?;
        authorize(&config, signer)?;

        let (record_address, bump) = derive_record_address(registry, &wallet)?;
        let member_count = config
            .member_count
            .checked_add(1)
            .ok_or(RegistryError::MemberCountOverflow)?;

        let deposit = self.policy.record_deposit;
        self.ledger.transfer(fee_payer, &record_address, deposit)?;

        // Commit point: the occupancy-checked insert decides the race. A
        // loser takes its deposit back, so nothing is stranded at the
        // derived address, and reports the membership-level error.
        if let Err(err) = self.store.insert_record(
            record_address,
            WalletRecord {
                owner_wallet: wallet,
                registry_id: *registry,
                bump,
                deposit,
            },
        ) {
            self.ledger.transfer(&record_address, fee_payer, deposit)?;
            return Err(match err {
                RegistryError::AlreadyExists { .. } => {
                    RegistryError::AlreadyWhitelisted { wallet }
                }
                other => other,
            });
        }

        self.store.update_config(
            registry,
            WhitelistConfig {
                authority: config.authority,
                member_count,
            },
        )?;

        debug!(
            registry = %hex::encode(registry),
            wallet = %hex::encode(wallet),
            bump,
            "wallet whitelisted"
        );

        Ok(WalletAddedPayload {
            registry: *registry,
            wallet,
            record_address,
            bump,
            added_by: *signer,
            deposit,
        })
    }

    /// Remove a wallet's membership record and refund its deposit.
    ///
    /// Requires the registry's current authority as signer. The refund
    /// recipient need not be the original fee payer.
    pub fn remove_wallet(
        &self,
        registry: &RegistryId,
        wallet: &WalletId,
        signer: &WalletId,
        refund_to: &WalletId,
    ) -> Result<WalletRemovedPayload, RegistryError> {
        let config = self.load_config(registry)?;
        authorize(&config, signer)?;

        let (record_address, _) = derive_record_address(registry, wallet)?;

        // Commit point: the destructive remove itself decides membership,
        // so only the caller that took the record out holds its deposit
        // claim. Anyone else observes NotWhitelisted.
        let record = self
            .store
            .remove_record(&record_address)?
            .ok_or(RegistryError::NotWhitelisted { wallet: *wallet })?;

        // The stored bump must reproduce the exact address the record
        // lived at; anything else means the arena is corrupt.
        debug_assert_eq!(
            record_address_with_bump(registry, wallet, record.bump),
            record_address
        );

        let member_count = config
            .member_count
            .checked_sub(1)
            .ok_or(RegistryError::MemberCountOverflow)?;

        self.ledger
            .transfer(&record_address, refund_to, record.deposit)?;
        self.store.update_config(
            registry,
            WhitelistConfig {
                authority: config.authority,
                member_count,
            },
        )?;

        debug!(
            registry = %hex::encode(registry),
            wallet = %hex::encode(wallet),
            refunded = record.deposit,
            "wallet removed from whitelist"
        );

        Ok(WalletRemovedPayload {
            registry: *registry,
            wallet: *wallet,
            record_address,
            removed_by: *signer,
            refund_recipient: *refund_to,
            refunded: record.deposit,
        })
    }

    /// Confirm membership of a wallet under a registry.
    ///
    /// Read-only and unpermissioned: any party may query. Absence of the
    /// record is surfaced as `NotWhitelisted`, not as a boolean, so the
    /// caller can distinguish it from other failures.
    pub fn check_wallet(
        &self,
        registry: &RegistryId,
        wallet: &WalletId,
    ) -> Result<(), RegistryError> {
        // Registry existence is checked first so a query against a
        // missing registry is not misreported as a missing wallet.
        self.load_config(registry)?;

        let (record_address, _) = derive_record_address(registry, wallet)?;
        match self.store.get_record(&record_address)? {
            Some(_) => Ok(()),
            None => Err(RegistryError::NotWhitelisted { wallet: *wallet }),
        }
    }

    /// Predicate form of `check_wallet`: folds `NotWhitelisted` into
    /// `false`, propagates every other failure.
    pub fn is_whitelisted(
        &self,
        registry: &RegistryId,
        wallet: &WalletId,
    ) -> Result<bool, RegistryError> {
        match self.check_wallet(registry, wallet) {
            Ok(()) => Ok(true),
            Err(RegistryError::NotWhitelisted { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Transfer mutation rights to a new authority.
    ///
    /// Takes effect atomically: the previous authority loses all rights
    /// the instant this returns, and the new authority gains them for the
    /// very next call.
    pub fn set_authority(
        &self,
        registry: &RegistryId,
        signer: &WalletId,
        new_authority: WalletId,
    ) -> Result<AuthorityTransferredPayload, RegistryError> {
        if new_authority == RESERVED_ADDRESS {
            return Err(RegistryError::MalformedIdentity);
        }

        let config = self.load_config(registry)?;
        authorize(&config, signer)?;

        self.store.update_config(
            registry,
            WhitelistConfig {
                authority: new_authority,
                member_count: config.member_count,
            },
        )?;

        info!(
            registry = %hex::encode(registry),
            previous = %hex::encode(config.authority),
            new = %hex::encode(new_authority),
            "authority transferred"
        );

        Ok(AuthorityTransferredPayload {
            registry: *registry,
            previous_authority: config.authority,
            new_authority,
        })
    }

    fn load_config(&self, registry: &RegistryId) -> Result<WhitelistConfig, RegistryError> {
        self.store
            .get_config(registry)?
            .ok_or(RegistryError::RegistryNotFound {
                registry: *registry,
            })
    }
}
