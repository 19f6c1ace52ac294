//! # Integration Test Flows
//!
//! Full registry lifecycle exercised through the public service API with
//! the in-memory adapters: creation, membership churn across several
//! wallets, authority handover, and deposit conservation across the whole
//! run.

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use whitelist_registry::adapters::{InMemoryDepositLedger, InMemoryRegistryStore};
    use whitelist_registry::domain::{
        RegistryError, RegistryId, WalletId, WhitelistService,
    };
    use whitelist_registry::ports::{DepositLedger, RegistryStore};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const STARTING_BALANCE: u128 = 1_000_000;

    struct Harness {
        service: WhitelistService<InMemoryRegistryStore, InMemoryDepositLedger>,
        rng: StdRng,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                service: WhitelistService::new(
                    InMemoryRegistryStore::new(),
                    InMemoryDepositLedger::new(),
                ),
                rng: StdRng::seed_from_u64(0x5EED),
            }
        }

        /// Generate a fresh identity and fund it, like an airdropped keypair.
        fn funded_identity(&mut self) -> WalletId {
            let id: WalletId = self.rng.gen();
            self.service.ledger().credit(&id, STARTING_BALANCE).unwrap();
            id
        }

        /// Generate a fresh unfunded wallet identity.
        fn wallet(&mut self) -> WalletId {
            self.rng.gen()
        }
    }

    // =============================================================================
    // END-TO-END LIFECYCLE
    // =============================================================================

    /// The full observed lifecycle: create with authority A1, add W1..W5,
    /// spot-check membership, remove W2..W4, transfer authority to A2,
    /// verify A1 is locked out and A2 operates.
    #[test]
    fn test_full_registry_lifecycle() {
        let mut h = Harness::new();
        let a1 = h.funded_identity();
        let a2 = h.funded_identity();
        let registry: RegistryId = h.rng.gen();

        // Create a whitelist
        h.service.create_whitelist(registry, a1, &a1).unwrap();

        // Add five wallets
        let wallets: Vec<WalletId> = (0..5).map(|_| h.wallet()).collect();
        for wallet in &wallets {
            h.service.add_wallet(&registry, *wallet, &a1, &a1).unwrap();
        }

        // W1 is a member
        assert!(h.service.check_wallet(&registry, &wallets[0]).is_ok());

        // Remove W2, W3, W4
        for wallet in &wallets[1..4] {
            h.service.remove_wallet(&registry, wallet, &a1, &a1).unwrap();
        }

        // W2 is gone; W1 and W5 remain
        let err = h.service.check_wallet(&registry, &wallets[1]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotWhitelisted {
                wallet: wallets[1]
            }
        );
        assert!(h.service.check_wallet(&registry, &wallets[0]).is_ok());
        assert!(h.service.check_wallet(&registry, &wallets[4]).is_ok());

        // Hand authority to A2
        h.service.set_authority(&registry, &a1, a2).unwrap();

        // A1 lost its rights
        let w6 = h.wallet();
        let err = h.service.add_wallet(&registry, w6, &a1, &a1).unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized { signer: a1 });

        // A2 holds them
        h.service.add_wallet(&registry, w6, &a2, &a2).unwrap();
        assert!(h.service.check_wallet(&registry, &w6).is_ok());

        // Six added, three removed: the counter saw all of it
        let config = h.service.store().get_config(&registry).unwrap().unwrap();
        assert_eq!(config.member_count, 3);
    }

    /// Deposits are conserved: everything a payer spends sits either at a
    /// live record address or has been refunded; full churn restores the
    /// refund recipient side exactly.
    #[test]
    fn test_deposit_conservation_across_churn() {
        let mut h = Harness::new();
        let authority = h.funded_identity();
        let registry: RegistryId = h.rng.gen();

        h.service.create_whitelist(registry, authority, &authority).unwrap();
        let after_create = h.service.ledger().balance_of(&authority).unwrap();

        let wallets: Vec<WalletId> = (0..8).map(|_| h.wallet()).collect();
        for wallet in &wallets {
            h.service
                .add_wallet(&registry, *wallet, &authority, &authority)
                .unwrap();
        }
        for wallet in &wallets {
            h.service
                .remove_wallet(&registry, wallet, &authority, &authority)
                .unwrap();
        }

        // Every record deposit came back; only the config deposit stays locked
        assert_eq!(
            h.service.ledger().balance_of(&authority).unwrap(),
            after_create
        );
        assert_eq!(
            after_create,
            STARTING_BALANCE - h.service.policy().config_deposit
        );
    }

    /// A refund can be directed to a party that never paid a fee.
    #[test]
    fn test_refund_to_third_party() {
        let mut h = Harness::new();
        let authority = h.funded_identity();
        let treasury = h.wallet();
        let registry: RegistryId = h.rng.gen();
        let wallet = h.wallet();

        h.service.create_whitelist(registry, authority, &authority).unwrap();
        h.service
            .add_wallet(&registry, wallet, &authority, &authority)
            .unwrap();
        h.service
            .remove_wallet(&registry, &wallet, &authority, &treasury)
            .unwrap();

        assert_eq!(
            h.service.ledger().balance_of(&treasury).unwrap(),
            h.service.policy().record_deposit
        );
    }

    /// Two registries over the same wallet population do not interact:
    /// separate authorities, separate membership.
    #[test]
    fn test_concurrent_registries_are_isolated() {
        let mut h = Harness::new();
        let a1 = h.funded_identity();
        let a2 = h.funded_identity();
        let r1: RegistryId = h.rng.gen();
        let r2: RegistryId = h.rng.gen();
        let wallet = h.wallet();

        h.service.create_whitelist(r1, a1, &a1).unwrap();
        h.service.create_whitelist(r2, a2, &a2).unwrap();

        h.service.add_wallet(&r1, wallet, &a1, &a1).unwrap();

        assert!(h.service.is_whitelisted(&r1, &wallet).unwrap());
        assert!(!h.service.is_whitelisted(&r2, &wallet).unwrap());

        // Cross-registry authority does not carry over
        let err = h.service.add_wallet(&r2, wallet, &a1, &a1).unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized { signer: a1 });
    }

    /// Losing side of an add/add race on the same derived address observes
    /// AlreadyWhitelisted and changes nothing.
    #[test]
    fn test_same_address_race_resolves_deterministically() {
        let mut h = Harness::new();
        let authority = h.funded_identity();
        let registry: RegistryId = h.rng.gen();
        let wallet = h.wallet();

        h.service.create_whitelist(registry, authority, &authority).unwrap();
        h.service
            .add_wallet(&registry, wallet, &authority, &authority)
            .unwrap();
        let spent = h.service.ledger().balance_of(&authority).unwrap();

        let err = h
            .service
            .add_wallet(&registry, wallet, &authority, &authority)
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyWhitelisted { wallet });
        assert_eq!(h.service.ledger().balance_of(&authority).unwrap(), spent);
    }

    /// Every mutating operation under a stale authority fails and leaves
    /// state untouched; the same calls under the live authority succeed.
    #[test]
    fn test_authority_handover_is_immediate_and_total() {
        let mut h = Harness::new();
        let a1 = h.funded_identity();
        let a2 = h.funded_identity();
        let registry: RegistryId = h.rng.gen();
        let member = h.wallet();

        h.service.create_whitelist(registry, a1, &a1).unwrap();
        h.service.add_wallet(&registry, member, &a1, &a1).unwrap();
        h.service.set_authority(&registry, &a1, a2).unwrap();

        // Stale authority: every mutation rejected
        let straggler = h.wallet();
        assert!(h
            .service
            .add_wallet(&registry, straggler, &a1, &a1)
            .is_err());
        assert!(h
            .service
            .remove_wallet(&registry, &member, &a1, &a1)
            .is_err());
        assert!(h.service.set_authority(&registry, &a1, a1).is_err());

        // Membership untouched by the rejected calls
        assert!(h.service.check_wallet(&registry, &member).is_ok());

        // Live authority: the same removal goes through
        h.service.remove_wallet(&registry, &member, &a2, &a2).unwrap();
        assert!(!h.service.is_whitelisted(&registry, &member).unwrap());
    }
}
