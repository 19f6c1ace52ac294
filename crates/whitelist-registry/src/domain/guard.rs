//! # Authorization Guard
//!
//! Single-field capability check: a mutation is authorized iff the
//! claimed signer equals the registry's currently stored authority.
//! There is no role hierarchy and no other path to write access.

use super::{RegistryError, WalletId, WhitelistConfig};

/// Check that `signer` holds mutation rights over the registry.
///
/// Evaluated against the authority as stored at call time, never a
/// cached value, so an authority transfer takes effect for the very
/// next call.
pub fn authorize(config: &WhitelistConfig, signer: &WalletId) -> Result<(), RegistryError> {
    if config.authority == *signer {
        Ok(())
    } else {
        Err(RegistryError::Unauthorized { signer: *signer })
    }
}
