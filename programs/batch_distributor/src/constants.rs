use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used by the batch distributor program.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Enables automatic nonce assignment so one owner can run several distributors
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", owner, nonce]
/// - The distributor PDA is the token authority for token batches
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for the native vault PDA derivation
/// - Used in: ["native_vault", distributor_key]
/// - System-owned account holding the lamports to be distributed
/// - Funded by plain system transfers before a native batch runs
pub const NATIVE_VAULT_SEED: &str = "native_vault";
