use anchor_lang::prelude::*;

/**
 * Main distributor state account
 *
 * Stores the single owner allowed to run batches and the bumps needed to
 * sign for the distributor PDA (token authority) and its native vault.
 *
 * Derivation: ["distributor", owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor instruction
 * 2. Never modified afterwards; ownership cannot be transferred
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing token transfers
    pub bump: u8,

    /// Bump seed of the native vault PDA
    /// - Saved to avoid recomputation when signing lamport transfers
    pub native_vault_bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple distributors for the same owner
    pub nonce: u32,

    /// Owner of the distributor
    /// - The only key allowed to run any distribution instruction
    pub owner: Pubkey,

    /// Native vault account address
    /// - System-owned PDA holding lamports to distribute
    /// - Derived from: ["native_vault", distributor_key]
    pub native_vault: Pubkey,
}

impl Distributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();

    /// Access-control guard shared by every distribution instruction.
    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }
}
