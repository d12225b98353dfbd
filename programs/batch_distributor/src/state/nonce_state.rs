use anchor_lang::prelude::*;

/**
 * Nonce state account
 *
 * Tracks the nonce counter for each owner, enabling automatic
 * nonce assignment for new distributors.
 *
 * Derivation: ["owner_nonce", owner]
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Increments with each distributor creation
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();

    /// Nonce the next distributor will get, `None` once exhausted.
    pub fn pending_nonce(&self) -> Option<u32> {
        self.nonce.checked_add(1)
    }

    /// Reserves the next nonce for a new distributor.
    pub fn next_nonce(&mut self) -> Option<u32> {
        let next = self.pending_nonce()?;
        self.nonce = next;
        Some(next)
    }
}
