use anchor_lang::prelude::*;

declare_id!("8zDFUjXSkS8XWAu3BWzqwy2oW1PKwFjgBpVPcmsFnabi");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Batch Distributor Program
 *
 * A Solana program that pays many recipients from one holding account in a
 * single all-or-nothing instruction.
 *
 * Key Features:
 * - Native lamport batches paid from a per-distributor vault PDA
 * - Token batches paid from a token account owned by or delegated to the distributor PDA
 * - Variable amounts (one per recipient) or one equal amount for everyone
 * - Single immutable owner per distributor
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner (automatic nonce management)
 * - Distributor PDA: Stores the owner and signs token transfers
 * - Native Vault PDA: System account holding lamports to distribute
 *
 * Workflow:
 * 1. Owner creates a distributor
 * 2. Depositors fund the native vault, or the distributor's token account,
 *    or the owner approves the distributor PDA as delegate on a token account
 * 3. Owner runs batches; recipients are passed as remaining accounts
 *
 * A batch only moves what it is asked to move. Any surplus stays in the
 * holding account; there is no automatic refund.
 */
#[program]
pub mod batch_distributor {
    use super::*;

    /**
     * Creates a new batch distributor
     *
     * The signer becomes the owner. Nonce numbers are automatically assigned
     * using an owner-specific counter.
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     */
    pub fn create_distributor(ctx: Context<CreateDistributor>) -> Result<()> {
        handle_create_distributor(ctx)
    }

    /**
     * Distributes lamports, one amount per recipient
     *
     * @param ctx - Account context; remaining accounts are the recipients
     * @param amounts - Lamports per recipient, positionally paired
     *
     * Access Control: Owner only
     * Note: Fails with LengthMismatch before any transfer if lengths differ
     */
    pub fn distribute_native<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        handle_distribute_native(ctx, amounts)
    }

    /**
     * Distributes the same lamport amount to every recipient
     *
     * @param ctx - Account context; remaining accounts are the recipients
     * @param amount - Lamports per recipient
     *
     * Access Control: Owner only
     */
    pub fn distribute_native_equal<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
        amount: u64,
    ) -> Result<()> {
        handle_distribute_native_equal(ctx, amount)
    }

    /**
     * Distributes tokens, one amount per recipient
     *
     * @param ctx - Account context; remaining accounts are recipient token accounts
     * @param amounts - Tokens per recipient, positionally paired
     *
     * Access Control: Owner only
     * Note: Fails with LengthMismatch before any transfer if lengths differ
     */
    pub fn distribute_token<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        handle_distribute_token(ctx, amounts)
    }

    /**
     * Distributes the same token amount to every recipient
     *
     * @param ctx - Account context; remaining accounts are recipient token accounts
     * @param amount - Tokens per recipient
     *
     * Access Control: Owner only
     */
    pub fn distribute_token_equal<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
        amount: u64,
    ) -> Result<()> {
        handle_distribute_token_equal(ctx, amount)
    }
}
