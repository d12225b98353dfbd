use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for creating a new batch distributor
 *
 * This instruction initializes a new distributor with automatic nonce management:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a distributor PDA with auto-incremented nonce number
 * - Records the signer as the immutable owner
 * - Derives the native vault PDA that depositors fund with lamports
 *
 * The native vault is not created here; it comes into existence with the
 * first system transfer into it.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    /// - Checked before the distributor seeds below consume the pending nonce
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump,
        constraint = owner_nonce.pending_nonce().is_some() @ BatchDistributorError::ArithmeticOverflow
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The distributor account (PDA)
    /// - Derived from: ["distributor", owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            owner.key().as_ref(),
            owner_nonce.pending_nonce().unwrap_or_default().to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Native vault (PDA) holding lamports for native batches
    /// - Derived from: ["native_vault", distributor_key]
    #[account(
        seeds = [NATIVE_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// The owner of the distributor
    /// - Becomes the only key allowed to run batches
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new batch distributor with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_create_distributor(ctx: Context<CreateDistributor>) -> Result<()> {
    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    let current_nonce = owner_nonce
        .next_nonce()
        .ok_or(BatchDistributorError::ArithmeticOverflow)?;

    distributor.bump = ctx.bumps.distributor;
    distributor.native_vault_bump = ctx.bumps.native_vault;
    distributor.nonce = current_nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.native_vault = ctx.accounts.native_vault.key();

    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        native_vault: ctx.accounts.native_vault.key(),
    });

    Ok(())
}
