use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{BatchPlan, NativeLedger};
use anchor_lang::prelude::*;

/**
 * Account context for native lamport batches
 *
 * Shared by `distribute_native` and `distribute_native_equal`. Recipients
 * are passed as writable remaining accounts, in payout order.
 *
 * Access Control: Only the owner can distribute
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DistributeNative<'info> {
    /// The distributor running the batch
    pub distributor: Account<'info, Distributor>,

    /// The owner of the distributor
    /// - Must match the owner stored in the distributor state
    #[account(
        constraint = distributor.is_owner(&owner.key()) @ BatchDistributorError::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// Native vault paying the batch
    /// - Derived from: ["native_vault", distributor_key]
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump = distributor.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// System program moving the lamports
    pub system_program: Program<'info, System>,
}

/**
 * Pays `amounts[i]` lamports to the i-th remaining account
 *
 * @param ctx - Account context; remaining accounts are the recipients
 * @param amounts - Lamports per recipient, same length as the recipient list
 */
pub fn handle_distribute_native<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
    amounts: Vec<u64>,
) -> Result<()> {
    let plan = BatchPlan::variable(ctx.remaining_accounts, &amounts)?;
    run_native_batch(&ctx, &plan)
}

/**
 * Pays `amount` lamports to every remaining account
 *
 * @param ctx - Account context; remaining accounts are the recipients
 * @param amount - Lamports per recipient
 */
pub fn handle_distribute_native_equal<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
    amount: u64,
) -> Result<()> {
    let plan = BatchPlan::equal(ctx.remaining_accounts, amount)?;
    run_native_batch(&ctx, &plan)
}

fn run_native_batch<'info>(
    ctx: &Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
    plan: &BatchPlan<'_, AccountInfo<'info>>,
) -> Result<()> {
    let distributor = &ctx.accounts.distributor;
    let distributor_key = distributor.key();

    let seeds = &[
        NATIVE_VAULT_SEED.as_bytes(),
        distributor_key.as_ref(),
        &[distributor.native_vault_bump],
    ];
    let signer = &[&seeds[..]];

    let mut ledger = NativeLedger {
        vault: ctx.accounts.native_vault.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds: signer,
    };

    // Surplus lamports stay in the vault; nothing is refunded
    plan.execute(&mut ledger)?;

    emit_cpi!(NativeDistributed {
        distributor: distributor_key,
        owner: ctx.accounts.owner.key(),
        recipient_count: plan.recipient_count()?,
        total_amount: plan.total(),
        remaining_balance: ctx.accounts.native_vault.lamports(),
    });

    Ok(())
}
