use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{controlled_balance, BatchPlan, TokenLedger};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for token batches
 *
 * Shared by `distribute_token` and `distribute_token_equal`. Recipients are
 * passed as writable remaining accounts holding `token_mint`, in payout order.
 *
 * The source token account must be controlled by the distributor PDA:
 * - owned by it (tokens deposited with the distributor), or
 * - delegated to it with an approval covering the batch
 *
 * Access Control: Only the owner can distribute
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DistributeToken<'info> {
    /// The distributor running the batch
    /// - Signs token transfers as owner or delegate of the source
    pub distributor: Account<'info, Distributor>,

    /// The owner of the distributor
    /// - Must match the owner stored in the distributor state
    #[account(
        constraint = distributor.is_owner(&owner.key()) @ BatchDistributorError::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Token account paying the batch
    #[account(
        mut,
        token::token_program = token_program,
        constraint = source_token_account.mint == token_mint.key() @ BatchDistributorError::TokenMintMismatch
    )]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Transfers `amounts[i]` tokens to the i-th remaining account
 *
 * @param ctx - Account context; remaining accounts are recipient token accounts
 * @param amounts - Tokens per recipient, same length as the recipient list
 */
pub fn handle_distribute_token<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
    amounts: Vec<u64>,
) -> Result<()> {
    let plan = BatchPlan::variable(ctx.remaining_accounts, &amounts)?;
    run_token_batch(&ctx, &plan)
}

/**
 * Transfers `amount` tokens to every remaining account
 *
 * @param ctx - Account context; remaining accounts are recipient token accounts
 * @param amount - Tokens per recipient
 */
pub fn handle_distribute_token_equal<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
    amount: u64,
) -> Result<()> {
    let plan = BatchPlan::equal(ctx.remaining_accounts, amount)?;
    run_token_batch(&ctx, &plan)
}

fn run_token_batch<'info>(
    ctx: &Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
    plan: &BatchPlan<'_, AccountInfo<'info>>,
) -> Result<()> {
    let distributor = &ctx.accounts.distributor;
    let distributor_key = distributor.key();
    let source = &ctx.accounts.source_token_account;
    let source_state: &TokenAccount = source;

    let delegate = match &source_state.delegate {
        COption::Some(delegate) => Some(delegate),
        COption::None => None,
    };
    let available = controlled_balance(
        &source_state.owner,
        delegate,
        source_state.amount,
        source_state.delegated_amount,
        &distributor_key,
    )
    .ok_or(BatchDistributorError::SourceNotControlled)?;

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        distributor.owner.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor.bump],
    ];
    let signer = &[&seeds[..]];

    let mut ledger = TokenLedger {
        authority: distributor.to_account_info(),
        source: source.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        available,
        signer_seeds: signer,
    };

    plan.execute(&mut ledger)?;

    emit_cpi!(TokenDistributed {
        distributor: distributor_key,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        source: source.key(),
        recipient_count: plan.recipient_count()?,
        total_amount: plan.total(),
    });

    Ok(())
}
