use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::BatchDistributorError;
use crate::utils::ValueLedger;

/// PDA-signed token transfer that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
        decimals,
    )
}

/// Balance of a token account that `authority` is allowed to move.
///
/// The token-account owner can move the full balance; an approved delegate
/// is capped by its remaining allowance. Any other key controls nothing.
pub fn controlled_balance(
    account_owner: &Pubkey,
    delegate: Option<&Pubkey>,
    amount: u64,
    delegated_amount: u64,
    authority: &Pubkey,
) -> Option<u64> {
    if account_owner == authority {
        Some(amount)
    } else if delegate == Some(authority) {
        Some(amount.min(delegated_amount))
    } else {
        None
    }
}

/// Token source account paying recipients through the token program,
/// signed by the distributor PDA as owner or delegate.
pub struct TokenLedger<'a, 'info> {
    pub authority: AccountInfo<'info>,
    pub source: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
    /// Balance the authority may move, see [`controlled_balance`]
    pub available: u64,
    /// Distributor PDA seeds: ["distributor", owner, nonce, bump]
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'info> ValueLedger<AccountInfo<'info>> for TokenLedger<'_, 'info> {
    fn holding_balance(&self) -> u64 {
        self.available
    }

    fn check_recipient(&self, recipient: &AccountInfo<'info>) -> Result<()> {
        require!(recipient.is_writable, BatchDistributorError::InvalidRecipient);
        require_keys_eq!(
            *recipient.owner,
            self.token_program.key(),
            BatchDistributorError::InvalidRecipient
        );
        require_keys_neq!(
            recipient.key(),
            self.source.key(),
            BatchDistributorError::InvalidRecipient
        );
        Ok(())
    }

    fn transfer(&mut self, recipient: &AccountInfo<'info>, amount: u64) -> Result<()> {
        transfer_token(
            self.authority.clone(),
            self.source.clone(),
            recipient.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            self.signer_seeds,
        )
    }
}
