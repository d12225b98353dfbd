use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::error::BatchDistributorError;
use crate::utils::ValueLedger;

/// Native vault PDA paying lamports through the system program.
pub struct NativeLedger<'a, 'info> {
    pub vault: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    /// Vault PDA seeds: ["native_vault", distributor_key, bump]
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'info> ValueLedger<AccountInfo<'info>> for NativeLedger<'_, 'info> {
    fn holding_balance(&self) -> u64 {
        self.vault.lamports()
    }

    fn check_recipient(&self, recipient: &AccountInfo<'info>) -> Result<()> {
        require!(recipient.is_writable, BatchDistributorError::InvalidRecipient);
        require_keys_neq!(
            recipient.key(),
            self.vault.key(),
            BatchDistributorError::InvalidRecipient
        );
        Ok(())
    }

    fn transfer(&mut self, recipient: &AccountInfo<'info>, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: recipient.clone(),
        };

        transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                cpi_accounts,
                self.signer_seeds,
            ),
            amount,
        )
    }
}
