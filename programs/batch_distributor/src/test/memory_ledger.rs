use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::*;

use crate::error::BatchDistributorError;
use crate::utils::{BatchPlan, ValueLedger};

/// In-memory holding account with recipient balances.
///
/// Failures can be injected per recipient (refused at validation) or at a
/// chosen transfer index (refused while moving value).
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    pub holding: u64,
    pub balances: HashMap<Pubkey, u64>,
    pub rejected: HashSet<Pubkey>,
    pub fail_at: Option<usize>,
    /// Transfers attempted, including a failed one
    pub attempts: usize,
    /// Transfers that moved value
    pub transfers: usize,
}

impl MemoryLedger {
    pub fn funded(holding: u64) -> Self {
        Self {
            holding,
            ..Self::default()
        }
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    pub fn balances_of(&self, accounts: &[Pubkey]) -> Vec<u64> {
        accounts.iter().map(|account| self.balance_of(account)).collect()
    }
}

impl ValueLedger<Pubkey> for MemoryLedger {
    fn holding_balance(&self) -> u64 {
        self.holding
    }

    fn check_recipient(&self, recipient: &Pubkey) -> Result<()> {
        require!(
            !self.rejected.contains(recipient),
            BatchDistributorError::InvalidRecipient
        );
        Ok(())
    }

    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(ProgramError::Custom(1).into());
        }
        self.holding = self
            .holding
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        let balance = self.balances.entry(*recipient).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or(ProgramError::InvalidArgument)?;
        self.transfers += 1;
        Ok(())
    }
}

/// Batch shapes accepted by the four distribution instructions.
pub enum Batch<'a> {
    Variable(&'a [u64]),
    Equal(u64),
}

/// Runs one batch inside a transaction that is rolled back on any error,
/// the way the runtime treats a failed instruction.
pub fn run_batch(ledger: &mut MemoryLedger, recipients: &[Pubkey], batch: Batch) -> Result<u64> {
    let snapshot = ledger.clone();
    let result = match batch {
        Batch::Variable(amounts) => BatchPlan::variable(recipients, amounts),
        Batch::Equal(amount) => BatchPlan::equal(recipients, amount),
    }
    .and_then(|plan| {
        plan.execute(ledger)?;
        Ok(plan.total())
    });

    if result.is_err() {
        *ledger = snapshot;
    }
    result
}

pub fn recipients(count: usize) -> Vec<Pubkey> {
    (0..count).map(|_| Pubkey::new_unique()).collect()
}
