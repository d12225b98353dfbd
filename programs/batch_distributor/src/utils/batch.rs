use anchor_lang::prelude::*;

use crate::error::BatchDistributorError;

/// A holding account that can push value to recipients of type `R`.
///
/// Implemented by the native vault (system program transfers) and by a
/// token source account (token program transfers). Tests plug in an
/// in-memory ledger.
pub trait ValueLedger<R> {
    /// Value the ledger may move out during this batch.
    fn holding_balance(&self) -> u64;

    /// Rejects a recipient before any value moves.
    fn check_recipient(&self, _recipient: &R) -> Result<()> {
        Ok(())
    }

    /// Moves `amount` from the holding account to `recipient`.
    fn transfer(&mut self, recipient: &R, amount: u64) -> Result<()>;
}

/// Per-recipient quantities of a batch.
#[derive(Debug, Clone, Copy)]
pub enum Amounts<'a> {
    /// `amounts[i]` goes to `recipients[i]`
    PerRecipient(&'a [u64]),
    /// The same quantity goes to every recipient
    Equal(u64),
}

/**
 * A validated batch of payouts
 *
 * Building a plan checks the batch shape (paired list lengths) and computes
 * the total with overflow protection; executing it runs the two phases:
 *
 * 1. Validation: holding balance covers the total and every recipient is
 *    accepted by the ledger. Nothing has moved yet.
 * 2. Transfers: one movement per recipient in list order. The first failure
 *    aborts the batch, and the runtime discards the movements already made.
 */
#[derive(Debug)]
pub struct BatchPlan<'a, R> {
    recipients: &'a [R],
    amounts: Amounts<'a>,
    total: u64,
}

impl<'a, R> BatchPlan<'a, R> {
    /// Pairs `recipients[i]` with `amounts[i]`.
    pub fn variable(recipients: &'a [R], amounts: &'a [u64]) -> Result<Self> {
        require!(
            recipients.len() == amounts.len(),
            BatchDistributorError::LengthMismatch
        );

        let total = amounts
            .iter()
            .try_fold(0u64, |acc, amount| acc.checked_add(*amount))
            .ok_or(BatchDistributorError::ArithmeticOverflow)?;

        Ok(Self {
            recipients,
            amounts: Amounts::PerRecipient(amounts),
            total,
        })
    }

    /// Pays `amount` to every recipient.
    pub fn equal(recipients: &'a [R], amount: u64) -> Result<Self> {
        let total = u64::try_from(recipients.len())
            .ok()
            .and_then(|count| count.checked_mul(amount))
            .ok_or(BatchDistributorError::ArithmeticOverflow)?;

        Ok(Self {
            recipients,
            amounts: Amounts::Equal(amount),
            total,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Recipient count as carried by events.
    pub fn recipient_count(&self) -> Result<u32> {
        u32::try_from(self.recipients.len())
            .map_err(|_| error!(BatchDistributorError::ArithmeticOverflow))
    }

    /// Payouts in list order.
    pub fn payouts(&self) -> impl Iterator<Item = (&'a R, u64)> + '_ {
        let amounts = self.amounts;
        self.recipients
            .iter()
            .enumerate()
            .map(move |(index, recipient)| {
                let amount = match amounts {
                    // Lengths were checked when the plan was built
                    Amounts::PerRecipient(list) => list[index],
                    Amounts::Equal(amount) => amount,
                };
                (recipient, amount)
            })
    }

    /// Runs the batch against `ledger`, moving exactly [`Self::total`].
    pub fn execute<L: ValueLedger<R>>(&self, ledger: &mut L) -> Result<()> {
        // ===== VALIDATION PHASE =====

        require!(
            ledger.holding_balance() >= self.total,
            BatchDistributorError::InsufficientHoldingBalance
        );

        for recipient in self.recipients {
            ledger.check_recipient(recipient)?;
        }

        // ===== TRANSFER PHASE =====

        for (recipient, amount) in self.payouts() {
            ledger
                .transfer(recipient, amount)
                .map_err(|_| error!(BatchDistributorError::TransferFailed))?;
        }

        Ok(())
    }
}
