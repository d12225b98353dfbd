use anchor_lang::prelude::*;

#[error_code]
pub enum BatchDistributorError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    Unauthorized,

    // Batch shape errors
    #[msg("Recipient and amount lists differ in length")]
    LengthMismatch,

    // Transfer errors
    #[msg("Holding balance is below the batch total")]
    InsufficientHoldingBalance,
    #[msg("Recipient account cannot receive this transfer")]
    InvalidRecipient,
    #[msg("Value transfer to a recipient failed")]
    TransferFailed,
    #[msg("Source token account is neither owned by nor delegated to the distributor")]
    SourceNotControlled,
    #[msg("Token mint does not match the source token account")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
