use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Native vault address that must be funded before native batches
    pub native_vault: Pubkey,
}

/// Event emitted after a native lamport batch commits
#[event]
pub struct NativeDistributed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner who ran the batch
    pub owner: Pubkey,
    /// Number of recipients paid
    pub recipient_count: u32,
    /// Lamports moved out of the native vault
    pub total_amount: u64,
    /// Lamports left in the native vault
    pub remaining_balance: u64,
}

/// Event emitted after a token batch commits
#[event]
pub struct TokenDistributed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner who ran the batch
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token account the batch was paid from
    pub source: Pubkey,
    /// Number of recipients paid
    pub recipient_count: u32,
    /// Tokens moved out of the source account
    pub total_amount: u64,
}
