use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::solana_program::program_option::COption;
use anchor_spl::token::spl_token::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token::state::{
    Account as SplTokenAccount, AccountState, Mint as SplMint,
};

use crate::state::Distributor;

/// Backing storage for one `AccountInfo` built on the host.
#[derive(Debug, Clone)]
pub struct AccountFixture {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
    pub executable: bool,
}

impl AccountFixture {
    pub fn new(key: Pubkey, owner: Pubkey) -> Self {
        Self {
            key,
            owner,
            lamports: 0,
            data: Vec::new(),
            is_signer: false,
            is_writable: false,
            executable: false,
        }
    }

    /// Wallet owned by the system program.
    pub fn wallet() -> Self {
        Self::new(Pubkey::new_unique(), anchor_lang::system_program::ID)
    }

    /// Executable program account at `program_id`.
    pub fn program(program_id: Pubkey) -> Self {
        Self {
            executable: true,
            ..Self::new(program_id, Pubkey::default())
        }
    }

    /// Distributor state account owned by this program.
    pub fn distributor(key: Pubkey, state: &Distributor) -> Self {
        let mut data = Vec::new();
        state
            .try_serialize(&mut data)
            .expect("distributor serializes");
        Self::new(key, crate::ID).with_data(data)
    }

    /// Initialized SPL mint.
    pub fn mint(decimals: u8) -> Self {
        let state = SplMint {
            mint_authority: COption::None,
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0u8; SplMint::LEN];
        SplMint::pack(state, &mut data).expect("mint packs");
        Self::new(Pubkey::new_unique(), anchor_spl::token::ID).with_data(data)
    }

    /// Initialized SPL token account holding `amount` of `mint`.
    pub fn token_account(mint: Pubkey, holder: Pubkey, amount: u64) -> Self {
        let state = SplTokenAccount {
            mint,
            owner: holder,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; SplTokenAccount::LEN];
        SplTokenAccount::pack(state, &mut data).expect("token account packs");
        Self::new(Pubkey::new_unique(), anchor_spl::token::ID).with_data(data)
    }

    pub fn signer(mut self) -> Self {
        self.is_signer = true;
        self
    }

    pub fn writable(mut self) -> Self {
        self.is_writable = true;
        self
    }

    pub fn with_lamports(mut self, lamports: u64) -> Self {
        self.lamports = lamports;
        self
    }

    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            self.is_writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}
