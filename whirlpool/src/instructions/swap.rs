//! Builders for the `swap` and `swap_v2` instructions.
//!
//! Both variants trade against a single whirlpool across up to three tick
//! arrays. The v2 variant additionally threads both token programs, the two
//! mints and the memo program through the account list, which is what makes
//! it work with token-2022 pools.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::{
    codec::{self, InstructionArgs},
    errors::{DecodeError, EncodeError},
};

/// Borsh encoding of an absent remaining-accounts-info structure.
const NO_REMAINING_ACCOUNTS_INFO: u8 = 0;

/// Argument block of the base `swap` instruction.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapArgs {
    pub amount: u64,
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub amount_specified_is_input: bool,
    pub a_to_b: bool,
}

impl InstructionArgs for SwapArgs {
    const DISCRIMINATOR: [u8; 8] = [0xf8, 0xc6, 0x9e, 0x91, 0xe1, 0x75, 0x87, 0xc8];
    const DATA_SIZE: usize = 42;
}

/// Argument block of the `swap_v2` instruction.
///
/// The wire format carries one extra byte after the argument block for the
/// remaining-accounts-info structure; this crate always emits it absent and
/// rejects payloads where it is not. Supplemental accounts (e.g. transfer
/// hook accounts) are passed through the instruction's remaining accounts.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapV2Args {
    pub amount: u64,
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub amount_specified_is_input: bool,
    pub a_to_b: bool,
}

impl InstructionArgs for SwapV2Args {
    const DISCRIMINATOR: [u8; 8] = [0x2b, 0x04, 0xed, 0x0b, 0x1a, 0xc9, 0x1e, 0x62];
    const DATA_SIZE: usize = 43;

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut data = Vec::with_capacity(Self::DATA_SIZE);
        data.extend_from_slice(&Self::DISCRIMINATOR);
        self.serialize(&mut data)?;
        data.push(NO_REMAINING_ACCOUNTS_INFO);
        Ok(data)
    }

    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let payload = codec::strip_discriminator(data, Self::DISCRIMINATOR)?;
        let Some((tail, args)) = payload.split_last() else {
            return Err(DecodeError::TooShort {
                len: data.len(),
                min: Self::DATA_SIZE,
            });
        };
        if *tail != NO_REMAINING_ACCOUNTS_INFO {
            return Err(DecodeError::RemainingAccountsInfo);
        }
        codec::read_args(args)
    }
}

/// Fixed account list of the base `swap` instruction.
#[derive(Debug, Clone)]
pub struct SwapAccounts {
    pub token_program: Pubkey,
    pub token_authority: Pubkey,
    pub whirlpool: Pubkey,
    pub token_owner_account_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_owner_account_b: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_array_0: Pubkey,
    pub tick_array_1: Pubkey,
    pub tick_array_2: Pubkey,
    pub oracle: Pubkey,
}

impl SwapAccounts {
    /// Account metas in program order with the flags the program expects.
    #[must_use]
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.token_authority, true),
            AccountMeta::new(self.whirlpool, false),
            AccountMeta::new(self.token_owner_account_a, false),
            AccountMeta::new(self.token_vault_a, false),
            AccountMeta::new(self.token_owner_account_b, false),
            AccountMeta::new(self.token_vault_b, false),
            AccountMeta::new(self.tick_array_0, false),
            AccountMeta::new(self.tick_array_1, false),
            AccountMeta::new(self.tick_array_2, false),
            AccountMeta::new_readonly(self.oracle, false),
        ]
    }
}

/// Fixed account list of the `swap_v2` instruction.
#[derive(Debug, Clone)]
pub struct SwapV2Accounts {
    pub token_program_a: Pubkey,
    pub token_program_b: Pubkey,
    pub memo_program: Pubkey,
    pub token_authority: Pubkey,
    pub whirlpool: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub token_owner_account_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_owner_account_b: Pubkey,
    pub token_vault_b: Pubkey,
    pub tick_array_0: Pubkey,
    pub tick_array_1: Pubkey,
    pub tick_array_2: Pubkey,
    pub oracle: Pubkey,
}

impl SwapV2Accounts {
    /// Account metas in program order with the flags the program expects.
    #[must_use]
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.token_program_a, false),
            AccountMeta::new_readonly(self.token_program_b, false),
            AccountMeta::new_readonly(self.memo_program, false),
            AccountMeta::new_readonly(self.token_authority, true),
            AccountMeta::new(self.whirlpool, false),
            AccountMeta::new(self.token_mint_a, false),
            AccountMeta::new(self.token_mint_b, false),
            AccountMeta::new(self.token_owner_account_a, false),
            AccountMeta::new(self.token_vault_a, false),
            AccountMeta::new(self.token_owner_account_b, false),
            AccountMeta::new(self.token_vault_b, false),
            AccountMeta::new(self.tick_array_0, false),
            AccountMeta::new(self.tick_array_1, false),
            AccountMeta::new(self.tick_array_2, false),
            AccountMeta::new(self.oracle, false),
        ]
    }
}

/// Builds the base `swap` instruction.
///
/// `remaining_accounts` are appended after the fixed list verbatim, order
/// and flags preserved. Pass [`crate::constants::WHIRLPOOL_ID`] as
/// `program_id` unless targeting a different deployment.
pub fn swap(
    program_id: &Pubkey,
    args: &SwapArgs,
    accounts: &SwapAccounts,
    remaining_accounts: &[AccountMeta],
) -> Result<Instruction, EncodeError> {
    let mut metas = accounts.to_account_metas();
    metas.extend_from_slice(remaining_accounts);
    Ok(Instruction {
        program_id: *program_id,
        accounts: metas,
        data: args.encode()?,
    })
}

/// Builds the `swap_v2` instruction.
///
/// `remaining_accounts` are appended after the fixed list verbatim, order
/// and flags preserved.
pub fn swap_v2(
    program_id: &Pubkey,
    args: &SwapV2Args,
    accounts: &SwapV2Accounts,
    remaining_accounts: &[AccountMeta],
) -> Result<Instruction, EncodeError> {
    let mut metas = accounts.to_account_metas();
    metas.extend_from_slice(remaining_accounts);
    Ok(Instruction {
        program_id: *program_id,
        accounts: metas,
        data: args.encode()?,
    })
}
