//! Client-side instruction builders and wire-format decoders for the Orca
//! Whirlpool program.
//!
//! Builders take a typed argument record and a typed account record and
//! produce a ready-to-submit [`solana_sdk::instruction::Instruction`]: the
//! target program id, the fixed-order account metas with their
//! signer/writable flags, and a data blob of `discriminator || args`.
//! The [`registry`] module decodes such payloads back into typed records,
//! and [`state`] gives zero-copy views over the program's accounts.
//!
//! Everything here is a pure function of its inputs. Address derivation,
//! quoting, transaction assembly and submission live elsewhere.

pub mod codec;
pub mod errors;
pub mod instructions;
pub mod registry;
pub mod state;

pub mod constants {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// Whirlpool program deployed on mainnet-beta and devnet.
    pub const WHIRLPOOL_ID: Pubkey = pubkey!("whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc");

    /// SPL memo program, part of the fixed `swap_v2` account list.
    pub const MEMO_PROGRAM_ID: Pubkey = pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

    /// SPL token program.
    pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

    /// SPL token-2022 program, used by pools with extension mints.
    pub const TOKEN_2022_PROGRAM_ID: Pubkey = spl_token_2022::ID;
}

pub use crate::{
    codec::{AccountData, InstructionArgs},
    errors::{DecodeError, EncodeError},
    instructions::{
        fees::{
            SetDefaultFeeRateAccounts, SetDefaultFeeRateArgs, SetDefaultProtocolFeeRateAccounts,
            SetDefaultProtocolFeeRateArgs, set_default_fee_rate, set_default_protocol_fee_rate,
        },
        swap::{SwapAccounts, SwapArgs, SwapV2Accounts, SwapV2Args, swap, swap_v2},
    },
    registry::{DecodedInstruction, decode_instruction, instruction_name},
    state::Whirlpool,
};
