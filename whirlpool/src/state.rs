//! Zero-copy views over whirlpool program account state.

use bytemuck::{Pod, Zeroable};
use solana_sdk::pubkey::Pubkey;

use crate::{
    codec::{self, AccountData},
    errors::DecodeError,
};

/// Number of reward slots on a whirlpool.
pub const NUM_REWARDS: usize = 3;

/// Pool account of the whirlpool program.
///
/// Field order and widths mirror the on-chain layout exactly; multi-word
/// integers are stored as little-endian `u64` halves, keys as raw bytes.
/// Use the accessors for typed views.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Whirlpool {
    pub whirlpools_config: [u8; 32],
    pub whirlpool_bump: [u8; 1],
    pub tick_spacing: u16,
    pub fee_tier_index_seed: [u8; 2],
    /// Hundredths of a basis point.
    pub fee_rate: u16,
    /// Basis points of collected fees taken as protocol fees.
    pub protocol_fee_rate: u16,
    pub liquidity: [u64; 2],
    /// Q64.64, low half first.
    pub sqrt_price: [u64; 2],
    pub tick_current_index: i32,
    pub protocol_fee_owed_a: u64,
    pub protocol_fee_owed_b: u64,
    pub token_mint_a: [u8; 32],
    pub token_vault_a: [u8; 32],
    /// Q64.64.
    pub fee_growth_global_a: [u64; 2],
    pub token_mint_b: [u8; 32],
    pub token_vault_b: [u8; 32],
    /// Q64.64.
    pub fee_growth_global_b: [u64; 2],
    pub reward_last_updated_timestamp: u64,
    pub reward_infos: [WhirlpoolRewardInfo; NUM_REWARDS],
}

impl AccountData for Whirlpool {
    const DISCRIMINATOR: [u8; 8] = [63, 149, 209, 12, 225, 128, 99, 9];
    const DATA_SIZE: usize = 653;

    fn unpack(data: &[u8]) -> Result<Self, DecodeError> {
        codec::unpack_pod(data)
    }
}

impl Whirlpool {
    #[must_use]
    pub fn config(&self) -> Pubkey {
        Pubkey::new_from_array(self.whirlpools_config)
    }

    #[must_use]
    pub fn mint_a(&self) -> Pubkey {
        Pubkey::new_from_array(self.token_mint_a)
    }

    #[must_use]
    pub fn mint_b(&self) -> Pubkey {
        Pubkey::new_from_array(self.token_mint_b)
    }

    #[must_use]
    pub fn vault_a(&self) -> Pubkey {
        Pubkey::new_from_array(self.token_vault_a)
    }

    #[must_use]
    pub fn vault_b(&self) -> Pubkey {
        Pubkey::new_from_array(self.token_vault_b)
    }

    /// Current pool price as a Q64.64 fixed-point value.
    #[must_use]
    pub fn sqrt_price_x64(&self) -> u128 {
        u128_from_halves(self.sqrt_price)
    }

    /// Liquidity currently in range.
    #[must_use]
    pub fn liquidity_u128(&self) -> u128 {
        u128_from_halves(self.liquidity)
    }
}

/// Reward slot of a whirlpool.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct WhirlpoolRewardInfo {
    pub mint: [u8; 32],
    pub vault: [u8; 32],
    /// Authority for slot 0, reserved for extensions on the other slots.
    pub extension: [u8; 32],
    /// Q64.64 tokens emitted per second per unit of liquidity.
    pub emissions_per_second_x64: [u64; 2],
    /// Q64.64 total tokens emitted per unit of liquidity.
    pub growth_global_x64: [u64; 2],
}

impl WhirlpoolRewardInfo {
    /// Whether the reward slot has been initialized with a mint.
    #[must_use]
    pub fn initialized(&self) -> bool {
        self.mint != [0u8; 32]
    }
}

fn u128_from_halves(halves: [u64; 2]) -> u128 {
    (u128::from(halves[1]) << 64) | u128::from(halves[0])
}
