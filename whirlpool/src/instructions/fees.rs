//! Builders for the fee-rate administration instructions.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::{codec::InstructionArgs, errors::EncodeError};

/// Argument block of the `set_default_fee_rate` instruction.
///
/// The fee rate is expressed in hundredths of a basis point.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDefaultFeeRateArgs {
    pub default_fee_rate: u16,
}

impl InstructionArgs for SetDefaultFeeRateArgs {
    const DISCRIMINATOR: [u8; 8] = [0x76, 0xd7, 0xd6, 0x9d, 0xb6, 0xe5, 0xd0, 0xe4];
    const DATA_SIZE: usize = 10;
}

/// Fixed account list of the `set_default_fee_rate` instruction.
#[derive(Debug, Clone)]
pub struct SetDefaultFeeRateAccounts {
    pub whirlpools_config: Pubkey,
    pub fee_tier: Pubkey,
    pub fee_authority: Pubkey,
}

impl SetDefaultFeeRateAccounts {
    #[must_use]
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.whirlpools_config, false),
            AccountMeta::new(self.fee_tier, false),
            AccountMeta::new_readonly(self.fee_authority, true),
        ]
    }
}

/// Argument block of the `set_default_protocol_fee_rate` instruction.
///
/// The protocol fee rate is expressed in basis points.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDefaultProtocolFeeRateArgs {
    pub default_protocol_fee_rate: u16,
}

impl InstructionArgs for SetDefaultProtocolFeeRateArgs {
    const DISCRIMINATOR: [u8; 8] = [0x6b, 0xcd, 0xf9, 0xe2, 0x97, 0x23, 0x56, 0x00];
    const DATA_SIZE: usize = 10;
}

/// Fixed account list of the `set_default_protocol_fee_rate` instruction.
#[derive(Debug, Clone)]
pub struct SetDefaultProtocolFeeRateAccounts {
    pub whirlpools_config: Pubkey,
    pub fee_authority: Pubkey,
}

impl SetDefaultProtocolFeeRateAccounts {
    #[must_use]
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.whirlpools_config, false),
            AccountMeta::new_readonly(self.fee_authority, true),
        ]
    }
}

/// Builds the `set_default_fee_rate` instruction for a fee tier.
pub fn set_default_fee_rate(
    program_id: &Pubkey,
    args: &SetDefaultFeeRateArgs,
    accounts: &SetDefaultFeeRateAccounts,
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

/// Builds the `set_default_protocol_fee_rate` instruction for a whirlpools
/// config.
pub fn set_default_protocol_fee_rate(
    program_id: &Pubkey,
    args: &SetDefaultProtocolFeeRateArgs,
    accounts: &SetDefaultProtocolFeeRateAccounts,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WHIRLPOOL_ID;

    #[test]
    fn test_set_default_fee_rate_layout() -> anyhow::Result<()> {
        let accounts = SetDefaultFeeRateAccounts {
            whirlpools_config: Pubkey::new_unique(),
            fee_tier: Pubkey::new_unique(),
            fee_authority: Pubkey::new_unique(),
        };
        let args = SetDefaultFeeRateArgs {
            default_fee_rate: 3000,
        };
        let ix = set_default_fee_rate(&WHIRLPOOL_ID, &args, &accounts, &[])?;

        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.data.len(), 10);
        assert_eq!(ix.data[..8], SetDefaultFeeRateArgs::DISCRIMINATOR);
        assert_eq!(ix.data[8..], 3000u16.to_le_bytes());

        assert!(!ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_writable);
        assert!(ix.accounts[2].is_signer);
        assert!(!ix.accounts[2].is_writable);

        Ok(())
    }

    #[test]
    fn test_set_default_protocol_fee_rate_layout() -> anyhow::Result<()> {
        let accounts = SetDefaultProtocolFeeRateAccounts {
            whirlpools_config: Pubkey::new_unique(),
            fee_authority: Pubkey::new_unique(),
        };
        let args = SetDefaultProtocolFeeRateArgs {
            default_protocol_fee_rate: 300,
        };
        let ix = set_default_protocol_fee_rate(&WHIRLPOOL_ID, &args, &accounts, &[])?;

        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.data.len(), 10);
        assert_eq!(ix.data[..8], SetDefaultProtocolFeeRateArgs::DISCRIMINATOR);
        assert_eq!(ix.data[8..], 300u16.to_le_bytes());

        assert!(ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_signer);

        Ok(())
    }

    #[test]
    fn test_fee_rate_args_roundtrip() -> anyhow::Result<()> {
        let args = SetDefaultFeeRateArgs {
            default_fee_rate: u16::MAX,
        };
        assert_eq!(SetDefaultFeeRateArgs::decode(&args.encode()?)?, args);

        let args = SetDefaultProtocolFeeRateArgs {
            default_protocol_fee_rate: 25,
        };
        assert_eq!(
            SetDefaultProtocolFeeRateArgs::decode(&args.encode()?)?,
            args
        );

        Ok(())
    }
}
