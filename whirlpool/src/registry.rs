//! Discriminator-keyed decoder registry.
//!
//! Maps the 8-byte discriminator at the head of an instruction payload to
//! the decoder for that operation, so stream consumers can turn raw
//! whirlpool instruction data back into typed argument records without
//! knowing the operation up front.

use std::sync::LazyLock;

use ahash::AHashMap;
use tracing::trace;

use crate::{
    codec::{DISCRIMINATOR_LEN, InstructionArgs},
    errors::DecodeError,
    instructions::{
        fees::{SetDefaultFeeRateArgs, SetDefaultProtocolFeeRateArgs},
        swap::{SwapArgs, SwapV2Args},
    },
};

/// A whirlpool instruction payload decoded into its argument record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedInstruction {
    Swap(SwapArgs),
    SwapV2(SwapV2Args),
    SetDefaultFeeRate(SetDefaultFeeRateArgs),
    SetDefaultProtocolFeeRate(SetDefaultProtocolFeeRateArgs),
}

type DecoderFn = Box<dyn Fn(&[u8]) -> Result<DecodedInstruction, DecodeError> + Send + Sync>;

/// Registry entry pairing a human-readable operation name with its decoder.
pub struct RegistryItem {
    pub name: &'static str,
    decode: DecoderFn,
}

/// Global registry of all supported whirlpool instruction decoders.
static INSTRUCTION_REGISTRY: LazyLock<AHashMap<[u8; 8], RegistryItem>> = LazyLock::new(|| {
    let mut reg = AHashMap::new();

    register::<SwapArgs>(&mut reg, "swap", DecodedInstruction::Swap);
    register::<SwapV2Args>(&mut reg, "swap_v2", DecodedInstruction::SwapV2);
    register::<SetDefaultFeeRateArgs>(
        &mut reg,
        "set_default_fee_rate",
        DecodedInstruction::SetDefaultFeeRate,
    );
    register::<SetDefaultProtocolFeeRateArgs>(
        &mut reg,
        "set_default_protocol_fee_rate",
        DecodedInstruction::SetDefaultProtocolFeeRate,
    );

    reg
});

fn register<T>(
    reg: &mut AHashMap<[u8; 8], RegistryItem>,
    name: &'static str,
    wrap: fn(T) -> DecodedInstruction,
) where
    T: InstructionArgs + 'static,
{
    reg.insert(
        T::DISCRIMINATOR,
        RegistryItem {
            name,
            decode: Box::new(move |data| T::decode(data).map(wrap)),
        },
    );
}

/// Decodes whirlpool instruction data by its discriminator.
pub fn decode_instruction(data: &[u8]) -> Result<DecodedInstruction, DecodeError> {
    let item = lookup(data)?;
    (item.decode)(data)
}

/// Returns the operation name for the given instruction data, if the
/// discriminator is known.
#[must_use]
pub fn instruction_name(data: &[u8]) -> Option<&'static str> {
    lookup(data).ok().map(|item| item.name)
}

fn lookup(data: &[u8]) -> Result<&'static RegistryItem, DecodeError> {
    let discriminator: [u8; 8] = data
        .get(..DISCRIMINATOR_LEN)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or(DecodeError::TooShort {
            len: data.len(),
            min: DISCRIMINATOR_LEN,
        })?;

    INSTRUCTION_REGISTRY.get(&discriminator).ok_or_else(|| {
        trace!(?discriminator, "no decoder registered for instruction");
        DecodeError::UnknownDiscriminator(discriminator)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_instruction_dispatch() -> anyhow::Result<()> {
        let swap = SwapArgs {
            amount: 10,
            other_amount_threshold: 9,
            sqrt_price_limit: 1,
            amount_specified_is_input: true,
            a_to_b: false,
        };
        assert_eq!(
            decode_instruction(&swap.encode()?)?,
            DecodedInstruction::Swap(swap)
        );

        let swap_v2 = SwapV2Args {
            amount: 10,
            other_amount_threshold: 9,
            sqrt_price_limit: 1,
            amount_specified_is_input: false,
            a_to_b: true,
        };
        assert_eq!(
            decode_instruction(&swap_v2.encode()?)?,
            DecodedInstruction::SwapV2(swap_v2)
        );

        let fee_rate = SetDefaultFeeRateArgs {
            default_fee_rate: 100,
        };
        assert_eq!(
            decode_instruction(&fee_rate.encode()?)?,
            DecodedInstruction::SetDefaultFeeRate(fee_rate)
        );

        let protocol_fee_rate = SetDefaultProtocolFeeRateArgs {
            default_protocol_fee_rate: 30,
        };
        assert_eq!(
            decode_instruction(&protocol_fee_rate.encode()?)?,
            DecodedInstruction::SetDefaultProtocolFeeRate(protocol_fee_rate)
        );

        Ok(())
    }

    #[test]
    fn test_decode_instruction_unknown_discriminator() {
        let data = [0xffu8; 16];
        assert!(matches!(
            decode_instruction(&data),
            Err(DecodeError::UnknownDiscriminator(_))
        ));
    }

    #[test]
    fn test_decode_instruction_short_data() {
        assert!(matches!(
            decode_instruction(&[1, 2, 3]),
            Err(DecodeError::TooShort { len: 3, min: 8 })
        ));
    }

    #[test]
    fn test_instruction_name() -> anyhow::Result<()> {
        let swap = SwapArgs {
            amount: 1,
            other_amount_threshold: 1,
            sqrt_price_limit: 0,
            amount_specified_is_input: true,
            a_to_b: true,
        };
        assert_eq!(instruction_name(&swap.encode()?), Some("swap"));
        assert_eq!(instruction_name(&[0u8; 8]), None);
        Ok(())
    }
}
