use borsh::{BorshDeserialize, BorshSerialize};
use bytemuck::Pod;

use crate::errors::{DecodeError, EncodeError};

/// Byte length of the discriminator prefixing every instruction and account
/// payload of the whirlpool program.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Argument block of a whirlpool instruction, tied to the discriminator and
/// fixed wire size of its operation.
///
/// Fields are encoded with borsh in declared order: little-endian unsigned
/// integers, booleans as a single 0/1 byte, no padding.
pub trait InstructionArgs: BorshSerialize + BorshDeserialize {
    /// Discriminator identifying the operation on the program.
    const DISCRIMINATOR: [u8; 8];

    /// Total length of the instruction data, discriminator included.
    const DATA_SIZE: usize;

    /// Encodes the full instruction data: `discriminator || args`.
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut data = Vec::with_capacity(Self::DATA_SIZE);
        data.extend_from_slice(&Self::DISCRIMINATOR);
        self.serialize(&mut data)?;
        Ok(data)
    }

    /// Decodes instruction data produced by [`encode`](Self::encode).
    ///
    /// Fails on a short payload, a foreign discriminator, an invalid field
    /// encoding, or trailing bytes.
    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        read_args(strip_discriminator(data, Self::DISCRIMINATOR)?)
    }
}

/// On-chain account state with a fixed discriminator and data length.
pub trait AccountData: Sized {
    /// Discriminator identifying the account kind on the program.
    const DISCRIMINATOR: [u8; 8];

    /// On-chain data length of the account, discriminator included.
    const DATA_SIZE: usize;

    fn unpack(data: &[u8]) -> Result<Self, DecodeError>;
}

/// Validates and strips the expected discriminator prefix.
pub fn strip_discriminator(data: &[u8], expected: [u8; 8]) -> Result<&[u8], DecodeError> {
    if data.len() < DISCRIMINATOR_LEN {
        return Err(DecodeError::TooShort {
            len: data.len(),
            min: DISCRIMINATOR_LEN,
        });
    }
    data.strip_prefix(expected.as_slice())
        .ok_or(DecodeError::DiscriminatorMismatch { expected })
}

/// Borsh-deserializes an argument block, requiring full consumption of the
/// payload.
pub fn read_args<T: BorshDeserialize>(payload: &[u8]) -> Result<T, DecodeError> {
    T::try_from_slice(payload).map_err(DecodeError::Args)
}

/// Zero-copy unpacking for [`AccountData`] types that are plain-old-data.
pub(crate) fn unpack_pod<T>(data: &[u8]) -> Result<T, DecodeError>
where
    T: AccountData + Pod,
{
    if data.len() != T::DATA_SIZE {
        return Err(DecodeError::AccountSize {
            len: data.len(),
            expected: T::DATA_SIZE,
        });
    }
    let payload = data
        .strip_prefix(T::DISCRIMINATOR.as_slice())
        .ok_or(DecodeError::DiscriminatorMismatch {
            expected: T::DISCRIMINATOR,
        })?;
    Ok(bytemuck::pod_read_unaligned(payload))
}
