use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod deactivate;
pub mod initialize_user_card;
pub mod upgrade_card;

pub use deactivate::*;
pub use initialize_user_card::*;
pub use upgrade_card::*;

/// Instructions understood by the program, keyed by the first byte of the
/// instruction data.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
#[rustfmt::skip]
pub enum UserCardInstruction {
    /// Create a user card owned by `authority`.
    ///
    /// Data: `[card_type: u8, amount_paid: u64 LE, tokens_minted: u64 LE]`
    #[account(0, writable, optional_signer, name = "user_card", desc = "Card slot; must sign when it is created here")]
    #[account(1, writable, signer, name = "authority", desc = "Card owner, pays rent")]
    #[account(2, name = "system_program", desc = "System program")]
    InitializeUserCard,

    /// Change the card tier. Data: `[new_type: u8]`
    #[account(0, writable, name = "user_card", desc = "Initialized card")]
    #[account(1, signer, name = "owner", desc = "Card owner")]
    UpgradeCard,

    /// Mark the card inactive. No data.
    #[account(0, writable, name = "user_card", desc = "Initialized card")]
    #[account(1, signer, name = "owner", desc = "Card owner")]
    Deactivate,
}

impl TryFrom<&u8> for UserCardInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(UserCardInstruction::InitializeUserCard),
            1 => Ok(UserCardInstruction::UpgradeCard),
            2 => Ok(UserCardInstruction::Deactivate),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// An instruction together with its parsed arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedInstruction {
    InitializeUserCard(InitializeUserCardArgs),
    UpgradeCard(UpgradeCardArgs),
    Deactivate,
}

/// Decode instruction data. Host builds accept the bincode wire form first,
/// then the raw `[discriminator, payload...]` form.
pub fn decode_instruction(data: &[u8]) -> Result<DecodedInstruction, ProgramError> {
    #[cfg(feature = "std")]
    {
        if let Ok(wire_ix) = crate::wire::UserCardInstruction::decode(data) {
            return Ok(wire_ix.into());
        }
    }

    let (disc, payload) = data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match UserCardInstruction::try_from(disc)? {
        UserCardInstruction::InitializeUserCard => Ok(DecodedInstruction::InitializeUserCard(
            InitializeUserCardArgs::parse(payload)?,
        )),
        UserCardInstruction::UpgradeCard => {
            Ok(DecodedInstruction::UpgradeCard(UpgradeCardArgs::parse(payload)?))
        }
        UserCardInstruction::Deactivate => {
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            Ok(DecodedInstruction::Deactivate)
        }
    }
}

/// Read a little-endian u64 from exactly eight bytes.
#[inline]
pub(crate) fn read_u64(data: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = data
        .try_into()
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(u64::from_le_bytes(bytes))
}
