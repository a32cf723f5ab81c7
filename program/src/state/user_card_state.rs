use pinocchio::program_error::ProgramError;

use crate::state::user_card::UserCard;

/// Contents of a user card slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserCardState {
    Uninitialized,
    Initialized(UserCard),
}

impl UserCardState {
    const UNINITIALIZED: u8 = 0;

    /// The fixed number of bytes used to serialize each user card account
    pub const fn size_of() -> usize {
        UserCard::LEN
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, ProgramError> {
        let (disc, body) = data
            .split_first()
            .ok_or(ProgramError::InvalidAccountData)?;
        match *disc {
            Self::UNINITIALIZED => Ok(UserCardState::Uninitialized),
            UserCard::DISCRIMINATOR => Ok(UserCardState::Initialized(UserCard::unpack(body)?)),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }

    pub fn serialize(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        match self {
            UserCardState::Uninitialized => {
                if dst.len() < Self::size_of() {
                    return Err(ProgramError::AccountDataTooSmall);
                }
                dst[..Self::size_of()].fill(0);
                Ok(())
            }
            UserCardState::Initialized(card) => card.pack(dst),
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, UserCardState::Initialized(_))
    }
}
