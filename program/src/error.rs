use pinocchio::program_error::ProgramError;

/// Failure kinds surfaced to the client as `ProgramError::Custom(code)`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserCardError {
    /// The slot already holds a user card.
    AlreadyInitialized = 0,
    /// Storage for the slot could not be provisioned.
    AllocationFailed = 1,
    /// Missing signature, or the signer is not the card owner.
    Unauthorized = 2,
    InvalidCardType = 3,
    NotInitialized = 4,
}

// map internal errors to standard program error
pub fn to_program_error(err: UserCardError) -> ProgramError {
    ProgramError::Custom(err as u32)
}

impl From<UserCardError> for ProgramError {
    fn from(err: UserCardError) -> Self {
        to_program_error(err)
    }
}

impl TryFrom<u32> for UserCardError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(UserCardError::AlreadyInitialized),
            1 => Ok(UserCardError::AllocationFailed),
            2 => Ok(UserCardError::Unauthorized),
            3 => Ok(UserCardError::InvalidCardType),
            4 => Ok(UserCardError::NotInitialized),
            _ => Err(ProgramError::InvalidArgument),
        }
    }
}
