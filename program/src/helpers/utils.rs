use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

use crate::error::UserCardError;
use crate::state::{UserCard, UserCardState};
use crate::ID;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

#[inline]
pub fn require_signer(account_info: &AccountInfo) -> Result<(), ProgramError> {
    if !account_info.is_signer() {
        return Err(UserCardError::Unauthorized.into());
    }
    Ok(())
}

#[inline]
pub fn require_writable(account_info: &AccountInfo) -> Result<(), ProgramError> {
    if !account_info.is_writable() {
        return Err(ProgramError::InvalidArgument);
    }
    Ok(())
}

// Load card state from account (checks program owner)
pub fn get_user_card_state(card_account_info: &AccountInfo) -> Result<UserCardState, ProgramError> {
    if !card_account_info.is_owned_by(&ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = card_account_info.try_borrow_data()?;
    UserCardState::deserialize(&data)
}

// Write card state back into account
pub fn set_user_card_state(
    card_account_info: &AccountInfo,
    state: &UserCardState,
) -> Result<(), ProgramError> {
    let mut data = card_account_info.try_borrow_mut_data()?;
    state.serialize(&mut data)
}

/// Take the card out of `state` if it is initialized and owned by `signer`.
pub fn owned_card(state: UserCardState, signer: &Pubkey) -> Result<UserCard, ProgramError> {
    match state {
        UserCardState::Initialized(card) if card.is_owner(signer) => Ok(card),
        UserCardState::Initialized(_) => Err(UserCardError::Unauthorized.into()),
        UserCardState::Uninitialized => Err(UserCardError::NotInitialized.into()),
    }
}
