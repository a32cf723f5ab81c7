use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

use crate::helpers::{
    get_user_card_state, next_account_info, owned_card, require_signer, require_writable,
    set_user_card_state,
};
use crate::state::{AccountStatus, UserCardState};

pub fn process_deactivate(accounts: &[AccountInfo]) -> ProgramResult {
    // accounts: user_card, owner (extra accounts are ignored)
    let it = &mut accounts.iter();
    let user_card_info = next_account_info(it)?;
    let owner_info = next_account_info(it)?;

    require_signer(owner_info)?;
    require_writable(user_card_info)?;

    let state = get_user_card_state(user_card_info)?;
    let next = deactivate(state, owner_info.key())?;

    set_user_card_state(user_card_info, &next)?;
    log!("deactivate: status={}", AccountStatus::Inactive as u8);
    Ok(())
}

pub fn deactivate(state: UserCardState, signer: &Pubkey) -> Result<UserCardState, ProgramError> {
    let mut card = owned_card(state, signer)?;
    card.status = AccountStatus::Inactive;
    Ok(UserCardState::Initialized(card))
}
