use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

use crate::helpers::{
    get_user_card_state, next_account_info, owned_card, require_signer, require_writable,
    set_user_card_state,
};
use crate::state::{CardType, UserCardState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeCardArgs {
    pub new_type: CardType,
}

impl UpgradeCardArgs {
    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        let [new_type] = payload else {
            return Err(ProgramError::InvalidInstructionData);
        };
        Ok(Self {
            new_type: CardType::try_from(*new_type)?,
        })
    }
}

pub fn process_upgrade_card(accounts: &[AccountInfo], args: UpgradeCardArgs) -> ProgramResult {
    // accounts: user_card, owner (extra accounts are ignored)
    let it = &mut accounts.iter();
    let user_card_info = next_account_info(it)?;
    let owner_info = next_account_info(it)?;

    require_signer(owner_info)?;
    require_writable(user_card_info)?;

    let state = get_user_card_state(user_card_info)?;
    let (previous, next) = upgrade(state, owner_info.key(), args.new_type)?;

    set_user_card_state(user_card_info, &next)?;
    log!("upgrade_card: {} -> {}", previous as u8, args.new_type as u8);
    Ok(())
}

/// Returns the previous tier and the upgraded state.
pub fn upgrade(
    state: UserCardState,
    signer: &Pubkey,
    new_type: CardType,
) -> Result<(CardType, UserCardState), ProgramError> {
    let mut card = owned_card(state, signer)?;
    let previous = card.card_type;
    card.card_type = new_type;
    Ok((previous, UserCardState::Initialized(card)))
}
