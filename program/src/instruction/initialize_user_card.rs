use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

use crate::error::UserCardError;
use crate::helpers::*;
use crate::instruction::read_u64;
use crate::state::{CardType, UserCard, UserCardState};
use crate::ID;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeUserCardArgs {
    pub card_type: CardType,
    pub amount_paid: u64,
    pub tokens_minted: u64,
}

impl InitializeUserCardArgs {
    pub const LEN: usize = 1 + 8 + 8;

    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self {
            card_type: CardType::try_from(payload[0])?,
            amount_paid: read_u64(&payload[1..9])?,
            tokens_minted: read_u64(&payload[9..17])?,
        })
    }
}

pub fn process_initialize_user_card(
    accounts: &[AccountInfo],
    args: InitializeUserCardArgs,
) -> ProgramResult {
    // accounts: user_card, authority, system_program
    let [user_card_info, authority_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(authority_info)?;
    require_writable(user_card_info)?;
    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // An existing card is reported as such before any storage checks.
    if user_card_info.is_owned_by(&ID)
        && user_card_info.data_len() > 0
        && get_user_card_state(user_card_info)?.is_initialized()
    {
        return Err(UserCardError::AlreadyInitialized.into());
    }

    provision_user_card(user_card_info, authority_info)?;

    let mut data = user_card_info.try_borrow_mut_data()?;
    do_initialize(&mut data, authority_info.key(), args)?;

    log!(
        "initialize: card_type={} amount_paid={} tokens_minted={}",
        args.card_type as u8,
        args.amount_paid,
        args.tokens_minted
    );
    Ok(())
}

/// Write a fresh card into `data` unless it already holds one.
pub fn do_initialize(data: &mut [u8], owner: &Pubkey, args: InitializeUserCardArgs) -> ProgramResult {
    if data.len() < UserCardState::size_of() {
        return Err(UserCardError::AllocationFailed.into());
    }

    match UserCardState::deserialize(data)? {
        UserCardState::Uninitialized => {
            let card = UserCard::new(*owner, args.card_type, args.amount_paid, args.tokens_minted);
            UserCardState::Initialized(card).serialize(data)
        }
        UserCardState::Initialized(_) => Err(UserCardError::AlreadyInitialized.into()),
    }
}
