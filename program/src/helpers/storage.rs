use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::error::UserCardError;
use crate::state::UserCardState;
use crate::ID;

/// How a slot gets its storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provisioning {
    /// Already owned by this program with enough space and rent.
    Ready,
    /// Empty system account: create it outright.
    Create { lamports: u64 },
    /// System account holding some lamports: top up, allocate, assign.
    TopUp { shortfall: u64 },
}

/// The parts of a slot that decide how it is provisioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotView {
    pub owner_is_program: bool,
    pub owner_is_system: bool,
    pub is_signer: bool,
    pub lamports: u64,
    pub data_len: usize,
    /// Rent-exempt balance for the slot's current data length.
    pub rent_minimum: u64,
}

impl SlotView {
    pub fn of(slot: &AccountInfo, rent: &Rent) -> Self {
        Self {
            owner_is_program: slot.is_owned_by(&ID),
            owner_is_system: slot.is_owned_by(&pinocchio_system::ID),
            is_signer: slot.is_signer(),
            lamports: slot.lamports(),
            data_len: slot.data_len(),
            rent_minimum: rent.minimum_balance(slot.data_len()),
        }
    }
}

/// Decide how to provision a slot, failing before any state is touched.
///
/// `rent_minimum` is the rent-exempt balance for a user card.
pub fn plan_provisioning(
    slot: SlotView,
    payer_lamports: u64,
    rent_minimum: u64,
) -> Result<Provisioning, ProgramError> {
    if slot.owner_is_program {
        if slot.data_len < UserCardState::size_of() || slot.lamports < slot.rent_minimum {
            return Err(UserCardError::AllocationFailed.into());
        }
        return Ok(Provisioning::Ready);
    }

    if !slot.owner_is_system {
        return Err(ProgramError::InvalidAccountOwner);
    }
    // A system account must sign to be allocated and assigned, and must not
    // already carry data.
    if !slot.is_signer || slot.data_len != 0 {
        return Err(UserCardError::AllocationFailed.into());
    }

    let shortfall = rent_minimum.saturating_sub(slot.lamports);
    if shortfall > payer_lamports {
        return Err(UserCardError::AllocationFailed.into());
    }

    if slot.lamports == 0 {
        Ok(Provisioning::Create { lamports: shortfall })
    } else {
        Ok(Provisioning::TopUp { shortfall })
    }
}

/// Make sure `slot` is owned by this program and sized for a user card,
/// paying rent from `payer` when it has to be created.
pub fn provision_user_card(slot: &AccountInfo, payer: &AccountInfo) -> ProgramResult {
    let rent = Rent::get()?;
    let space = UserCardState::size_of();

    let plan = plan_provisioning(
        SlotView::of(slot, &rent),
        payer.lamports(),
        rent.minimum_balance(space),
    )?;

    match plan {
        Provisioning::Ready => Ok(()),
        Provisioning::Create { lamports } => {
            log!("provision: create {} bytes, {} lamports", space, lamports);
            CreateAccount {
                from: payer,
                to: slot,
                lamports,
                space: space as u64,
                owner: &ID,
            }
            .invoke()
        }
        Provisioning::TopUp { shortfall } => {
            log!("provision: top up {} lamports", shortfall);
            if shortfall > 0 {
                Transfer {
                    from: payer,
                    to: slot,
                    lamports: shortfall,
                }
                .invoke()?;
            }
            Allocate {
                account: slot,
                space: space as u64,
            }
            .invoke()?;
            Assign {
                account: slot,
                owner: &ID,
            }
            .invoke()
        }
    }
}
