use solana_program_test::{BanksClient, BanksClientError};
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    system_program,
    transaction::TransactionError,
};

use pinocchio_user_card::{
    error::UserCardError,
    state::{CardType, UserCardState},
    wire::{UserCardInstruction, WireCardType},
};

pub mod ixn {
    use super::*;

    /// `slot_signs` must be true when the program has to create the slot.
    pub fn initialize_user_card(
        user_card: &Pubkey,
        authority: &Pubkey,
        slot_signs: bool,
        card_type: CardType,
        amount_paid: u64,
        tokens_minted: u64,
    ) -> Instruction {
        let data = UserCardInstruction::InitializeUserCard {
            card_type: WireCardType::from(card_type),
            amount_paid,
            tokens_minted,
        }
        .to_raw();
        Instruction {
            program_id: super::super::program_id(),
            accounts: vec![
                AccountMeta::new(*user_card, slot_signs),
                AccountMeta::new(*authority, true),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }

    pub fn upgrade_card(user_card: &Pubkey, owner: &Pubkey, new_type: CardType) -> Instruction {
        Instruction {
            program_id: super::super::program_id(),
            accounts: vec![
                AccountMeta::new(*user_card, false),
                AccountMeta::new_readonly(*owner, true),
            ],
            data: UserCardInstruction::UpgradeCard { new_type: new_type.into() }.to_raw(),
        }
    }

    pub fn deactivate(user_card: &Pubkey, owner: &Pubkey) -> Instruction {
        Instruction {
            program_id: super::super::program_id(),
            accounts: vec![
                AccountMeta::new(*user_card, false),
                AccountMeta::new_readonly(*owner, true),
            ],
            data: UserCardInstruction::Deactivate.to_raw(),
        }
    }

    /// Drop the signer flag from `key` to simulate a missing signature.
    pub fn without_signer(mut ix: Instruction, key: &Pubkey) -> Instruction {
        for am in ix.accounts.iter_mut().filter(|am| &am.pubkey == key) {
            am.is_signer = false;
        }
        ix
    }
}

pub use ixn::*;

// ---------- State helpers ----------
pub async fn get_user_card_state(banks_client: &mut BanksClient, pubkey: &Pubkey) -> UserCardState {
    let account = banks_client.get_account(*pubkey).await.unwrap().unwrap();
    assert_eq!(account.owner, super::program_id(), "card must be owned by the program");
    UserCardState::deserialize(&account.data).unwrap()
}

pub async fn get_raw_data(banks_client: &mut BanksClient, pubkey: &Pubkey) -> Option<Vec<u8>> {
    banks_client
        .get_account(*pubkey)
        .await
        .unwrap()
        .map(|account| account.data)
}

// ---------- Error helpers ----------
pub mod err {
    use super::*;

    pub fn instruction_error(err: BanksClientError) -> InstructionError {
        let te = match err {
            BanksClientError::TransactionError(te) => te,
            BanksClientError::SimulationError { err, .. } => err,
            other => panic!("unexpected banks client error: {:?}", other),
        };
        match te {
            TransactionError::InstructionError(_, ie) => ie,
            other => panic!("unexpected transaction error: {:?}", other),
        }
    }

    pub fn assert_card_error<T: std::fmt::Debug>(
        res: Result<T, BanksClientError>,
        expected: UserCardError,
    ) {
        let err = res.expect_err("instruction should fail");
        match instruction_error(err) {
            InstructionError::Custom(code) => {
                assert_eq!(UserCardError::try_from(code).ok(), Some(expected));
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }
}
