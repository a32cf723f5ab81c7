//! Bincode encoding of the instruction set for Rust clients on host builds.
//!
//! The raw form is `[discriminator, payload...]` (18, 2 or 1 bytes). The
//! bincode form starts with a u32 variant tag and is exactly 24, 8 or 4 bytes
//! long. Trailing bytes are rejected, so a buffer can only ever decode as one
//! of the two.

use bincode::Options;
use pinocchio::program_error::ProgramError;
use serde::{Deserialize, Serialize};

use crate::instruction::{DecodedInstruction, InitializeUserCardArgs, UpgradeCardArgs};
use crate::state::CardType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireCardType {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl From<WireCardType> for CardType {
    fn from(w: WireCardType) -> Self {
        match w {
            WireCardType::Bronze => CardType::Bronze,
            WireCardType::Silver => CardType::Silver,
            WireCardType::Gold => CardType::Gold,
            WireCardType::Platinum => CardType::Platinum,
        }
    }
}

impl From<CardType> for WireCardType {
    fn from(c: CardType) -> Self {
        match c {
            CardType::Bronze => WireCardType::Bronze,
            CardType::Silver => WireCardType::Silver,
            CardType::Gold => WireCardType::Gold,
            CardType::Platinum => WireCardType::Platinum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserCardInstruction {
    InitializeUserCard {
        card_type: WireCardType,
        amount_paid: u64,
        tokens_minted: u64,
    },
    UpgradeCard {
        new_type: WireCardType,
    },
    Deactivate,
}

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

impl UserCardInstruction {
    pub fn encode(&self) -> Result<Vec<u8>, ProgramError> {
        wire_options()
            .serialize(self)
            .map_err(|_| ProgramError::InvalidInstructionData)
    }

    pub fn decode(data: &[u8]) -> Result<Self, ProgramError> {
        wire_options()
            .deserialize(data)
            .map_err(|_| ProgramError::InvalidInstructionData)
    }

    /// The one-byte discriminator + payload form accepted on-chain.
    pub fn to_raw(&self) -> Vec<u8> {
        match self {
            UserCardInstruction::InitializeUserCard {
                card_type,
                amount_paid,
                tokens_minted,
            } => {
                let mut data = Vec::with_capacity(1 + InitializeUserCardArgs::LEN);
                data.push(crate::instruction::UserCardInstruction::InitializeUserCard as u8);
                data.push(CardType::from(*card_type) as u8);
                data.extend_from_slice(&amount_paid.to_le_bytes());
                data.extend_from_slice(&tokens_minted.to_le_bytes());
                data
            }
            UserCardInstruction::UpgradeCard { new_type } => vec![
                crate::instruction::UserCardInstruction::UpgradeCard as u8,
                CardType::from(*new_type) as u8,
            ],
            UserCardInstruction::Deactivate => {
                vec![crate::instruction::UserCardInstruction::Deactivate as u8]
            }
        }
    }
}

impl From<UserCardInstruction> for DecodedInstruction {
    fn from(ix: UserCardInstruction) -> Self {
        match ix {
            UserCardInstruction::InitializeUserCard {
                card_type,
                amount_paid,
                tokens_minted,
            } => DecodedInstruction::InitializeUserCard(InitializeUserCardArgs {
                card_type: card_type.into(),
                amount_paid,
                tokens_minted,
            }),
            UserCardInstruction::UpgradeCard { new_type } => {
                DecodedInstruction::UpgradeCard(UpgradeCardArgs {
                    new_type: new_type.into(),
                })
            }
            UserCardInstruction::Deactivate => DecodedInstruction::Deactivate,
        }
    }
}

impl From<InitializeUserCardArgs> for UserCardInstruction {
    fn from(args: InitializeUserCardArgs) -> Self {
        UserCardInstruction::InitializeUserCard {
            card_type: args.card_type.into(),
            amount_paid: args.amount_paid,
            tokens_minted: args.tokens_minted,
        }
    }
}

impl From<UpgradeCardArgs> for UserCardInstruction {
    fn from(args: UpgradeCardArgs) -> Self {
        UserCardInstruction::UpgradeCard {
            new_type: args.new_type.into(),
        }
    }
}
