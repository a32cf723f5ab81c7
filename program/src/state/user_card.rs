use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::UserCardError;

/// Card tier, stored as a single byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardType {
    Bronze = 0,
    Silver = 1,
    Gold = 2,
    Platinum = 3,
}

impl TryFrom<u8> for CardType {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CardType::Bronze),
            1 => Ok(CardType::Silver),
            2 => Ok(CardType::Gold),
            3 => Ok(CardType::Platinum),
            _ => Err(UserCardError::InvalidCardType.into()),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountStatus {
    #[default]
    Active = 0,
    Inactive = 1,
}

impl TryFrom<u8> for AccountStatus {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountStatus::Active),
            1 => Ok(AccountStatus::Inactive),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

/// A user card record. The first byte of the account is the discriminator;
/// the record follows it.
///
/// Layout (51 bytes):
/// - `[0]`      discriminator
/// - `[1..33]`  owner
/// - `[33]`     card type
/// - `[34..42]` amount paid (u64 LE)
/// - `[42..50]` tokens minted (u64 LE)
/// - `[50]`     status
#[derive(Clone, Debug, PartialEq, Eq, ShankAccount)]
pub struct UserCard {
    pub owner: Pubkey,
    pub card_type: CardType,
    pub amount_paid: u64,
    pub tokens_minted: u64,
    pub status: AccountStatus,
}

impl UserCard {
    pub const DISCRIMINATOR: u8 = 1;

    /// Bytes used in the account, discriminator included.
    pub const LEN: usize = 1 + 32 + 1 + 8 + 8 + 1;

    pub fn new(owner: Pubkey, card_type: CardType, amount_paid: u64, tokens_minted: u64) -> Self {
        Self {
            owner,
            card_type,
            amount_paid,
            tokens_minted,
            status: AccountStatus::Active,
        }
    }

    #[inline]
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    /// Read a card from the bytes following the discriminator.
    pub fn unpack(body: &[u8]) -> Result<Self, ProgramError> {
        if body.len() < Self::LEN - 1 {
            return Err(ProgramError::InvalidAccountData);
        }
        let mut owner = [0u8; 32];
        owner.copy_from_slice(&body[0..32]);
        let card_type = CardType::try_from(body[32])
            .map_err(|_| ProgramError::InvalidAccountData)?;
        let amount_paid = u64::from_le_bytes(
            body[33..41]
                .try_into()
                .map_err(|_| ProgramError::InvalidAccountData)?,
        );
        let tokens_minted = u64::from_le_bytes(
            body[41..49]
                .try_into()
                .map_err(|_| ProgramError::InvalidAccountData)?,
        );
        let status = AccountStatus::try_from(body[49])?;

        Ok(Self {
            owner,
            card_type,
            amount_paid,
            tokens_minted,
            status,
        })
    }

    /// Write the discriminator and the record into `dst`.
    pub fn pack(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() < Self::LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        dst[0] = Self::DISCRIMINATOR;
        dst[1..33].copy_from_slice(&self.owner);
        dst[33] = self.card_type as u8;
        dst[34..42].copy_from_slice(&self.amount_paid.to_le_bytes());
        dst[42..50].copy_from_slice(&self.tokens_minted.to_le_bytes());
        dst[50] = self.status as u8;
        Ok(())
    }
}
