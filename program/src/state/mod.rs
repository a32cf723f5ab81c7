pub mod user_card;       // UserCard, CardType, AccountStatus
pub mod user_card_state; // UserCardState

// Re-export the types so everyone can `use crate::state::{...}`.
pub use user_card::{AccountStatus, CardType, UserCard};
pub use user_card_state::UserCardState;
