//! Plain records exchanged with the caller.
//!
//! Field names serialize in camelCase so weekly roster files and stored
//! offers/results load without a translation layer.

pub mod contract;
pub mod fight_result;
pub mod fighter;
pub mod role;

pub use contract::{ContractOffer, PayField};
pub use fight_result::{CardResult, FightResult};
pub use fighter::{CombatAttributes, Fighter};
pub use role::{FightMethod, Role};
