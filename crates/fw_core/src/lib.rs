//! # fw_core - Deterministic Fight Simulation & Contract Engine
//!
//! The algorithmic core of the weekly fight-promotion cycle: contract offers
//! are scored and resolved into signings, signed fighters are simulated
//! against opponents, and the card is rated.
//!
//! ## Features
//! - 100% deterministic bouts (same seed string = same result)
//! - Attribute synthesis for fighters without explicit stats
//! - Total offer scoring over loosely-typed pay fields
//! - JSON API for the UI/storage layer
//!
//! All computation is synchronous and in-memory. Persistence of offers,
//! signings and results belongs to the caller.

pub mod api;
pub mod card;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fight;
pub mod models;
pub mod rng;
pub mod roster;

// Re-export main API functions
pub use api::{resolve_fight_json, resolve_offers_json, score_offer_json, simulate_card_json};
pub use card::{simulate_card, simulate_signed_card, FightCard, MAX_CARD_SIZE};
pub use config::{config_from_env, EngineConfig};
pub use contracts::{resolve_offers, resolve_offers_with_prestige, score_offer, DEFAULT_ORG_PRESTIGE};
pub use error::{CoreError, Result};
pub use fight::{resolve_fight, resolve_fight_with_mode, FightOptions, SynthesisMode};
pub use models::{CardResult, CombatAttributes, ContractOffer, FightMethod, FightResult, Fighter, PayField, Role};
pub use rng::{RandomSource, SeededSequence};
pub use roster::{fallback_roster, load_weekly_pool};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
