//! JSON API
//!
//! String-in/string-out entry points for callers that only speak JSON (the
//! UI/storage layer). Request envelopes are snake_case; the records inside
//! keep the camelCase shape of stored rosters, offers and results.
//!
//! Preconditions the core does not check itself (distinct non-empty names,
//! closed role set, non-empty cards) are enforced here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{simulate_card, simulate_signed_card, FightCard};
use crate::config::EngineConfig;
use crate::contracts::{resolve_offers_with_prestige, score_offer, signing_order, DEFAULT_ORG_PRESTIGE};
use crate::error::{CoreError, Result};
use crate::fight::{resolve_fight_with_mode, FightOptions, SynthesisMode};
use crate::models::{CardResult, ContractOffer, FightResult, Fighter, Role};
use crate::roster::fallback_roster;
use crate::SCHEMA_VERSION;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

#[derive(Debug, Deserialize)]
pub struct FightRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub fighter_a: Fighter,
    pub fighter_b: Fighter,
    #[serde(default)]
    pub seed: Option<String>,
    /// Parsed here so an unknown role is reported as such.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub legacy_non_deterministic_synthesis: bool,
}

#[derive(Debug, Serialize)]
pub struct FightResponse {
    pub schema_version: u8,
    pub result: FightResult,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub offer: ContractOffer,
    #[serde(default)]
    pub org_prestige: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub schema_version: u8,
    pub fighter_name: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct ResolveOffersRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub offers: Vec<ContractOffer>,
    #[serde(default)]
    pub org_prestige: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ResolveOffersResponse {
    pub schema_version: u8,
    pub signed: BTreeMap<String, ContractOffer>,
    /// Same offers as `signed`, in order of first offer.
    pub signing_order: Vec<ContractOffer>,
}

#[derive(Debug, Deserialize)]
pub struct CardRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub week: u32,
    pub fighters: Vec<String>,
    /// Falls back to the fixed roster when omitted.
    #[serde(default)]
    pub roster: Option<Vec<Fighter>>,
    #[serde(default)]
    pub config: Option<EngineConfig>,
    /// The week's signings; when present every pick must be among them.
    #[serde(default)]
    pub signed: Option<Vec<ContractOffer>>,
}

#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub schema_version: u8,
    pub card: CardResult,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CoreError::SchemaMismatch { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

fn validate_pairing(a: &Fighter, b: &Fighter) -> Result<()> {
    for fighter in [a, b] {
        if fighter.name.trim().is_empty() {
            return Err(CoreError::InvalidFighter("fighter name must not be empty".to_string()));
        }
    }
    if a.name == b.name {
        return Err(CoreError::SelfFight { name: a.name.clone() });
    }
    Ok(())
}

/// Simulate one bout.
pub fn resolve_fight_json(request_json: &str) -> Result<String> {
    let request: FightRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;
    validate_pairing(&request.fighter_a, &request.fighter_b)?;

    let role = request.role.as_deref().map(str::parse::<Role>).transpose()?;
    let options = FightOptions { seed: request.seed, role };
    let mode = SynthesisMode::from_legacy_flag(request.legacy_non_deterministic_synthesis);

    let result = resolve_fight_with_mode(&request.fighter_a, &request.fighter_b, &options, mode);
    debug!(winner = %result.winner, method = %result.method, "fight request served");

    Ok(serde_json::to_string(&FightResponse { schema_version: SCHEMA_VERSION, result })?)
}

/// Score a single offer.
pub fn score_offer_json(request_json: &str) -> Result<String> {
    let request: ScoreRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let prestige = request.org_prestige.unwrap_or(DEFAULT_ORG_PRESTIGE);
    let score = score_offer(&request.offer, prestige);

    Ok(serde_json::to_string(&ScoreResponse {
        schema_version: SCHEMA_VERSION,
        fighter_name: request.offer.fighter_name,
        score,
    })?)
}

/// Resolve the week's offers into signings.
pub fn resolve_offers_json(request_json: &str) -> Result<String> {
    let request: ResolveOffersRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let prestige = request.org_prestige.unwrap_or(DEFAULT_ORG_PRESTIGE);
    let signed = resolve_offers_with_prestige(&request.offers, prestige);
    let order = signing_order(&request.offers, &signed);

    Ok(serde_json::to_string(&ResolveOffersResponse {
        schema_version: SCHEMA_VERSION,
        signed,
        signing_order: order,
    })?)
}

/// Simulate a whole weekly card.
pub fn simulate_card_json(request_json: &str) -> Result<String> {
    let request: CardRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let config = request.config.unwrap_or_default();
    config.validate()?;
    let roster = request.roster.unwrap_or_else(fallback_roster);
    let card = FightCard::new(request.week, request.fighters);

    let card = match &request.signed {
        Some(signed) => simulate_signed_card(&card, &roster, signed, &config)?,
        None => simulate_card(&card, &roster, &config)?,
    };
    Ok(serde_json::to_string(&CardResponse { schema_version: SCHEMA_VERSION, card })?)
}
