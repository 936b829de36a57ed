use anyhow::{Context, Result};
use fw_core::contracts::signing_order;
use fw_core::roster::find_fighter;
use fw_core::{
    load_weekly_pool, resolve_fight_with_mode, resolve_offers_with_prestige, score_offer,
    simulate_card, simulate_signed_card, ContractOffer, CoreError, EngineConfig, FightCard,
    FightOptions, Fighter, Role, SynthesisMode,
};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// `--legacy` can only switch ambient synthesis on; the config flag still applies without it.
#[allow(clippy::too_many_arguments)]
pub fn fight(
    data_dir: &Path,
    week: u32,
    a: &str,
    b: &str,
    role: Option<Role>,
    seed: Option<String>,
    legacy: bool,
    config: &EngineConfig,
) -> Result<String> {
    if a == b {
        return Err(CoreError::SelfFight { name: a.to_string() }.into());
    }

    let pool = load_weekly_pool(data_dir, week)?;
    let fighter_a = lookup(&pool, a, week)?;
    let fighter_b = lookup(&pool, b, week)?;

    let mode = SynthesisMode::from_legacy_flag(legacy || config.legacy_non_deterministic_synthesis);
    let result = resolve_fight_with_mode(fighter_a, fighter_b, &FightOptions { seed, role }, mode);

    info!(winner = %result.winner, method = %result.method, round = result.round, "bout simulated");
    Ok(serde_json::to_string_pretty(&result)?)
}

fn lookup<'a>(pool: &'a [Fighter], name: &str, week: u32) -> Result<&'a Fighter> {
    find_fighter(pool, name)
        .ok_or_else(|| CoreError::FighterNotFound { name: name.to_string() })
        .with_context(|| format!("week {week} roster"))
}

pub fn score(fighter: &str, base_pay: &str, bonus: &str, role: Role, prestige: f64) -> Result<String> {
    let offer = ContractOffer::new(fighter, base_pay, bonus, role);
    let score = score_offer(&offer, prestige);
    Ok(serde_json::to_string_pretty(&json!({ "offer": offer, "score": score }))?)
}

fn read_offers(path: &Path) -> Result<Vec<ContractOffer>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read offers file: {}", path.display()))?;
    serde_json::from_str::<Vec<ContractOffer>>(&content)
        .map_err(CoreError::from)
        .with_context(|| format!("Failed to parse offers JSON (expected an array): {}", path.display()))
}

pub fn resolve(offers_path: &Path, prestige: f64) -> Result<String> {
    let offers = read_offers(offers_path)?;

    let signed = resolve_offers_with_prestige(&offers, prestige);
    info!(offers = offers.len(), signed = signed.len(), "contracts resolved");

    Ok(serde_json::to_string_pretty(&signing_order(&offers, &signed))?)
}

/// `signed_path` points at the week's signings, as printed by `resolve`.
pub fn card(
    data_dir: &Path,
    week: u32,
    fighters: Vec<String>,
    signed_path: Option<&Path>,
    config: &EngineConfig,
) -> Result<String> {
    let pool = load_weekly_pool(data_dir, week)?;
    let card = FightCard::new(week, fighters);
    let result = match signed_path {
        Some(path) => simulate_signed_card(&card, &pool, &read_offers(path)?, config),
        None => simulate_card(&card, &pool, config),
    }
    .with_context(|| format!("Failed to simulate card for week {week}"))?;
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn roster(data_dir: &Path, week: u32) -> Result<String> {
    let pool = load_weekly_pool(data_dir, week)?;
    Ok(serde_json::to_string_pretty(&pool)?)
}
