use crate::models::ContractOffer;

/// Prestige assumed when the caller has none on record.
pub const DEFAULT_ORG_PRESTIGE: f64 = 50.0;

const PRESTIGE_WEIGHT: f64 = 0.5;

/// Comparable score for an offer. Total over any offer shape.
///
/// `base + bonus + prestige * 0.5 * role multiplier`, where a missing or
/// unrecognised role uses multiplier 1.
pub fn score_offer(offer: &ContractOffer, org_prestige: f64) -> f64 {
    let base = offer.base_pay.amount();
    let bonus = offer.bonus.amount();
    let prestige_factor = org_prestige * PRESTIGE_WEIGHT;
    let role_multiplier = offer.role.map(|r| r.contract_multiplier()).unwrap_or(1.0);

    base + bonus + prestige_factor * role_multiplier
}
