use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::scoring::{score_offer, DEFAULT_ORG_PRESTIGE};
use crate::models::ContractOffer;

/// Pick one winning offer per fighter at the default prestige.
pub fn resolve_offers(offers: &[ContractOffer]) -> BTreeMap<String, ContractOffer> {
    resolve_offers_with_prestige(offers, DEFAULT_ORG_PRESTIGE)
}

/// Pick one winning offer per fighter.
///
/// Offers are scanned in input order and replaced only on a strictly
/// greater score, so ties keep the earlier offer. Fighters without offers
/// are absent from the result.
pub fn resolve_offers_with_prestige(
    offers: &[ContractOffer],
    org_prestige: f64,
) -> BTreeMap<String, ContractOffer> {
    let mut best: BTreeMap<String, (f64, &ContractOffer)> = BTreeMap::new();

    for offer in offers {
        let score = score_offer(offer, org_prestige);
        let replace = best
            .get(&offer.fighter_name)
            .map_or(true, |(current, _)| score > *current);
        if replace {
            best.insert(offer.fighter_name.clone(), (score, offer));
        }
    }

    debug!(offers = offers.len(), signed = best.len(), "contracts resolved");

    best.into_iter()
        .map(|(name, (_, offer))| (name, offer.clone()))
        .collect()
}

/// Signed offers in order of each fighter's first offer.
pub fn signing_order(
    offers: &[ContractOffer],
    resolved: &BTreeMap<String, ContractOffer>,
) -> Vec<ContractOffer> {
    let mut seen = HashSet::new();
    offers
        .iter()
        .filter(|offer| seen.insert(offer.fighter_name.as_str()))
        .filter_map(|offer| resolved.get(&offer.fighter_name).cloned())
        .collect()
}
