use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::role::FightMethod;

/// Outcome of one simulated bout. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightResult {
    pub winner: String,
    pub loser: String,
    pub method: FightMethod,
    /// 1-based ending round
    pub round: u32,
    pub notes: String,
    /// Fighter name -> damage taken (0-100)
    pub damage: BTreeMap<String, u32>,
    /// Contribution to the card rating, clamped to 0-100
    pub viewers_impact: u32,
}

impl FightResult {
    pub fn damage_taken(&self, name: &str) -> Option<u32> {
        self.damage.get(name).copied()
    }

    pub fn is_finish(&self) -> bool {
        self.method != FightMethod::Dec
    }
}

/// A simulated weekly card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResult {
    pub week: u32,
    pub fights: Vec<FightResult>,
    pub card_rating: u32,
}

impl CardResult {
    pub fn new(week: u32, fights: Vec<FightResult>) -> Self {
        let card_rating = card_rating(&fights);
        Self { week, fights, card_rating }
    }
}

/// floor(mean viewer impact); 0 for an empty card.
pub fn card_rating(fights: &[FightResult]) -> u32 {
    if fights.is_empty() {
        return 0;
    }
    let total: u32 = fights.iter().map(|f| f.viewers_impact).sum();
    (total as f64 / fights.len() as f64).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(impact: u32) -> FightResult {
        let mut damage = BTreeMap::new();
        damage.insert("A".to_string(), 20);
        damage.insert("B".to_string(), 70);
        FightResult {
            winner: "A".to_string(),
            loser: "B".to_string(),
            method: FightMethod::Dec,
            round: 3,
            notes: "Close split decision".to_string(),
            damage,
            viewers_impact: impact,
        }
    }

    #[test]
    fn test_card_rating_floors_mean() {
        assert_eq!(card_rating(&[result(70), result(81)]), 75);
        assert_eq!(card_rating(&[result(100)]), 100);
        assert_eq!(card_rating(&[]), 0);
    }

    #[test]
    fn test_result_json_shape() {
        let value = serde_json::to_value(result(55)).unwrap();
        assert_eq!(value["method"], "Dec");
        assert_eq!(value["viewersImpact"], 55);
        assert_eq!(value["damage"]["B"], 70);
        assert!(!result(55).is_finish());
        assert_eq!(result(55).damage_taken("A"), Some(20));
    }
}
