//! Opponent assignment for the promotion's card.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::Fighter;

const FILLER_BASE_HYPE: u32 = 60;
const FILLER_HYPE_SPREAD: u32 = 30;
const FILLER_DEFAULT_WEIGHT_CLASS: u32 = 185;

/// One opponent per pick: unpicked roster fighters in roster order, then
/// generated filler fighters once the roster runs dry.
///
/// Filler fighters are drawn from a week-seeded ChaCha stream so the same
/// week always produces the same card.
pub fn assign_opponents(roster: &[Fighter], picks: &[&Fighter], week: u32) -> Vec<Fighter> {
    let mut available = roster
        .iter()
        .filter(|candidate| !picks.iter().any(|pick| pick.name == candidate.name));
    let mut rng = ChaCha8Rng::seed_from_u64(week as u64);

    picks
        .iter()
        .enumerate()
        .map(|(slot, pick)| match available.next() {
            Some(opponent) => opponent.clone(),
            None => filler_opponent(slot, pick.weight_class, &mut rng),
        })
        .collect()
}

/// "AI Fighter N" in the pick's weight class.
pub fn filler_opponent(slot: usize, weight_class: u32, rng: &mut ChaCha8Rng) -> Fighter {
    let weight_class = if weight_class == 0 { FILLER_DEFAULT_WEIGHT_CLASS } else { weight_class };
    let hype = FILLER_BASE_HYPE + rng.gen_range(0..FILLER_HYPE_SPREAD);
    let wins = 10 + rng.gen_range(0..15);
    let losses = rng.gen_range(0..5);

    Fighter::new(
        format!("AI Fighter {}", slot + 1),
        weight_class,
        hype as f64,
        format!("{wins}-{losses}"),
        "Available",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::fallback_roster;

    #[test]
    fn test_opponents_come_from_unpicked_roster_first() {
        let roster = fallback_roster();
        let picks = vec![&roster[1], &roster[3]];

        let opponents = assign_opponents(&roster, &picks, 1);

        assert_eq!(opponents.len(), 2);
        assert_eq!(opponents[0].name, "Sean Strickland");
        assert_eq!(opponents[1].name, "Dustin Poirier");
    }

    #[test]
    fn test_filler_when_roster_exhausted() {
        let roster = fallback_roster()[..3].to_vec();
        let picks: Vec<&Fighter> = roster.iter().take(2).collect();

        let opponents = assign_opponents(&roster, &picks, 5);

        assert_eq!(opponents[0].name, "Dustin Poirier");
        assert_eq!(opponents[1].name, "AI Fighter 2");
        assert_eq!(opponents[1].weight_class, roster[1].weight_class);
        assert!((60.0..90.0).contains(&opponents[1].hype));
        assert_eq!(opponents[1].status, "Available");
    }

    #[test]
    fn test_filler_is_reproducible_per_week() {
        let roster = vec![Fighter::new("Solo", 170, 70.0, "1-0", "Available")];
        let picks: Vec<&Fighter> = roster.iter().collect();

        let first = assign_opponents(&roster, &picks, 9);
        let second = assign_opponents(&roster, &picks, 9);

        assert_eq!(first, second);
        assert_eq!(first[0].name, "AI Fighter 1");
        let (wins, losses) = first[0].record.split_once('-').unwrap();
        assert!((10..25).contains(&wins.parse::<u32>().unwrap()));
        assert!((0..5).contains(&losses.parse::<u32>().unwrap()));
    }
}
