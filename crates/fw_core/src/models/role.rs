use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Slot of a bout on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Undercard,
    CoMain,
    MainEvent,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Undercard, Role::CoMain, Role::MainEvent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Undercard => "undercard",
            Role::CoMain => "co-main",
            Role::MainEvent => "main-event",
        }
    }

    /// Effectiveness bonus for the first (promoted) fighter only.
    pub fn advantage_multiplier(&self) -> f64 {
        match self {
            Role::Undercard => 1.0,
            Role::CoMain => 1.05,
            Role::MainEvent => 1.1,
        }
    }

    /// Audience weight used in the viewer-impact formula.
    pub fn viewer_multiplier(&self) -> f64 {
        match self {
            Role::Undercard => 0.8,
            Role::CoMain => 1.0,
            Role::MainEvent => 1.2,
        }
    }

    /// Weight applied to organisation prestige when scoring an offer.
    pub fn contract_multiplier(&self) -> f64 {
        match self {
            Role::Undercard => 1.0,
            Role::CoMain => 1.2,
            Role::MainEvent => 1.5,
        }
    }

    /// Role of a card slot: main event first, then co-main, then undercard.
    pub fn for_slot(slot: usize) -> Role {
        match slot {
            0 => Role::MainEvent,
            1 => Role::CoMain,
            _ => Role::Undercard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undercard" => Ok(Role::Undercard),
            "co-main" => Ok(Role::CoMain),
            "main-event" => Ok(Role::MainEvent),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

/// How a bout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightMethod {
    #[serde(rename = "KO")]
    Ko,
    #[serde(rename = "Sub")]
    Sub,
    #[serde(rename = "Dec")]
    Dec,
}

impl FightMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FightMethod::Ko => "KO",
            FightMethod::Sub => "Sub",
            FightMethod::Dec => "Dec",
        }
    }

    /// Baseline for the damage roll.
    pub fn base_damage(&self) -> f64 {
        match self {
            FightMethod::Ko => 80.0,
            FightMethod::Sub => 40.0,
            FightMethod::Dec => 60.0,
        }
    }

    pub fn viewer_multiplier(&self) -> f64 {
        match self {
            FightMethod::Ko => 1.3,
            FightMethod::Sub => 1.1,
            FightMethod::Dec => 0.9,
        }
    }
}

impl fmt::Display for FightMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
