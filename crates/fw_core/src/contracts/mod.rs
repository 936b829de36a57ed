//! Contract offers: scoring and the weekly signing decision.

pub mod resolution;
pub mod scoring;

pub use resolution::{resolve_offers, resolve_offers_with_prestige, signing_order};
pub use scoring::{score_offer, DEFAULT_ORG_PRESTIGE};
