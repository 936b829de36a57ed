pub mod json_api;

pub use json_api::{
    resolve_fight_json, resolve_offers_json, score_offer_json, simulate_card_json, CardRequest,
    CardResponse, FightRequest, FightResponse, ResolveOffersRequest, ResolveOffersResponse,
    ScoreRequest, ScoreResponse,
};
