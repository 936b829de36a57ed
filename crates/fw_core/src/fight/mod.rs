pub mod attributes;
pub mod resolver;

pub use attributes::{synthesize, SynthesisMode};
pub use resolver::{resolve_fight, resolve_fight_with_mode, resolve_with_source, FightOptions};
