use serde::{Deserialize, Deserializer, Serialize};

/// A fighter in the weekly pool.
///
/// Combat attributes are optional in roster data; missing ones are
/// synthesized from hype before a bout (see `fight::attributes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    pub name: String,
    /// Pounds; fractional values in roster files are truncated
    #[serde(deserialize_with = "weight_class_lenient")]
    pub weight_class: u32,
    /// 0-100
    pub hype: f64,
    /// Win-loss string, e.g. "28-5"
    pub record: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grappling: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chin: Option<f64>,
}

impl Fighter {
    pub fn new(
        name: impl Into<String>,
        weight_class: u32,
        hype: f64,
        record: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight_class,
            hype,
            record: record.into(),
            status: status.into(),
            power: None,
            grappling: None,
            cardio: None,
            chin: None,
        }
    }

    /// Builder-style setter for all four combat attributes.
    pub fn with_attributes(mut self, power: f64, grappling: f64, cardio: f64, chin: f64) -> Self {
        self.power = Some(power);
        self.grappling = Some(grappling);
        self.cardio = Some(cardio);
        self.chin = Some(chin);
        self
    }

    pub fn has_full_attributes(&self) -> bool {
        self.power.is_some() && self.grappling.is_some() && self.cardio.is_some() && self.chin.is_some()
    }
}

fn weight_class_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let pounds = f64::deserialize(deserializer)?;
    if !pounds.is_finite() || pounds < 0.0 || pounds > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!("weight class out of range: {pounds}")));
    }
    Ok(pounds.trunc() as u32)
}

/// Resolved combat attributes, never partially defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatAttributes {
    pub power: f64,
    pub grappling: f64,
    pub cardio: f64,
    pub chin: f64,
}

impl CombatAttributes {
    /// Mean of the four attributes.
    pub fn effectiveness(&self) -> f64 {
        (self.power + self.grappling + self.cardio + self.chin) / 4.0
    }
}
