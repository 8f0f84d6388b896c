use std::str::FromStr;

use crate::config::ConfigError;

/// Thresholds and confidence bounds of the decision cascade.
///
/// `Default` reproduces the reference behaviour exactly. Every field can be
/// overridden through `FACTLENS_POLICY_<FIELD_NAME>` (see [`DecisionPolicy::from_env`]).
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionPolicy {
    /// Fake-news indicator count above which content is called Fake.
    pub fake_indicator_threshold: usize,
    /// Legitimate indicator count above which unverified content is forced True.
    pub strong_legitimate_threshold: usize,
    /// Legitimate indicator count above which unverified True gets a moderate boost.
    pub moderate_legitimate_threshold: usize,
    /// Fake-news indicator count above which a NEGATIVE classifier label means Fake.
    pub negative_fake_indicator_threshold: usize,

    pub short_circuit_confidence: f64,

    pub verified_base_confidence: f64,
    pub verified_fake_penalty: f64,
    pub verified_fake_floor: f64,
    pub verified_true_boost: f64,
    pub verified_true_cap: f64,
    pub verified_military_confidence: f64,
    pub verified_business_confidence: f64,
    pub verified_general_boost: f64,

    pub unverified_fake_boost: f64,
    pub strong_legitimate_boost: f64,
    pub strong_legitimate_cap: f64,
    pub moderate_legitimate_boost: f64,
    pub moderate_legitimate_cap: f64,
    pub major_country_business_confidence: f64,
    pub legitimate_refinement_boost: f64,
    pub legitimate_refinement_cap: f64,
    pub unverified_penalty: f64,

    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            fake_indicator_threshold: 3,
            strong_legitimate_threshold: 4,
            moderate_legitimate_threshold: 2,
            negative_fake_indicator_threshold: 1,

            short_circuit_confidence: 99.0,

            verified_base_confidence: 95.0,
            verified_fake_penalty: 20.0,
            verified_fake_floor: 60.0,
            verified_true_boost: 10.0,
            verified_true_cap: 98.0,
            verified_military_confidence: 98.0,
            verified_business_confidence: 95.0,
            verified_general_boost: 20.0,

            unverified_fake_boost: 20.0,
            strong_legitimate_boost: 30.0,
            strong_legitimate_cap: 95.0,
            moderate_legitimate_boost: 20.0,
            moderate_legitimate_cap: 90.0,
            major_country_business_confidence: 85.0,
            legitimate_refinement_boost: 25.0,
            legitimate_refinement_cap: 90.0,
            unverified_penalty: 10.0,

            min_confidence: 0.0,
            max_confidence: 100.0,
        }
    }
}

const ENV_PREFIX: &str = "FACTLENS_POLICY_";

macro_rules! override_from_env {
    ($policy:ident; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = read_override(stringify!($field))? {
                $policy.$field = value;
            }
        )+
    };
}

impl DecisionPolicy {
    /// Defaults with any `FACTLENS_POLICY_*` overrides applied, then validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut policy = Self::default();

        override_from_env!(policy;
            fake_indicator_threshold,
            strong_legitimate_threshold,
            moderate_legitimate_threshold,
            negative_fake_indicator_threshold,
            short_circuit_confidence,
            verified_base_confidence,
            verified_fake_penalty,
            verified_fake_floor,
            verified_true_boost,
            verified_true_cap,
            verified_military_confidence,
            verified_business_confidence,
            verified_general_boost,
            unverified_fake_boost,
            strong_legitimate_boost,
            strong_legitimate_cap,
            moderate_legitimate_boost,
            moderate_legitimate_cap,
            major_country_business_confidence,
            legitimate_refinement_boost,
            legitimate_refinement_cap,
            unverified_penalty,
            min_confidence,
            max_confidence,
        );

        policy.validate()?;
        Ok(policy)
    }

    /// Checks that bounds are ordered and every fixed confidence lies inside them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, value: f64, reason: &str| ConfigError::InvalidPolicy {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if !(0.0..=100.0).contains(&self.min_confidence) {
            return Err(invalid(
                "min_confidence",
                self.min_confidence,
                "must be within [0, 100]",
            ));
        }
        if !(self.min_confidence..=100.0).contains(&self.max_confidence) {
            return Err(invalid(
                "max_confidence",
                self.max_confidence,
                "must be within [min_confidence, 100]",
            ));
        }

        let bounded = [
            ("short_circuit_confidence", self.short_circuit_confidence),
            ("verified_base_confidence", self.verified_base_confidence),
            ("verified_fake_floor", self.verified_fake_floor),
            ("verified_true_cap", self.verified_true_cap),
            ("verified_military_confidence", self.verified_military_confidence),
            ("verified_business_confidence", self.verified_business_confidence),
            ("strong_legitimate_cap", self.strong_legitimate_cap),
            ("moderate_legitimate_cap", self.moderate_legitimate_cap),
            (
                "major_country_business_confidence",
                self.major_country_business_confidence,
            ),
            ("legitimate_refinement_cap", self.legitimate_refinement_cap),
        ];
        for (field, value) in bounded {
            if !(self.min_confidence..=self.max_confidence).contains(&value) {
                return Err(invalid(
                    field,
                    value,
                    "must be within [min_confidence, max_confidence]",
                ));
            }
        }

        let adjustments = [
            ("verified_fake_penalty", self.verified_fake_penalty),
            ("verified_true_boost", self.verified_true_boost),
            ("verified_general_boost", self.verified_general_boost),
            ("unverified_fake_boost", self.unverified_fake_boost),
            ("strong_legitimate_boost", self.strong_legitimate_boost),
            ("moderate_legitimate_boost", self.moderate_legitimate_boost),
            ("legitimate_refinement_boost", self.legitimate_refinement_boost),
            ("unverified_penalty", self.unverified_penalty),
        ];
        for (field, value) in adjustments {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, value, "must be a non-negative number"));
            }
        }

        Ok(())
    }

    /// Clamps a confidence into `[min_confidence, max_confidence]`.
    pub fn clamp(&self, confidence: f64) -> f64 {
        if confidence.is_nan() {
            return self.min_confidence;
        }
        confidence.clamp(self.min_confidence, self.max_confidence)
    }
}

fn read_override<T: FromStr>(field: &'static str) -> Result<Option<T>, ConfigError> {
    let name = format!("{ENV_PREFIX}{}", field.to_ascii_uppercase());
    match std::env::var(&name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPolicy {
                field,
                value: raw.clone(),
                reason: "not a valid number".to_string(),
            }),
        Err(_) => Ok(None),
    }
}
