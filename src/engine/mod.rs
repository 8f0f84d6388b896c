//! Decision engine.
//!
//! Maps a [`SignalBundle`] to a [`Verdict`] by walking the ordered rule tables
//! in [`rules`]: a short-circuit check first, then the verified or unverified
//! cascade, then that branch's refinement. Thresholds live in [`DecisionPolicy`].

pub mod policy;
pub mod rules;

#[cfg(test)]
mod tests;

pub use policy::DecisionPolicy;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signals::SignalBundle;
use rules::{SHORT_CIRCUIT, UNVERIFIED, UNVERIFIED_REFINEMENTS, VERIFIED, VERIFIED_REFINEMENTS};

/// Final credibility label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    True,
    Fake,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::True => "True",
            Label::Fake => "Fake",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    ShortCircuit,
    Verified,
    Unverified,
}

/// Which rules fired. Logged, and used by the explanation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionTrace {
    pub branch: Branch,
    pub rule: &'static str,
    pub refinement: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub label: Label,
    /// Percentage in `[0, 100]`.
    pub confidence: f64,
    pub trace: DecisionTrace,
}

#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    policy: DecisionPolicy,
}

impl DecisionEngine {
    pub fn new(policy: DecisionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    pub fn decide(&self, signals: &SignalBundle) -> Verdict {
        let policy = &self.policy;

        if let Some(rule) = SHORT_CIRCUIT.iter().find(|rule| (rule.when)(signals, policy)) {
            return Verdict {
                label: rule.label,
                confidence: policy.clamp((rule.confidence)(policy.max_confidence, policy)),
                trace: DecisionTrace {
                    branch: Branch::ShortCircuit,
                    rule: rule.name,
                    refinement: None,
                },
            };
        }

        let (branch, base, cascade, refinements) = if signals.is_verified {
            (
                Branch::Verified,
                policy.verified_base_confidence,
                &VERIFIED,
                &VERIFIED_REFINEMENTS,
            )
        } else {
            (
                Branch::Unverified,
                signals.classifier_score * 100.0,
                &UNVERIFIED,
                &UNVERIFIED_REFINEMENTS,
            )
        };

        let rule = cascade.select(signals, policy);
        let refinement = refinements.select(signals, policy);

        let label = refinement.force_label.unwrap_or(rule.label);
        let confidence = (refinement.confidence)((rule.confidence)(base, policy), policy);

        Verdict {
            label,
            confidence: policy.clamp(confidence),
            trace: DecisionTrace {
                branch,
                rule: rule.name,
                refinement: Some(refinement.name),
            },
        }
    }
}
