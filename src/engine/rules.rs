//! Ordered rule tables for the decision cascade.
//!
//! Each table is evaluated top to bottom and the first rule whose predicate
//! holds wins. Cascades and refinement tables always end in a fallback, so
//! evaluation never comes up empty.

use super::{DecisionPolicy, Label};
use crate::classifier::SentimentLabel;
use crate::signals::SignalBundle;

pub type Predicate = fn(&SignalBundle, &DecisionPolicy) -> bool;
pub type Adjustment = fn(f64, &DecisionPolicy) -> f64;

/// Picks a label and a confidence derived from the branch's base confidence.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: Predicate,
    pub label: Label,
    pub confidence: Adjustment,
}

/// Adjusts the confidence of a cascade result; may override the label.
#[derive(Clone, Copy)]
pub struct Refinement {
    pub name: &'static str,
    pub when: Predicate,
    pub force_label: Option<Label>,
    pub confidence: Adjustment,
}

pub struct Cascade {
    pub rules: &'static [Rule],
    pub fallback: Rule,
}

impl Cascade {
    pub fn select(&self, signals: &SignalBundle, policy: &DecisionPolicy) -> &Rule {
        self.rules
            .iter()
            .find(|rule| (rule.when)(signals, policy))
            .unwrap_or(&self.fallback)
    }
}

pub struct Refinements {
    pub rules: &'static [Refinement],
    pub fallback: Refinement,
}

impl Refinements {
    pub fn select(&self, signals: &SignalBundle, policy: &DecisionPolicy) -> &Refinement {
        self.rules
            .iter()
            .find(|rule| (rule.when)(signals, policy))
            .unwrap_or(&self.fallback)
    }
}

fn always(_: &SignalBundle, _: &DecisionPolicy) -> bool {
    true
}

fn keep(confidence: f64, _: &DecisionPolicy) -> f64 {
    confidence
}

fn short_circuit(_: f64, policy: &DecisionPolicy) -> f64 {
    policy.short_circuit_confidence
}

fn many_fake_indicators(signals: &SignalBundle, policy: &DecisionPolicy) -> bool {
    signals.fake_indicator_count > policy.fake_indicator_threshold
}

fn strong_legitimate(signals: &SignalBundle, policy: &DecisionPolicy) -> bool {
    signals.legitimate_indicator_count > policy.strong_legitimate_threshold
}

fn moderate_legitimate(signals: &SignalBundle, policy: &DecisionPolicy) -> bool {
    signals.legitimate_indicator_count > policy.moderate_legitimate_threshold
}

/// Applied to every analysis before the verified/unverified split.
pub const SHORT_CIRCUIT: &[Rule] = &[
    Rule {
        name: "obviously_fake",
        when: |signals, _| signals.is_obviously_fake,
        label: Label::Fake,
        confidence: short_circuit,
    },
    Rule {
        name: "satirical",
        when: |signals, _| signals.is_satirical,
        label: Label::Fake,
        confidence: short_circuit,
    },
];

pub static VERIFIED: Cascade = Cascade {
    rules: &[Rule {
        name: "verified_fake_indicators",
        when: many_fake_indicators,
        label: Label::Fake,
        confidence: |base, policy| {
            (base - policy.verified_fake_penalty).max(policy.verified_fake_floor)
        },
    }],
    fallback: Rule {
        name: "verified_default",
        when: always,
        label: Label::True,
        confidence: |base, policy| (base + policy.verified_true_boost).min(policy.verified_true_cap),
    },
};

pub static VERIFIED_REFINEMENTS: Refinements = Refinements {
    rules: &[
        Refinement {
            name: "verified_military",
            when: |signals, _| signals.is_military_topic,
            force_label: None,
            confidence: |_, policy| policy.verified_military_confidence,
        },
        Refinement {
            name: "verified_business",
            when: |signals, _| signals.is_business_topic,
            force_label: None,
            confidence: |_, policy| policy.verified_business_confidence,
        },
    ],
    fallback: Refinement {
        name: "verified_general",
        when: always,
        force_label: None,
        confidence: |confidence, policy| {
            (confidence + policy.verified_general_boost).min(policy.max_confidence)
        },
    },
};

pub static UNVERIFIED: Cascade = Cascade {
    rules: &[
        Rule {
            name: "unverified_fake_indicators",
            when: many_fake_indicators,
            label: Label::Fake,
            confidence: |base, policy| {
                (base + policy.unverified_fake_boost).min(policy.max_confidence)
            },
        },
        Rule {
            name: "unverified_strong_legitimate",
            when: strong_legitimate,
            label: Label::True,
            confidence: |base, policy| {
                (base + policy.strong_legitimate_boost).min(policy.strong_legitimate_cap)
            },
        },
        Rule {
            name: "unverified_negative_tone",
            when: |signals, policy| {
                signals.classifier_label == SentimentLabel::Negative
                    && signals.fake_indicator_count > policy.negative_fake_indicator_threshold
            },
            label: Label::Fake,
            confidence: keep,
        },
        Rule {
            name: "unverified_moderate_legitimate",
            when: moderate_legitimate,
            label: Label::True,
            confidence: |base, policy| {
                (base + policy.moderate_legitimate_boost).min(policy.moderate_legitimate_cap)
            },
        },
    ],
    fallback: Rule {
        name: "unverified_default",
        when: always,
        label: Label::True,
        confidence: keep,
    },
};

pub static UNVERIFIED_REFINEMENTS: Refinements = Refinements {
    rules: &[
        Refinement {
            name: "business_major_country",
            when: |signals, _| signals.is_business_topic && signals.mentions_major_country,
            force_label: Some(Label::True),
            confidence: |_, policy| policy.major_country_business_confidence,
        },
        Refinement {
            name: "strong_legitimate",
            when: strong_legitimate,
            force_label: Some(Label::True),
            confidence: |confidence, policy| {
                (confidence + policy.legitimate_refinement_boost)
                    .min(policy.legitimate_refinement_cap)
            },
        },
    ],
    fallback: Refinement {
        name: "unverified_penalty",
        when: always,
        force_label: None,
        confidence: |confidence, policy| {
            (confidence - policy.unverified_penalty).max(policy.min_confidence)
        },
    },
};
