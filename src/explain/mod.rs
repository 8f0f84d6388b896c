//! Explanation generator.
//!
//! Assembles the human-readable rationale from the verdict and its trace. Clause
//! order is fixed and the output always ends with the confidence sentence, so it
//! is never empty.


use std::fmt::Write;

use crate::engine::{Branch, Verdict};
use crate::metadata::SourceMetadata;
use crate::signals::{SignalBundle, UNKNOWN_COUNTRY};

const SHORT_CIRCUIT_CLAUSE: &str =
    "This content contains patterns typical of satirical or obviously fake news. ";
const SATIRICAL_CLAUSE: &str =
    "The content appears to be satirical in nature, using common satirical indicators. ";
const VERIFIED_FALLBACK_SOURCE: &str = "a verified source";
const MILITARY_CLAUSE: &str = "This is a military/security news report from a verified source. ";
const BUSINESS_CLAUSE: &str =
    "This is a business/economics news report from a verified source. ";
const MAJOR_COUNTRY_BUSINESS_CLAUSE: &str =
    "This appears to be a business news report about major countries. ";
const STRONG_LEGITIMATE_CLAUSE: &str =
    "The content contains multiple strong indicators of legitimate news reporting. ";
const UNVERIFIED_CLAUSE: &str = "from an unverified source. ";

pub fn explain(verdict: &Verdict, signals: &SignalBundle, metadata: &SourceMetadata) -> String {
    let mut out = String::new();

    if verdict.trace.branch == Branch::ShortCircuit {
        out.push_str(SHORT_CIRCUIT_CLAUSE);
        if signals.is_satirical {
            out.push_str(SATIRICAL_CLAUSE);
        }
    } else {
        let _ = write!(
            out,
            "This content appears to be {} news ",
            verdict.label.as_str().to_lowercase()
        );
        attribution(&mut out, verdict, metadata);
        findings(&mut out, signals);
    }

    let _ = write!(
        out,
        "The analysis is {:.1}% confident in this assessment.",
        verdict.confidence
    );
    out
}

/// Source attribution, mirroring the refinement that fired.
fn attribution(out: &mut String, verdict: &Verdict, metadata: &SourceMetadata) {
    let refinement = verdict.trace.refinement.unwrap_or_default();

    if verdict.trace.branch == Branch::Verified {
        let source = metadata
            .domain
            .as_deref()
            .unwrap_or(VERIFIED_FALLBACK_SOURCE);
        let _ = write!(out, "from {source}. ");
        match refinement {
            "verified_military" => out.push_str(MILITARY_CLAUSE),
            "verified_business" => out.push_str(BUSINESS_CLAUSE),
            _ => {}
        }
        return;
    }

    out.push_str(match refinement {
        "business_major_country" => MAJOR_COUNTRY_BUSINESS_CLAUSE,
        "strong_legitimate" => STRONG_LEGITIMATE_CLAUSE,
        _ => UNVERIFIED_CLAUSE,
    });
}

fn findings(out: &mut String, signals: &SignalBundle) {
    if signals.fake_indicator_count > 0 {
        let _ = write!(
            out,
            "Found {} potential fake news indicators. ",
            signals.fake_indicator_count
        );
    }
    if signals.legitimate_indicator_count > 0 {
        let _ = write!(
            out,
            "Found {} indicators of legitimate news reporting. ",
            signals.legitimate_indicator_count
        );
    }
    if !signals.keywords.is_empty() {
        let _ = write!(out, "Key topics include: {}. ", signals.keywords.join(", "));
    }
    if signals.country != UNKNOWN_COUNTRY {
        let _ = write!(out, "The news is from {}. ", signals.country);
    }
}
