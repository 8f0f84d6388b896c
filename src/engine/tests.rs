use super::*;
use crate::classifier::SentimentLabel;
use crate::signals::SignalBundle;
use serial_test::serial;
use std::env;

fn unverified(score: f64) -> SignalBundle {
    SignalBundle {
        classifier_score: score,
        ..Default::default()
    }
}

fn verified() -> SignalBundle {
    SignalBundle {
        is_verified: true,
        ..Default::default()
    }
}

fn decide(signals: &SignalBundle) -> Verdict {
    DecisionEngine::default().decide(signals)
}

mod short_circuit_tests {
    use super::*;

    #[test]
    fn test_obviously_fake_wins_over_verification() {
        let signals = SignalBundle {
            is_obviously_fake: true,
            ..verified()
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence, 99.0);
        assert_eq!(verdict.trace.branch, Branch::ShortCircuit);
        assert_eq!(verdict.trace.rule, "obviously_fake");
        assert_eq!(verdict.trace.refinement, None);
    }

    #[test]
    fn test_satirical() {
        let signals = SignalBundle {
            is_satirical: true,
            legitimate_indicator_count: 10,
            ..unverified(0.9)
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence, 99.0);
        assert_eq!(verdict.trace.rule, "satirical");
    }

    #[test]
    fn test_obviously_fake_listed_before_satirical() {
        let signals = SignalBundle {
            is_obviously_fake: true,
            is_satirical: true,
            ..Default::default()
        };

        assert_eq!(decide(&signals).trace.rule, "obviously_fake");
    }
}

mod verified_tests {
    use super::*;

    #[test]
    fn test_general_topic_reaches_ceiling() {
        let verdict = decide(&verified());

        assert_eq!(verdict.label, Label::True);
        assert_eq!(verdict.confidence, 100.0);
        assert_eq!(verdict.trace.branch, Branch::Verified);
        assert_eq!(verdict.trace.rule, "verified_default");
        assert_eq!(verdict.trace.refinement, Some("verified_general"));
    }

    #[test]
    fn test_cascade_before_refinement() {
        let policy = DecisionPolicy::default();
        let rule = rules::VERIFIED.select(&verified(), &policy);

        assert_eq!(rule.label, Label::True);
        assert_eq!((rule.confidence)(policy.verified_base_confidence, &policy), 98.0);
    }

    #[test]
    fn test_many_fake_indicators() {
        let signals = SignalBundle {
            fake_indicator_count: 4,
            ..verified()
        };

        let verdict = decide(&signals);

        // max(60, 95 - 20) = 75, then general +20
        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence, 95.0);
        assert_eq!(verdict.trace.rule, "verified_fake_indicators");
    }

    #[test]
    fn test_fake_threshold_is_exclusive() {
        let signals = SignalBundle {
            fake_indicator_count: 3,
            ..verified()
        };

        assert_eq!(decide(&signals).label, Label::True);
    }

    #[test]
    fn test_military_refinement() {
        let signals = SignalBundle {
            is_military_topic: true,
            is_business_topic: true,
            fake_indicator_count: 5,
            ..verified()
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence, 98.0);
        assert_eq!(verdict.trace.refinement, Some("verified_military"));
    }

    #[test]
    fn test_business_refinement() {
        let signals = SignalBundle {
            is_business_topic: true,
            ..verified()
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::True);
        assert_eq!(verdict.confidence, 95.0);
        assert_eq!(verdict.trace.refinement, Some("verified_business"));
    }

    #[test]
    fn test_classifier_output_ignored() {
        let signals = SignalBundle {
            classifier_label: SentimentLabel::Negative,
            classifier_score: 0.01,
            fake_indicator_count: 2,
            ..verified()
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::True);
        assert_eq!(verdict.confidence, 100.0);
    }
}

mod unverified_tests {
    use super::*;

    #[test]
    fn test_default_applies_penalty() {
        let verdict = decide(&unverified(0.8));

        assert_eq!(verdict.label, Label::True);
        assert!((verdict.confidence - 70.0).abs() < 1e-9);
        assert_eq!(verdict.trace.branch, Branch::Unverified);
        assert_eq!(verdict.trace.rule, "unverified_default");
        assert_eq!(verdict.trace.refinement, Some("unverified_penalty"));
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let verdict = decide(&unverified(0.05));

        assert_eq!(verdict.confidence, 0.0);
    }

    #[test]
    fn test_many_fake_indicators() {
        let signals = SignalBundle {
            fake_indicator_count: 4,
            ..unverified(0.9)
        };

        let verdict = decide(&signals);

        // min(90 + 20, 100) = 100, then -10
        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.confidence, 90.0);
        assert_eq!(verdict.trace.rule, "unverified_fake_indicators");
    }

    #[test]
    fn test_strong_legitimate_counts_twice() {
        let signals = SignalBundle {
            legitimate_indicator_count: 5,
            ..unverified(0.5)
        };

        let verdict = decide(&signals);

        // min(50 + 30, 95) = 80, then min(80 + 25, 90)
        assert_eq!(verdict.label, Label::True);
        assert_eq!(verdict.confidence, 90.0);
        assert_eq!(verdict.trace.rule, "unverified_strong_legitimate");
        assert_eq!(verdict.trace.refinement, Some("strong_legitimate"));
    }

    #[test]
    fn test_negative_tone_with_fake_indicators() {
        let signals = SignalBundle {
            classifier_label: SentimentLabel::Negative,
            fake_indicator_count: 2,
            ..unverified(0.9)
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::Fake);
        assert!((verdict.confidence - 80.0).abs() < 1e-9);
        assert_eq!(verdict.trace.rule, "unverified_negative_tone");
    }

    #[test]
    fn test_negative_tone_needs_more_than_one_indicator() {
        let signals = SignalBundle {
            classifier_label: SentimentLabel::Negative,
            fake_indicator_count: 1,
            ..unverified(0.9)
        };

        assert_eq!(decide(&signals).label, Label::True);
    }

    #[test]
    fn test_moderate_legitimate() {
        let signals = SignalBundle {
            legitimate_indicator_count: 3,
            ..unverified(0.5)
        };

        let verdict = decide(&signals);

        // min(50 + 20, 90) = 70, then -10
        assert_eq!(verdict.label, Label::True);
        assert!((verdict.confidence - 60.0).abs() < 1e-9);
        assert_eq!(verdict.trace.rule, "unverified_moderate_legitimate");
    }

    #[test]
    fn test_moderate_legitimate_cap() {
        let signals = SignalBundle {
            legitimate_indicator_count: 4,
            ..unverified(0.85)
        };

        // min(85 + 20, 90) = 90, then -10
        assert_eq!(decide(&signals).confidence, 80.0);
    }

    #[test]
    fn test_business_major_country_overrides_fake() {
        let signals = SignalBundle {
            fake_indicator_count: 6,
            is_business_topic: true,
            mentions_major_country: true,
            ..unverified(0.3)
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.label, Label::True);
        assert_eq!(verdict.confidence, 85.0);
        assert_eq!(verdict.trace.rule, "unverified_fake_indicators");
        assert_eq!(verdict.trace.refinement, Some("business_major_country"));
    }

    #[test]
    fn test_business_without_major_country_is_penalised() {
        let signals = SignalBundle {
            is_business_topic: true,
            ..unverified(0.6)
        };

        let verdict = decide(&signals);

        assert_eq!(verdict.trace.refinement, Some("unverified_penalty"));
        assert!((verdict.confidence - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_strong_legitimate_refinement_forces_true() {
        let signals = SignalBundle {
            fake_indicator_count: 4,
            legitimate_indicator_count: 5,
            ..unverified(0.4)
        };

        let verdict = decide(&signals);

        // Fake at min(40 + 20, 100) = 60, then forced True at min(60 + 25, 90)
        assert_eq!(verdict.trace.rule, "unverified_fake_indicators");
        assert_eq!(verdict.label, Label::True);
        assert!((verdict.confidence - 85.0).abs() < 1e-9);
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_confidence_always_in_range() {
        let engine = DecisionEngine::default();
        let scores = [0.0, 0.05, 0.5, 0.99, 1.0];
        let counts = [0, 1, 2, 3, 4, 5, 12];

        for &score in &scores {
            for &fake in &counts {
                for &legit in &counts {
                    for flags in 0u8..32 {
                        let signals = SignalBundle {
                            classifier_score: score,
                            fake_indicator_count: fake,
                            legitimate_indicator_count: legit,
                            is_verified: flags & 1 != 0,
                            is_military_topic: flags & 2 != 0,
                            is_business_topic: flags & 4 != 0,
                            mentions_major_country: flags & 8 != 0,
                            classifier_label: if flags & 16 != 0 {
                                SentimentLabel::Negative
                            } else {
                                SentimentLabel::Positive
                            },
                            ..Default::default()
                        };

                        let verdict = engine.decide(&signals);
                        assert!(
                            (0.0..=100.0).contains(&verdict.confidence),
                            "out of range for {signals:?}: {}",
                            verdict.confidence
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let signals = SignalBundle {
            legitimate_indicator_count: 3,
            is_business_topic: true,
            ..unverified(0.72)
        };
        let engine = DecisionEngine::default();

        assert_eq!(engine.decide(&signals), engine.decide(&signals));
    }

    #[test]
    fn test_custom_policy_threshold() {
        let policy = DecisionPolicy {
            fake_indicator_threshold: 0,
            ..Default::default()
        };
        let signals = SignalBundle {
            fake_indicator_count: 1,
            ..unverified(0.5)
        };

        let verdict = DecisionEngine::new(policy).decide(&signals);

        assert_eq!(verdict.label, Label::Fake);
        assert_eq!(verdict.trace.rule, "unverified_fake_indicators");
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&Label::True).unwrap(), "\"True\"");
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"Fake\"");
        assert_eq!(Label::Fake.to_string(), "Fake");
    }
}

mod policy_tests {
    use super::*;

    fn clear_policy_env() {
        // SAFETY: Test code only, we accept the thread-safety risk in tests.
        unsafe {
            env::remove_var("FACTLENS_POLICY_FAKE_INDICATOR_THRESHOLD");
            env::remove_var("FACTLENS_POLICY_SHORT_CIRCUIT_CONFIDENCE");
            env::remove_var("FACTLENS_POLICY_UNVERIFIED_PENALTY");
            env::remove_var("FACTLENS_POLICY_MAX_CONFIDENCE");
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(DecisionPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let policy = DecisionPolicy {
            verified_true_cap: 120.0,
            ..Default::default()
        };

        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("verified_true_cap"));
    }

    #[test]
    fn test_validate_rejects_negative_adjustment() {
        let policy = DecisionPolicy {
            unverified_penalty: -5.0,
            ..Default::default()
        };

        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_clamp() {
        let policy = DecisionPolicy::default();

        assert_eq!(policy.clamp(150.0), 100.0);
        assert_eq!(policy.clamp(-3.0), 0.0);
        assert_eq!(policy.clamp(f64::NAN), 0.0);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_policy_env();

        // SAFETY: Test code only, we accept the thread-safety risk in tests.
        unsafe {
            env::set_var("FACTLENS_POLICY_FAKE_INDICATOR_THRESHOLD", "5");
            env::set_var("FACTLENS_POLICY_UNVERIFIED_PENALTY", "2.5");
        }

        let policy = DecisionPolicy::from_env().expect("should parse");
        clear_policy_env();

        assert_eq!(policy.fake_indicator_threshold, 5);
        assert_eq!(policy.unverified_penalty, 2.5);
        assert_eq!(policy.short_circuit_confidence, 99.0);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_policy_env();

        // SAFETY: Test code only, we accept the thread-safety risk in tests.
        unsafe { env::set_var("FACTLENS_POLICY_SHORT_CIRCUIT_CONFIDENCE", "very") };

        let result = DecisionPolicy::from_env();
        clear_policy_env();

        let err = result.unwrap_err();
        assert!(matches!(err, crate::config::ConfigError::InvalidPolicy { .. }));
    }

    #[test]
    #[serial]
    fn test_from_env_validates() {
        clear_policy_env();

        // SAFETY: Test code only, we accept the thread-safety risk in tests.
        unsafe { env::set_var("FACTLENS_POLICY_MAX_CONFIDENCE", "90") };

        let result = DecisionPolicy::from_env();
        clear_policy_env();

        assert!(result.is_err());
    }
}
