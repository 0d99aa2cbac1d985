//! Rule-Based Diagnosis with Certainty Factors
//!
//! Runs alongside the Mamdani engine on the same fuzzified inputs. Where the
//! engine produces continuous doses, the diagnosis picks one named condition
//! from an externally supplied knowledge base and reports how strongly the
//! current readings support it.
//!
//! ```rust
//! use paddyguard_core::{fuzzify, match_rule, KnowledgeRule, RuleConditions};
//!
//! let mut rule = KnowledgeRule::default();
//! rule.id = "R01".into();
//! rule.conditions = RuleConditions::new("masam", "kurang", "kering", "cerah");
//! rule.outcome.certainty_factor = 0.9;
//! let knowledge_base = vec![rule];
//!
//! let diagnosis = match_rule(&fuzzify(250.0, 5.5, 20.0, false), &knowledge_base);
//! assert_eq!(diagnosis.rule().id, "R01");
//! assert!((diagnosis.confidence_pct() - 90.0).abs() < 1e-4);
//! ```

mod knowledge;
mod matcher;

pub use knowledge::{KnowledgeRule, RuleConditions, RuleOutcome};
pub use matcher::{firing_strength, match_rule, rank_rules, resolve_symbol, rule_score, Diagnosis, RuleScore};
