//! Certainty-Factor Rule Matching
//!
//! ## Scoring
//!
//! ```text
//! strength(rule) = min(mu[acidity], mu[nutrient], mu[humidity], mu[rainfall])
//! score(rule)    = strength(rule) × cf(rule)
//! confidence     = max score × 100
//! ```
//!
//! The knowledge base is scanned in order and a rule replaces the current
//! best only with a strictly greater score, so the earliest rule wins ties.
//!
//! ## Bad Data
//!
//! - Unknown symbolic term: degree `0.0` and a warning; the rule still scores
//! - Missing condition: the rule is skipped with a warning
//! - Nothing selectable (empty base, every rule skipped): the placeholder
//!   diagnosis, status `"Error"`, confidence `0.0`

use alloc::{borrow::Cow, vec::Vec};
use core::cmp::Ordering;

use crate::{
    constants::diagnosis::{LOW_CONFIDENCE_PCT, SYMBOLIC_TERMS},
    fuzzify::{InputVariable, Term, TermDegrees},
};

use super::knowledge::KnowledgeRule;

/// Map a knowledge-base symbol to its linguistic term
pub fn resolve_symbol(variable: InputVariable, symbol: &str) -> Option<Term> {
    SYMBOLIC_TERMS
        .iter()
        .find(|(v, s, _)| *v == variable && *s == symbol)
        .map(|(_, _, term)| *term)
}

/// Fuzzy AND of a rule's four conditions, `None` if a condition is missing
pub fn firing_strength(rule: &KnowledgeRule, degrees: &TermDegrees) -> Option<f32> {
    let symbols = match rule.conditions.symbols() {
        Ok(symbols) => symbols,
        Err(variable) => {
            log_warn!("knowledge rule '{}' has no {:?} condition, skipped", rule.id, variable);
            return None;
        }
    };

    let strength = symbols
        .iter()
        .map(|(variable, symbol)| match resolve_symbol(*variable, symbol) {
            Some(term) => degrees.get(term),
            None => {
                log_warn!(
                    "knowledge rule '{}': unknown {:?} term '{}', treated as 0",
                    rule.id, variable, symbol
                );
                0.0
            }
        })
        .fold(1.0, f32::min);

    Some(strength)
}

/// Firing strength weighted by the rule's certainty factor
pub fn rule_score(rule: &KnowledgeRule, degrees: &TermDegrees) -> Option<f32> {
    firing_strength(rule, degrees).map(|strength| strength * rule.certainty_factor())
}

/// Score of one knowledge-base rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleScore {
    /// Position of the rule in the knowledge base
    pub index: usize,
    /// Firing strength × certainty factor
    pub score: f32,
}

/// Selected rule and the belief in it
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis<'kb> {
    rule: Cow<'kb, KnowledgeRule>,
    index: Option<usize>,
    confidence_pct: f32,
}

impl<'kb> Diagnosis<'kb> {
    fn placeholder() -> Self {
        Self {
            rule: Cow::Owned(KnowledgeRule::placeholder()),
            index: None,
            confidence_pct: 0.0,
        }
    }

    /// Selected rule, or the placeholder
    pub fn rule(&self) -> &KnowledgeRule {
        &self.rule
    }

    /// Position of the selected rule in the knowledge base
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Belief in the diagnosis, 0-100
    pub fn confidence_pct(&self) -> f32 {
        self.confidence_pct
    }

    /// Field status text of the selected rule
    pub fn status(&self) -> &str {
        &self.rule.outcome.status
    }

    /// Remediation steps of the selected rule
    pub fn action_steps(&self) -> &[alloc::string::String] {
        &self.rule.outcome.action_steps
    }

    /// True when no rule could be selected
    pub fn is_placeholder(&self) -> bool {
        self.index.is_none() && self.rule.is_placeholder()
    }

    /// True when confidence falls below [`LOW_CONFIDENCE_PCT`]
    pub fn is_low_confidence(&self) -> bool {
        self.confidence_pct < LOW_CONFIDENCE_PCT
    }
}

/// Pick the best-supported rule of the knowledge base
pub fn match_rule<'kb>(degrees: &TermDegrees, knowledge_base: &'kb [KnowledgeRule]) -> Diagnosis<'kb> {
    let mut best: Option<usize> = None;
    let mut best_score = f32::NEG_INFINITY;

    for (index, rule) in knowledge_base.iter().enumerate() {
        let Some(score) = rule_score(rule, degrees) else {
            continue;
        };

        if score > best_score {
            best = Some(index);
            best_score = score;
        }
    }

    match best {
        Some(index) => Diagnosis {
            rule: Cow::Borrowed(&knowledge_base[index]),
            index: Some(index),
            confidence_pct: best_score * 100.0,
        },
        None => {
            log_warn!("no usable rule among {} knowledge-base entries", knowledge_base.len());
            Diagnosis::placeholder()
        }
    }
}

/// Scores of every usable rule, best first; ties keep knowledge-base order
pub fn rank_rules(degrees: &TermDegrees, knowledge_base: &[KnowledgeRule]) -> Vec<RuleScore> {
    let mut scores: Vec<RuleScore> = knowledge_base
        .iter()
        .enumerate()
        .filter_map(|(index, rule)| rule_score(rule, degrees).map(|score| RuleScore { index, score }))
        .collect();

    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scores
}
