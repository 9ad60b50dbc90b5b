//! Advisory rule engine for inline edits.
//!
//! A fixed table of pure threshold rules is evaluated when an edit session
//! commits. The first matching rule wins and produces a transient advisory
//! message; advisories never block the commit.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Field names the performance-target rule applies to.
const TARGET_FIELDS: &[&str] = &["performance_target", "target"];

/// Field names the date-proximity rule applies to.
const DUE_DATE_FIELDS: &[&str] = &["due_date"];

/// Percent targets above this are flagged as likely unrealistic.
const TARGET_PERCENT_CEILING: i64 = 50;

/// Due dates closer than this many days are flagged as tight.
const DUE_DATE_WARNING_DAYS: i64 = 30;

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").expect("valid regex"));

/// A non-blocking warning produced by a rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub message: String,
}

/// One advisory rule: a field filter plus a pure check over the candidate
/// value. `today` is threaded through so date rules stay deterministic.
struct AdvisoryRule {
    applies_to: &'static [&'static str],
    check: fn(&str, NaiveDate) -> Option<String>,
}

impl AdvisoryRule {
    fn matches(&self, field: &str) -> bool {
        self.applies_to.contains(&field)
    }
}

fn check_percent_target(value: &str, _today: NaiveDate) -> Option<String> {
    let caps = PERCENT_RE.captures(value)?;
    let percent: i64 = caps[1].parse().ok()?;
    if percent > TARGET_PERCENT_CEILING {
        Some(format!(
            "A {}% target seems unrealistic. Industry benchmarks suggest targets \
             between 10-30% are more achievable. Consider breaking this into \
             smaller milestones.",
            percent
        ))
    } else {
        None
    }
}

fn check_due_date_proximity(value: &str, today: NaiveDate) -> Option<String> {
    let due = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let days = (due - today).num_days();
    if days < DUE_DATE_WARNING_DAYS {
        Some(format!(
            "This deadline is very tight ({} days). Based on similar projects, \
             consider extending by 2-4 weeks to ensure quality delivery.",
            days
        ))
    } else {
        None
    }
}

/// Evaluates the static rule table against a committed `(field, value)` pair.
///
/// Pure: the same inputs always produce the same output, and records are
/// never touched. First-match-wins; rules are not combined.
pub struct AdvisoryEngine {
    rules: Vec<AdvisoryRule>,
}

impl AdvisoryEngine {
    /// Engine with the built-in rule set.
    pub fn with_default_rules() -> Self {
        Self {
            rules: vec![
                AdvisoryRule {
                    applies_to: TARGET_FIELDS,
                    check: check_percent_target,
                },
                AdvisoryRule {
                    applies_to: DUE_DATE_FIELDS,
                    check: check_due_date_proximity,
                },
            ],
        }
    }

    /// Run all rules matching `field` and return the first message, if any.
    pub fn evaluate(&self, field: &str, value: &str, today: NaiveDate) -> Option<Advisory> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(field))
            .find_map(|rule| (rule.check)(value, today))
            .map(|message| Advisory { message })
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_high_percent_target_flagged() {
        let engine = AdvisoryEngine::with_default_rules();
        let advisory = engine
            .evaluate("performance_target", "55% increase", today())
            .expect("55% should trigger the threshold rule");
        assert!(advisory.message.contains("55%"));
    }

    #[test]
    fn test_moderate_percent_target_passes() {
        let engine = AdvisoryEngine::with_default_rules();
        assert!(engine
            .evaluate("performance_target", "20% increase", today())
            .is_none());
    }

    #[test]
    fn test_percent_rule_ignores_other_fields() {
        let engine = AdvisoryEngine::with_default_rules();
        assert!(engine
            .evaluate("goal_description", "99% of customers", today())
            .is_none());
    }

    #[test]
    fn test_near_due_date_flagged() {
        let engine = AdvisoryEngine::with_default_rules();
        let due = (today() + Duration::days(10)).format("%Y-%m-%d").to_string();
        let advisory = engine
            .evaluate("due_date", &due, today())
            .expect("10 days out should trigger the proximity rule");
        assert!(advisory.message.contains("10 days"));
    }

    #[test]
    fn test_far_due_date_passes() {
        let engine = AdvisoryEngine::with_default_rules();
        let due = (today() + Duration::days(60)).format("%Y-%m-%d").to_string();
        assert!(engine.evaluate("due_date", &due, today()).is_none());
    }

    #[test]
    fn test_unparseable_inputs_pass() {
        let engine = AdvisoryEngine::with_default_rules();
        assert!(engine
            .evaluate("performance_target", "best in class", today())
            .is_none());
        assert!(engine.evaluate("due_date", "next quarter", today()).is_none());
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = AdvisoryEngine::with_default_rules();
        let a = engine.evaluate("performance_target", "80% growth", today());
        let b = engine.evaluate("performance_target", "80% growth", today());
        assert_eq!(a, b);
    }
}
