//! Canned assistant content.
//!
//! Replies are keyword-matched against the lowercased question; the first
//! matching topic wins. Tips are keyed to onboarding steps.

/// Opening message shown when the chat panel is first opened.
pub const GREETING: &str = "Hi! I'm your strategy assistant. Ask me about \
balanced scorecards, SWOT analysis, action plans, or surveys.";

/// Keyword-to-reply table, checked in order.
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["ssl", "security", "secure"],
        "All data is encrypted in transit with TLS and at rest. Access to your \
workspace is scoped per organization, and admin actions are audited.",
    ),
    (
        &["scorecard", "balance", "balanced", "perspective"],
        "A balanced scorecard tracks objectives across four perspectives: \
Financial, Customer, Internal Process, and Learning & Growth. Aim for 3-5 \
objectives per perspective, each with a clear measure and target.",
    ),
    (
        &["action plan", "action", "goal", "goals", "priority"],
        "Strong action plans pair each strategic priority with a measurable \
goal, a single accountable lead, and a realistic due date. Review status and \
risk weekly so off-track items surface early.",
    ),
    (
        &["survey", "feedback", "engagement"],
        "Surveys work best when they're short and targeted. Mix rating \
questions with one or two free-text prompts, and send reminders to lift your \
response rate above 60%.",
    ),
    (
        &["swot", "strength", "weakness", "opportunit", "threat"],
        "Keep each SWOT entry to one sentence and rate its impact honestly. \
Link high-impact entries to scorecard objectives so the analysis drives \
action instead of sitting on a shelf.",
    ),
];

/// Reply for a user question. Unmatched questions get an echoing fallback.
pub fn reply_for(question: &str) -> String {
    let needle = question.to_lowercase();
    for (keywords, reply) in TOPICS {
        if keywords.iter().any(|k| needle.contains(k)) {
            return (*reply).to_string();
        }
    }
    format!(
        "I don't have specific guidance on \"{}\" yet, but I can help with \
balanced scorecards, SWOT analysis, action plans, and surveys. Try asking \
about one of those.",
        question.trim()
    )
}

/// Contextual tip for an onboarding wizard step.
pub fn tip_for_step(step: usize) -> &'static str {
    match step {
        0 => {
            "Picking the right industry and sub-industry tailors your \
benchmarks and sample objectives."
        }
        1 => {
            "Your leadership title and organization size help us suggest \
realistic targets for teams like yours."
        }
        2 => "A logo makes reports and shared scorecards instantly recognizable.",
        _ => {
            "Co-admins can manage scorecards and surveys with you. You can \
add or remove them later from the admin console."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_topics_match() {
        assert!(reply_for("Is my data secure?").contains("encrypted"));
        assert!(reply_for("How do I build a balanced scorecard?").contains("four perspectives"));
        assert!(reply_for("Tips for my action plan?").contains("accountable lead"));
        assert!(reply_for("How do I get survey feedback?").contains("response rate"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(reply_for("SWOT help"), reply_for("swot help"));
    }

    #[test]
    fn test_fallback_echoes_question() {
        let reply = reply_for("what is the weather");
        assert!(reply.contains("what is the weather"));
    }

    #[test]
    fn test_every_step_has_a_tip() {
        for step in 0..4 {
            assert!(!tip_for_step(step).is_empty());
        }
    }
}
