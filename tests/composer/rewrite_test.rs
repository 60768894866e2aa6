//! Rewrite prompt composition tests.

use outreach::composer::{compose_rewrite_prompt, RewriteInput, RewriteRequest, BANNED_PHRASES};

fn scenario_b() -> RewriteRequest {
    RewriteInput {
        draft_text: Some("I hope this finds you well. Just circling back.".to_owned()),
        fix_selections: Some(vec!["shorter".to_owned(), "human".to_owned()]),
        ..RewriteInput::default()
    }
    .validate()
    .expect("scenario B request should validate")
}

const ALL_FIX_LINES: [&str; 5] = [
    "- Make it significantly shorter. Cut ruthlessly.",
    "- Make it sound more human and natural. Less corporate.",
    "- Add or strengthen the call to action. Make it clear what you want them to do.",
    "- Remove salesy language. More helpful, less pitchy.",
    "- Improve the structure. Make it easier to follow.",
];

#[test]
fn scenario_b_exactly_two_fixes_no_constraints() {
    let prompt = compose_rewrite_prompt(&scenario_b());

    let present: Vec<&str> = ALL_FIX_LINES
        .iter()
        .copied()
        .filter(|line| prompt.contains(line))
        .collect();
    assert_eq!(present, vec![ALL_FIX_LINES[0], ALL_FIX_LINES[1]]);
    assert!(!prompt.contains("CONSTRAINTS:"));
    assert!(!prompt.contains("TARGET FORMAT"));
    assert!(prompt.contains("ORIGINAL DRAFT:\nI hope this finds you well. Just circling back."));
}

#[test]
fn always_asks_for_two_versions() {
    let prompt = compose_rewrite_prompt(&scenario_b());
    assert!(prompt.contains("Provide 2 rewritten versions."));
    assert_eq!(prompt.matches("**Version ").count(), 2);
    assert!(!prompt.contains("**Variation"));
}

#[test]
fn rewrite_rules_keep_their_wording() {
    let prompt = compose_rewrite_prompt(&scenario_b());
    assert!(prompt.starts_with(
        "You are a skilled editor. Rewrite the following draft to make it better."
    ));
    assert!(prompt.contains("- No adverbs—show don't tell"));
    assert!(prompt.contains("- Calm confidence—helpful, not salesy\n"));
}

#[test]
fn banned_phrases_present_and_deterministic() {
    let request = scenario_b();
    let prompt = compose_rewrite_prompt(&request);
    assert!(prompt.contains(&format!(
        "NEVER USE THESE WORDS/PHRASES:\n{}",
        BANNED_PHRASES.join(", ")
    )));
    assert_eq!(prompt, compose_rewrite_prompt(&request));
}

#[test]
fn target_category_alias_reuses_constraint_table() {
    let request = RewriteInput {
        draft_text: Some("Hello".to_owned()),
        fix_selections: Some(vec!["clearer".to_owned()]),
        target_category: Some("first-contact-cold-message".to_owned()),
        ..RewriteInput::default()
    }
    .validate()
    .expect("valid");
    let prompt = compose_rewrite_prompt(&request);
    assert!(prompt.contains("TARGET FORMAT: Cold Email"));
    assert!(prompt.contains("- Under 90 words total"));
}

#[test]
fn only_unknown_fixes_leave_empty_fix_section() {
    let request = RewriteInput {
        draft_text: Some("Hello".to_owned()),
        fix_selections: Some(vec!["glitter".to_owned()]),
        ..RewriteInput::default()
    }
    .validate()
    .expect("unknown fix ids still satisfy validation");
    let prompt = compose_rewrite_prompt(&request);
    assert!(prompt.contains("WHAT TO FIX:\n\nWRITING RULES"));
    assert!(!prompt.contains("glitter"));
}
