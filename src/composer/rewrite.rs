//! Rewrite-path prompt.

use super::tables::{banned_phrase_block, constraints_for, fix_instruction};
use super::{RewriteRequest, REWRITE_VERSIONS};

const ROLE_FRAMING: &str =
    "You are a skilled editor. Rewrite the following draft to make it better.";

const REWRITE_RULES: &str = "WRITING RULES (apply to the rewrite):

Language:
- Plain English a 6th grader could understand
- Short words over long ones: use not utilize, help not facilitate, start not commence
- Keep subject and verb close together
- Use contractions naturally (don't, you'll, we're, it's)

Sentences & Rhythm:
- Aim for 8-15 words per sentence on average
- Mix short punchy sentences with medium ones
- Short paragraphs (1-4 sentences max)

Voice & Tone:
- Active voice only: \"We found X\" not \"X was found\"
- No adverbs—show don't tell
- Calm confidence—helpful, not salesy

Transitions:
- Use natural connectors: So, But, And, Plus, That said
- Avoid: moreover, furthermore, additionally, thus, hence";

/// Render the rewrite prompt.
///
/// Unknown fix ids contribute nothing. The category constraint block is
/// present only when a recognised target category is given.
pub fn compose_rewrite_prompt(request: &RewriteRequest) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(8);
    sections.push(ROLE_FRAMING.to_owned());
    sections.push(format!("ORIGINAL DRAFT:\n{}", request.draft_text));

    if let Some(audience) = &request.audience_description {
        sections.push(format!("AUDIENCE: {audience}"));
    }

    if let Some(target) = &request.target_category {
        let mut section = format!("TARGET FORMAT: {target}");
        if let Some(category) = target.known() {
            section.push_str("\n\n");
            section.push_str(constraints_for(category));
        }
        sections.push(section);
    }

    let instructions: Vec<&str> = request
        .fix_selections
        .iter()
        .filter_map(|fix| fix.known())
        .map(fix_instruction)
        .collect();
    let mut fixes = String::from("WHAT TO FIX:");
    for line in instructions {
        fixes.push('\n');
        fixes.push_str(line);
    }
    sections.push(fixes);

    sections.push(REWRITE_RULES.to_owned());
    sections.push(banned_phrase_block());
    sections.push(output_instructions());

    sections.join("\n\n").trim().to_owned()
}

fn output_instructions() -> String {
    let mut out = format!(
        "OUTPUT:\nProvide {REWRITE_VERSIONS} rewritten versions. \
         Each takes a slightly different approach.\n"
    );
    for n in 1..=REWRITE_VERSIONS {
        out.push_str(&format!("\n---\n**Version {n}**\n\n[Rewritten text]\n"));
    }
    out.push_str("\n---");
    out
}
