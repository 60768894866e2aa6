//! Generate-path prompt.

use super::tables::{banned_phrase_block, constraints_for, select_structure, tone_for};
use super::{GenerationRequest, GENERATE_VARIATIONS};

const ROLE_FRAMING: &str =
    "You are a skilled business writer. Write in a natural, human voice—not like AI.";

const WRITING_RULES: &str = "WRITING RULES (apply to everything):

Language:
- Plain English a 6th grader could understand (54% of adults read below this level)
- Short words over long ones: use not utilize, help not facilitate, start not commence, buy not purchase, end not terminate
- Keep subject and verb close together—don't separate them with long clauses
- Keep modifiers next to what they modify
- Use contractions naturally (don't, you'll, we're, it's, can't)

Sentences & Rhythm:
- Aim for 8-15 words per sentence on average
- Mix short punchy sentences with medium ones
- Never 3+ long sentences (20+ words) in a row—break them up
- Short paragraphs for digital reading (1-4 sentences max)

Voice & Tone:
- Active voice only: \"We found X\" not \"X was found\"
- No adverbs (or very sparingly)—show don't tell
- Calm confidence—helpful, not salesy or eager
- Sound like an experienced practitioner explaining to a peer, not a textbook

Transitions:
- Use natural connectors: So, But, And, Plus, That said, Here's the thing
- Avoid academic transitions: moreover, furthermore, additionally, thus, hence, therefore, in conclusion";

/// Render the generate prompt.
///
/// Sections appear in a fixed order and optional ones are omitted entirely
/// when empty. The same request always yields the same bytes.
pub fn compose_generation_prompt(request: &GenerationRequest) -> String {
    let category = request.category.known();
    let stage = request.relationship_stage.known();

    let mut sections: Vec<String> = Vec::with_capacity(12);
    sections.push(ROLE_FRAMING.to_owned());
    sections.push(audience_section(request));

    if let Some(offering) = &request.offering {
        sections.push(format!("WHAT YOU'RE OFFERING:\n{offering}"));
    }

    sections.push(format!(
        "RELATIONSHIP: {}\nGOAL: {}",
        request.relationship_stage, request.goal
    ));

    let mut genre = format!("GENRE: {}", request.category);
    if let Some(c) = category {
        genre.push_str("\n\n");
        genre.push_str(constraints_for(c));
    }
    sections.push(genre);

    if let Some(s) = stage {
        sections.push(tone_for(s).to_owned());
    }
    if let Some(structure) = select_structure(category, stage) {
        sections.push(structure.render());
    }

    if !request.proof_points.is_empty() {
        let points: Vec<String> = request
            .proof_points
            .iter()
            .map(|p| format!("- {p}"))
            .collect();
        sections.push(format!(
            "PROOF POINTS YOU CAN REFERENCE (use sparingly, pick the most relevant):\n{}",
            points.join("\n")
        ));
    }

    sections.push(WRITING_RULES.to_owned());
    sections.push(banned_phrase_block());
    sections.push(output_instructions());

    sections.join("\n\n").trim().to_owned()
}

fn audience_section(request: &GenerationRequest) -> String {
    let mut section = String::from("WHO YOU'RE WRITING TO:\n");
    if let Some(name) = &request.recipient_name {
        section.push_str(&format!("- Name: {name}\n"));
    }
    if let Some(org) = &request.recipient_org {
        section.push_str(&format!("- Company: {org}\n"));
    }
    section.push_str(&format!("- Audience: {}\n\n", request.audience_description));

    section.push_str("WHAT YOU KNOW ABOUT THEM:\n");
    if request.background_context.is_empty() {
        section.push_str("(No specific context provided)");
    } else {
        section.push_str(&request.background_context);
    }
    section
}

fn output_instructions() -> String {
    let mut out = format!(
        "OUTPUT:\nGenerate {GENERATE_VARIATIONS} variations. Each should feel like a different \
         person wrote it—same core message, different voice and approach.\n\n\
         Format each variation clearly:\n"
    );
    for n in 1..=GENERATE_VARIATIONS {
        out.push_str(&format!(
            "\n---\n**Variation {n}**\n[Subject line if applicable]\n\n[Body]\n"
        ));
    }
    out.push_str("\n---");
    out
}
