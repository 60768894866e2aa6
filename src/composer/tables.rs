//! Static prompt fragments.
//!
//! These are compiled into the binary and shared read-only by every
//! request; nothing here is computed at runtime.

use super::{Category, FixSelection, RelationshipStage};

/// Words and phrases the model is told never to use. Rendered verbatim,
/// comma-separated, into every prompt.
pub const BANNED_PHRASES: [&str; 41] = [
    "additionally",
    "therefore",
    "however",
    "in conclusion",
    "furthermore",
    "moreover",
    "crucial",
    "cutting-edge",
    "leverage",
    "synergy",
    "streamline",
    "revolutionize",
    "game-changer",
    "unlock",
    "empower",
    "delighted",
    "excited to share",
    "I hope this finds you well",
    "just following up",
    "circling back",
    "best-in-class",
    "robust",
    "scalable",
    "end-to-end",
    "align",
    "drive results",
    "partnership",
    "reach out",
    "thrilled",
    "passionate about",
    "deep dive",
    "move the needle",
    "low-hanging fruit",
    "wheelhouse",
    "bandwidth",
    "circle back",
    "take this offline",
    "happy to help",
    "per my last email",
    "as per our conversation",
    "touching base",
];

/// The banned-phrase section exactly as it appears in prompts.
pub fn banned_phrase_block() -> String {
    format!(
        "NEVER USE THESE WORDS/PHRASES:\n{}",
        BANNED_PHRASES.join(", ")
    )
}

/// Length and format constraints for a category.
pub fn constraints_for(category: Category) -> &'static str {
    match category {
        Category::ColdEmail => {
            "CONSTRAINTS:
- Under 90 words total (81% of emails are read on mobile—don't make them scroll)
- 1-3 sentences per paragraph max
- Generous whitespace between paragraphs
- No pleasantries (no \"I hope this finds you well\")
- Soft CTA (e.g., \"Open to hearing how?\" or \"Worth a look?\")

SUBJECT LINE RULES:
- Boring = curiosity. Salesy = delete.
- Keep it short (1-4 words ideal)
- Reference something specific about them
- Should sound like it could be from a colleague
- Examples: \"your I-85 routes\", \"quick thought\", \"one question\"
- NEVER: \"How to supercharge your pipeline in 90 days\" (screams pitch)"
        }
        Category::FollowUpEmail => {
            "CONSTRAINTS:
- Under 75 words total
- Reference the previous touch briefly
- Add one new insight or piece of value
- 1-3 sentences per paragraph
- Don't guilt them for not replying"
        }
        Category::LinkedinMessage => {
            "CONSTRAINTS:
- Under 100 words
- Very conversational tone
- No selling on first touch
- One simple ask or none at all
- Feels like a message from a peer, not a pitch"
        }
        Category::LinkedinPost => {
            "CONSTRAINTS:
- Hook in the first line (this shows in feed preview)
- Short paragraphs (1-2 sentences max)
- Generous line breaks for scannability
- End with engagement prompt or clear takeaway
- No hashtag spam (0-3 max, at end if any)
- 150-300 words ideal"
        }
        Category::SalesProposal => {
            "CONSTRAINTS:
- Lead with their problem stated in their words
- Reflect language from your conversations
- Quantified outcomes where possible
- Clear pricing/timeline section
- No jargon—they'll share this internally"
        }
        Category::ExecutiveSummary => {
            "CONSTRAINTS:
- 3-5 short paragraphs
- Lead with the bottom line / recommendation
- Support with 2-3 key points
- End with clear next step
- No fluff—executives skim"
        }
        Category::Explanation => {
            "CONSTRAINTS:
- Start with what it is in one sentence
- Then why it matters
- Then how it works (steps or breakdown)
- Use examples to illustrate
- Short paragraphs, clear structure"
        }
        Category::MeetingRecap => {
            "CONSTRAINTS:
- Lead with key decisions/outcomes
- Then action items with owners
- Then any open questions
- Keep it scannable—bullets are fine here
- Send within 24 hours context"
        }
        Category::InternalUpdate => {
            "CONSTRAINTS:
- Lead with the headline/status
- Then context if needed
- Then what's next
- Keep it brief—respect their time
- Clear if any action is needed from them"
        }
    }
}

/// Tone guidance for a relationship stage.
pub fn tone_for(stage: RelationshipStage) -> &'static str {
    match stage {
        RelationshipStage::NewContact => {
            "TONE:
- Curious peer who noticed something
- Offering perspective, not pitching
- Calm confidence, not eager or salesy
- Respectful of their time"
        }
        RelationshipStage::SomeHistory => {
            "TONE:
- Familiar but not presumptuous
- Reference your shared context naturally
- Helpful, not pushy
- Build on what you've already discussed"
        }
        RelationshipStage::ExistingRelationship => {
            "TONE:
- Direct and efficient
- You know each other—skip the warm-up
- Collaborative, like talking to a teammate
- Can be more casual"
        }
    }
}

/// One instruction sentence per rewrite fix.
pub fn fix_instruction(fix: FixSelection) -> &'static str {
    match fix {
        FixSelection::Shorter => "- Make it significantly shorter. Cut ruthlessly.",
        FixSelection::Human => "- Make it sound more human and natural. Less corporate.",
        FixSelection::Cta => {
            "- Add or strengthen the call to action. Make it clear what you want them to do."
        }
        FixSelection::LessSalesy => "- Remove salesy language. More helpful, less pitchy.",
        FixSelection::Clearer => "- Improve the structure. Make it easier to follow.",
    }
}

// ---------------------------------------------------------------------------
// Structural templates
// ---------------------------------------------------------------------------

/// A named outline the model is asked to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureTemplate {
    /// Cold first touch.
    ObservationBridgeProof,
    /// Follow-up that adds something new.
    InsightImplicationInvitation,
    /// Feed post.
    HookStoryInsight,
    /// Proposal or summary.
    ProblemProofPath,
    /// Explainer.
    WhatWhyHow,
}

impl StructureTemplate {
    /// Display name, e.g. `Observation-Bridge-Proof`.
    pub fn name(self) -> &'static str {
        match self {
            Self::ObservationBridgeProof => "Observation-Bridge-Proof",
            Self::InsightImplicationInvitation => "Insight-Implication-Invitation",
            Self::HookStoryInsight => "Hook-Story-Insight",
            Self::ProblemProofPath => "Problem-Proof-Path",
            Self::WhatWhyHow => "What-Why-How",
        }
    }

    /// The full block inserted into the prompt.
    pub fn render(self) -> String {
        let outline = match self {
            Self::ObservationBridgeProof => {
                "1. [Specific observation about their business—proves you did research]
2. [Bridge: Share an insight that teaches them something new or reframes their situation]
3. [Social proof: Someone similar + result, without dwelling on pain]
4. [Soft ask: \"Open to hearing how?\" or \"Worth a look?\"]

KEY PRINCIPLE: Teach them something—a new way to think about their challenge, a data point they didn't know, or an insight from a similar situation."
            }
            Self::InsightImplicationInvitation => {
                "1. [One new insight relevant to them—not just \"checking in\"]
2. [What it means for their situation]
3. [Simple invitation to continue conversation]"
            }
            Self::HookStoryInsight => {
                "1. [Hook: Surprising claim, question, or story fragment in first line]
2. [Context: Set up the situation briefly]
3. [Story/Example: What happened, what you learned]
4. [Insight: The takeaway or lesson]
5. [Engagement: Question or prompt for comments]"
            }
            Self::ProblemProofPath => {
                "1. [Their problem stated in their words]
2. [Evidence it's solvable—specific example or data]
3. [What the path forward looks like]
4. [Clear next step]"
            }
            Self::WhatWhyHow => {
                "1. [What: Define it in one clear sentence]
2. [Why: Why it matters or why now]
3. [How: Break down the steps or components]
4. [Example: Concrete illustration]"
            }
        };
        format!("STRUCTURE TO USE ({}):\n{outline}", self.name())
    }
}

/// One row of the structure precedence table. `stages: None` matches any
/// stage, including unrecognised ones.
struct StructureRule {
    categories: &'static [Category],
    stages: Option<&'static [RelationshipStage]>,
    template: StructureTemplate,
}

/// Evaluated top to bottom; the first match wins.
static STRUCTURE_RULES: [StructureRule; 5] = [
    StructureRule {
        categories: &[Category::ColdEmail, Category::LinkedinMessage],
        stages: Some(&[RelationshipStage::NewContact]),
        template: StructureTemplate::ObservationBridgeProof,
    },
    StructureRule {
        categories: &[Category::FollowUpEmail],
        stages: None,
        template: StructureTemplate::InsightImplicationInvitation,
    },
    StructureRule {
        categories: &[Category::LinkedinPost],
        stages: None,
        template: StructureTemplate::HookStoryInsight,
    },
    StructureRule {
        categories: &[Category::SalesProposal, Category::ExecutiveSummary],
        stages: None,
        template: StructureTemplate::ProblemProofPath,
    },
    StructureRule {
        categories: &[Category::Explanation],
        stages: None,
        template: StructureTemplate::WhatWhyHow,
    },
];

/// Pick the structural template for a (category, stage) pair.
///
/// Returns at most one template. An unrecognised category (`None`) never
/// gets a structure; an unrecognised stage only matches stage-agnostic rules.
pub fn select_structure(
    category: Option<Category>,
    stage: Option<RelationshipStage>,
) -> Option<StructureTemplate> {
    let category = category?;
    STRUCTURE_RULES
        .iter()
        .find(|rule| {
            rule.categories.contains(&category)
                && rule
                    .stages
                    .map_or(true, |stages| stage.is_some_and(|s| stages.contains(&s)))
        })
        .map(|rule| rule.template)
}

/// Number of rules that match a pair; used to check the table stays exclusive.
#[doc(hidden)]
pub fn matching_rule_count(category: Category, stage: RelationshipStage) -> usize {
    STRUCTURE_RULES
        .iter()
        .filter(|rule| {
            rule.categories.contains(&category)
                && rule.stages.map_or(true, |stages| stages.contains(&stage))
        })
        .count()
}
