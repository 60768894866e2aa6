//! Prompt composition for generate and rewrite requests.
//!
//! Every piece of branching here is a table lookup over closed
//! enumerations ([`Category`], [`RelationshipStage`], [`FixSelection`]).
//! Values the tables do not know are carried as [`Choice::Unrecognized`]
//! and degrade to "no constraints / no tone / no structure" rather than
//! failing.
//!
//! Wire requests ([`GenerateInput`], [`RewriteInput`]) are validated into
//! [`GenerationRequest`] / [`RewriteRequest`] before composition. Composition
//! itself cannot fail.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

mod generate;
mod rewrite;
pub mod tables;
pub mod variations;

pub use generate::compose_generation_prompt;
pub use rewrite::compose_rewrite_prompt;
pub use tables::{select_structure, StructureTemplate, BANNED_PHRASES};
pub use variations::parse_variations;

/// Number of variations a generate prompt asks for.
pub const GENERATE_VARIATIONS: usize = 3;
/// Number of versions a rewrite prompt asks for.
pub const REWRITE_VERSIONS: usize = 2;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Kind of message being drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// First email to someone who has never heard from you.
    ColdEmail,
    /// Email following an earlier touch.
    FollowUpEmail,
    /// LinkedIn direct message.
    LinkedinMessage,
    /// Public LinkedIn post.
    LinkedinPost,
    /// Sales proposal document.
    SalesProposal,
    /// Executive summary.
    ExecutiveSummary,
    /// Explanation or how-to.
    Explanation,
    /// Recap after a meeting.
    MeetingRecap,
    /// Internal status update.
    InternalUpdate,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 9] = [
        Category::ColdEmail,
        Category::FollowUpEmail,
        Category::LinkedinMessage,
        Category::LinkedinPost,
        Category::SalesProposal,
        Category::ExecutiveSummary,
        Category::Explanation,
        Category::MeetingRecap,
        Category::InternalUpdate,
    ];

    /// Wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::ColdEmail => "cold-email",
            Self::FollowUpEmail => "follow-up-email",
            Self::LinkedinMessage => "linkedin-message",
            Self::LinkedinPost => "linkedin-post",
            Self::SalesProposal => "sales-proposal",
            Self::ExecutiveSummary => "executive-summary",
            Self::Explanation => "explanation",
            Self::MeetingRecap => "meeting-recap",
            Self::InternalUpdate => "internal-update",
        }
    }

    /// Human-readable label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::ColdEmail => "Cold Email",
            Self::FollowUpEmail => "Follow-up Email",
            Self::LinkedinMessage => "LinkedIn Message",
            Self::LinkedinPost => "LinkedIn Post",
            Self::SalesProposal => "Sales Proposal",
            Self::ExecutiveSummary => "Executive Summary",
            Self::Explanation => "Explanation / How-To",
            Self::MeetingRecap => "Meeting Recap",
            Self::InternalUpdate => "Internal Update",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("first-contact-cold-message") {
            return Ok(Self::ColdEmail);
        }
        if s.eq_ignore_ascii_case("first-touch-dm") {
            return Ok(Self::LinkedinMessage);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// How well sender and recipient already know each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipStage {
    /// Never spoken.
    NewContact,
    /// Met or exchanged messages.
    SomeHistory,
    /// Work together.
    ExistingRelationship,
}

impl RelationshipStage {
    /// Every stage, in display order.
    pub const ALL: [RelationshipStage; 3] = [
        RelationshipStage::NewContact,
        RelationshipStage::SomeHistory,
        RelationshipStage::ExistingRelationship,
    ];

    /// Wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::NewContact => "new-contact",
            Self::SomeHistory => "some-history",
            Self::ExistingRelationship => "existing-relationship",
        }
    }
}

impl FromStr for RelationshipStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|r| r.id() == s).ok_or(())
    }
}

/// A requested fix for the rewrite path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixSelection {
    /// Cut length.
    Shorter,
    /// Less corporate voice.
    Human,
    /// Stronger call to action.
    Cta,
    /// Less pitchy.
    LessSalesy,
    /// Better structure.
    Clearer,
}

impl FixSelection {
    /// Every fix, in display order.
    pub const ALL: [FixSelection; 5] = [
        FixSelection::Shorter,
        FixSelection::Human,
        FixSelection::Cta,
        FixSelection::LessSalesy,
        FixSelection::Clearer,
    ];

    /// Wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Shorter => "shorter",
            Self::Human => "human",
            Self::Cta => "cta",
            Self::LessSalesy => "less-salesy",
            Self::Clearer => "clearer",
        }
    }
}

impl FromStr for FixSelection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|f| f.id() == s).ok_or(())
    }
}

/// A value from a closed enumeration, or the raw text when it is not one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// A recognised value.
    Known(T),
    /// Input that matched no known identifier, kept verbatim.
    Unrecognized(String),
}

impl<T: FromStr> Choice<T> {
    /// Parse `raw`, keeping it verbatim when unknown.
    pub fn parse(raw: &str) -> Self {
        match raw.parse() {
            Ok(value) => Self::Known(value),
            Err(_) => Self::Unrecognized(raw.to_owned()),
        }
    }
}

impl<T: Copy> Choice<T> {
    /// The recognised value, if any.
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unrecognized(_) => None,
        }
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl fmt::Display for Choice<Category> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(c) => f.write_str(c.label()),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl fmt::Display for Choice<RelationshipStage> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(r) => f.write_str(r.id()),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// Validated requests
// ---------------------------------------------------------------------------

/// A validated generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Message genre.
    pub category: Choice<Category>,
    /// Free-text description of the reader.
    pub audience_description: String,
    /// Recipient's name.
    pub recipient_name: Option<String>,
    /// Recipient's organisation.
    pub recipient_org: Option<String>,
    /// What the sender knows about the recipient; may be empty.
    pub background_context: String,
    /// Sender/recipient closeness.
    pub relationship_stage: Choice<RelationshipStage>,
    /// What the message should achieve.
    pub goal: String,
    /// What is being offered.
    pub offering: Option<String>,
    /// Evidence the model may cite, in order.
    pub proof_points: Vec<String>,
}

impl GenerationRequest {
    /// Minimal request with the mandatory fields; everything else empty
    /// and the stage set to new contact.
    pub fn new(
        category: impl Into<Choice<Category>>,
        audience_description: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            audience_description: audience_description.into(),
            recipient_name: None,
            recipient_org: None,
            background_context: String::new(),
            relationship_stage: Choice::Known(RelationshipStage::NewContact),
            goal: goal.into(),
            offering: None,
            proof_points: Vec::new(),
        }
    }
}

/// A validated rewrite request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    /// The draft to rewrite.
    pub draft_text: String,
    /// Requested fixes, de-duplicated, in request order.
    pub fix_selections: Vec<Choice<FixSelection>>,
    /// Free-text description of the reader.
    pub audience_description: Option<String>,
    /// Genre whose constraints the rewrite should respect.
    pub target_category: Option<Choice<Category>>,
}

// ---------------------------------------------------------------------------
// Wire input + validation
// ---------------------------------------------------------------------------

/// A required field was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Wire names of the missing fields, in declaration order.
    pub missing: Vec<&'static str>,
}

/// JSON body of `POST /api/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateInput {
    /// Category id.
    #[serde(alias = "genre", alias = "medium")]
    pub category: Option<String>,
    /// Audience description.
    #[serde(alias = "audience")]
    pub audience_description: Option<String>,
    /// Recipient name.
    #[serde(alias = "recipient")]
    pub recipient_name: Option<String>,
    /// Recipient organisation.
    #[serde(alias = "recipientCompany")]
    pub recipient_org: Option<String>,
    /// Background context.
    #[serde(alias = "context")]
    pub background_context: Option<String>,
    /// Relationship stage id.
    #[serde(alias = "relationship")]
    pub relationship_stage: Option<String>,
    /// Goal.
    pub goal: Option<String>,
    /// Offering.
    #[serde(alias = "product")]
    pub offering: Option<String>,
    /// Proof points.
    pub proof_points: Option<Vec<String>>,
}

impl GenerateInput {
    /// Check mandatory fields and normalise optional ones.
    ///
    /// Blank optional strings become `None`; blank proof points are dropped;
    /// an absent or blank stage defaults to new contact.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming every blank or missing field among
    /// `category`, `audienceDescription`, `goal`.
    pub fn validate(self) -> Result<GenerationRequest, ValidationError> {
        let category = non_blank(self.category);
        let audience = non_blank(self.audience_description);
        let goal = non_blank(self.goal);

        let mut missing = Vec::new();
        if category.is_none() {
            missing.push("category");
        }
        if audience.is_none() {
            missing.push("audienceDescription");
        }
        if goal.is_none() {
            missing.push("goal");
        }
        let (Some(category), Some(audience_description), Some(goal)) = (category, audience, goal)
        else {
            return Err(ValidationError { missing });
        };

        Ok(GenerationRequest {
            category: Choice::parse(&category),
            audience_description,
            recipient_name: non_blank(self.recipient_name),
            recipient_org: non_blank(self.recipient_org),
            background_context: non_blank(self.background_context).unwrap_or_default(),
            relationship_stage: non_blank(self.relationship_stage)
                .map(|raw| Choice::parse(&raw))
                .unwrap_or(Choice::Known(RelationshipStage::NewContact)),
            goal,
            offering: non_blank(self.offering),
            proof_points: self
                .proof_points
                .unwrap_or_default()
                .into_iter()
                .filter_map(|p| non_blank(Some(p)))
                .collect(),
        })
    }
}

/// JSON body of `POST /api/rewrite`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriteInput {
    /// Draft text.
    #[serde(alias = "draft")]
    pub draft_text: Option<String>,
    /// Fix ids.
    #[serde(alias = "fixes")]
    pub fix_selections: Option<Vec<String>>,
    /// Audience description.
    #[serde(alias = "audience")]
    pub audience_description: Option<String>,
    /// Target category id.
    #[serde(alias = "genre")]
    pub target_category: Option<String>,
}

impl RewriteInput {
    /// Check mandatory fields and normalise optional ones.
    ///
    /// Fix ids are trimmed and de-duplicated; unknown ids are kept here and
    /// dropped at composition time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the draft is blank or no fix id is
    /// given.
    pub fn validate(self) -> Result<RewriteRequest, ValidationError> {
        let draft = non_blank(self.draft_text);
        let mut fixes: Vec<Choice<FixSelection>> = Vec::new();
        for raw in self.fix_selections.unwrap_or_default() {
            let Some(raw) = non_blank(Some(raw)) else {
                continue;
            };
            let fix = Choice::parse(&raw);
            if !fixes.contains(&fix) {
                fixes.push(fix);
            }
        }

        let mut missing = Vec::new();
        if draft.is_none() {
            missing.push("draftText");
        }
        if fixes.is_empty() {
            missing.push("fixSelections");
        }
        let Some(draft_text) = draft.filter(|_| !fixes.is_empty()) else {
            return Err(ValidationError { missing });
        };

        Ok(RewriteRequest {
            draft_text,
            fix_selections: fixes,
            audience_description: non_blank(self.audience_description),
            target_category: non_blank(self.target_category).map(|raw| Choice::parse(&raw)),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
