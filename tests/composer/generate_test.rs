//! Generate prompt composition tests.

use outreach::composer::{
    compose_generation_prompt, Category, Choice, GenerateInput, GenerationRequest,
    RelationshipStage, BANNED_PHRASES,
};

fn scenario_a() -> GenerationRequest {
    GenerateInput {
        category: Some("first-contact-cold-message".to_owned()),
        relationship_stage: Some("new-contact".to_owned()),
        audience_description: Some("CFO at fintech".to_owned()),
        goal: Some("book a call".to_owned()),
        ..GenerateInput::default()
    }
    .validate()
    .expect("scenario A request should validate")
}

fn every_request() -> Vec<GenerationRequest> {
    let mut requests = Vec::new();
    for category in Category::ALL {
        for stage in RelationshipStage::ALL {
            let mut request = GenerationRequest::new(category, "Ops lead", "start a pilot");
            request.relationship_stage = Choice::Known(stage);
            requests.push(request);
        }
    }
    let mut unknown = GenerationRequest::new(
        Choice::Unrecognized("smoke-signal".to_owned()),
        "Ranger",
        "say hi",
    );
    unknown.relationship_stage = Choice::Unrecognized("estranged".to_owned());
    requests.push(unknown);
    requests
}

#[test]
fn scenario_a_cold_first_contact() {
    let prompt = compose_generation_prompt(&scenario_a());
    assert!(prompt.contains("STRUCTURE TO USE (Observation-Bridge-Proof):"));
    assert!(prompt.contains("- Under 90 words total"));
    assert!(prompt.contains("- Audience: CFO at fintech"));
    assert!(prompt.contains("GOAL: book a call"));
}

#[test]
fn mixed_case_dm_category_keeps_structure() {
    let request = GenerateInput {
        category: Some("first-touch-DM".to_owned()),
        relationship_stage: Some("new-contact".to_owned()),
        audience_description: Some("Head of RevOps".to_owned()),
        goal: Some("start a conversation".to_owned()),
        ..GenerateInput::default()
    }
    .validate()
    .expect("request should validate");
    assert_eq!(request.category, Choice::Known(Category::LinkedinMessage));

    let prompt = compose_generation_prompt(&request);
    assert!(prompt.contains("STRUCTURE TO USE (Observation-Bridge-Proof):"));
    assert!(prompt.contains("- No selling on first touch"));
}

#[test]
fn prompt_wording_is_kept_verbatim() {
    let prompt = compose_generation_prompt(&scenario_a());
    assert!(prompt.starts_with(
        "You are a skilled business writer. Write in a natural, human voice—not like AI."
    ));
    assert!(prompt.contains("(81% of emails are read on mobile—don't make them scroll)"));
    assert!(prompt.contains(
        "KEY PRINCIPLE: Teach them something—a new way to think about their challenge"
    ));
    assert!(prompt.contains("- Calm confidence—helpful, not salesy or eager"));
    assert!(prompt.contains("different person wrote it—same core message"));

    let recap = GenerationRequest::new(Category::MeetingRecap, "Team leads", "share outcomes");
    assert!(compose_generation_prompt(&recap).contains("- Keep it scannable—bullets are fine here"));
}

#[test]
fn composition_is_deterministic() {
    for request in every_request() {
        let first = compose_generation_prompt(&request);
        let second = compose_generation_prompt(&request.clone());
        assert_eq!(first, second);
    }
}

#[test]
fn banned_phrases_always_present_verbatim() {
    let joined = BANNED_PHRASES.join(", ");
    for request in every_request() {
        let prompt = compose_generation_prompt(&request);
        assert!(
            prompt.contains(&format!("NEVER USE THESE WORDS/PHRASES:\n{joined}")),
            "banned list missing for {:?}",
            request.category
        );
    }
}

#[test]
fn always_asks_for_three_variations() {
    for request in every_request() {
        let prompt = compose_generation_prompt(&request);
        assert!(prompt.contains("Generate 3 variations."));
        assert_eq!(prompt.matches("**Variation ").count(), 3);
        assert!(prompt.contains("---\n**Variation 1**"));
        assert!(prompt.contains("---\n**Variation 3**"));
        assert!(!prompt.contains("**Variation 4**"));
    }
}

#[test]
fn unknown_category_degrades_without_constraints_or_structure() {
    let request = GenerationRequest::new(
        Choice::Unrecognized("smoke-signal".to_owned()),
        "Ranger",
        "say hi",
    );
    let prompt = compose_generation_prompt(&request);
    assert!(prompt.contains("GENRE: smoke-signal"));
    assert!(!prompt.contains("CONSTRAINTS:"));
    assert!(!prompt.contains("STRUCTURE TO USE"));
    // Tone still follows the stage.
    assert!(prompt.contains("TONE:\n- Curious peer who noticed something"));
}

#[test]
fn unknown_category_from_wire_is_not_a_validation_error() {
    let request = GenerateInput {
        category: Some("carrier-pigeon".to_owned()),
        audience_description: Some("Pigeon fancier".to_owned()),
        goal: Some("borrow a bird".to_owned()),
        ..GenerateInput::default()
    }
    .validate()
    .expect("unknown categories are accepted");
    assert_eq!(
        request.category,
        Choice::Unrecognized("carrier-pigeon".to_owned())
    );
}

#[test]
fn tone_follows_relationship_stage() {
    let mut request = GenerationRequest::new(Category::InternalUpdate, "Team", "share status");
    request.relationship_stage = Choice::Known(RelationshipStage::ExistingRelationship);
    let prompt = compose_generation_prompt(&request);
    assert!(prompt.contains("- Direct and efficient"));
    assert!(!prompt.contains("- Curious peer"));
}

#[test]
fn background_context_and_offering_render() {
    let mut request = GenerationRequest::new(Category::SalesProposal, "Procurement", "win deal");
    request.background_context = "Runs a 20-person HVAC company".to_owned();
    request.offering = Some("Dispatch scheduling".to_owned());
    let prompt = compose_generation_prompt(&request);
    assert!(prompt.contains("WHAT YOU KNOW ABOUT THEM:\nRuns a 20-person HVAC company"));
    assert!(prompt.contains("WHAT YOU'RE OFFERING:\nDispatch scheduling"));
    assert!(prompt.contains("STRUCTURE TO USE (Problem-Proof-Path):"));
}
