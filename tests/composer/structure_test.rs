//! Structure table precedence tests.

use outreach::composer::tables::matching_rule_count;
use outreach::composer::{select_structure, Category, RelationshipStage, StructureTemplate};

#[test]
fn selection_is_total_exclusive_and_idempotent() {
    for category in Category::ALL {
        for stage in RelationshipStage::ALL {
            let first = select_structure(Some(category), Some(stage));
            assert_eq!(first, select_structure(Some(category), Some(stage)));
            let count = matching_rule_count(category, stage);
            assert!(count <= 1, "{category:?}/{stage:?} matched {count} rules");
            assert_eq!(first.is_some(), count == 1);
        }
    }
}

#[test]
fn expected_table() {
    use Category::*;
    use RelationshipStage::*;
    use StructureTemplate::*;

    let cases = [
        (ColdEmail, NewContact, Some(ObservationBridgeProof)),
        (ColdEmail, SomeHistory, None),
        (LinkedinMessage, NewContact, Some(ObservationBridgeProof)),
        (LinkedinMessage, ExistingRelationship, None),
        (FollowUpEmail, NewContact, Some(InsightImplicationInvitation)),
        (FollowUpEmail, SomeHistory, Some(InsightImplicationInvitation)),
        (LinkedinPost, ExistingRelationship, Some(HookStoryInsight)),
        (SalesProposal, SomeHistory, Some(ProblemProofPath)),
        (ExecutiveSummary, NewContact, Some(ProblemProofPath)),
        (Explanation, NewContact, Some(WhatWhyHow)),
        (MeetingRecap, NewContact, None),
        (InternalUpdate, ExistingRelationship, None),
    ];
    for (category, stage, expected) in cases {
        assert_eq!(
            select_structure(Some(category), Some(stage)),
            expected,
            "{category:?}/{stage:?}"
        );
    }
}

#[test]
fn rendered_block_names_the_template() {
    let block = StructureTemplate::InsightImplicationInvitation.render();
    assert!(block.starts_with("STRUCTURE TO USE (Insight-Implication-Invitation):\n1."));
}
