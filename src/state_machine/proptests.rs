//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::state::*;
use super::transition::*;
use super::*;
use crate::prompts;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Test Helpers
// ============================================================================

const FIELD_POOL: [&str; 5] = ["user_id", "email", "role", "sub", "name"];

fn session_in(state: WizardState, required: &[String], payload_keys: &[String]) -> Session {
    let mut session = Session::new(required.iter().cloned(), Secret::new(b"secret".to_vec()));
    session.state = state;
    for key in payload_keys {
        session.payload.insert(key.clone(), "value");
    }
    session
}

fn event_for(state: WizardState, line: &str) -> Event {
    if state.reads_input() {
        Event::line(line)
    } else {
        Event::Proceed
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = WizardState> {
    proptest::sample::select(WizardState::ALL.to_vec())
}

fn arb_live_state() -> impl Strategy<Value = WizardState> {
    arb_state().prop_filter("done is terminal", |s| !s.is_terminal())
}

fn arb_fields() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(proptest::sample::select(FIELD_POOL.to_vec()), 0..6)
        .prop_map(|fields| fields.into_iter().map(String::from).collect())
}

fn arb_yes() -> impl Strategy<Value = String> {
    "[yY][a-zA-Z0-9 ]{0,10}"
}

fn arb_not_yes() -> impl Strategy<Value = String> {
    "([^yY][a-zA-Z0-9 ]{0,10})?"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Validating goes to asking_for_more_data iff the payload covers the required set
    #[test]
    fn prop_validating_is_set_difference(required in arb_fields(), keys in arb_fields()) {
        let session = session_in(WizardState::Validating, &required, &keys);
        let result = transition(&session, Event::Proceed).unwrap();

        let present: BTreeSet<&String> = keys.iter().collect();
        let covered = required.iter().all(|field| present.contains(field));

        let expected = if covered {
            WizardState::AskingForMoreData
        } else {
            WizardState::AskingForKey
        };
        prop_assert_eq!(result.new_state, expected);
        prop_assert!(result.output.is_none());
        prop_assert!(result.effects.is_empty());
    }

    /// Duplicates and ordering in the required list never change the decision
    #[test]
    fn prop_required_fields_order_independent(required in arb_fields(), keys in arb_fields()) {
        let mut shuffled = required.clone();
        shuffled.reverse();
        shuffled.extend(required.iter().cloned());

        let a = transition(&session_in(WizardState::Validating, &required, &keys), Event::Proceed).unwrap();
        let b = transition(&session_in(WizardState::Validating, &shuffled, &keys), Event::Proceed).unwrap();
        prop_assert_eq!(a.new_state, b.new_state);
    }

    /// The key prompt numbers accepted fields, not attempts
    #[test]
    fn prop_key_prompt_counts_payload(keys in arb_fields()) {
        let session = session_in(WizardState::AskingForKey, &[], &keys);
        let result = transition(&session, Event::Proceed).unwrap();

        let distinct = keys.iter().collect::<BTreeSet<_>>().len();
        prop_assert_eq!(result.new_state, WizardState::ReadingKey);
        prop_assert_eq!(result.output, Some(prompts::asking_for_key(distinct + 1)));
    }

    /// Answers starting with y behave like "y"
    #[test]
    fn prop_yes_answers(answer in arb_yes()) {
        let more = session_in(WizardState::ReadingMoreData, &[], &[]);
        prop_assert_eq!(
            transition(&more, Event::line(answer.clone())).unwrap(),
            transition(&more, Event::line("y")).unwrap()
        );

        let another = session_in(WizardState::ReadingAnother, &[], &[]);
        prop_assert_eq!(
            transition(&another, Event::line(answer)).unwrap().new_state,
            WizardState::Start
        );
    }

    /// Everything else, including the empty line, behaves like "n"
    #[test]
    fn prop_other_answers_mean_no(answer in arb_not_yes()) {
        let more = session_in(WizardState::ReadingMoreData, &[], &[]);
        prop_assert_eq!(
            transition(&more, Event::line(answer.clone())).unwrap(),
            transition(&more, Event::line("n")).unwrap()
        );

        let another = session_in(WizardState::ReadingAnother, &[], &[]);
        prop_assert_eq!(
            transition(&another, Event::line(answer)).unwrap().new_state,
            WizardState::Done
        );
    }

    /// Only reading_more_data may reach the signer and clipboard
    #[test]
    fn prop_collaborators_only_from_more_data(
        state in arb_live_state(),
        line in "[a-zA-Z@. ]{0,12}",
        keys in arb_fields(),
    ) {
        let mut session = session_in(state, &[], &keys);
        session.current_key = Some("email".to_string());

        let result = transition(&session, event_for(state, &line)).unwrap();
        let issues = result.effects.iter().filter(|e| e.calls_collaborator()).count();

        if state == WizardState::ReadingMoreData && !prompts::is_yes(&line) {
            prop_assert_eq!(issues, 1);
        } else {
            prop_assert_eq!(issues, 0);
        }
    }

    /// Prompting states always print, and never touch the session
    #[test]
    fn prop_prompting_states_emit_output(state in arb_live_state(), keys in arb_fields()) {
        prop_assume!(!state.reads_input() && state != WizardState::Validating);

        let result = transition(&session_in(state, &[], &keys), Event::Proceed).unwrap();
        prop_assert!(result.output.is_some());
        prop_assert!(result.effects.is_empty());
        prop_assert!(result.new_state.reads_input() || result.new_state == WizardState::AskingForKey);
    }

    /// Feeding the wrong kind of event never panics and never succeeds
    #[test]
    fn prop_mismatched_events_rejected(state in arb_live_state(), line in ".{0,8}") {
        let wrong = if state.reads_input() {
            Event::Proceed
        } else {
            Event::line(line)
        };
        let result = transition(&session_in(state, &[], &[]), wrong);
        prop_assert!(matches!(result, Err(TransitionError::InvalidTransition(_))), "expected InvalidTransition");
    }

    /// Values for unvalidated fields are always accepted verbatim
    #[test]
    fn prop_unvalidated_values_accepted(key in "[a-z_]{1,10}", value in ".{0,20}") {
        prop_assume!(key != "email");

        let mut session = session_in(WizardState::ReadingValue, &[], &[]);
        session.current_key = Some(key.clone());

        let result = transition(&session, Event::line(value.clone())).unwrap();
        prop_assert_eq!(result.new_state, WizardState::Validating);
        prop_assert_eq!(result.effects, vec![Effect::accept_field(key, value)]);
    }

    /// Rejected emails re-ask and leave the payload untouched
    #[test]
    fn prop_rejected_email_reasks(value in "[a-z0-9 ]{0,20}") {
        let mut session = session_in(WizardState::ReadingValue, &[], &[]);
        session.current_key = Some("email".to_string());

        let result = transition(&session, Event::line(value)).unwrap();
        prop_assert_eq!(result.new_state, WizardState::AskingForValue);
        prop_assert_eq!(result.output, Some(prompts::invalid_value("email")));
        prop_assert!(result.effects.is_empty());
    }
}
