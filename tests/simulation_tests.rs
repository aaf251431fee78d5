// Integration tests for the stepper state machine, history, and the
// full pointer walkthrough

use ptrsim::interpreter::stepper::{Mode, StepError, Stepper};
use ptrsim::memory::Value;
use ptrsim::snapshot::{PointerEdge, Snapshot};
use ptrsim::tutor::{
    chat_or_fallback, explain_or_fallback, CannedTutor, TutorService, CHAT_FALLBACK,
    EXPLAIN_FALLBACK,
};

/// Run every line of `source` to completion and return the stepper.
fn run_to_end(source: &str) -> Stepper {
    let mut stepper = Stepper::new();
    stepper.start_run(source);
    while stepper.step().is_ok() {}
    stepper
}

#[test]
fn test_state_machine_transitions() {
    let mut stepper = Stepper::new();
    assert_eq!(stepper.mode(), Mode::Editing);
    assert_eq!(stepper.step(), Err(StepError::NotRunning));

    stepper.start_run("int a = 1;\nint b = 2;");
    assert_eq!(stepper.mode(), Mode::Ready);
    assert_eq!(stepper.cursor(), 0);
    assert_eq!(stepper.history().len(), 1, "only the ready snapshot");

    stepper.step().expect("first step");
    assert_eq!(stepper.mode(), Mode::Stepping);
    assert_eq!(stepper.cursor(), 1);

    stepper.step().expect("second step");
    assert_eq!(stepper.mode(), Mode::Finished);
    assert_eq!(stepper.step(), Err(StepError::RunFinished));

    stepper.edit_source();
    assert_eq!(stepper.mode(), Mode::Editing);
    assert_eq!(stepper.history().len(), 1, "history discarded");
    assert_eq!(stepper.cursor(), 0);
}

#[test]
fn test_ready_snapshot_shape() {
    let snapshot = Snapshot::ready();
    assert!(snapshot.memory.is_empty());
    assert_eq!(snapshot.line, None);
    assert!(!snapshot.log.is_error);
    assert!(snapshot.edges.is_empty());
    assert!(snapshot.cards().is_empty());
}

#[test]
fn test_round_trip_address_of_and_dereference() {
    let stepper = run_to_end("int a = 10;\nint *p;\np = &a;\nint y = *p;\n*p = 7;");
    let mem = &stepper.history().latest().memory;

    assert_eq!(mem.get("y").unwrap().value, Value::Int(10));
    assert_eq!(mem.get("a").unwrap().value, Value::Int(7));
}

#[test]
fn test_compound_arithmetic() {
    let stepper = run_to_end("int a = 10;\nint *p;\np = &a;\n*p = *p + 5;");
    let mem = &stepper.history().latest().memory;
    assert_eq!(mem.get("a").unwrap().value, Value::Int(15));
}

#[test]
fn test_execution_continues_past_fault() {
    // Line 1 segfaults; line 2 must still run.
    let stepper = run_to_end("int *p;\n*p = 5;\nint a = 1;");
    let history = stepper.history();

    assert_eq!(history.len(), 4);
    assert!(history.get(2).unwrap().log.is_error);
    // The faulted step left memory unchanged.
    assert_eq!(history.get(2).unwrap().memory, history.get(1).unwrap().memory);
    // And the run carried on.
    let mem = &history.latest().memory;
    assert_eq!(mem.get("a").unwrap().value, Value::Int(1));
    assert_eq!(stepper.mode(), Mode::Finished);
}

#[test]
fn test_skipped_lines_keep_memory() {
    let stepper = run_to_end("int a = 1;\n\n// comment\nint b = 2;");
    let history = stepper.history();

    assert_eq!(history.get(2).unwrap().log.message, "Skipped comment/empty line.");
    assert_eq!(history.get(2).unwrap().memory, history.get(1).unwrap().memory);
    assert_eq!(history.latest().memory.len(), 2);
}

#[test]
fn test_history_is_append_only_and_replay_is_deterministic() {
    let source = "int a = 10;\nint *p;\np = &a;\n*p = *p - 4;";

    let first = run_to_end(source);
    let second = run_to_end(source);

    assert_eq!(first.history().len(), second.history().len());
    for idx in 0..first.history().len() {
        assert_eq!(
            first.history().get(idx),
            second.history().get(idx),
            "histories diverge at snapshot {}",
            idx
        );
    }

    // Earlier snapshots are untouched by later steps: the snapshot
    // after line 0 still holds only `a` with its initial value.
    let after_first = first.history().get(1).unwrap();
    assert_eq!(after_first.memory.len(), 1);
    assert_eq!(after_first.memory.get("a").unwrap().value, Value::Int(10));
}

#[test]
fn test_pointer_edges_follow_reassignment() {
    let mut stepper = Stepper::new();
    stepper.start_run("int a = 1;\nint b = 2;\nint *p;\np = &a;\np = &b;");

    for _ in 0..4 {
        stepper.step().unwrap();
    }
    assert_eq!(
        stepper.history().latest().edges,
        vec![PointerEdge {
            from: "p".to_string(),
            to: "a".to_string(),
        }]
    );

    stepper.step().unwrap();
    assert_eq!(
        stepper.history().latest().edges,
        vec![PointerEdge {
            from: "p".to_string(),
            to: "b".to_string(),
        }]
    );
}

#[test]
fn test_view_rewind_does_not_reexecute() {
    let mut stepper = Stepper::new();
    stepper.start_run("int a = 1;\nint b = 2;");
    stepper.step().unwrap();
    stepper.step().unwrap();

    let recorded = stepper.history().len();
    assert!(stepper.view_back());
    assert!(stepper.view_back());
    assert_eq!(stepper.view_position(), 0);
    assert_eq!(stepper.current().line, None, "viewing the ready snapshot");
    assert!(!stepper.view_back(), "cannot rewind past the start");

    assert!(stepper.view_forward());
    assert_eq!(stepper.current().line, Some(0));
    stepper.view_to_end();
    assert!(stepper.view_at_end());

    // Rewinding only moved the view; nothing was re-run.
    assert_eq!(stepper.history().len(), recorded);
    assert_eq!(stepper.mode(), Mode::Finished);
}

#[test]
fn test_variable_cards_formatting() {
    let stepper = run_to_end("int a = 10;\nint *p;\np = &a;");
    let cards = stepper.history().latest().cards();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "a");
    assert_eq!(cards[0].address, "0x100");
    assert_eq!(cards[0].kind, "int");
    assert_eq!(cards[0].value, "10");
    assert!(!cards[0].is_pointer);

    assert_eq!(cards[1].name, "p");
    assert_eq!(cards[1].address, "0x104");
    assert_eq!(cards[1].kind, "int*");
    assert_eq!(cards[1].value, "0x100", "set pointers display in hex");
    assert!(cards[1].is_pointer);
}

#[test]
fn test_unset_pointer_card_shows_question_mark() {
    let stepper = run_to_end("int *p;");
    let cards = stepper.history().latest().cards();
    assert_eq!(cards[0].value, "?");
}

#[test]
fn test_full_pointer_walkthrough() {
    let source = "int a = 10;\nint b = 25;\nint *ptr;\nptr = &a;\nint y = *ptr;\n*ptr = 99;\nptr = &b;\n*ptr = *ptr + 5;";
    let stepper = run_to_end(source);
    let history = stepper.history();

    // Eight executed lines plus the ready snapshot.
    assert_eq!(history.len(), 9);
    for idx in 0..history.len() {
        assert!(
            !history.get(idx).unwrap().log.is_error,
            "unexpected error at snapshot {}: {}",
            idx,
            history.get(idx).unwrap().log.message
        );
    }

    let mem = &history.latest().memory;
    assert_eq!(mem.get("a").unwrap().value, Value::Int(99));
    assert_eq!(mem.get("b").unwrap().value, Value::Int(30));
    assert_eq!(mem.get("y").unwrap().value, Value::Int(10));

    let b_address = mem.get("b").unwrap().address;
    assert_eq!(mem.get("ptr").unwrap().value, Value::Addr(b_address));
    assert_eq!(
        history.latest().edges,
        vec![PointerEdge {
            from: "ptr".to_string(),
            to: "b".to_string(),
        }]
    );
}

#[test]
fn test_tutor_fallback_degradation() {
    let tutor = CannedTutor::new();

    let explained = explain_or_fallback(&tutor, "address-of operator", None);
    assert!(explained.contains("address"));

    // Unknown topics degrade to the fixed fallback strings.
    assert_eq!(
        explain_or_fallback(&tutor, "monads", None),
        EXPLAIN_FALLBACK
    );
    assert_eq!(chat_or_fallback(&tutor, &[], "monads"), CHAT_FALLBACK);

    // Known topics answer through chat too.
    let reply = chat_or_fallback(&tutor, &[], "pointer arithmetic");
    assert!(reply.contains("writes the result back"));
    assert_eq!(tutor.name(), "canned");
}
