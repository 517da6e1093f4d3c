//! End-to-end workflows through the session command surface

mod common;

use common::builders::SessionBuilder;
use dsvis_rs::error::StatusLevel;
use dsvis_rs::layout::ListLayout;
use dsvis_rs::traversal::TraversalState;
use dsvis_rs::view::EdgeKind;
use dsvis_rs::{Command, Mode, Point, StructureKind, VisError};

#[test]
fn test_list_scenario() {
    let mut session = SessionBuilder::new().build();
    for v in [1, 2, 3] {
        session.dispatch(Command::ListInsertTail(Some(v))).unwrap();
    }
    assert_eq!(session.list().values(), vec![1, 2, 3]);

    session.dispatch(Command::ListRemoveTail).unwrap();
    assert_eq!(session.list().values(), vec![1, 2]);
    assert!(session.status().unwrap().text.contains("Remove Tail"));
}

#[test]
fn test_bst_scenario() {
    let mut session = SessionBuilder::new().mode(Mode::Bst).build();
    for v in [50, 20, 80] {
        session.dispatch(Command::TreeInsert(Some(v))).unwrap();
    }
    assert_eq!(session.bst().values(), vec![20, 50, 80]);

    let frame = session.frame();
    assert_eq!(frame.kind, StructureKind::Tree);
    assert_eq!(frame.values(), vec![20, 50, 80]);
    let kinds: Vec<_> = frame.edges.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&EdgeKind::LeftChild));
    assert!(kinds.contains(&EdgeKind::RightChild));
}

#[test]
fn test_array_scenario() {
    let mut session = SessionBuilder::new().mode(Mode::Array).array(10, 0).build();
    for v in 1..=5 {
        session.dispatch(Command::ArrayAppend(Some(v))).unwrap();
    }
    session.dispatch(Command::ArrayRemoveLast).unwrap();
    session.dispatch(Command::ArrayRemoveLast).unwrap();
    assert_eq!(session.array().size(), 3);
    assert_eq!(session.array().values(), &[1, 2, 3]);
}

#[test]
fn test_tree_traversal_full_pass() {
    let mut session = SessionBuilder::new().mode(Mode::Bst).build();
    for v in [50, 20, 80, 10, 30] {
        session.dispatch(Command::TreeInsert(Some(v))).unwrap();
    }

    for visited in 1..=5 {
        session.dispatch(Command::TreeStep).unwrap();
        assert_eq!(session.frame().highlighted().count(), visited);
    }
    let lit: Vec<_> = session.frame().highlighted().map(|e| e.value).collect();
    assert_eq!(lit, vec![10, 20, 30, 50, 80]);

    // one more step finishes the pass
    session.dispatch(Command::TreeStep).unwrap();
    assert_eq!(session.tree_traversal().state(), TraversalState::Idle);

    // and the next one starts over with a single mark
    session.dispatch(Command::TreeStep).unwrap();
    let lit: Vec<_> = session.frame().highlighted().map(|e| e.value).collect();
    assert_eq!(lit, vec![10]);
}

#[test]
fn test_mutation_during_traversal_restarts_it() {
    let mut session = SessionBuilder::new().build();
    for v in [1, 2, 3] {
        session.dispatch(Command::ListInsertTail(Some(v))).unwrap();
    }
    session.dispatch(Command::ListStep).unwrap();
    session.dispatch(Command::ListStep).unwrap();

    session.dispatch(Command::ListRemoveTail).unwrap();
    assert_eq!(session.list_traversal().state(), TraversalState::Idle);
    assert_eq!(session.frame().highlighted().count(), 0);

    session.dispatch(Command::ListStep).unwrap();
    let lit: Vec<_> = session.frame().highlighted().map(|e| e.value).collect();
    assert_eq!(lit, vec![1]);
}

#[test]
fn test_empty_operations_are_informational_noops() {
    let mut session = SessionBuilder::new().mode(Mode::Array).array(4, 0).build();

    for command in [Command::ArrayRemoveLast, Command::ArrayStep] {
        let err = session.dispatch(command).unwrap_err();
        assert!(matches!(err, VisError::EmptyStructure(StructureKind::Array)));
        assert_eq!(session.status().unwrap().level, StatusLevel::Info);
    }
    assert_eq!(session.array().size(), 0);
    assert_eq!(session.array().current_index(), None);
}

#[test]
fn test_full_array_rejects_append() {
    let mut session = SessionBuilder::new().values(&[3]).mode(Mode::Array).array(20, 10).build();
    for v in 0..10 {
        session.dispatch(Command::ArrayAppend(Some(v))).unwrap();
    }
    let before = session.array().values().to_vec();

    let err = session.dispatch(Command::ArrayAppend(Some(99))).unwrap_err();
    assert!(matches!(err, VisError::CapacityExceeded { capacity: 20 }));
    assert_eq!(session.array().values(), before.as_slice());
    assert_eq!(session.status().unwrap().level, StatusLevel::Warning);
}

#[test]
fn test_array_step_and_shrink() {
    let mut session = SessionBuilder::new()
        .values(&[4, 5, 6])
        .mode(Mode::Array)
        .array(20, 3)
        .build();
    for _ in 0..3 {
        session.dispatch(Command::ArrayStep).unwrap();
    }
    assert_eq!(session.array().current_index(), Some(2));

    session.dispatch(Command::ArrayRemoveLast).unwrap();
    assert_eq!(session.array().current_index(), Some(1));
    let lit: Vec<_> = session.frame().highlighted().map(|e| e.value).collect();
    assert_eq!(lit, vec![5]);

    session.dispatch(Command::ArrayReset(None)).unwrap();
    assert_eq!(session.array().size(), 3);
    assert_eq!(session.array().current_index(), None);
}

#[test]
fn test_list_nodes_settle_on_grid() {
    let mut session = SessionBuilder::new().build();
    for _ in 0..8 {
        session.dispatch(Command::ListInsertTail(None)).unwrap();
    }
    common::settle(&mut session);

    let layout = ListLayout::default();
    let frame = session.frame();
    assert_eq!(frame.values(), (1..=8).collect::<Vec<_>>());
    for (i, element) in frame.elements.iter().enumerate() {
        assert_eq!(element.position, layout.target(i));
    }
    // the seventh node wraps to the second row
    assert_eq!(frame.elements[6].position, Point::new(50.0, 230.0));
}

#[test]
fn test_head_insert_shifts_existing_nodes() {
    let mut session = SessionBuilder::new().build();
    session.dispatch(Command::ListInsertTail(Some(1))).unwrap();
    common::settle(&mut session);

    session.dispatch(Command::ListInsertHead(Some(0))).unwrap();
    // the old head now eases toward the second slot
    assert!(session.tick(common::FRAME_DT));
    let moving = session.frame().elements[1].position;
    assert!(moving.x > 50.0 && moving.x < 200.0);

    common::settle(&mut session);
    common::assert_float_eq(session.frame().elements[1].position.x, 200.0, 1e-3);
}

#[test]
fn test_tree_grows_from_parent() {
    let mut session = SessionBuilder::new().mode(Mode::Bst).viewport_width(880.0).build();
    session.dispatch(Command::TreeInsert(Some(50))).unwrap();
    common::settle(&mut session);
    let root = session.tree_root_anchor();
    assert_eq!(root, Point::new(440.0, 60.0));

    session.dispatch(Command::TreeInsert(Some(20))).unwrap();
    let child = session.frame().elements[0];
    assert_eq!(child.value, 20);
    assert_eq!(child.position, root);

    common::settle(&mut session);
    let child = session.frame().elements[0];
    assert_eq!(child.position, Point::new(240.0, 140.0));
}

#[test]
fn test_wrong_mode_changes_nothing() {
    let mut session = SessionBuilder::new().mode(Mode::Array).array(10, 2).build();
    let array_before = session.array().values().to_vec();

    for command in [
        Command::ListInsertTail(Some(1)),
        Command::TreeInsert(Some(1)),
        Command::TreeStep,
        Command::ListClear,
    ] {
        assert!(matches!(
            session.dispatch(command),
            Err(VisError::ModeMismatch { active: Mode::Array, .. })
        ));
    }
    assert!(session.list().is_empty());
    assert!(session.bst().is_empty());
    assert_eq!(session.array().values(), array_before.as_slice());
}

#[test]
fn test_modes_keep_independent_state() {
    let mut session = SessionBuilder::new().build();
    session.dispatch(Command::ListInsertTail(Some(7))).unwrap();

    session.dispatch(Command::SelectMode(Mode::Bst)).unwrap();
    session.dispatch(Command::TreeInsert(Some(3))).unwrap();
    assert_eq!(session.frame().values(), vec![3]);
    assert_eq!(session.pseudocode(), Mode::Bst.pseudocode());

    session.dispatch(Command::SelectMode(Mode::LinkedList)).unwrap();
    assert_eq!(session.frame().values(), vec![7]);
    assert_eq!(session.status().unwrap().text, Mode::LinkedList.explanation());
}
