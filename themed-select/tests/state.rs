mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{categories, category, recording_select};
use themed_select::{
    Item, ListState, Select, SelectConfig, SelectError, SelectEvent, SelectionState, Transition,
};

// ============================================================================
// SelectionState
// ============================================================================

#[test]
fn test_starts_closed_with_initial_selection() {
    let state = SelectionState::new(Some(category(2)));
    assert_eq!(state.list_state(), ListState::Closed);
    assert_eq!(state.selected_item(), Some(&category(2)));
    assert!(!state.is_dirty());
}

#[test]
fn test_activate_toggles() {
    let mut state = SelectionState::default();
    assert_eq!(state.activate(false), Transition::Opened);
    assert!(state.is_list_open());
    assert_eq!(state.activate(false), Transition::Closed);
    assert!(!state.is_list_open());
}

#[test]
fn test_disabled_activation_is_noop() {
    let mut state = SelectionState::default();
    assert_eq!(state.activate(true), Transition::Ignored);
    assert_eq!(state.activate(true), Transition::Ignored);
    assert!(!state.is_list_open());
    assert!(!state.is_dirty());
}

#[test]
fn test_dismiss_only_closes_open_list() {
    let mut state = SelectionState::default();
    assert_eq!(state.dismiss(), Transition::Ignored);
    state.activate(false);
    assert_eq!(state.dismiss(), Transition::Closed);
    assert!(!state.is_list_open());
}

#[test]
fn test_pick_runs_callback_then_closes() {
    let mut state = SelectionState::default();
    state.activate(false);

    let saw_open = Cell::new(false);
    let transition = state.pick(category(3), |_| saw_open.set(true));

    assert!(saw_open.get());
    assert_eq!(transition, Transition::Picked(category(3)));
    assert!(!state.is_list_open());
    assert_eq!(state.selected_item(), None);
}

#[test]
fn test_pick_leaves_selection_to_consumer() {
    let mut state = SelectionState::new(Some(category(1)));
    state.activate(false);
    state.clear_dirty();

    state.pick(category(3), |_| {});

    assert_eq!(state.selected_item(), Some(&category(1)));
    assert!(state.is_dirty(), "closing the list is still a change");
}

#[test]
fn test_pick_while_closed_is_ignored() {
    let mut state = SelectionState::default();
    let called = Cell::new(false);
    assert_eq!(state.pick(category(1), |_| called.set(true)), Transition::Ignored);
    assert!(!called.get());
    assert_eq!(state.selected_item(), None);
}

#[test]
fn test_selection_identity_is_by_value() {
    let state = SelectionState::new(Some(Item::new("c2", "renamed")));
    assert!(state.is_selected(&category(2)));
    assert!(!state.is_selected(&category(3)));
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let mut state = SelectionState::default();
    state.activate(false);
    assert!(state.is_dirty());
    state.clear_dirty();
    state.replace_selection(None);
    assert!(!state.is_dirty(), "same selection is not a change");
    state.replace_selection(Some(category(1)));
    assert!(state.is_dirty());
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn test_pick_invokes_on_select_once_and_closes() {
    let (mut select, picks) = recording_select(SelectConfig::default());
    select.activate();
    assert!(select.is_list_open());

    let transition = select.pick(category(3));

    assert_eq!(transition, Transition::Picked(category(3)));
    assert_eq!(*picks.borrow(), vec![category(3)]);
    assert!(!select.is_list_open());
    assert_eq!(select.label(), "");
}

#[test]
fn test_ignored_pick_keeps_previous_label() {
    let mut select = Select::builder()
        .items(categories())
        .selected_item(Some(category(1)))
        .on_select(|_: &Item| {})
        .build()
        .unwrap();

    select.activate();
    assert_eq!(select.pick(category(3)), Transition::Picked(category(3)));

    assert_eq!(select.label(), "Category1");
    assert_eq!(select.selected_item(), Some(&category(1)));
    assert_eq!(select.config().selected_item, Some(category(1)));
}

#[test]
fn test_accepted_pick_shows_after_consumer_feeds_it_back() {
    let (mut select, picks) = recording_select(SelectConfig::default());
    select.activate();
    select.pick(category(2));

    let accepted = picks.borrow().last().cloned();
    select.set_selected_item(accepted);
    assert_eq!(select.label(), "Category2");
}

#[test]
fn test_disabled_select_stays_closed() {
    let (mut select, _) = recording_select(SelectConfig {
        disabled: true,
        ..Default::default()
    });
    assert_eq!(select.activate(), Transition::Ignored);
    assert!(!select.is_list_open());
    assert_eq!(select.handle(SelectEvent::Activate), Transition::Ignored);
    assert!(!select.is_list_open());
}

#[test]
fn test_disabling_open_select_blocks_toggle_but_not_dismiss() {
    let (mut select, _) = recording_select(SelectConfig::default());
    select.activate();
    select.set_disabled(true);
    assert_eq!(select.activate(), Transition::Ignored);
    assert!(select.is_list_open());
    assert_eq!(select.dismiss(), Transition::Closed);
}

#[test]
fn test_handle_pick_by_value() {
    let (mut select, picks) = recording_select(SelectConfig::default());
    select.handle(SelectEvent::Activate);
    let transition = select.handle(SelectEvent::Pick("c5".into()));
    assert_eq!(transition, Transition::Picked(category(5)));
    assert_eq!(picks.borrow().len(), 1);
}

#[test]
fn test_handle_pick_duplicate_value_emits_first_match() {
    let (mut select, picks) = recording_select(SelectConfig::default());
    select.set_items(vec![
        category(1),
        Item::new("c2", "Category2"),
        Item::new("c2", "Duplicate"),
    ]);
    select.activate();

    let transition = select.handle(SelectEvent::Pick("c2".into()));

    assert_eq!(transition, Transition::Picked(Item::new("c2", "Category2")));
    assert_eq!(picks.borrow()[0].text, "Category2");
}

#[test]
fn test_handle_pick_unknown_value_is_ignored() {
    let (mut select, picks) = recording_select(SelectConfig::default());
    select.activate();
    assert_eq!(
        select.handle(SelectEvent::Pick("nope".into())),
        Transition::Ignored
    );
    assert!(select.is_list_open());
    assert!(picks.borrow().is_empty());
}

#[test]
fn test_consumer_controls_selection() {
    let (mut select, _) = recording_select(SelectConfig {
        placeholder_text: "select".into(),
        ..Default::default()
    });
    assert_eq!(select.label(), "select");

    select.set_selected_item(Some(category(4)));
    assert_eq!(select.label(), "Category4");
    assert_eq!(select.config().selected_item, Some(category(4)));

    select.set_selected_item(None);
    assert_eq!(select.label(), "select");
}

#[test]
fn test_rebuilding_does_not_persist_selection() {
    for selected in [None, Some(category(1)), Some(category(5))] {
        let (select, _) = recording_select(SelectConfig {
            selected_item: selected.clone(),
            ..Default::default()
        });
        assert_eq!(select.selected_item(), selected.as_ref());
        assert!(!select.is_list_open());
    }
}

#[test]
fn test_instances_are_independent() {
    let (mut first, _) = recording_select(SelectConfig::default());
    let (second, _) = recording_select(SelectConfig::default());
    first.activate();
    assert!(first.is_list_open());
    assert!(!second.is_list_open());
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_builder_requires_on_select() {
    let err = Select::builder().items(categories()).build().unwrap_err();
    assert_eq!(err, SelectError::MissingOnSelect);
}

#[test]
fn test_builder_collects_select_items() {
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    let mut select = Select::builder()
        .items([("low", "Low"), ("medium", "Medium"), ("high", "High")])
        .on_select(move |_: &Item| sink.set(sink.get() + 1))
        .build()
        .unwrap();

    assert_eq!(select.items()[1], Item::new("medium", "Medium"));
    select.activate();
    select.pick(Item::new("high", "High"));
    assert_eq!(count.get(), 1);
}

#[test]
fn test_invalid_activation_opacity_rejected() {
    let result = Select::new(
        SelectConfig {
            activation_opacity: 1.5,
            ..Default::default()
        },
        |_: &Item| {},
    );
    assert_eq!(
        result.unwrap_err(),
        SelectError::InvalidActivationOpacity(1.5)
    );
}

#[test]
fn test_host_can_skip_rerender_on_ignored() {
    let (mut select, _) = recording_select(SelectConfig::default());
    assert!(!select.dismiss().changed());
    assert!(!select.is_dirty());

    assert!(select.activate().changed());
    assert!(select.is_dirty());
    select.clear_dirty();
    assert!(!select.is_dirty());
}

#[test]
fn test_replacing_items_changes_pick_targets() {
    let (mut select, picks) = recording_select(SelectConfig::default());
    select.set_items(vec![Item::new("x", "Extra")]);
    select.activate();
    assert_eq!(select.handle(SelectEvent::Pick("c1".into())), Transition::Ignored);
    assert_eq!(
        select.handle(SelectEvent::Pick("x".into())),
        Transition::Picked(Item::new("x", "Extra"))
    );
    assert_eq!(picks.borrow().len(), 1);
}
