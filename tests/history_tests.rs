// Integration tests for grow/shrink history through the command surface

use syntax_select::{
    CommandOutcome, EditorHost, HistoryStore, MemoryHost, Range, SelectSettings, SelectionHistory,
    SmartSelect,
};

// 0         1         2
// 0123456789012345678901234
// const o = { a: 1, b: 2 };
const SOURCE: &str = "const o = { a: 1, b: 2 };";

fn host_with(selections: Vec<Range>) -> MemoryHost {
    MemoryHost::new(SOURCE, "typescript").with_selections(selections)
}

/// Grow until nothing changes, delivering change notifications like an editor.
fn grow_to_exhaustion(
    select: &SmartSelect,
    host: &mut MemoryHost,
    history: &mut SelectionHistory,
) -> Vec<Vec<Range>> {
    let mut seen = Vec::new();
    while select.grow(host, history) == CommandOutcome::Applied {
        assert!(select.selection_changed(&host.selections(), history));
        seen.push(host.selections());
        assert!(seen.len() < 50, "growth must terminate");
    }
    seen
}

#[test]
fn test_grow_then_shrink_restores_initial_selection() {
    let select = SmartSelect::default();
    let initial = vec![Range::cursor(12)];
    let mut host = host_with(initial.clone());
    let mut history = SelectionHistory::new();

    let grown = grow_to_exhaustion(&select, &mut host, &mut history);
    let n = grown.len();
    assert!(n >= 3, "expected several grow steps, got {n}");
    assert_eq!(history.len(), n);

    // Walk back through every intermediate selection
    for expected in grown.iter().rev().skip(1) {
        assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Applied);
        assert!(select.selection_changed(&host.selections(), &mut history));
        assert_eq!(&host.selections(), expected);
    }
    assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Applied);
    assert_eq!(host.selections(), initial);

    // History exhausted: native shrink takes over
    assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Native);
    assert_eq!(host.native_shrinks(), 1);
    assert_eq!(host.selections(), initial);
}

#[test]
fn test_first_grow_selects_property_name() {
    let select = SmartSelect::default();
    let mut host = host_with(vec![Range::cursor(12)]);
    let mut history = SelectionHistory::new();

    assert_eq!(select.grow(&mut host, &mut history), CommandOutcome::Applied);
    assert_eq!(host.selections(), vec![Range::new(12, 13)]);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_inverse_law_with_multiple_cursors() {
    let select = SmartSelect::default();
    let initial = vec![Range::cursor(12), Range::cursor(21)];
    let mut host = host_with(initial.clone());
    let mut history = SelectionHistory::new();

    for _ in 0..3 {
        assert_eq!(select.grow(&mut host, &mut history), CommandOutcome::Applied);
    }
    for _ in 0..3 {
        assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Applied);
    }
    assert_eq!(host.selections(), initial);
}

#[test]
fn test_external_change_invalidates_history() {
    let select = SmartSelect::default();
    let mut host = host_with(vec![Range::cursor(12)]);
    let mut history = SelectionHistory::new();

    select.grow(&mut host, &mut history);
    select.grow(&mut host, &mut history);
    assert_eq!(history.len(), 2);

    // The user clicks somewhere else
    let clicked = vec![Range::cursor(3)];
    host.set_selections(clicked.clone());
    assert!(!select.selection_changed(&clicked, &mut history));
    assert!(history.is_empty());

    assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Native);
    assert_eq!(host.selections(), clicked, "shrink must not jump back");
}

#[test]
fn test_missed_notification_is_detected_on_next_command() {
    let select = SmartSelect::default();
    let mut host = host_with(vec![Range::cursor(12)]);
    let mut history = SelectionHistory::new();

    select.grow(&mut host, &mut history);
    // Selection changes without a notification reaching the engine
    host.set_selections(vec![Range::cursor(0)]);

    assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Native);
    assert_eq!(host.selections(), vec![Range::cursor(0)]);
}

#[test]
fn test_grow_after_manual_move_starts_fresh_history() {
    let select = SmartSelect::default();
    let mut host = host_with(vec![Range::cursor(12)]);
    let mut history = SelectionHistory::new();

    select.grow(&mut host, &mut history);
    select.grow(&mut host, &mut history);

    host.set_selections(vec![Range::cursor(21)]);
    assert_eq!(select.grow(&mut host, &mut history), CommandOutcome::Applied);
    assert_eq!(history.len(), 1, "only the new starting point is remembered");

    assert_eq!(select.shrink(&mut host, &mut history), CommandOutcome::Applied);
    assert_eq!(host.selections(), vec![Range::cursor(21)]);
}

#[test]
fn test_whole_file_selection_is_unchanged() {
    let select = SmartSelect::default();
    let whole = vec![Range::new(0, SOURCE.len())];
    let mut host = host_with(whole.clone());
    let mut history = SelectionHistory::new();

    assert_eq!(select.grow(&mut host, &mut history), CommandOutcome::Unchanged);
    assert_eq!(host.selections(), whole);
    assert!(history.is_empty());
}

#[test]
fn test_partial_multi_selection_leaves_stuck_cursor_in_place() {
    let select = SmartSelect::default();
    let whole = Range::new(0, SOURCE.len());
    let mut host = host_with(vec![whole, Range::cursor(12)]);
    let mut history = SelectionHistory::new();

    assert_eq!(select.grow(&mut host, &mut history), CommandOutcome::Applied);
    assert_eq!(host.selections(), vec![whole, Range::new(12, 13)]);
}

#[test]
fn test_bracket_setting_reaches_strategy() {
    let settings = SelectSettings {
        exclude_brackets: Some(true),
        ..Default::default()
    };
    let select = SmartSelect::new(settings);
    let mut host = host_with(vec![Range::new(12, 16)]);
    let mut history = SelectionHistory::new();

    select.grow(&mut host, &mut history);
    assert_eq!(host.selections(), vec![Range::new(12, 22)]);
    select.grow(&mut host, &mut history);
    assert_eq!(host.selections(), vec![Range::new(10, 24)]);
}

#[test]
fn test_histories_are_scoped_per_buffer() {
    let select = SmartSelect::default();
    let mut store = HistoryStore::new();
    let mut first = host_with(vec![Range::cursor(12)]);
    let mut second = MemoryHost::new("[1, 2]", "json").with_selections(vec![Range::cursor(1)]);

    select.grow(&mut first, store.open("first"));
    select.grow(&mut first, store.open("first"));
    select.grow(&mut second, store.open("second"));

    assert_eq!(store.get(&"first").map(SelectionHistory::len), Some(2));
    assert_eq!(store.get(&"second").map(SelectionHistory::len), Some(1));

    // Closing a buffer drops its history without touching the other one
    store.close(&"first");
    assert!(store.get(&"first").is_none());
    let second_history = store.get_mut(&"second").expect("still open");
    assert_eq!(select.shrink(&mut second, second_history), CommandOutcome::Applied);
    assert_eq!(second.selections(), vec![Range::cursor(1)]);
}
