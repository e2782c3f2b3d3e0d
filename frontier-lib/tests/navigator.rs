use std::collections::{HashMap, HashSet};

use frontier_lib::{Cursor, Direction, Edge, Host, ResourceId, Row, RowNavigator, ScrollAlign};

/// Host that records every side effect it is asked for.
#[derive(Default)]
struct RecordingHost {
    hidden: HashSet<usize>,
    resources: HashMap<String, String>,
    scrolled: Vec<(usize, ScrollAlign)>,
    previews: Vec<ResourceId>,
    opened: Vec<String>,
}

impl RecordingHost {
    fn hiding(indices: &[usize]) -> Self {
        Self {
            hidden: indices.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl Host for RecordingHost {
    fn is_visible(&self, index: usize, _row: &Row) -> bool {
        !self.hidden.contains(&index)
    }

    fn scroll_into_view(&mut self, index: usize, align: ScrollAlign) {
        self.scrolled.push((index, align));
    }

    fn update_preview(&mut self, resource_id: &ResourceId) {
        self.previews.push(resource_id.clone());
    }

    fn resource_url(&self, resource_id: &ResourceId) -> Option<String> {
        self.resources.get(resource_id.as_str()).cloned()
    }

    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

/// Host that only implements the required method.
struct BareHost {
    opened: usize,
}

impl Host for BareHost {
    fn open_url(&mut self, _url: &str) {
        self.opened += 1;
    }
}

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row::new(format!("row-{}", i), format!("Row {}", i)))
        .collect()
}

fn assert_cursor_visible(nav: &RowNavigator, host: &RecordingHost) {
    if let Cursor::FocusedAt(i) = nav.cursor() {
        assert!(!host.hidden.contains(&i), "cursor parked on hidden row {}", i);
    }
}

// ============================================================================
// navigate
// ============================================================================

#[test]
fn test_first_navigation_lands_on_first_visible_in_both_directions() {
    let mut host = RecordingHost::hiding(&[0]);

    let mut nav = RowNavigator::new(rows(4));
    nav.navigate(Direction::Next, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(1));

    let mut nav = RowNavigator::new(rows(4));
    nav.navigate(Direction::Prev, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(1));
}

#[test]
fn test_next_then_prev_from_unfocused_is_not_identity() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(rows(3));

    // Lands on visible position 0; Prev then clamps at 0.
    nav.navigate(Direction::Next, &mut host);
    nav.navigate(Direction::Prev, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(0));

    // From the middle the pair composes to the identity.
    nav.navigate(Direction::Next, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(1));
    nav.navigate(Direction::Next, &mut host);
    nav.navigate(Direction::Prev, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(1));
}

#[test]
fn test_navigate_skips_hidden_rows() {
    let mut host = RecordingHost::hiding(&[1, 2]);
    let mut nav = RowNavigator::new(rows(5));

    nav.navigate(Direction::Next, &mut host);
    nav.navigate(Direction::Next, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(3));
    nav.navigate(Direction::Prev, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(0));
}

#[test]
fn test_navigate_clamps_at_end() {
    let mut host = RecordingHost::hiding(&[4]);
    let mut nav = RowNavigator::new(rows(5));

    for _ in 0..20 {
        nav.navigate(Direction::Next, &mut host);
        assert_cursor_visible(&nav, &host);
    }
    assert_eq!(nav.cursor(), Cursor::FocusedAt(3));
}

#[test]
fn test_navigate_from_hidden_focus_restarts_at_first_visible() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(rows(5));
    nav.jump_to_edge(Edge::Last, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(4));

    host.hidden.insert(4);
    nav.navigate(Direction::Prev, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(0));
}

#[test]
fn test_navigate_with_nothing_visible_is_noop() {
    let mut host = RecordingHost::hiding(&[0, 1]);
    let mut nav = RowNavigator::new(rows(2));
    nav.navigate(Direction::Next, &mut host);
    assert_eq!(nav.cursor(), Cursor::Unfocused);
    assert!(host.scrolled.is_empty());
}

#[test]
fn test_cursor_invariant_over_mixed_operations() {
    let mut host = RecordingHost::hiding(&[0, 2, 5]);
    let mut nav = RowNavigator::new(rows(7));

    for step in 0..50 {
        match (step * 7 + 3) % 5 {
            0 => nav.navigate(Direction::Next, &mut host),
            1 => nav.navigate(Direction::Prev, &mut host),
            2 => nav.jump_to_edge(Edge::First, &mut host),
            3 => nav.jump_to_edge(Edge::Last, &mut host),
            _ => nav.focus_row(2, &mut host),
        }
        assert_cursor_visible(&nav, &host);
    }
}

// ============================================================================
// focus_row
// ============================================================================

#[test]
fn test_focus_row_side_effects() {
    let mut host = RecordingHost::default();
    let mut all = rows(3);
    all[2] = all[2].clone().with_resource("res-2");
    let mut nav = RowNavigator::new(all);

    nav.focus_row(2, &mut host);
    assert!(nav.is_focused(2));
    assert!(!nav.is_focused(0));
    assert_eq!(host.scrolled, vec![(2, ScrollAlign::Center)]);
    assert_eq!(host.previews, vec![ResourceId::from("res-2")]);

    // No resource id, no preview call.
    nav.focus_row(1, &mut host);
    assert_eq!(host.previews.len(), 1);
    assert_eq!((0..3).filter(|&i| nav.is_focused(i)).count(), 1);
}

#[test]
fn test_focus_row_ignores_invalid_targets() {
    let mut host = RecordingHost::hiding(&[1]);
    let mut nav = RowNavigator::new(rows(3));

    nav.focus_row(7, &mut host);
    nav.focus_row(1, &mut host);
    assert_eq!(nav.cursor(), Cursor::Unfocused);
    assert!(host.scrolled.is_empty());
}

#[test]
fn test_preview_hook_is_optional() {
    let mut host = BareHost { opened: 0 };
    let mut nav = RowNavigator::new(vec![Row::new("a", "A").with_resource("a")]);
    nav.navigate(Direction::Next, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(0));
    nav.open_focused(&mut host);
    assert_eq!(host.opened, 0);
}

// ============================================================================
// jump_to_edge
// ============================================================================

#[test]
fn test_jump_to_last_skips_hidden() {
    let mut host = RecordingHost::hiding(&[1, 3]);
    let mut nav = RowNavigator::new(rows(5));
    nav.jump_to_edge(Edge::Last, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(4));

    host.hidden.insert(4);
    nav.jump_to_edge(Edge::Last, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(2));
}

#[test]
fn test_jump_to_first_recomputes_visibility() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(rows(4));
    nav.jump_to_edge(Edge::First, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(0));

    host.hidden.extend([0, 1]);
    nav.jump_to_edge(Edge::First, &mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(2));
}

// ============================================================================
// open_focused
// ============================================================================

#[test]
fn test_open_prefers_direct_url() {
    let mut host = RecordingHost::default();
    host.resources.insert("r".into(), "https://lookup".into());
    let mut nav = RowNavigator::new(vec![
        Row::new("a", "A").with_url("https://direct").with_resource("r"),
    ]);
    nav.navigate(Direction::Next, &mut host);
    nav.open_focused(&mut host);
    assert_eq!(host.opened, vec!["https://direct".to_string()]);
}

#[test]
fn test_open_falls_back_to_resource_lookup() {
    let mut host = RecordingHost::default();
    host.resources.insert("r".into(), "https://x".into());
    let mut nav = RowNavigator::new(vec![Row::new("a", "A").with_resource("r")]);
    nav.navigate(Direction::Next, &mut host);
    nav.open_focused(&mut host);
    assert_eq!(host.opened, vec!["https://x".to_string()]);
}

#[test]
fn test_open_without_url_is_noop() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(vec![
        Row::new("a", "A").with_resource("unknown"),
        Row::new("b", "B"),
    ]);

    nav.open_focused(&mut host);
    nav.navigate(Direction::Next, &mut host);
    nav.open_focused(&mut host);
    nav.navigate(Direction::Next, &mut host);
    nav.open_focused(&mut host);
    assert!(host.opened.is_empty());
}

// ============================================================================
// Empty row set
// ============================================================================

#[test]
fn test_empty_rows_every_operation_is_noop() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(Vec::new());

    nav.navigate(Direction::Next, &mut host);
    nav.navigate(Direction::Prev, &mut host);
    nav.jump_to_edge(Edge::First, &mut host);
    nav.jump_to_edge(Edge::Last, &mut host);
    nav.open_focused(&mut host);
    nav.settle(&mut host);

    assert_eq!(nav.cursor(), Cursor::Unfocused);
    assert!(host.scrolled.is_empty());
    assert!(host.previews.is_empty());
    assert!(host.opened.is_empty());
}

// ============================================================================
// resync / settle
// ============================================================================

#[test]
fn test_resync_follows_row_by_key() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(rows(3));
    nav.focus_row(1, &mut host);

    let mut reordered = rows(3);
    reordered.insert(0, Row::new("new", "New"));
    nav.resync(reordered);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(2));
    assert_eq!(nav.focused_row().map(|r| r.key.as_str()), Some("row-1"));
}

#[test]
fn test_resync_drops_vanished_row() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(rows(3));
    nav.focus_row(2, &mut host);
    nav.resync(rows(2));
    assert_eq!(nav.cursor(), Cursor::Unfocused);
}

#[test]
fn test_settle_prefers_row_above() {
    let mut host = RecordingHost::default();
    let mut nav = RowNavigator::new(rows(5));
    nav.focus_row(2, &mut host);

    host.hidden.extend([1, 2]);
    nav.settle(&mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(0));

    host.hidden.insert(0);
    nav.settle(&mut host);
    assert_eq!(nav.cursor(), Cursor::FocusedAt(3));

    host.hidden.extend([3, 4]);
    nav.settle(&mut host);
    assert_eq!(nav.cursor(), Cursor::Unfocused);
}
