use tuigrid::{sorted_view, Column, Record, Row, Selection, SortOrder, SortState, TableState, Value};

fn users() -> Vec<Row> {
    vec![
        Row::new().set("id", 1).set("name", "Alice").set("age", 28),
        Row::new().set("id", 2).set("name", "Bob").set("age", 34),
        Row::new().set("id", 3).set("name", "Charlie").set("age", 22),
    ]
}

fn name_column() -> Column {
    Column::new("name", "Name").sortable(true)
}

fn ids(view: &[&Row]) -> Vec<i64> {
    view.iter()
        .map(|row| match row.field("id") {
            Value::Int(id) => id,
            other => panic!("unexpected id value: {other:?}"),
        })
        .collect()
}

// ============================================================================
// Sort engine
// ============================================================================

#[test]
fn test_unsorted_view_preserves_input_order() {
    let rows = users();
    let view = sorted_view(&rows, &SortState::new());
    assert_eq!(ids(&view), vec![1, 2, 3]);
}

#[test]
fn test_toggle_activates_ascending_then_flips() {
    let column = name_column();
    let mut sort = SortState::new();

    sort.toggle(&column);
    assert_eq!(sort.active_key(), Some("name"));
    assert_eq!(sort.order(), SortOrder::Ascending);

    sort.toggle(&column);
    assert_eq!(sort.order(), SortOrder::Descending);

    sort.toggle(&column);
    assert_eq!(sort.order(), SortOrder::Ascending);
}

#[test]
fn test_toggle_non_sortable_is_a_no_op() {
    let column = Column::new("email", "Email");
    let mut sort = SortState::new();
    sort.toggle(&column);
    assert_eq!(sort.active_key(), None);
}

#[test]
fn test_switching_columns_resets_to_ascending() {
    let name = name_column();
    let age = Column::new("age", "Age").sortable(true);
    let mut sort = SortState::new();

    sort.toggle(&name);
    sort.toggle(&name);
    assert_eq!(sort.order(), SortOrder::Descending);

    sort.toggle(&age);
    assert_eq!(sort.active_key(), Some("age"));
    assert_eq!(sort.order(), SortOrder::Ascending);
}

#[test]
fn test_descending_reverses_ascending_for_distinct_keys() {
    let rows = users();
    let column = name_column();
    let mut sort = SortState::new();

    sort.toggle(&column);
    let ascending = ids(&sorted_view(&rows, &sort));
    assert_eq!(ascending, vec![1, 2, 3]);

    sort.toggle(&column);
    let descending = ids(&sorted_view(&rows, &sort));
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_numeric_sort_uses_numeric_order() {
    let rows = users();
    let column = Column::new("age", "Age").sortable(true);
    let mut sort = SortState::new();

    sort.toggle(&column);
    assert_eq!(ids(&sorted_view(&rows, &sort)), vec![3, 1, 2]);
}

#[test]
fn test_equal_keys_keep_relative_input_order() {
    let rows = vec![
        Row::new().set("id", 1).set("group", "a"),
        Row::new().set("id", 2).set("group", "b"),
        Row::new().set("id", 3).set("group", "a"),
        Row::new().set("id", 4).set("group", "b"),
    ];
    let column = Column::new("group", "Group").sortable(true);
    let mut sort = SortState::new();

    sort.toggle(&column);
    assert_eq!(ids(&sorted_view(&rows, &sort)), vec![1, 3, 2, 4]);

    // Descending reverses groups but not the order within a group.
    sort.toggle(&column);
    assert_eq!(ids(&sorted_view(&rows, &sort)), vec![2, 4, 1, 3]);
}

#[test]
fn test_sorted_view_does_not_mutate_input() {
    let rows = users();
    let column = name_column();
    let mut sort = SortState::new();
    sort.toggle(&column);
    sort.toggle(&column);

    let _ = sorted_view(&rows, &sort);
    assert_eq!(ids(&rows.iter().collect::<Vec<_>>()), vec![1, 2, 3]);
}

#[test]
fn test_missing_field_sorts_as_equal() {
    let rows = vec![
        Row::new().set("id", 1),
        Row::new().set("id", 2).set("name", "Bob"),
        Row::new().set("id", 3),
    ];
    let column = name_column();
    let mut sort = SortState::new();
    sort.toggle(&column);

    // Null compares equal to everything, so the stable sort leaves the
    // order untouched.
    assert_eq!(ids(&sorted_view(&rows, &sort)), vec![1, 2, 3]);
}

// ============================================================================
// Selection tracker
// ============================================================================

#[test]
fn test_toggle_flips_membership() {
    let mut selection = Selection::new();
    selection.toggle(1);
    assert!(selection.is_selected(1));
    selection.toggle(1);
    assert!(!selection.is_selected(1));
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_selects_then_clears() {
    let mut selection = Selection::new();

    selection.toggle_all(3);
    assert_eq!(selection.len(), 3);
    assert!(selection.all_selected(3));

    selection.toggle_all(3);
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_from_partial_selects_everything() {
    let mut selection = Selection::new();
    selection.toggle(0);
    selection.toggle_all(3);
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_toggle_all_with_no_rows_stays_empty() {
    let mut selection = Selection::new();
    selection.toggle_all(0);
    assert!(selection.is_empty());
    assert!(!selection.all_selected(0));
}

#[test]
fn test_all_selected_requires_nonzero_rows() {
    let selection = Selection::new();
    assert!(!selection.all_selected(0));

    let mut selection = Selection::new();
    selection.toggle(0);
    selection.toggle(1);
    assert!(selection.all_selected(2));
    assert!(!selection.all_selected(3));
}

// ============================================================================
// Selected-record reads against the displayed order
// ============================================================================

#[test]
fn test_selected_records_resolve_against_sorted_order() {
    let rows = users();
    let mut state = TableState::new();
    state.sort.toggle(&Column::new("age", "Age").sortable(true));
    state.selection.toggle(0);

    // Position 0 of the age-ascending order is Charlie.
    let selected = state.selected_records(&rows);
    assert_eq!(ids(&selected), vec![3]);
}

#[test]
fn test_selection_is_positional_across_resort() {
    let rows = users();
    let mut state = TableState::new();
    state.selection.toggle(0);
    assert_eq!(ids(&state.selected_records(&rows)), vec![1]);

    // Resorting leaves position 0 checked but moves a different record
    // under it.
    let age = Column::new("age", "Age").sortable(true);
    state.sort.toggle(&age);
    assert!(state.selection.is_selected(0));
    assert_eq!(ids(&state.selected_records(&rows)), vec![3]);
}

#[test]
fn test_selected_records_drop_out_of_range_positions() {
    let rows = users();
    let mut state = TableState::new();
    state.selection.toggle(0);
    state.selection.toggle(2);

    let shrunk = &rows[..1];
    assert_eq!(ids(&state.selected_records(shrunk)), vec![1]);
    // The stored set itself is untouched.
    assert_eq!(state.selection.len(), 2);
}

#[test]
fn test_selected_records_read_out_in_displayed_order() {
    let rows = users();
    let mut state = TableState::new();
    state.selection.toggle(2);
    state.selection.toggle(0);
    assert_eq!(ids(&state.selected_records(&rows)), vec![1, 3]);
}
