use cohort_lib::{
    Column, Direction, PAGE_SIZE, Row, SortIndicator, TableController, TableEvent, Value,
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("No.", "id").sortable(),
        Column::new("Name", "name").sortable(),
        Column::new("Term", "term").sortable(),
        Column::new("Score", "score").sortable(),
        Column::new("Note", "note"),
    ]
}

/// 25 rows, ids 1..=25. Rows 3 and 7 have no score.
fn rows() -> Vec<Row> {
    (1..=25)
        .map(|i: i64| {
            let row = Row::new(i)
                .set("name", format!("item{}", i))
                .set("term", i % 3)
                .set("note", "n/a");
            if i == 3 || i == 7 {
                row
            } else {
                row.set("score", (i * 7) % 11)
            }
        })
        .collect()
}

fn table() -> TableController {
    TableController::new(columns(), rows()).selectable(true)
}

fn keys(rows: &[Row]) -> Vec<String> {
    rows.iter().map(Row::key).collect()
}

fn position(table: &TableController, key: &str) -> usize {
    table.rows().iter().position(|r| r.key() == key).unwrap()
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initial_state() {
    let shuffled: Vec<Row> = rows().into_iter().rev().collect();
    let table = TableController::new(columns(), shuffled);
    let view = table.view();

    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.sort_key, Some("id"));
    assert_eq!(view.sort_direction, Direction::Asc);
    assert!(view.selected_ids().is_empty());
    assert_eq!(keys(view.visible_rows), (1..=10).map(|i| i.to_string()).collect::<Vec<_>>());
}

#[test]
fn test_natural_ordering_of_string_ids() {
    let rows = vec![Row::new("a10"), Row::new("a2"), Row::new("a1")];
    let table = TableController::new(vec![Column::new("ID", "id")], rows);
    assert_eq!(keys(table.rows()), vec!["a1", "a2", "a10"]);
}

#[test]
fn test_negative_ids_seed_before_positive() {
    let rows = vec![Row::new(3), Row::new(-5)];
    let table = TableController::new(vec![Column::new("ID", "id")], rows);
    assert_eq!(keys(table.rows()), vec!["-5", "3"]);
}

#[test]
fn test_accented_text_collates_with_base_letter() {
    let rows = vec![Row::new("f"), Row::new("é"), Row::new("e")];
    let table = TableController::new(vec![Column::new("ID", "id")], rows);
    assert_eq!(keys(table.rows()), vec!["e", "é", "f"]);
}

#[test]
fn test_empty_table() {
    let mut table = TableController::new(columns(), Vec::new()).selectable(true);
    let view = table.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(view.visible_rows.is_empty());
    assert_eq!(view.filler_rows, PAGE_SIZE);
    assert!(!view.all_on_page_selected);

    table.next_page();
    table.toggle_all_on_page(true);
    assert_eq!(table.current_page(), 1);
    assert!(table.selection().is_empty());
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_first_click_descending_then_cycles() {
    let mut table = table();

    table.sort_by("term");
    assert_eq!(table.view().sort_direction, Direction::Desc);
    assert_eq!(table.rows()[0].get("term"), Some(&Value::Int(2)));
    assert_eq!(table.rows()[24].get("term"), Some(&Value::Int(0)));

    table.sort_by("term");
    assert_eq!(table.view().sort_direction, Direction::Asc);
    assert_eq!(table.rows()[0].get("term"), Some(&Value::Int(0)));

    table.sort_by("term");
    assert_eq!(table.view().sort_direction, Direction::Desc);
    assert_eq!(table.rows()[0].get("term"), Some(&Value::Int(2)));
}

#[test]
fn test_switching_column_starts_descending() {
    let mut table = table();
    table.sort_by("term");
    table.sort_by("term");
    assert_eq!(table.view().sort_direction, Direction::Asc);

    table.sort_by("name");
    let view = table.view();
    assert_eq!(view.sort_key, Some("name"));
    assert_eq!(view.sort_direction, Direction::Desc);
    // Natural order: item25 is the largest
    assert_eq!(table.rows()[0].key(), "25");
    assert_eq!(table.rows()[24].key(), "1");
}

#[test]
fn test_sort_by_id_flips_default() {
    let mut table = table();
    table.sort_by("id");
    assert_eq!(table.view().sort_direction, Direction::Desc);
    assert_eq!(table.rows()[0].key(), "25");
}

#[test]
fn test_sort_is_stable_for_equal_values() {
    let mut table = table();
    table.sort_by("term");
    // term 2 rows keep ascending id order: 2, 5, 8, ...
    assert_eq!(keys(&table.rows()[..3]), vec!["2", "5", "8"]);
}

#[test]
fn test_absent_values_keep_relative_order() {
    let mut table = table();
    assert!(position(&table, "3") < position(&table, "7"));

    table.sort_by("score");
    assert!(position(&table, "3") < position(&table, "7"));
    table.sort_by("score");
    assert!(position(&table, "3") < position(&table, "7"));
}

#[test]
fn test_sort_non_sortable_is_noop() {
    let mut table = table();
    table.toggle_key("1", true);

    assert_eq!(table.sort_by("note"), None);
    assert_eq!(table.sort_by("missing"), None);

    let view = table.view();
    assert_eq!(view.sort_key, Some("id"));
    assert_eq!(view.sort_direction, Direction::Asc);
    assert_eq!(view.selected_ids(), vec!["1"]);
}

#[test]
fn test_explicit_sort_keys_override_column_flags() {
    let mut table = TableController::new(columns(), rows()).sort_keys(["term"]);
    assert_eq!(table.sort_by("name"), None);
    assert!(table.sort_by("term").is_some());

    let view = table.view();
    let name = &view.columns[1];
    let term = &view.columns[2];
    assert_eq!(view.indicator(name), None);
    assert_eq!(view.indicator(term), Some(SortIndicator::Descending));
}

#[test]
fn test_sort_key_without_column_is_inert() {
    let rows = vec![
        Row::new(1).set("hidden", 5),
        Row::new(2).set("hidden", 9),
        Row::new(3).set("hidden", 1),
    ];
    let mut table = TableController::new(vec![Column::new("ID", "id")], rows)
        .selectable(true)
        .sort_keys(["id", "hidden"]);
    table.toggle_key("1", true);

    assert!(!table.is_sortable("hidden"));
    assert_eq!(table.sort_by("hidden"), None);

    let view = table.view();
    assert_eq!(keys(view.visible_rows), vec!["1", "2", "3"]);
    assert_eq!(view.sort_key, Some("id"));
    assert_eq!(view.sort_direction, Direction::Asc);
    assert_eq!(view.selected_ids(), vec!["1"]);
}

#[test]
fn test_sort_keeps_page() {
    let mut table = table();
    table.next_page();
    table.sort_by("term");
    assert_eq!(table.current_page(), 2);
}

#[test]
fn test_mixed_number_and_text_values() {
    let rows = vec![
        Row::new(1).set("v", "item10"),
        Row::new(2).set("v", 3),
        Row::new(3).set("v", "item2"),
        Row::new(4).set("v", 20),
    ];
    let mut table = TableController::new(vec![Column::new("V", "v").sortable()], rows);
    table.sort_by("v");
    table.sort_by("v");
    assert_eq!(keys(table.rows()), vec!["2", "4", "3", "1"]);
}

// ============================================================================
// Selection scoping
// ============================================================================

#[test]
fn test_selection_cleared_by_page_round_trip() {
    let mut table = table();
    table.toggle_all_on_page(true);
    assert_eq!(table.selection().len(), 10);

    table.next_page();
    assert!(table.selection().is_empty());
    table.prev_page();
    assert_eq!(table.current_page(), 1);
    assert!(table.selection().is_empty());
    assert!(!table.view().all_on_page_selected);
}

#[test]
fn test_selection_cleared_by_sort() {
    let mut table = table();
    table.toggle_key("4", true);
    let event = table.sort_by("name");
    assert!(table.selection().is_empty());
    assert_eq!(
        event,
        Some(TableEvent::Sorted {
            key: "name".into(),
            direction: Direction::Desc,
            deselected: vec!["4".into()],
        })
    );
}

#[test]
fn test_clamped_page_request_still_clears_selection() {
    let mut table = table();
    table.toggle_key("2", true);
    let event = table.prev_page();
    assert_eq!(
        event,
        TableEvent::PageChanged {
            page: 1,
            deselected: vec!["2".into()],
        }
    );
    assert!(table.selection().is_empty());
}

#[test]
fn test_select_all_scope() {
    let mut table = table();
    // A row from page 2, checked before toggling page 1
    table.toggle_key("15", true);

    let event = table.toggle_all_on_page(true);
    let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
    assert_eq!(
        event,
        TableEvent::SelectionChanged {
            added: expected.clone(),
            removed: Vec::new(),
        }
    );
    assert_eq!(table.selection().len(), 11);
    assert!(table.view().all_on_page_selected);

    let event = table.toggle_all_on_page(false);
    assert_eq!(
        event,
        TableEvent::SelectionChanged {
            added: Vec::new(),
            removed: expected,
        }
    );
    assert_eq!(table.view().selected_ids(), vec!["15"]);
}

#[test]
fn test_toggle_row_by_id() {
    let mut table = table();
    let id = table.rows()[0].id().clone();
    table.toggle_row(&id, true);
    assert!(table.is_selected("1"));
    assert!(!table.view().all_on_page_selected);

    let event = table.toggle_row(&id, true);
    assert_eq!(
        event,
        TableEvent::SelectionChanged {
            added: Vec::new(),
            removed: Vec::new(),
        }
    );

    table.toggle_row(&id, false);
    assert!(table.selection().is_empty());
}

#[test]
fn test_numeric_and_text_ids_share_selection_key() {
    let mut table = table();
    table.toggle_row(&"7".into(), true);
    assert!(table.is_selected(&table.rows()[6].key()));
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_pagination_bounds() {
    let mut table = table();
    assert_eq!(table.total_pages(), 3);

    table.next_page();
    table.next_page();
    assert_eq!(table.current_page(), 3);
    table.next_page();
    assert_eq!(table.current_page(), 3);
    assert!(!table.view().has_next());

    table.go_to_page(-10);
    assert_eq!(table.current_page(), 1);
    table.prev_page();
    assert_eq!(table.current_page(), 1);
    assert!(!table.view().has_prev());
}

#[test]
fn test_filler_rows() {
    let mut table = table();
    assert_eq!(table.view().filler_rows, 0);
    table.next_page();
    assert_eq!(table.view().filler_rows, 0);
    table.next_page();

    let view = table.view();
    assert_eq!(view.visible_rows.len(), 5);
    assert_eq!(view.filler_rows, 5);
    assert_eq!(keys(view.visible_rows), vec!["21", "22", "23", "24", "25"]);
}

// ============================================================================
// Dataset replacement
// ============================================================================

#[test]
fn test_set_rows_resets_everything() {
    let mut table = table();
    table.sort_by("term");
    table.next_page();
    table.toggle_all_on_page(true);
    assert!(!table.selection().is_empty());

    let replacement: Vec<Row> = (1..=12i64).rev().map(Row::new).collect();
    let event = table.set_rows(replacement);
    assert_eq!(event, TableEvent::RowsReplaced { count: 12 });

    let view = table.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.sort_key, Some("id"));
    assert_eq!(view.sort_direction, Direction::Asc);
    assert!(view.selected_ids().is_empty());
    assert_eq!(view.visible_rows[0].key(), "1");
}

#[test]
fn test_indicators() {
    let mut table = table();
    {
        let view = table.view();
        assert_eq!(view.indicator(&view.columns[0]), Some(SortIndicator::Ascending));
        assert_eq!(view.indicator(&view.columns[1]), Some(SortIndicator::Neutral));
        assert_eq!(view.indicator(&view.columns[4]), None);
    }
    table.sort_by("name");
    let view = table.view();
    assert_eq!(view.indicator(&view.columns[0]), Some(SortIndicator::Neutral));
    assert_eq!(view.indicator(&view.columns[1]), Some(SortIndicator::Descending));
}
