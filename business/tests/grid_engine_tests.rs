//! Behavioral tests for the grid engine through its public API.

use nexus_business::grid::{
    Card, Column, GridBody, GridEngine, GridOptions, Responsive, Row, SortDirection, Viewport,
};
use serde_json::{Value, json};

fn rows(values: Vec<Value>) -> Vec<Row> {
    values
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(row) => Some(row),
            _ => None,
        })
        .collect()
}

fn field<'a>(row: &'a Row, key: &str) -> &'a Value {
    row.get(key).unwrap_or(&Value::Null)
}

fn column_of(view_rows: &[&Row], key: &str) -> Vec<Value> {
    view_rows.iter().map(|row| field(row, key).clone()).collect()
}

fn options(page_size: usize) -> GridOptions {
    GridOptions {
        page_size_options: vec![page_size],
        default_page_size: page_size,
    }
}

mod sorting_tests {
    use super::*;

    fn engine() -> GridEngine {
        GridEngine::new(
            vec![
                Column::new("n", "Name").sortable(),
                Column::new("v", "Value").sortable(),
                Column::new("flag", "Flag").sortable(),
                Column::new("note", "Note"),
            ],
            GridOptions::default(),
        )
    }

    #[test]
    fn test_name_then_value_scenario() {
        let data = rows(vec![json!({ "n": "b", "v": 2 }), json!({ "n": "a", "v": 10 })]);
        let mut engine = engine();

        let view = engine.compute_view(&data);
        assert_eq!(column_of(&view.rows, "n"), vec![json!("a"), json!("b")]);

        engine.request_sort("n");
        let view = engine.compute_view(&data);
        assert_eq!(column_of(&view.rows, "n"), vec![json!("b"), json!("a")]);

        engine.request_sort("v");
        let view = engine.compute_view(&data);
        assert_eq!(column_of(&view.rows, "v"), vec![json!(2), json!(10)]);
        assert_eq!(engine.sort().direction, SortDirection::Asc);
    }

    #[test]
    fn test_sorting_twice_reverses() {
        let data = rows(vec![
            json!({ "n": "delta" }),
            json!({ "n": "Alpha" }),
            json!({ "n": "charlie" }),
            json!({ "n": "bravo" }),
        ]);
        let mut engine = engine();
        engine.request_sort("v");
        engine.request_sort("n");
        let ascending = column_of(&engine.compute_view(&data).rows, "n");
        engine.request_sort("n");
        let mut descending = column_of(&engine.compute_view(&data).rows, "n");
        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(ascending[0], json!("Alpha"));
    }

    #[test]
    fn test_unsortable_or_unknown_column_keeps_state() {
        let mut engine = engine();
        engine.request_sort("n");
        let before = engine.sort();
        engine.request_sort("note");
        engine.request_sort("nope");
        assert_eq!(engine.sort(), before);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let data = rows(vec![json!({ "v": 10 }), json!({ "v": 9 }), json!({ "v": 1.5 })]);
        let mut engine = engine();
        engine.request_sort("v");
        let view = engine.compute_view(&data);
        assert_eq!(column_of(&view.rows, "v"), vec![json!(1.5), json!(9), json!(10)]);
    }

    #[test]
    fn test_true_sorts_before_false_ascending() {
        let data = rows(vec![
            json!({ "flag": false }),
            json!({ "flag": true }),
            json!({ "flag": false }),
        ]);
        let mut engine = engine();
        engine.request_sort("flag");
        let view = engine.compute_view(&data);
        assert_eq!(column_of(&view.rows, "flag"), vec![json!(true), json!(false), json!(false)]);
    }

    #[test]
    fn test_mixed_kinds_keep_input_order() {
        let data = rows(vec![
            json!({ "n": 3, "id": 0 }),
            json!({ "n": "x", "id": 1 }),
            json!({ "id": 2 }),
        ]);
        let engine = engine();
        let view = engine.compute_view(&data);
        assert_eq!(column_of(&view.rows, "id"), vec![json!(0), json!(1), json!(2)]);
    }
}

mod pagination_tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Row> {
        rows((0..count).map(|i| json!({ "i": i })).collect())
    }

    #[test]
    fn test_page_size_one_scenario() {
        let data = numbered(3);
        let mut engine = GridEngine::new(vec![Column::new("i", "#").sortable()], options(1));

        assert_eq!(column_of(&engine.compute_view(&data).rows, "i"), vec![json!(0)]);
        engine.set_page(2);
        assert_eq!(column_of(&engine.compute_view(&data).rows, "i"), vec![json!(2)]);
        engine.set_page(3);
        let view = engine.compute_view(&data);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_rows, 3);
    }

    #[test]
    fn test_pages_partition_rows() {
        let data = numbered(12);
        let mut engine = GridEngine::new(vec![Column::new("i", "#").sortable()], options(5));
        let page_count = engine.pager(data.len()).page_count();
        assert_eq!(page_count, 3);

        let mut seen = Vec::new();
        for page in 0..page_count {
            engine.set_page(page);
            seen.extend(column_of(&engine.compute_view(&data).rows, "i"));
        }
        assert_eq!(seen, (0..12).map(|i| json!(i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut engine = GridEngine::new(vec![Column::new("i", "#")], GridOptions::default());
        engine.set_page(2);
        engine.set_page_size(25);
        assert_eq!(engine.pagination().page, 0);
        assert_eq!(engine.pagination().page_size, 25);
    }

    #[test]
    fn test_empty_rows() {
        let engine = GridEngine::new(vec![Column::new("i", "#")], GridOptions::default());
        let output = engine.render(&[], Viewport::Desktop, None);
        assert_eq!(output.pager.total_rows, 0);
        assert_eq!(output.pager.summary(), "0–0 of 0");
        assert!(matches!(output.body, GridBody::Table { rows, .. } if rows.is_empty()));
    }
}

mod layout_tests {
    use super::*;

    fn engine() -> GridEngine {
        GridEngine::new(
            vec![
                Column::new("n", "Name").sortable(),
                Column::new("t", "Tablet tag").responsive(Responsive::Tablet),
                Column::new("d", "Desktop only").responsive(Responsive::Desktop),
            ],
            GridOptions::default(),
        )
    }

    fn header_ids(engine: &GridEngine, viewport: Viewport) -> Vec<String> {
        engine
            .header(viewport)
            .into_iter()
            .map(|cell| cell.id.to_string())
            .collect()
    }

    #[test]
    fn test_desktop_column_visibility() {
        let engine = engine();
        assert_eq!(header_ids(&engine, Viewport::Desktop), vec!["n", "t", "d"]);
        assert_eq!(header_ids(&engine, Viewport::Tablet), vec!["n", "t"]);
        assert_eq!(header_ids(&engine, Viewport::Mobile), vec!["n", "t"]);
    }

    #[test]
    fn test_card_mode_only_on_mobile_with_renderer() {
        let engine = engine();
        let data = rows(vec![json!({ "n": "a" })]);
        let card = |row: &Row, index: usize| {
            Card::new(format!("{index}:{}", field(row, "n").as_str().unwrap_or_default()))
        };

        let mobile = engine.render(&data, Viewport::Mobile, Some(&card));
        assert_eq!(mobile.body, GridBody::Cards(vec![Card::new("0:a")]));

        let tablet = engine.render(&data, Viewport::Tablet, Some(&card));
        assert!(matches!(tablet.body, GridBody::Table { .. }));
    }
}
