//! Demo gallery: both widgets on one screen with example data.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuigrid::{
    Column, DataTable, Event, FieldVariant, InputField, InputFieldState, Key, Record, Rect, Rgb,
    Row, TableState, Terminal, TextStyle, Value,
};

fn example_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable(true),
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email"),
        Column::new("age", "Age").sortable(true),
    ]
}

fn example_users() -> Vec<Row> {
    vec![
        Row::new()
            .set("id", 1)
            .set("name", "Alice")
            .set("email", "alice@example.com")
            .set("age", 28),
        Row::new()
            .set("id", 2)
            .set("name", "Bob")
            .set("email", "bob@example.com")
            .set("age", 34),
        Row::new()
            .set("id", 3)
            .set("name", "Charlie")
            .set("email", "charlie@example.com")
            .set("age", 22),
    ]
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let columns = example_columns();
    let users = example_users();

    let mut term = Terminal::new()?;
    let mut input_state = InputFieldState::new();
    let mut table_state = TableState::new();
    let mut input_focused = true;
    let mut selected_names: Vec<String> = Vec::new();

    log::info!("gallery started with {} users", users.len());

    loop {
        let mut pending: Option<Vec<String>> = None;

        let field = InputField::new()
            .label("Username")
            .placeholder("Enter your username")
            .helper_text("Try the clear and password toggle!")
            .clearable(true)
            .password_toggle(true)
            .variant(FieldVariant::Outlined)
            .focused(input_focused);

        let mut table = DataTable::new(&columns, &users)
            .selectable(true)
            .on_row_select(|rows| {
                pending = Some(
                    rows.iter()
                        .map(|row| match row.field("name") {
                            Value::Text(name) => name,
                            other => other.to_string(),
                        })
                        .collect(),
                );
            });

        let field_h = field.height();
        let table_top = 2 + field_h + 2;
        let (width, height) = term.size();

        let mut field_layout = Default::default();
        let mut table_layout = Default::default();
        term.draw(|buf| {
            let fg = Rgb::new(255, 255, 255);
            let bg = Rgb::new(0, 0, 0);
            buf.set_text(
                0,
                0,
                "tuigrid gallery - Tab switches focus, Esc quits",
                fg,
                bg,
                TextStyle::new().dim(),
            );
            field_layout = field.render(&input_state, buf, Rect::new(0, 2, 40, field_h));
            table_layout = table.render(
                &table_state,
                buf,
                Rect::new(0, table_top, width.min(70), height.saturating_sub(table_top + 3)),
            );
            let status = if selected_names.is_empty() {
                "Selected rows: none".to_string()
            } else {
                format!("Selected rows: {}", selected_names.join(", "))
            };
            buf.set_text(0, height.saturating_sub(1), &status, fg, bg, TextStyle::new());
        })?;

        for event in term.poll(None)? {
            match event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key { key: Key::Tab, .. } => {
                    input_focused = !input_focused;
                }
                Event::Key { .. } => {
                    if input_focused {
                        field.handle_event(&mut input_state, &field_layout, &event);
                    }
                }
                Event::Click { x, y, .. } => {
                    input_focused = field_layout.input.contains(x, y);
                    field.handle_event(&mut input_state, &field_layout, &event);
                    table.handle_event(&mut table_state, &table_layout, &event);
                }
                Event::Resize { .. } => {}
            }
        }

        drop(table);
        if let Some(names) = pending {
            selected_names = names;
        }
    }
}
