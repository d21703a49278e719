use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuigrid::{Column, DataTable, Event, Key, Rect, Rgb, Row, TableState, Terminal, TextStyle};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let columns = vec![
        Column::new("id", "ID").sortable(true),
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email"),
        Column::new("age", "Age").sortable(true),
    ];
    let users = vec![
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
    ];

    let mut term = Terminal::new()?;
    let mut state = TableState::new();
    let mut selected_count = 0usize;

    loop {
        let mut pending: Option<usize> = None;
        let mut table = DataTable::new(&columns, &users)
            .selectable(true)
            .on_row_select(|rows| pending = Some(rows.len()));

        let (width, height) = term.size();
        let mut layout = Default::default();
        term.draw(|buf| {
            buf.set_text(
                0,
                0,
                "Data Table Demo - click headers to sort, checkboxes to select, Esc to quit",
                Rgb::new(255, 255, 255),
                Rgb::new(0, 0, 0),
                TextStyle::new().dim(),
            );
            layout = table.render(
                &state,
                buf,
                Rect::new(0, 2, width.min(70), height.saturating_sub(4)),
            );
            let status = format!("{selected_count} selected");
            buf.set_text(
                0,
                height.saturating_sub(1),
                &status,
                Rgb::new(255, 255, 255),
                Rgb::new(0, 0, 0),
                TextStyle::new(),
            );
        })?;

        for event in term.poll(None)? {
            if let Event::Key {
                key: Key::Escape, ..
            } = event
            {
                return Ok(());
            }
            table.handle_event(&mut state, &layout, &event);
        }

        drop(table);
        if let Some(count) = pending {
            selected_count = count;
        }
    }
}
