use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuigrid::{
    Event, FieldSize, FieldVariant, InputField, InputFieldState, Key, Rect, Rgb, Terminal,
    TextStyle,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("input_field.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut state = InputFieldState::new();

    loop {
        let field = InputField::new()
            .label("Username")
            .placeholder("Enter your username")
            .helper_text("Try the clear and password toggle!")
            .clearable(true)
            .password_toggle(true)
            .variant(FieldVariant::Outlined)
            .size(FieldSize::Medium)
            .focused(true);

        let mut layout = Default::default();
        term.draw(|buf| {
            buf.set_text(
                0,
                0,
                "Input Field Demo - type something, Esc to quit",
                Rgb::new(255, 255, 255),
                Rgb::new(0, 0, 0),
                TextStyle::new().dim(),
            );
            layout = field.render(&state, buf, Rect::new(0, 2, 40, field.height()));
            let typed = format!("You typed: {}", state.text());
            buf.set_text(
                0,
                2 + field.height() + 1,
                &typed,
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
            field.handle_event(&mut state, &layout, &event);
        }
    }
}
