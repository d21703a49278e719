use tuigrid::{
    Buffer, Event, FieldVariant, InputEvent, InputField, InputFieldState, Key, Modifiers,
    MouseButton, Rect,
};

fn key(k: Key) -> Event {
    Event::Key {
        key: k,
        modifiers: Modifiers::new(),
    }
}

fn key_with(k: Key, modifiers: Modifiers) -> Event {
    Event::Key { key: k, modifiers }
}

fn click(x: u16, y: u16) -> Event {
    Event::Click {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn render(field: &InputField<'_>, state: &InputFieldState) -> (Buffer, tuigrid::InputFieldLayout) {
    let mut buf = Buffer::new(40, 8);
    let layout = field.render(state, &mut buf, Rect::new(0, 0, 30, field.height()));
    (buf, layout)
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_renders_label_and_placeholder() {
    let field = InputField::new()
        .label("Username")
        .placeholder("Enter your username");
    let (buf, _) = render(&field, &InputFieldState::new());

    assert_eq!(buf.row_text(0), "Username");
    // Outlined by default: the value line sits inside the border.
    assert!(buf.row_text(2).contains("Enter your username"));
}

#[test]
fn test_outlined_variant_draws_a_border() {
    let field = InputField::new().variant(FieldVariant::Outlined);
    let (buf, _) = render(&field, &InputFieldState::new());

    assert!(buf.row_text(0).starts_with('┌'));
    assert!(buf.row_text(2).starts_with('└'));
}

#[test]
fn test_ghost_variant_is_a_single_line() {
    let field = InputField::new().variant(FieldVariant::Ghost);
    assert_eq!(field.height(), 1);
}

#[test]
fn test_helper_text_shown_when_valid() {
    let field = InputField::new()
        .helper_text("This is a helper text")
        .error_message("Error!");
    let (buf, _) = render(&field, &InputFieldState::new());

    assert_eq!(buf.row_text(3), "This is a helper text");
}

#[test]
fn test_error_message_replaces_helper_when_invalid() {
    let field = InputField::new()
        .helper_text("This is a helper text")
        .error_message("Error!")
        .invalid(true);
    let (buf, _) = render(&field, &InputFieldState::new());

    assert_eq!(buf.row_text(3), "Error!");
}

#[test]
fn test_password_value_renders_masked() {
    let field = InputField::new().password(true).variant(FieldVariant::Ghost);
    let state = InputFieldState::with_text("secret");
    let (buf, _) = render(&field, &state);

    assert!(buf.row_text(0).contains("••••••"));
    assert!(!buf.row_text(0).contains("secret"));
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_emits_changed_with_new_text() {
    let field = InputField::new();
    let mut state = InputFieldState::new();
    let (_, layout) = render(&field, &state);

    let result = field.handle_event(&mut state, &layout, &key(Key::Char('a')));
    assert_eq!(result, Some(InputEvent::Changed("a".into())));
    let result = field.handle_event(&mut state, &layout, &key(Key::Char('b')));
    assert_eq!(result, Some(InputEvent::Changed("ab".into())));
    assert_eq!(state.text(), "ab");
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let field = InputField::new();
    let mut state = InputFieldState::with_text("abc");
    let (_, layout) = render(&field, &state);

    let result = field.handle_event(&mut state, &layout, &key(Key::Backspace));
    assert_eq!(result, Some(InputEvent::Changed("ab".into())));

    let mut empty = InputFieldState::new();
    let result = field.handle_event(&mut empty, &layout, &key(Key::Backspace));
    assert_eq!(result, None);
}

#[test]
fn test_shift_selection_is_replaced_by_typed_char() {
    let field = InputField::new();
    let mut state = InputFieldState::with_text("hello");
    let (_, layout) = render(&field, &state);

    let shift = Modifiers::shift();
    field.handle_event(&mut state, &layout, &key_with(Key::Left, shift));
    field.handle_event(&mut state, &layout, &key_with(Key::Left, shift));
    let result = field.handle_event(&mut state, &layout, &key(Key::Char('X')));

    assert_eq!(result, Some(InputEvent::Changed("helX".into())));
}

#[test]
fn test_ctrl_a_selects_all_for_replacement() {
    let field = InputField::new();
    let mut state = InputFieldState::with_text("hello");
    let (_, layout) = render(&field, &state);

    field.handle_event(&mut state, &layout, &key_with(Key::Char('a'), Modifiers::ctrl()));
    let result = field.handle_event(&mut state, &layout, &key(Key::Char('Z')));

    assert_eq!(result, Some(InputEvent::Changed("Z".into())));
}

#[test]
fn test_enter_submits() {
    let field = InputField::new();
    let mut state = InputFieldState::with_text("hello");
    let (_, layout) = render(&field, &state);

    let result = field.handle_event(&mut state, &layout, &key(Key::Enter));
    assert_eq!(result, Some(InputEvent::Submitted));
    assert_eq!(state.text(), "hello");
}

#[test]
fn test_home_and_end_move_cursor_without_change() {
    let field = InputField::new();
    let mut state = InputFieldState::with_text("hello");
    let (_, layout) = render(&field, &state);

    let result = field.handle_event(&mut state, &layout, &key(Key::Home));
    assert_eq!(result, None);
    assert_eq!(state.edit.cursor, 0);

    let result = field.handle_event(&mut state, &layout, &key(Key::End));
    assert_eq!(result, None);
    assert_eq!(state.edit.cursor, 5);
}

// ============================================================================
// Decorations
// ============================================================================

#[test]
fn test_clear_button_clears_and_notifies() {
    let field = InputField::new().clearable(true);
    let mut state = InputFieldState::with_text("Clear me");
    let (_, layout) = render(&field, &state);

    let clear = layout.clear.expect("clear button rendered");
    let result = field.handle_event(&mut state, &layout, &click(clear.x, clear.y));

    assert_eq!(result, Some(InputEvent::Changed(String::new())));
    assert_eq!(state.text(), "");

    // Gone once the value is empty.
    let (_, layout) = render(&field, &state);
    assert!(layout.clear.is_none());
}

#[test]
fn test_password_toggle_reveals_value() {
    let field = InputField::new()
        .password_toggle(true)
        .variant(FieldVariant::Ghost);
    let mut state = InputFieldState::with_text("secret");

    let (buf, layout) = render(&field, &state);
    assert!(buf.row_text(0).contains("••••••"));

    let toggle = layout.toggle.expect("toggle rendered");
    field.handle_event(&mut state, &layout, &click(toggle.x, toggle.y));
    assert!(state.show_password);

    let (buf, _) = render(&field, &state);
    assert!(buf.row_text(0).contains("secret"));
}

#[test]
fn test_disabled_field_ignores_input() {
    let field = InputField::new().disabled(true);
    let mut state = InputFieldState::with_text("hello");
    let (_, layout) = render(&field, &state);

    let result = field.handle_event(&mut state, &layout, &key(Key::Char('x')));
    assert_eq!(result, None);
    assert_eq!(state.text(), "hello");
}

#[test]
fn test_loading_field_ignores_input() {
    let field = InputField::new().loading(true).clearable(true);
    let mut state = InputFieldState::with_text("hello");
    let (_, layout) = render(&field, &state);

    let result = field.handle_event(&mut state, &layout, &key(Key::Char('x')));
    assert_eq!(result, None);
    if let Some(clear) = layout.clear {
        let result = field.handle_event(&mut state, &layout, &click(clear.x, clear.y));
        assert_eq!(result, None);
    }
    assert_eq!(state.text(), "hello");
}
