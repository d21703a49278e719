//! Decorated single-line input field: label, helper/error line, clear
//! button, password masking with a show/hide toggle, loading indicator.

use crate::buffer::Buffer;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::layout::Rect;
use crate::types::{Border, Color, Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FieldSize {
    /// Horizontal padding inside the input box.
    fn pad(self) -> u16 {
        match self {
            FieldSize::Small => 0,
            FieldSize::Medium => 1,
            FieldSize::Large => 2,
        }
    }
}

/// Result of an interaction the embedding application should observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The text content changed; carries the new value.
    Changed(String),
    /// Enter was pressed.
    Submitted,
}

/// Text content plus cursor and selection-anchor state.
///
/// Cursor and anchor are character indices. When the anchor is set and
/// differs from the cursor, the span between them is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub text: String,
    pub cursor: usize,
    pub anchor: Option<usize>,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    /// The selection as (start, end) character indices, start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| match a.cmp(&self.cursor) {
            std::cmp::Ordering::Less => Some((a, self.cursor)),
            std::cmp::Ordering::Greater => Some((self.cursor, a)),
            std::cmp::Ordering::Equal => None,
        })
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.text.chars().count();
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
        self.anchor = None;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn remove_selection(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            let bs = char_to_byte_index(&self.text, start);
            let be = char_to_byte_index(&self.text, end);
            self.text.replace_range(bs..be, "");
            self.cursor = start;
            self.clear_selection();
            true
        } else {
            false
        }
    }

    fn insert_char(&mut self, c: char) {
        self.remove_selection();
        let pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(pos, c);
        self.cursor += 1;
    }

    /// Delete the selection or the character before the cursor.
    /// Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.remove_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let bs = char_to_byte_index(&self.text, self.cursor - 1);
        let be = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(bs..be, "");
        self.cursor -= 1;
        true
    }

    /// Delete the selection or the character at the cursor.
    /// Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.remove_selection() {
            return true;
        }
        if self.cursor >= self.char_count() {
            return false;
        }
        let bs = char_to_byte_index(&self.text, self.cursor);
        let be = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(bs..be, "");
        true
    }

    fn move_cursor(&mut self, delta: i32, extend_selection: bool) {
        if extend_selection && self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        } else if !extend_selection {
            // Collapse an existing selection to its edge in the move direction.
            if let Some((start, end)) = self.selection() {
                self.cursor = if delta < 0 { start } else { end };
                self.clear_selection();
                return;
            }
            self.clear_selection();
        }

        let count = self.char_count() as i32;
        self.cursor = (self.cursor as i32 + delta).clamp(0, count) as usize;
    }

    fn move_to(&mut self, position: usize, extend_selection: bool) {
        if extend_selection && self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        } else if !extend_selection {
            self.clear_selection();
        }
        self.cursor = position.min(self.char_count());
    }
}

/// Interaction state for one mounted input field.
#[derive(Debug, Clone, Default)]
pub struct InputFieldState {
    pub edit: EditBuffer,
    pub show_password: bool,
}

impl InputFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            edit: EditBuffer::new(text),
            show_password: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.edit.text
    }
}

/// Interactive regions from the field's last render.
#[derive(Debug, Clone, Default)]
pub struct InputFieldLayout {
    pub area: Rect,
    pub input: Rect,
    pub clear: Option<Rect>,
    pub toggle: Option<Rect>,
}

/// The input field widget. Props are borrowed per render; edit state lives
/// in a caller-owned [`InputFieldState`]. Key events should only be routed
/// here while the field has focus — the widget itself does not track focus.
pub struct InputField<'a> {
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    helper_text: Option<&'a str>,
    error_message: Option<&'a str>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    clearable: bool,
    password: bool,
    password_toggle: bool,
    focused: bool,
    variant: FieldVariant,
    size: FieldSize,
}

impl<'a> Default for InputField<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> InputField<'a> {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            clearable: false,
            password: false,
            password_toggle: false,
            focused: false,
            variant: FieldVariant::default(),
            size: FieldSize::default(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn helper_text(mut self, helper_text: &'a str) -> Self {
        self.helper_text = Some(helper_text);
        self
    }

    pub fn error_message(mut self, error_message: &'a str) -> Self {
        self.error_message = Some(error_message);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Mask the value like a password field.
    pub fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Show a toggle that switches between masked and plain rendering.
    pub fn password_toggle(mut self, password_toggle: bool) -> Self {
        self.password_toggle = password_toggle;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    fn masked(&self, state: &InputFieldState) -> bool {
        (self.password || self.password_toggle) && !state.show_password
    }

    fn box_height(&self) -> u16 {
        match self.variant {
            FieldVariant::Outlined => 3,
            FieldVariant::Filled | FieldVariant::Ghost => 1,
        }
    }

    fn footer(&self) -> Option<(&str, bool)> {
        if self.invalid {
            self.error_message.map(|m| (m, true))
        } else {
            self.helper_text.map(|m| (m, false))
        }
    }

    /// Total rows the field occupies: label line, input box, footer line.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        let footer = u16::from(self.footer().is_some());
        label + self.box_height() + footer
    }

    pub fn render(&self, state: &InputFieldState, buf: &mut Buffer, area: Rect) -> InputFieldLayout {
        let mut layout = InputFieldLayout {
            area,
            ..Default::default()
        };
        if area.is_empty() {
            return layout;
        }

        let fg = Rgb::new(255, 255, 255);
        let bg = Rgb::new(0, 0, 0);
        let accent_color = if self.invalid {
            Color::oklch(0.55, 0.18, 25.0)
        } else if self.focused {
            Color::oklch(0.5, 0.02, 250.0).lighten(0.2)
        } else {
            Color::oklch(0.5, 0.02, 250.0)
        };
        let accent = accent_color.to_rgb();

        let mut y = area.y;
        if let Some(label) = self.label {
            let attrs = if self.disabled {
                TextStyle::new().dim()
            } else {
                TextStyle::new()
            };
            buf.set_text(area.x, y, label, fg, bg, attrs);
            y += 1;
        }

        let box_rect = Rect::new(area.x, y, area.width, self.box_height());
        let box_bg = match self.variant {
            FieldVariant::Filled => Color::oklch(0.25, 0.02, 250.0).to_rgb(),
            _ => bg,
        };
        let inner = match self.variant {
            FieldVariant::Outlined => {
                draw_border(buf, box_rect, Border::Single, accent, bg);
                box_rect.shrink(1, 1, 1, 1)
            }
            FieldVariant::Filled => {
                buf.fill(
                    box_rect,
                    crate::buffer::Cell::new(' ').with_fg(fg).with_bg(box_bg),
                );
                box_rect
            }
            FieldVariant::Ghost => box_rect,
        };

        let pad = self.size.pad();
        let inner = inner.shrink(0, pad, 0, pad);
        let line_y = inner.y;

        // Suffix affordances, right to left: loader, clear, toggle.
        let mut suffix_x = inner.right();
        if self.loading {
            suffix_x = suffix_x.saturating_sub(1);
            buf.set_text(suffix_x, line_y, "…", accent, box_bg, TextStyle::new().dim());
        }
        if self.clearable && !state.edit.text.is_empty() {
            suffix_x = suffix_x.saturating_sub(1);
            buf.set_text(suffix_x, line_y, "×", accent, box_bg, TextStyle::new());
            layout.clear = Some(Rect::new(suffix_x, line_y, 1, 1));
        }
        if self.password_toggle {
            suffix_x = suffix_x.saturating_sub(1);
            let glyph = if state.show_password { "○" } else { "◉" };
            buf.set_text(suffix_x, line_y, glyph, accent, box_bg, TextStyle::new());
            layout.toggle = Some(Rect::new(suffix_x, line_y, 1, 1));
        }

        let text_w = suffix_x.saturating_sub(inner.x) as usize;
        layout.input = Rect::new(inner.x, line_y, text_w as u16, 1);

        let disabled_attrs = if self.disabled || self.loading {
            TextStyle::new().dim()
        } else {
            TextStyle::new()
        };
        if state.edit.text.is_empty() {
            if let Some(placeholder) = self.placeholder {
                let shown = crate::text::truncate_to_width(placeholder, text_w);
                buf.set_text(
                    inner.x,
                    line_y,
                    &shown,
                    fg,
                    box_bg,
                    TextStyle::new().dim(),
                );
            }
        } else {
            let value = if self.masked(state) {
                "•".repeat(state.edit.text.chars().count())
            } else {
                state.edit.text.clone()
            };
            let shown = crate::text::truncate_to_width(&value, text_w);
            buf.set_text(inner.x, line_y, &shown, fg, box_bg, disabled_attrs);
        }

        // Cursor: invert the cell under it while the field is editable.
        if self.focused && !self.disabled && !self.loading {
            let cursor_x = inner.x + (state.edit.cursor as u16).min(text_w as u16);
            if let Some(cell) = buf.get_mut(cursor_x, line_y) {
                std::mem::swap(&mut cell.fg, &mut cell.bg);
            }
        }

        y += self.box_height();
        if let Some((message, is_error)) = self.footer() {
            let (msg_fg, attrs) = if is_error {
                (Color::oklch(0.55, 0.18, 25.0).to_rgb(), TextStyle::new())
            } else {
                (fg, TextStyle::new().dim())
            };
            buf.set_text(area.x, y, message, msg_fg, bg, attrs);
        }

        layout
    }

    /// Routes one event through the field. Disabled and loading fields
    /// ignore all input. Returns the state change the caller should observe,
    /// if any.
    pub fn handle_event(
        &self,
        state: &mut InputFieldState,
        layout: &InputFieldLayout,
        event: &Event,
    ) -> Option<InputEvent> {
        if self.disabled || self.loading {
            return None;
        }

        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if let Some(rect) = layout.toggle {
                    if rect.contains(x, y) {
                        state.show_password = !state.show_password;
                        log::debug!("[input] password visibility: {}", state.show_password);
                        return None;
                    }
                }
                if let Some(rect) = layout.clear {
                    if rect.contains(x, y) {
                        state.edit.set_text("");
                        return Some(InputEvent::Changed(String::new()));
                    }
                }
                None
            }
            Event::Key { key, modifiers } => self.handle_key(state, key, modifiers),
            _ => None,
        }
    }

    fn handle_key(
        &self,
        state: &mut InputFieldState,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<InputEvent> {
        let edit = &mut state.edit;
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                edit.insert_char(c);
                Some(InputEvent::Changed(edit.text.clone()))
            }

            Key::Backspace if modifiers.none() => {
                if edit.delete_back() {
                    Some(InputEvent::Changed(edit.text.clone()))
                } else {
                    None
                }
            }

            Key::Delete if modifiers.none() => {
                if edit.delete_forward() {
                    Some(InputEvent::Changed(edit.text.clone()))
                } else {
                    None
                }
            }

            Key::Left if !modifiers.ctrl => {
                edit.move_cursor(-1, modifiers.shift);
                None
            }

            Key::Right if !modifiers.ctrl => {
                edit.move_cursor(1, modifiers.shift);
                None
            }

            Key::Home if !modifiers.ctrl => {
                edit.move_to(0, modifiers.shift);
                None
            }

            Key::End if !modifiers.ctrl => {
                let end = edit.char_count();
                edit.move_to(end, modifiers.shift);
                None
            }

            Key::Char('a') if modifiers.ctrl => {
                edit.select_all();
                None
            }

            Key::Enter => Some(InputEvent::Submitted),

            _ => None,
        }
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, border: Border, fg: Rgb, bg: Rgb) {
    if border == Border::None || rect.width < 2 || rect.height < 2 {
        return;
    }
    let (tl, tr, bl, br) = match border {
        Border::Rounded => ('╭', '╮', '╰', '╯'),
        _ => ('┌', '┐', '└', '┘'),
    };
    let style = TextStyle::new();
    let top = rect.top();
    let bottom = rect.bottom() - 1;
    for x in rect.left() + 1..rect.right() - 1 {
        buf.set_text(x, top, "─", fg, bg, style);
        buf.set_text(x, bottom, "─", fg, bg, style);
    }
    for y in rect.top() + 1..rect.bottom() - 1 {
        buf.set_text(rect.left(), y, "│", fg, bg, style);
        buf.set_text(rect.right() - 1, y, "│", fg, bg, style);
    }
    buf.set_text(rect.left(), top, &tl.to_string(), fg, bg, style);
    buf.set_text(rect.right() - 1, top, &tr.to_string(), fg, bg, style);
    buf.set_text(rect.left(), bottom, &bl.to_string(), fg, bg, style);
    buf.set_text(rect.right() - 1, bottom, &br.to_string(), fg, bg, style);
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
