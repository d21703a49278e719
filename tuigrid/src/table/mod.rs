//! The data table widget: header, derived-sort body, row selection.

mod column;
mod selection;
mod sort;

pub use column::Column;
pub use selection::Selection;
pub use sort::{sorted_view, SortOrder, SortState};

use crate::buffer::{Buffer, Cell};
use crate::event::{Event, MouseButton};
use crate::layout::Rect;
use crate::text::{align_offset, display_width, truncate_to_width};
use crate::types::{Color, Rgb, Style, TextAlign, TextStyle};
use crate::value::Record;

const LOADING_TEXT: &str = "Loading...";
const EMPTY_TEXT: &str = "No data available";

/// Width of the leading checkbox column, including its trailing gap.
const CHECKBOX_COL: u16 = 4;

/// Sort and selection state for one mounted table.
///
/// Owned by the embedding application for as long as the table is shown and
/// discarded with it; nothing here is keyed by record identity or persisted
/// across data changes.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub sort: SortState,
    pub selection: Selection,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The records currently selected, resolved position-by-position against
    /// the displayed order. Positions beyond the displayed range (possible
    /// after the record collection shrinks) are dropped from the read; the
    /// stored set is left alone.
    pub fn selected_records<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        let displayed = sorted_view(records, &self.sort);
        self.selection
            .iter()
            .filter_map(|pos| displayed.get(pos).copied())
            .collect()
    }
}

/// An interactive region resolved from a click on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    /// The select-all checkbox in the header.
    SelectAll,
    /// A header cell, by column index.
    Header(usize),
    /// A row checkbox, by display position.
    Row(usize),
}

/// Rects of the table's interactive regions, produced by a render pass and
/// consumed when resolving clicks against it.
#[derive(Debug, Clone, Default)]
pub struct TableLayout {
    pub area: Rect,
    pub select_all: Option<Rect>,
    pub headers: Vec<Rect>,
    pub checkboxes: Vec<Rect>,
}

impl TableLayout {
    pub fn hit(&self, x: u16, y: u16) -> Option<TableHit> {
        if let Some(rect) = self.select_all {
            if rect.contains(x, y) {
                return Some(TableHit::SelectAll);
            }
        }
        for (pos, rect) in self.checkboxes.iter().enumerate() {
            if rect.contains(x, y) {
                return Some(TableHit::Row(pos));
            }
        }
        for (idx, rect) in self.headers.iter().enumerate() {
            if rect.contains(x, y) {
                return Some(TableHit::Header(idx));
            }
        }
        None
    }
}

/// The table widget. Props are borrowed per render; interaction state lives
/// in a caller-owned [`TableState`].
///
/// # Example
///
/// ```
/// use tuigrid::{Buffer, Column, DataTable, Rect, Row, TableState};
///
/// let columns = vec![
///     Column::new("id", "ID").sortable(true),
///     Column::new("name", "Name").sortable(true),
/// ];
/// let rows = vec![
///     Row::new().set("id", 1).set("name", "Alice"),
///     Row::new().set("id", 2).set("name", "Bob"),
/// ];
/// let state = TableState::new();
/// let mut buf = Buffer::new(40, 10);
/// let table = DataTable::new(&columns, &rows).selectable(true);
/// let layout = table.render(&state, &mut buf, Rect::from_size(40, 10));
/// assert_eq!(layout.headers.len(), 2);
/// ```
pub struct DataTable<'a, R: Record> {
    columns: &'a [Column],
    rows: &'a [R],
    loading: bool,
    selectable: bool,
    on_row_select: Option<Box<dyn FnMut(Vec<&'a R>) + 'a>>,
    header_style: Style,
    selected_style: Style,
}

impl<'a, R: Record> DataTable<'a, R> {
    pub fn new(columns: &'a [Column], rows: &'a [R]) -> Self {
        Self {
            columns,
            rows,
            loading: false,
            selectable: false,
            on_row_select: None,
            header_style: Style::new().bold(),
            selected_style: Style::new().background(Color::oklch(0.35, 0.08, 250.0)),
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Notification callback invoked with the full current selected-record
    /// list on every selection-affecting interaction.
    pub fn on_row_select(mut self, callback: impl FnMut(Vec<&'a R>) + 'a) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    /// Renders the table into `buf` and returns the interactive regions.
    ///
    /// The header row always renders. The body is resolved in priority
    /// order: a loading placeholder outranks the empty placeholder, which
    /// outranks data rows. Checkboxes stay visible while loading but are
    /// drawn disabled.
    pub fn render(&self, state: &TableState, buf: &mut Buffer, area: Rect) -> TableLayout {
        let mut layout = TableLayout {
            area,
            ..Default::default()
        };
        if area.is_empty() {
            return layout;
        }

        let displayed = sorted_view(self.rows, &state.sort);
        let col_zone_x = if self.selectable {
            area.x + CHECKBOX_COL
        } else {
            area.x
        };
        let col_zone_w = area.right().saturating_sub(col_zone_x);
        let col_w = if self.columns.is_empty() {
            0
        } else {
            col_zone_w / self.columns.len() as u16
        };

        self.render_header(state, &displayed, buf, area, col_zone_x, col_w, &mut layout);

        let body = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(1),
        );
        if body.is_empty() {
            return layout;
        }

        if self.loading {
            self.render_placeholder(buf, body, LOADING_TEXT);
        } else if displayed.is_empty() {
            self.render_placeholder(buf, body, EMPTY_TEXT);
        } else {
            self.render_rows(state, &displayed, buf, body, col_zone_x, col_w, &mut layout);
        }

        layout
    }

    #[allow(clippy::too_many_arguments)]
    fn render_header(
        &self,
        state: &TableState,
        displayed: &[&R],
        buf: &mut Buffer,
        area: Rect,
        col_zone_x: u16,
        col_w: u16,
        layout: &mut TableLayout,
    ) {
        let (fg, bg, attrs) = resolve_style(&self.header_style);

        if self.selectable {
            let rect = Rect::new(area.x, area.y, 3, 1);
            let disabled = self.loading || displayed.is_empty();
            let checked = state.selection.all_selected(displayed.len());
            let attrs = if disabled { attrs.dim() } else { attrs };
            buf.set_text(rect.x, rect.y, checkbox_glyph(checked), fg, bg, attrs);
            layout.select_all = Some(rect);
        }

        for (idx, column) in self.columns.iter().enumerate() {
            let x = col_zone_x + col_w * idx as u16;
            let rect = Rect::new(x, area.y, col_w, 1);
            let mut title = column.title.clone();
            if column.sortable && state.sort.is_active(column) {
                title.push(' ');
                title.push(state.sort.order().indicator());
            }
            let title = truncate_to_width(&title, col_w.saturating_sub(1) as usize);
            // Underline marks a header as clickable for sorting.
            let attrs = if column.sortable {
                attrs.underline()
            } else {
                attrs
            };
            buf.set_text(x, area.y, &title, fg, bg, attrs);
            layout.headers.push(rect);
        }
    }

    fn render_placeholder(&self, buf: &mut Buffer, body: Rect, text: &str) {
        let fg = Rgb::new(255, 255, 255);
        let bg = Rgb::new(0, 0, 0);
        let offset = align_offset(display_width(text), body.width as usize, TextAlign::Center);
        buf.set_text(
            body.x + offset as u16,
            body.y,
            text,
            fg,
            bg,
            TextStyle::new().dim(),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn render_rows(
        &self,
        state: &TableState,
        displayed: &[&R],
        buf: &mut Buffer,
        body: Rect,
        col_zone_x: u16,
        col_w: u16,
        layout: &mut TableLayout,
    ) {
        for (pos, record) in displayed.iter().enumerate() {
            if pos as u16 >= body.height {
                break;
            }
            let y = body.y + pos as u16;
            let selected = state.selection.is_selected(pos);

            let (fg, bg, attrs) = if selected {
                resolve_style(&self.selected_style)
            } else {
                (Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), TextStyle::new())
            };
            if selected {
                buf.fill(
                    Rect::new(body.x, y, body.width, 1),
                    Cell::new(' ').with_fg(fg).with_bg(bg),
                );
            }

            if self.selectable {
                let rect = Rect::new(body.x, y, 3, 1);
                let cb_attrs = if self.loading { attrs.dim() } else { attrs };
                buf.set_text(rect.x, y, checkbox_glyph(selected), fg, bg, cb_attrs);
                layout.checkboxes.push(rect);
            }

            for (idx, column) in self.columns.iter().enumerate() {
                let x = col_zone_x + col_w * idx as u16;
                let text = record.field(&column.data_index).to_string();
                let text = truncate_to_width(&text, col_w.saturating_sub(1) as usize);
                buf.set_text(x, y, &text, fg, bg, attrs);
            }
        }
    }

    /// Routes one event through the table. Left clicks are resolved against
    /// `layout`; everything else is ignored. Sorting stays available while
    /// loading; selection does not.
    pub fn handle_event(&mut self, state: &mut TableState, layout: &TableLayout, event: &Event) {
        let Event::Click {
            x,
            y,
            button: MouseButton::Left,
        } = *event
        else {
            return;
        };
        let Some(hit) = layout.hit(x, y) else {
            return;
        };

        match hit {
            TableHit::Header(idx) => {
                if let Some(column) = self.columns.get(idx) {
                    state.sort.toggle(column);
                }
            }
            TableHit::SelectAll => {
                if self.loading || self.rows.is_empty() {
                    return;
                }
                state.selection.toggle_all(self.rows.len());
                self.notify(state);
            }
            TableHit::Row(pos) => {
                if self.loading || pos >= self.rows.len() {
                    return;
                }
                state.selection.toggle(pos);
                self.notify(state);
            }
        }
    }

    fn notify(&mut self, state: &TableState) {
        let rows = self.rows;
        let selected = state.selected_records(rows);
        log::debug!(
            "[table] selection changed: {} of {} rows selected",
            selected.len(),
            rows.len()
        );
        if let Some(callback) = &mut self.on_row_select {
            callback(selected);
        }
    }
}

fn checkbox_glyph(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn resolve_style(style: &Style) -> (Rgb, Rgb, TextStyle) {
    let fg = style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let bg = style
        .background
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(0, 0, 0));
    (fg, bg, style.text_style)
}
