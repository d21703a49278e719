pub mod buffer;
pub mod event;
pub mod input_field;
pub mod layout;
pub mod table;
pub mod terminal;
pub mod text;
pub mod types;
pub mod value;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use input_field::{
    EditBuffer, FieldSize, FieldVariant, InputEvent, InputField, InputFieldLayout, InputFieldState,
};
pub use layout::Rect;
pub use table::{
    sorted_view, Column, DataTable, Selection, SortOrder, SortState, TableHit, TableLayout,
    TableState,
};
pub use terminal::Terminal;
pub use types::*;
pub use value::{Record, Row, Value};
