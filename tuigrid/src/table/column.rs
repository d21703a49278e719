/// Metadata describing how to label, extract, and optionally sort one column.
///
/// Keys are expected to be unique within a column list and `data_index` to
/// name a field present on every record; neither is validated. A duplicate
/// key degrades to ambiguous sort identity and a missing field to a blank
/// cell, never to a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Unique identifier within the column list.
    pub key: String,
    /// Display label for the header cell.
    pub title: String,
    /// Record field this column reads. Defaults to `key`.
    pub data_index: String,
    /// Whether clicking this column's header sorts by it.
    pub sortable: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
        }
    }

    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}
