use serde::Serialize;

/// Context for list pages rendered through the `table` partial
#[derive(Debug, Serialize)]
pub struct TablePage {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    pub actions: bool,
}

#[derive(Debug, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_url: Option<String>,
}
