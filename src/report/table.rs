/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A fixed-width column. Cells wider than `width` are not truncated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: &'static str,
    pub width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub const fn new(header: &'static str, width: usize, alignment: Alignment) -> Self {
        Self {
            header,
            width,
            alignment,
        }
    }
}

/// Columns joined by a single space, with a dashed rule under the header.
#[derive(Clone, Debug)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rule_width: usize,
}

impl Table {
    pub fn render_header(&self) -> String {
        let header: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        self.render_row(&header)
    }

    pub fn horizontal_rule(&self) -> String {
        "-".repeat(self.rule_width)
    }

    /// Renders pre-formatted cells. Missing cells render as blanks.
    pub fn render_row<S: AsRef<str>>(&self, row: &[S]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(AsRef::as_ref).unwrap_or("");
                render_cell(text, column.width, column.alignment)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => format!("{:<width$}", text, width = width),
        Alignment::Right => format!("{:>width$}", text, width = width),
    }
}
