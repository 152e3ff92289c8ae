//! Column declarations.
//!
//! A column says how to pull a value out of a row (`accessor_key`) and,
//! optionally, how to draw it (`cell`). Filtering and sorting only ever use
//! the accessor; the renderer is a display strategy and nothing else.

use std::fmt;
use std::sync::Arc;

use crate::row::{FieldValue, Row};

/// Stable column identifier, used as the sort key.
pub type ColumnId = String;

/// Custom cell renderer: draws one row's cell into the given UI.
pub type CellRenderer<R> = Arc<dyn Fn(&mut egui::Ui, &R) + Send + Sync>;

/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl CellAlign {
    /// Layout that places a header or cell's content with this alignment.
    pub fn layout(self) -> egui::Layout {
        match self {
            CellAlign::Left => egui::Layout::left_to_right(egui::Align::Center),
            CellAlign::Center => egui::Layout::top_down(egui::Align::Center),
            CellAlign::Right => egui::Layout::right_to_left(egui::Align::Center),
        }
    }
}

/// Declarative description of one displayed column.
pub struct ColumnDef<R> {
    id: ColumnId,
    header: String,
    accessor_key: Option<String>,
    cell: Option<CellRenderer<R>>,
    enable_sorting: bool,
    align: CellAlign,
    style_class: Option<String>,
    icon: Option<String>,
    width: Option<f32>,
}

impl<R> ColumnDef<R> {
    /// Creates a column that reads `accessor_key` and labels it `header`.
    ///
    /// The column id defaults to the accessor key.
    pub fn accessor(accessor_key: impl Into<String>, header: impl Into<String>) -> Self {
        let key = accessor_key.into();
        Self {
            id: key.clone(),
            header: header.into(),
            accessor_key: Some(key),
            cell: None,
            enable_sorting: true,
            align: CellAlign::Left,
            style_class: None,
            icon: None,
            width: None,
        }
    }

    /// Creates a display-only column driven entirely by a custom renderer.
    ///
    /// Display columns are not sortable unless an accessor is added.
    pub fn display(
        id: impl Into<ColumnId>,
        header: impl Into<String>,
        cell: impl Fn(&mut egui::Ui, &R) + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor_key: None,
            cell: Some(Arc::new(cell)),
            enable_sorting: false,
            align: CellAlign::Left,
            style_class: None,
            icon: None,
            width: None,
        }
    }

    // ===== Builder =====

    pub fn id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the field read for sorting and default rendering, and makes the
    /// column sortable.
    pub fn with_accessor(mut self, key: impl Into<String>) -> Self {
        self.accessor_key = Some(key.into());
        self.enable_sorting = true;
        self
    }

    /// Attaches a custom renderer; the accessor (if any) still drives sorting.
    pub fn cell(mut self, cell: impl Fn(&mut egui::Ui, &R) + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(cell));
        self
    }

    pub fn sortable(mut self, enable: bool) -> Self {
        self.enable_sorting = enable;
        self
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    /// Style hint understood by the renderer ("mono", "strong", "dim").
    pub fn style_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Initial column width in points.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    // ===== Queries =====

    pub fn column_id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn accessor_key(&self) -> Option<&str> {
        self.accessor_key.as_deref()
    }

    pub fn renderer(&self) -> Option<&CellRenderer<R>> {
        self.cell.as_ref()
    }

    pub fn enable_sorting(&self) -> bool {
        self.enable_sorting
    }

    pub fn alignment(&self) -> CellAlign {
        self.align
    }

    pub fn class(&self) -> Option<&str> {
        self.style_class.as_deref()
    }

    pub fn width_hint(&self) -> Option<f32> {
        self.width
    }

    /// Header text with the icon prefixed, if one is set.
    pub fn header_label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.header),
            None => self.header.clone(),
        }
    }
}

impl<R: Row> ColumnDef<R> {
    /// Reads this column's value from a row. Columns without an accessor
    /// have no value.
    pub fn value(&self, row: &R) -> Option<FieldValue> {
        self.accessor_key.as_deref().and_then(|key| row.field(key))
    }

    /// Plain-text cell content, blank for missing values.
    pub fn text(&self, row: &R) -> String {
        self.value(row).map(|v| v.display_string()).unwrap_or_default()
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor_key: self.accessor_key.clone(),
            cell: self.cell.clone(),
            enable_sorting: self.enable_sorting,
            align: self.align,
            style_class: self.style_class.clone(),
            icon: self.icon.clone(),
            width: self.width,
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor_key", &self.accessor_key)
            .field("has_cell", &self.cell.is_some())
            .field("enable_sorting", &self.enable_sorting)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Record;

    #[test]
    fn test_accessor_column_defaults() {
        let col: ColumnDef<Record> = ColumnDef::accessor("plate", "Plate");
        assert_eq!(col.column_id(), "plate");
        assert_eq!(col.accessor_key(), Some("plate"));
        assert!(col.enable_sorting());
        assert_eq!(col.alignment(), CellAlign::Left);
        assert!(col.renderer().is_none());
    }

    #[test]
    fn test_display_column_has_no_value() {
        let col: ColumnDef<Record> = ColumnDef::display("actions", "", |_ui, _row| {});
        let row = Record::new("1").with("plate", "AB-1");
        assert!(!col.enable_sorting());
        assert_eq!(col.value(&row), None);
        assert_eq!(col.text(&row), "");
    }

    #[test]
    fn test_builder_and_header_label() {
        let col: ColumnDef<Record> = ColumnDef::accessor("eta", "ETA")
            .id("eta_col")
            .icon("⏱")
            .align(CellAlign::Right)
            .style_class("mono")
            .sortable(false);
        assert_eq!(col.column_id(), "eta_col");
        assert_eq!(col.header_label(), "⏱ ETA");
        assert_eq!(col.class(), Some("mono"));
        assert!(!col.enable_sorting());
    }

    #[test]
    fn test_display_column_with_accessor_sorts() {
        let col: ColumnDef<Record> =
            ColumnDef::display("route", "Route", |_ui, _row| {}).with_accessor("origin");
        let row = Record::new("1").with("origin", "Lyon");
        assert!(col.enable_sorting());
        assert!(col.renderer().is_some());
        assert_eq!(col.text(&row), "Lyon");
    }

    #[test]
    fn test_alignment_layouts() {
        assert_eq!(CellAlign::Left.layout().main_dir, egui::Direction::LeftToRight);
        assert_eq!(CellAlign::Right.layout().main_dir, egui::Direction::RightToLeft);
        let center = CellAlign::Center.layout();
        assert_eq!(center.main_dir, egui::Direction::TopDown);
        assert_eq!(center.cross_align, egui::Align::Center);
    }
}
