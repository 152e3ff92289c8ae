pub mod row;
pub mod column;
pub mod action;
pub mod status;
pub mod engine;
pub mod theme;
pub mod snapshot;
pub mod mock;
pub mod logging;

// Export row model
pub use row::{field_from_json, FieldValue, Record, Row, RowId};

// Export declarations
pub use column::{CellAlign, CellRenderer, ColumnDef, ColumnId};
pub use action::{ActionHandler, ActionItem, ActionVariant};
pub use status::{resolve_status, StatusBadge, StatusColor, StatusConfig};

// Export the table engine
pub use engine::{
    DerivedView, EngineEvent, EngineState, NavControls, PageItem, PageSizeHandler,
    RowHandler, SelectionScope, SortDirection, TableEngine, TableOptions,
};

// Export theme support
pub use theme::{badge_colors, hex_to_color32, BadgeColors, Theme, ThemeColors, ThemeManager};

// Export dataset I/O
pub use snapshot::FleetSnapshot;
pub use mock::MockFleet;
