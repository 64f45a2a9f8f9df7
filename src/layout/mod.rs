//! Column classification and width resolution.

pub mod columns;
pub mod constraints;

pub use columns::{
    resolve_columns, ColumnLayout, ColumnMetrics, ColumnSize, DisplayMode, ResolvedColumn,
    AUTOMATIC_PRIMARY_COLUMN_WIDTH_FRACTION,
};
pub use constraints::WidthConstraints;
