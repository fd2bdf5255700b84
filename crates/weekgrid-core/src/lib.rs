//! # weekgrid-core
//!
//! Core domain model and layout logic for the weekgrid planner generator.
//!
//! This crate provides:
//! - Domain types: `PlannerConfig`, `ColumnSpec`, `RowSpec`, `GridPlan`
//! - The style palette table and conditional-rule model
//! - Core traits: `Renderer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use weekgrid_core::{plan, PlannerConfig};
//!
//! let config = PlannerConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 7)
//!     .start_hour(9)
//!     .end_hour(17)
//!     .note_rows(2);
//! let grid = plan(&config).unwrap();
//! assert_eq!(grid.total_columns(), 8);
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Style Names
// ============================================================================

/// Names under which the renderer registers its formats.
///
/// The plan references styles by name only; resolving a name to a concrete
/// document format is the renderer's job.
pub mod style {
    /// Non-workday header cells and the column-1 header labels.
    pub const HEADER: &str = "header";
    /// Header cells of columns whose day is Monday through Friday.
    pub const WORKDAY_HEADER: &str = "workday-header";
    /// Column-1 time labels.
    pub const TIME_AXIS: &str = "time-axis";
    /// Note rows, label and data cells alike.
    pub const NOTE: &str = "note";
    /// Default style for blank time-slot data cells.
    pub const DEFAULT_CELL: &str = "white";
}

// ============================================================================
// Planner Configuration
// ============================================================================

/// Configuration for a single planner generation pass.
///
/// Hours are inclusive on both ends: `end_hour` 23 means the grid runs
/// through the 23:30 slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Date of the first day column
    pub start_date: NaiveDate,
    /// Number of day columns (must be positive)
    pub num_days: u32,
    /// First hour of the time grid (0-23)
    pub start_hour: u8,
    /// Last hour of the time grid, inclusive (0-23)
    pub end_hour: u8,
    /// Number of free-text note rows under the headers
    pub note_rows: u32,
    /// Width of the label/time axis column
    pub first_column_width: f64,
    /// Width of every day column
    pub data_column_width: f64,
    /// Height of the date header row
    pub date_row_height: f64,
    /// Height of the day-number header row
    pub day_row_height: f64,
    /// Height of each note row
    pub note_row_height: f64,
    /// Height of each half-hour time row
    pub time_row_height: f64,
}

impl PlannerConfig {
    /// Create a configuration with the default grid dimensions.
    pub fn new(start_date: NaiveDate, num_days: u32) -> Self {
        Self {
            start_date,
            num_days,
            start_hour: 8,
            end_hour: 23,
            note_rows: 1,
            first_column_width: 10.0,
            data_column_width: 22.0,
            date_row_height: 25.0,
            day_row_height: 25.0,
            note_row_height: 50.0,
            time_row_height: 20.0,
        }
    }

    /// Set the first hour of the time grid
    pub fn start_hour(mut self, hour: u8) -> Self {
        self.start_hour = hour;
        self
    }

    /// Set the last hour of the time grid (inclusive)
    pub fn end_hour(mut self, hour: u8) -> Self {
        self.end_hour = hour;
        self
    }

    /// Set the number of note rows
    pub fn note_rows(mut self, rows: u32) -> Self {
        self.note_rows = rows;
        self
    }

    /// Set the label column and day column widths
    pub fn column_widths(mut self, first: f64, data: f64) -> Self {
        self.first_column_width = first;
        self.data_column_width = data;
        self
    }

    /// Check the config invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_days == 0 {
            return Err(ConfigError::NoDays);
        }
        if self.start_hour > 23 {
            return Err(ConfigError::HourOutOfRange(self.start_hour));
        }
        if self.end_hour > 23 {
            return Err(ConfigError::HourOutOfRange(self.end_hour));
        }
        if self.end_hour < self.start_hour {
            return Err(ConfigError::HourOrder {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Grid Geometry
// ============================================================================

/// Normalize a date's weekday to a Monday-first 1..=7 ordinal.
///
/// The native Sunday=0 convention maps to 7; every other native value passes
/// through unchanged.
pub fn day_number(date: NaiveDate) -> u8 {
    match date.weekday().num_days_from_sunday() {
        0 => 7,
        n => n as u8,
    }
}

/// One day column of the grid.
///
/// Column 1 is always the label/time axis, so day columns start at 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// 1-based document column (2..=num_days+1)
    pub index: u16,
    /// Calendar date this column represents
    pub date: NaiveDate,
    /// Monday-first weekday ordinal (1..=7)
    pub day_number: u8,
}

impl ColumnSpec {
    /// Monday through Friday
    pub fn is_workday(&self) -> bool {
        self.day_number <= 5
    }
}

/// What a grid row contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// Row 1: the formatted dates
    DateHeader,
    /// Row 2: the 1-7 day ordinals
    DayHeader,
    /// Free-text note row
    Note {
        /// 0-based position within the note block
        index: u32,
    },
    /// Half-hour slot row
    TimeSlot {
        /// 0-23
        hour: u8,
        /// 0 or 30
        minute: u8,
    },
}

impl RowKind {
    /// Row height per the config policy.
    pub fn height(&self, config: &PlannerConfig) -> f64 {
        match self {
            RowKind::DateHeader => config.date_row_height,
            RowKind::DayHeader => config.day_row_height,
            RowKind::Note { .. } => config.note_row_height,
            RowKind::TimeSlot { .. } => config.time_row_height,
        }
    }

    /// Text for the column-1 label cell.
    pub fn axis_label(&self) -> String {
        match self {
            RowKind::DateHeader => "Date".into(),
            RowKind::DayHeader => "Day".into(),
            RowKind::Note { .. } => "Note".into(),
            RowKind::TimeSlot { hour, minute } => format!("{hour:02}:{minute:02}"),
        }
    }
}

/// One row of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    /// 1-based document row
    pub index: u32,
    /// Row content tag
    pub kind: RowKind,
}

/// Value carried by a single cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Blank cell that still carries a style
    Empty,
    /// Plain text (labels, time slots)
    Text(String),
    /// A real date value, so document-side rules can compare it to TODAY()
    Date(NaiveDate),
    /// Numeric value (day ordinals)
    Number(f64),
}

/// One fully resolved cell: position, value and style name.
#[derive(Clone, Debug, PartialEq)]
pub struct CellSpec {
    /// 1-based document row
    pub row: u32,
    /// 1-based document column
    pub col: u16,
    /// Cell content
    pub value: CellValue,
    /// Name of the registered style to apply
    pub style: &'static str,
}

/// The computed layout of one planner document.
///
/// A pure function of the config: planning twice with the same input yields
/// an identical plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    /// Day columns, in order, starting at document column 2
    pub columns: Vec<ColumnSpec>,
    /// All rows, in order, starting at document row 1
    pub rows: Vec<RowSpec>,
}

impl GridPlan {
    /// Total column count, label column included.
    pub fn total_columns(&self) -> u16 {
        self.columns.len() as u16 + 1
    }

    /// Total row count.
    pub fn total_rows(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Document row holding the dates. Always 1.
    pub fn date_header_row(&self) -> u32 {
        1
    }

    /// First day column. Always 2.
    pub fn first_data_column(&self) -> u16 {
        2
    }

    /// Last day column.
    pub fn last_data_column(&self) -> u16 {
        self.columns.len() as u16 + 1
    }

    /// 1-based cell at which the scrollable region starts: header and note
    /// rows plus the label column stay frozen above/left of it.
    pub fn freeze_cell(&self) -> (u32, u16) {
        let notes = self
            .rows
            .iter()
            .filter(|r| matches!(r.kind, RowKind::Note { .. }))
            .count() as u32;
        (3 + notes, 2)
    }

    /// The two date-relative highlight rules for the date header row.
    pub fn date_rules(&self) -> Vec<ConditionalRule> {
        date_rules(
            self.date_header_row(),
            self.first_data_column(),
            self.last_data_column(),
        )
    }

    /// Expand the plan into every cell the document will contain, in row
    /// order with the label cell first.
    pub fn cells(&self) -> Vec<CellSpec> {
        let mut cells = Vec::with_capacity(self.rows.len() * (self.columns.len() + 1));
        for row in &self.rows {
            cells.push(CellSpec {
                row: row.index,
                col: 1,
                value: CellValue::Text(row.kind.axis_label()),
                style: match row.kind {
                    RowKind::DateHeader | RowKind::DayHeader => style::HEADER,
                    RowKind::Note { .. } => style::NOTE,
                    RowKind::TimeSlot { .. } => style::TIME_AXIS,
                },
            });
            for col in &self.columns {
                let header_style = if col.is_workday() {
                    style::WORKDAY_HEADER
                } else {
                    style::HEADER
                };
                let cell = match row.kind {
                    RowKind::DateHeader => CellSpec {
                        row: row.index,
                        col: col.index,
                        value: CellValue::Date(col.date),
                        style: header_style,
                    },
                    RowKind::DayHeader => CellSpec {
                        row: row.index,
                        col: col.index,
                        value: CellValue::Number(f64::from(col.day_number)),
                        style: header_style,
                    },
                    RowKind::Note { .. } => CellSpec {
                        row: row.index,
                        col: col.index,
                        value: CellValue::Empty,
                        style: style::NOTE,
                    },
                    RowKind::TimeSlot { .. } => CellSpec {
                        row: row.index,
                        col: col.index,
                        value: CellValue::Empty,
                        style: style::DEFAULT_CELL,
                    },
                };
                cells.push(cell);
            }
        }
        cells
    }
}

/// Compute the grid layout for a config.
///
/// Row order is fixed: date header, day header, note rows, then one row per
/// half hour from `start_hour:00` through `end_hour:30` inclusive.
pub fn plan(config: &PlannerConfig) -> Result<GridPlan, ConfigError> {
    config.validate()?;

    let columns = (0..config.num_days)
        .map(|i| {
            let date = config.start_date + chrono::Duration::days(i64::from(i));
            ColumnSpec {
                index: i as u16 + 2,
                date,
                day_number: day_number(date),
            }
        })
        .collect();

    let mut rows = Vec::new();
    rows.push(RowSpec {
        index: 1,
        kind: RowKind::DateHeader,
    });
    rows.push(RowSpec {
        index: 2,
        kind: RowKind::DayHeader,
    });
    let mut index = 3;
    for note in 0..config.note_rows {
        rows.push(RowSpec {
            index,
            kind: RowKind::Note { index: note },
        });
        index += 1;
    }
    for hour in config.start_hour..=config.end_hour {
        for minute in [0u8, 30] {
            rows.push(RowSpec {
                index,
                kind: RowKind::TimeSlot { hour, minute },
            });
            index += 1;
        }
    }

    Ok(GridPlan { columns, rows })
}

// ============================================================================
// Style Palette
// ============================================================================

/// One selectable cell background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Style name the cell style is registered under
    pub name: String,
    /// RGB fill color
    pub color: u32,
}

/// The `{name -> color}` table of selectable cell styles.
///
/// Users recolor individual cells in the finished document by picking one of
/// these; extending the table never touches layout logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePalette {
    entries: Vec<PaletteEntry>,
}

impl StylePalette {
    /// All entries, in registration order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Add a selectable color.
    pub fn with_entry(mut self, name: impl Into<String>, color: u32) -> Self {
        self.entries.push(PaletteEntry {
            name: name.into(),
            color,
        });
        self
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        let entries = [
            (style::DEFAULT_CELL, 0xFFFFFF),
            ("red", 0xFFCCCB),
            ("blue", 0xADD8E6),
            ("green", 0xC2FFC2),
            ("yellow", 0xFFFACD),
            ("orange", 0xFFDAB9),
            ("purple", 0xE6BEFF),
            ("gray", 0xE0E0E0),
            ("cyan", 0xAFEEEE),
            ("teal", 0xB4FFFF),
            ("pink", 0xFFB6C1),
            ("brown", 0xD2B48C),
        ]
        .into_iter()
        .map(|(name, color)| PaletteEntry {
            name: name.to_string(),
            color,
        })
        .collect();
        Self { entries }
    }
}

// ============================================================================
// Conditional Rules
// ============================================================================

/// Comparison applied by a conditional rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Cell value strictly below the reference
    LessThan,
    /// Cell value equal to the reference
    EqualTo,
}

/// A document-evaluated highlight rule over one row range.
///
/// The reference is carried as a formula string so the document re-evaluates
/// it every time it is opened, not once at generation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalRule {
    /// Comparison operator
    pub op: CompareOp,
    /// Reference expression, e.g. `TODAY()`
    pub formula: String,
    /// 1-based target row
    pub row: u32,
    /// 1-based first target column
    pub first_col: u16,
    /// 1-based last target column
    pub last_col: u16,
    /// RGB fill applied when the rule matches
    pub fill: u32,
    /// RGB font color applied when the rule matches
    pub font_color: u32,
}

/// Fill for dates already in the past.
pub const PAST_DATE_FILL: u32 = 0xFFCCCB;
/// Fill for today's date.
pub const TODAY_FILL: u32 = 0xADD8E6;

/// Build the two date-relative rules for the date header range.
///
/// A value cannot be both less-than and equal-to today, so the rules never
/// compete for the same cell.
pub fn date_rules(date_header_row: u32, first_data_col: u16, last_data_col: u16) -> Vec<ConditionalRule> {
    let base = |op, fill| ConditionalRule {
        op,
        formula: "TODAY()".to_string(),
        row: date_header_row,
        first_col: first_data_col,
        last_col: last_data_col,
        fill,
        font_color: 0x000000,
    };
    vec![
        base(CompareOp::LessThan, PAST_DATE_FILL),
        base(CompareOp::EqualTo, TODAY_FILL),
    ]
}

// ============================================================================
// Rendering Trait
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a planned grid to the output format
    fn render(&self, config: &PlannerConfig, plan: &GridPlan) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Config invariant violation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Number of days must be at least 1")]
    NoDays,

    #[error("Hour {0} is outside 0-23")]
    HourOutOfRange(u8),

    #[error("End hour {end} is earlier than start hour {start}")]
    HourOrder { start: u8, end: u8 },
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
