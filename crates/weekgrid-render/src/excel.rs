//! Excel planner emitter
//!
//! Generates a single-sheet XLSX planner from a computed grid plan:
//! - Row 1: dates (`dd-mmm-yyyy`), highlighted by two TODAY()-relative rules
//! - Row 2: Monday-first day ordinals (1-7)
//! - Note rows: blank free-text cells
//! - Remaining rows: half-hour labels in column 1, blank styled data cells
//!
//! ## Example Output Structure
//!
//! ```text
//! Sheet: Planner
//! | Date  | 01-Jan-2024 | 02-Jan-2024 | 03-Jan-2024 |
//! | Day   | 1           | 2           | 3           |
//! | Note  |             |             |             |
//! | 08:00 |             |             |             |
//! | 08:30 |             |             |             |
//! | ...   |             |             |             |
//! ```
//!
//! Styles are registered once per document in a [`StyleCatalog`] and
//! referenced by name from the plan, so recoloring a cell later means
//! switching its style, never rebuilding the layout. The date-header rules
//! carry the `TODAY()` formula, so past/today highlighting is recomputed
//! every time the file is opened.

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{
    ConditionalFormatCell, ConditionalFormatCellRule, Format, FormatAlign, FormatBorder, Formula,
    Workbook,
};
use weekgrid_core::{
    style, CellValue, CompareOp, GridPlan, PlannerConfig, RenderError, Renderer, StylePalette,
};

const HEADER_FILL: u32 = 0xFFC80A;
const WORKDAY_FILL: u32 = 0xC8960A;
const TIME_AXIS_FILL: u32 = 0xADD8E6;
const NOTE_FILL: u32 = 0xFFFA96;

const DATE_NUM_FORMAT: &str = "dd-mmm-yyyy";

/// Name-indexed registry of cell formats, built once per document.
///
/// Registering the same name twice is a call-once contract; the second
/// registration has no defined meaning.
#[derive(Debug, Default)]
pub struct StyleCatalog {
    formats: HashMap<String, Format>,
}

impl StyleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an immutable named style.
    pub fn register(&mut self, name: impl Into<String>, format: Format) {
        self.formats.insert(name.into(), format);
    }

    /// Look up a registered style.
    pub fn format(&self, name: &str) -> Result<&Format, RenderError> {
        self.formats
            .get(name)
            .ok_or_else(|| RenderError::Format(format!("Unknown style: {name}")))
    }

    /// Whether a style name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

/// Date-valued cells need the number format baked into the style.
fn date_variant(name: &str) -> String {
    format!("{name}-date")
}

/// Excel planner renderer
#[derive(Clone, Debug)]
pub struct ExcelRenderer {
    /// Worksheet name
    pub sheet_name: String,
    /// Selectable cell background table
    pub palette: StylePalette,
    /// Font size for plain header cells
    pub header_font_size: f64,
    /// Font size for workday header cells
    pub workday_font_size: f64,
    /// Border weight for data cells
    pub light_border: FormatBorder,
    /// Border weight for header and time-axis cells
    pub heavy_border: FormatBorder,
}

impl Default for ExcelRenderer {
    fn default() -> Self {
        Self {
            sheet_name: "Planner".into(),
            palette: StylePalette::default(),
            header_font_size: 11.0,
            workday_font_size: 14.0,
            light_border: FormatBorder::Thin,
            heavy_border: FormatBorder::Medium,
        }
    }
}

impl ExcelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worksheet name
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Replace the cell background palette
    pub fn palette(mut self, palette: StylePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the two border weights (data cells, header/axis cells)
    pub fn borders(mut self, light: FormatBorder, heavy: FormatBorder) -> Self {
        self.light_border = light;
        self.heavy_border = heavy;
        self
    }

    /// Bold, centered, heavy border, solid fill
    fn header_format(&self, fill: u32, font_size: f64) -> Format {
        Format::new()
            .set_bold()
            .set_font_size(font_size)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_background_color(fill)
            .set_border(self.heavy_border)
    }

    /// Bold, centered, heavy border, fixed fill
    fn time_axis_format(&self) -> Format {
        Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_background_color(TIME_AXIS_FILL)
            .set_border(self.heavy_border)
    }

    /// Centered, light border, solid fill
    fn cell_format(&self, fill: u32) -> Format {
        Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_background_color(fill)
            .set_border(self.light_border)
    }

    /// Register every named style the plan can reference.
    pub fn build_catalog(&self) -> StyleCatalog {
        let mut catalog = StyleCatalog::new();

        catalog.register(style::HEADER, self.header_format(HEADER_FILL, self.header_font_size));
        catalog.register(
            style::WORKDAY_HEADER,
            self.header_format(WORKDAY_FILL, self.workday_font_size),
        );
        catalog.register(style::NOTE, self.header_format(NOTE_FILL, self.header_font_size));
        catalog.register(style::TIME_AXIS, self.time_axis_format());

        // Date-row variants of the header styles carry the date number format
        catalog.register(
            date_variant(style::HEADER),
            self.header_format(HEADER_FILL, self.header_font_size)
                .set_num_format(DATE_NUM_FORMAT),
        );
        catalog.register(
            date_variant(style::WORKDAY_HEADER),
            self.header_format(WORKDAY_FILL, self.workday_font_size)
                .set_num_format(DATE_NUM_FORMAT),
        );

        // Selectable cell backgrounds
        for entry in self.palette.entries() {
            catalog.register(entry.name.as_str(), self.cell_format(entry.color));
        }

        catalog
    }

    /// Generate the workbook bytes.
    pub fn render_to_bytes(
        &self,
        config: &PlannerConfig,
        plan: &GridPlan,
    ) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        let catalog = self.build_catalog();

        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&self.sheet_name)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        // Column widths: narrow label axis, equal-width day columns
        sheet.set_column_width(0, config.first_column_width).ok();
        for col in &plan.columns {
            sheet.set_column_width(col.index - 1, config.data_column_width).ok();
        }

        // Row heights per row kind
        for row in &plan.rows {
            sheet.set_row_height(row.index - 1, row.kind.height(config)).ok();
        }

        // Every cell value and style per the plan
        for cell in plan.cells() {
            let row = cell.row - 1;
            let col = cell.col - 1;
            match &cell.value {
                CellValue::Text(text) => {
                    sheet
                        .write_with_format(row, col, text.as_str(), catalog.format(cell.style)?)
                        .map_err(|e| RenderError::Format(e.to_string()))?;
                }
                CellValue::Date(date) => {
                    sheet
                        .write_datetime_with_format(
                            row,
                            col,
                            date,
                            catalog.format(&date_variant(cell.style))?,
                        )
                        .map_err(|e| RenderError::Format(e.to_string()))?;
                }
                CellValue::Number(n) => {
                    sheet
                        .write_with_format(row, col, *n, catalog.format(cell.style)?)
                        .map_err(|e| RenderError::Format(e.to_string()))?;
                }
                CellValue::Empty => {
                    sheet
                        .write_with_format(row, col, "", catalog.format(cell.style)?)
                        .map_err(|e| RenderError::Format(e.to_string()))?;
                }
            }
        }

        // Keep headers, note rows and the label column visible while scrolling
        let (freeze_row, freeze_col) = plan.freeze_cell();
        sheet.set_freeze_panes(freeze_row - 1, freeze_col - 1).ok();

        // Past-date and today highlighting, recomputed at document open
        for rule in plan.date_rules() {
            let rule_format = Format::new()
                .set_background_color(rule.fill)
                .set_font_color(rule.font_color);
            let condition = match rule.op {
                CompareOp::LessThan => {
                    ConditionalFormatCellRule::LessThan(Formula::new(rule.formula.as_str()))
                }
                CompareOp::EqualTo => {
                    ConditionalFormatCellRule::EqualTo(Formula::new(rule.formula.as_str()))
                }
            };
            let conditional_format = ConditionalFormatCell::new()
                .set_rule(condition)
                .set_format(rule_format);
            sheet
                .add_conditional_format(
                    rule.row - 1,
                    rule.first_col - 1,
                    rule.row - 1,
                    rule.last_col - 1,
                    &conditional_format,
                )
                .map_err(|e| RenderError::Format(e.to_string()))?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))
    }

    /// Build the full document in memory, then write it to `path` in one step.
    pub fn write_to_path(
        &self,
        config: &PlannerConfig,
        plan: &GridPlan,
        path: &Path,
    ) -> Result<(), RenderError> {
        let buffer = self.render(config, plan)?;
        std::fs::write(path, buffer)?;
        Ok(())
    }
}

impl Renderer for ExcelRenderer {
    type Output = Vec<u8>;

    fn render(&self, config: &PlannerConfig, plan: &GridPlan) -> Result<Vec<u8>, RenderError> {
        if plan.columns.is_empty() {
            return Err(RenderError::InvalidData("No day columns to render".into()));
        }
        self.render_to_bytes(config, plan)
    }
}
