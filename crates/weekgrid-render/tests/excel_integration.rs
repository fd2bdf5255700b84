//! Integration tests for Excel planner rendering

use chrono::NaiveDate;
use weekgrid_core::{plan, PlannerConfig, Renderer};
use weekgrid_render::ExcelRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn render_default_week_to_excel() {
    let config = PlannerConfig::new(date(2024, 1, 1), 7);
    let grid = plan(&config).unwrap();

    let xlsx = ExcelRenderer::new().render(&config, &grid).unwrap();

    // Verify it's a valid XLSX file (starts with PK zip signature)
    assert!(xlsx.len() > 100);
    assert_eq!(&xlsx[0..2], b"PK");
}

#[test]
fn render_with_custom_hours_and_notes() {
    let config = PlannerConfig::new(date(2024, 6, 3), 5)
        .start_hour(6)
        .end_hour(21)
        .note_rows(3);
    let grid = plan(&config).unwrap();
    assert_eq!(grid.total_rows(), 2 + 3 + 2 * 16);

    let xlsx = ExcelRenderer::new().render(&config, &grid).unwrap();
    assert!(xlsx.len() > 100);
}

#[test]
fn render_without_note_rows() {
    let config = PlannerConfig::new(date(2024, 1, 1), 1).note_rows(0);
    let grid = plan(&config).unwrap();

    let xlsx = ExcelRenderer::new().render(&config, &grid).unwrap();
    assert_eq!(&xlsx[0..2], b"PK");
}

#[test]
fn render_single_day_spanning_weekend() {
    // Saturday only: every header cell takes the non-workday style
    let config = PlannerConfig::new(date(2024, 1, 6), 2);
    let grid = plan(&config).unwrap();
    assert!(grid.columns.iter().all(|c| !c.is_workday()));

    let xlsx = ExcelRenderer::new().render(&config, &grid).unwrap();
    assert!(xlsx.len() > 100);
}

#[test]
fn write_planner_file_end_to_end() {
    let config = PlannerConfig::new(date(2024, 1, 1), 3);
    let grid = plan(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Planner.xlsx");
    ExcelRenderer::new().write_to_path(&config, &grid, &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 100);
}
