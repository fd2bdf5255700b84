//! # weekgrid-render
//!
//! Rendering backend for weekgrid planner grids.
//!
//! This crate provides:
//! - Excel (.xlsx) planner output via [`ExcelRenderer`]
//! - The [`StyleCatalog`] of named cell formats
//!
//! ## Example
//!
//! ```rust,ignore
//! use weekgrid_core::{plan, PlannerConfig, Renderer};
//! use weekgrid_render::ExcelRenderer;
//!
//! let config = PlannerConfig::new(start, 7);
//! let grid = plan(&config)?;
//!
//! let renderer = ExcelRenderer::new();
//! let xlsx_bytes = renderer.render(&config, &grid)?;
//! std::fs::write("Planner.xlsx", xlsx_bytes)?;
//! ```

pub mod excel;

pub use excel::{ExcelRenderer, StyleCatalog};
