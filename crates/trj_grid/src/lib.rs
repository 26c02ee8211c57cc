//! Bounding-box scanning, grid sizing, and trajectory-mask rasterization
//! for the density aggregator.
//!
//! A run over a directory of trajectory files goes: [`scan_directory`] to
//! find the covering bounding box, [`Grid::size`] to lay out cells over
//! it, [`rasterize`] once per file to build a weighted mask, [`Grid::add_mask`]
//! to fold each mask into the running total, and finally [`Grid::classify`]
//! to rescale the accumulated grid into the ten-band output used by the
//! markup writer.

mod bbox;
mod error;
mod grid;
mod mask;

pub use bbox::{BoundingBox, list_trajectory_files, scan_directory};
pub use error::GridError;
pub use grid::{ClassifyStats, Grid};
pub use mask::{WeightMode, rasterize};
