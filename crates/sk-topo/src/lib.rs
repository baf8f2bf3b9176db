//! Skeleton topology: feature classification and annotation.
//!
//! Every foreground interior pixel is labeled from its crossing number `CN`
//! (count of clockwise `0 -> 1` transitions around its 8-neighborhood):
//! - `CN == 1`: [`PointKind::Endpoint`]
//! - `CN >= 3`: [`PointKind::Branch`]
//! - otherwise: [`PointKind::Interior`] (includes isolated pixels with `CN == 0`)
//!
//! Labels are transient. [`classify`] returns coordinate lists which
//! [`render_annotated`] turns into marker disks on an RGBA raster.

mod classify;
mod components;
mod render;

pub use classify::{Features, PointKind, classify, point_kind};
pub use components::count_components;
pub use render::{MarkerStyle, draw_disk, render_annotated, render_skeleton};
