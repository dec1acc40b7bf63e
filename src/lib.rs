//! Waveguide ribbon geometry for photonic integrated-circuit layout.
//!
//! Turns a centerline (a sampled circular arc, a 90° Bezier bend, or any
//! polyline) and a constant width into the closed polygon of the
//! waveguide, by offsetting the centerline along its local normal.
//!
//! ```
//! use wgribbon::geometry::Centerline;
//! use wgribbon::operations::offset::Ribbon2D;
//! use wgribbon::tessellation::{SampleArc, SamplingParams};
//!
//! let params = SamplingParams::from_dbu(0.001);
//! let arc = SampleArc::new(5000.0, 0.0, 90.0).execute(&params)?;
//! let n = arc.len();
//! let polygon = Ribbon2D::new(Centerline::new(arc)?, 500.0).execute()?;
//! assert_eq!(polygon.len(), 2 * n);
//! # Ok::<(), wgribbon::RibbonError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, RibbonError};
