mod check_ribbon;
mod point_on_segment;

pub use check_ribbon::{CheckRibbon, RibbonReport};
pub use point_on_segment::PointOnSegment;
