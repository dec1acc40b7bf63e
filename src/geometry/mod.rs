pub mod centerline;
pub mod ribbon;

pub use centerline::Centerline;
pub use ribbon::RibbonPolygon;
