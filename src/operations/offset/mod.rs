mod arc_ribbon;
mod normal_offset;
mod ribbon;

pub use arc_ribbon::ArcRibbon2D;
pub use normal_offset::NormalOffset2D;
pub use ribbon::Ribbon2D;
