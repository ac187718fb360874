//! Value types and transforms over the normalized `[0,1]x[0,1]` canvas.
//!
//! Grid constructions are authored in normalized coordinates with X to the
//! right and Y downwards. `transform` applies the user's rotation and flips
//! about the canvas center and then denormalizes to pixels.

mod line;
mod point;
mod rect;
mod rotation;
mod transform;

pub use line::Line;
pub use point::Point;
pub use rect::Rectangle;
pub use rotation::Rotation;
pub use transform::{perpendicular_foot, transform, transform_point};
