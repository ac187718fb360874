pub mod buffer;
pub mod draw;
pub mod io;
pub mod pixel;
pub mod traits;

pub use self::buffer::PixelBuffer;
pub use self::pixel::Pixel;
pub use self::traits::ImageView;
