pub(crate) mod image;
pub(crate) mod path;
pub(crate) mod text;

pub use image::ImageCmd;
pub use path::{FillPathCmd, StrokePathCmd};
pub use text::TextCmd;
