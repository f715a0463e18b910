mod color;
mod enums;

pub use color::{Color, ResolvedColor, Rgb, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
pub use enums::{Border, TextAlign};
