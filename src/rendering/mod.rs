pub mod palette_strip;
pub mod png_io;

pub use palette_strip::render_strip;
pub use png_io::{decode_png, encode_png, read_png, write_png};
