pub mod app;

pub use app::{Headless, Presentation};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Bytes per pixel of the RGB24 framebuffer handed to a [`Presentation`].
pub const BYTES_PER_PIXEL: usize = 3;
/// Size in bytes of one presented framebuffer.
pub const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL;
