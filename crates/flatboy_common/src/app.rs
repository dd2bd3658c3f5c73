/// Boundary between an emulation driver and whatever displays its output.
///
/// The core never touches a window or input device. A driver loop asks the
/// presentation layer whether the user wants to quit before each step and
/// hands it an RGB24 framebuffer (`FRAME_BYTES` long) whenever a frame's worth
/// of time has elapsed.
pub trait Presentation {
    /// Poll pending events and report whether emulation should stop.
    fn should_quit(&mut self) -> bool;

    /// Display one frame.
    fn present(&mut self, frame: &[u8]);
}

/// Presentation layer with no window: never asks to quit, counts frames.
#[derive(Debug, Default)]
pub struct Headless {
    frames: u64,
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presentation for Headless {
    fn should_quit(&mut self) -> bool {
        false
    }

    fn present(&mut self, frame: &[u8]) {
        self.frames = self.frames.wrapping_add(1);
        if self.frames == 1 || self.frames % 600 == 0 {
            log::debug!("headless: frame {} ({} bytes)", self.frames, frame.len());
        }
    }
}
