use std::time::Duration;

use log::error;
use opencv::highgui::destroy_all_windows;
use opencv::highgui::imshow;
use opencv::highgui::wait_key;
use opencv::prelude::Mat;

use crate::error::PlateError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    /// Annotated camera frame.
    Result,
    /// Last plate crop.
    Roi,
}

impl Window {
    pub fn title(self) -> &'static str {
        match self {
            Window::Result => "Result",
            Window::Roi => "ROI",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Save,
    Quit,
}

impl KeyCommand {
    /// Maps a raw key code, `-1` meaning no key was pressed.
    pub fn from_key(key: i32) -> Option<Self> {
        if key < 0 {
            return None;
        }
        match (key & 0xFF) as u8 {
            b's' => Some(KeyCommand::Save),
            b'q' => Some(KeyCommand::Quit),
            _ => None,
        }
    }
}

/// Display surfaces plus the keyboard feeding the frame loop.
pub trait Screen {
    fn show(&mut self, window: Window, image: &Mat) -> Result<(), PlateError>;

    /// Waits up to `delay` for a key press.
    fn poll_key(&mut self, delay: Duration) -> Result<Option<KeyCommand>, PlateError>;

    /// Keeps the current windows on screen for `delay`, ignoring keys.
    fn hold(&mut self, delay: Duration) -> Result<(), PlateError>;
}

fn delay_ms(delay: Duration) -> i32 {
    // Zero would block until a key press.
    delay.as_millis().clamp(1, i32::MAX as u128) as i32
}

#[derive(Default)]
pub struct HighGuiScreen {}

impl Screen for HighGuiScreen {
    fn show(&mut self, window: Window, image: &Mat) -> Result<(), PlateError> {
        imshow(window.title(), image)?;
        Ok(())
    }

    fn poll_key(&mut self, delay: Duration) -> Result<Option<KeyCommand>, PlateError> {
        let key = wait_key(delay_ms(delay))?;
        Ok(KeyCommand::from_key(key))
    }

    fn hold(&mut self, delay: Duration) -> Result<(), PlateError> {
        wait_key(delay_ms(delay))?;
        Ok(())
    }
}

impl Drop for HighGuiScreen {
    fn drop(&mut self) {
        if let Err(err) = destroy_all_windows() {
            error!("Cannot close windows: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCommand::from_key(-1), None);
        assert_eq!(KeyCommand::from_key(b's' as i32), Some(KeyCommand::Save));
        assert_eq!(KeyCommand::from_key(b'q' as i32), Some(KeyCommand::Quit));
        assert_eq!(KeyCommand::from_key(b'x' as i32), None);
        assert_eq!(KeyCommand::from_key(b'S' as i32), None);
        // Some backends report modifier bits above the low byte.
        assert_eq!(
            KeyCommand::from_key(0x10_0000 | b'q' as i32),
            Some(KeyCommand::Quit)
        );
    }

    #[test]
    fn test_delay_never_blocks_forever() {
        assert_eq!(delay_ms(Duration::ZERO), 1);
        assert_eq!(delay_ms(Duration::from_millis(500)), 500);
    }
}
