//! Command line configuration for the plate reader.
//!
//! Every value defaults to what the reader used when it had hard-coded paths,
//! so running the binary without arguments reads camera 0 and writes
//! `placas.log` and `plates/` next to the working directory.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::PlateError;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "plate_reader",
    version,
    about = "Reads licence plates from a live camera and logs every new plate"
)]
pub struct ReaderConfig {
    /// Camera index (`0`, `/dev/video0`) or path to a video file.
    #[arg(long, default_value = "0")]
    pub source: String,

    /// Requested capture width.
    #[arg(long, default_value_t = 640)]
    pub width: i32,

    /// Requested capture height.
    #[arg(long, default_value_t = 480)]
    pub height: i32,

    /// Haar cascade trained on plates.
    #[arg(long, default_value = "model/haarcascade_russian_plate_number.xml")]
    pub cascade: PathBuf,

    #[arg(long, default_value_t = 1.1)]
    pub scale_factor: f64,

    #[arg(long, default_value_t = 4)]
    pub min_neighbors: i32,

    /// Regions with an area (in pixels) at or below this are ignored.
    #[arg(long, default_value_t = 500)]
    pub min_area: i64,

    /// Directory holding the tesseract `.traineddata` files.
    #[arg(long)]
    pub tessdata: Option<PathBuf>,

    #[arg(long, default_value = "eng")]
    pub language: String,

    /// Tesseract page segmentation mode, 7 treats the region as one text line.
    #[arg(long, default_value_t = 7)]
    pub page_seg_mode: u8,

    /// Append-only log receiving every new plate.
    #[arg(long, default_value = "placas.log")]
    pub plate_log: PathBuf,

    /// Directory receiving the snapshots taken with the `s` key.
    #[arg(long, default_value = "plates")]
    pub snapshot_dir: PathBuf,

    /// How long each frame waits for a key press.
    #[arg(long, default_value_t = 1)]
    pub key_delay_ms: u64,

    /// How long the "Plate Saved" banner stays on screen.
    #[arg(long, default_value_t = 500)]
    pub banner_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::parse_from(["plate_reader"])
    }
}

impl ReaderConfig {
    pub fn validate(&self) -> Result<(), PlateError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(PlateError::InvalidConfig(format!(
                "capture size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.scale_factor <= 1.0 {
            return Err(PlateError::InvalidConfig(format!(
                "scale factor must be greater than 1.0, got {}",
                self.scale_factor
            )));
        }
        if self.min_neighbors < 0 {
            return Err(PlateError::InvalidConfig(format!(
                "min neighbors cannot be negative, got {}",
                self.min_neighbors
            )));
        }
        if self.page_seg_mode > 13 {
            return Err(PlateError::InvalidConfig(format!(
                "tesseract page segmentation mode must be 0..=13, got {}",
                self.page_seg_mode
            )));
        }
        // highgui treats a zero delay as "wait forever".
        if self.key_delay_ms == 0 {
            return Err(PlateError::InvalidConfig(
                "key delay must be at least 1ms".to_string(),
            ));
        }
        Ok(())
    }

    pub fn key_delay(&self) -> Duration {
        Duration::from_millis(self.key_delay_ms)
    }

    pub fn banner_delay(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}
