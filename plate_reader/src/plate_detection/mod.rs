pub mod bounding_box_render;
pub mod cascade_detector;
pub mod frame_loop;
pub mod plate_log;
pub mod plate_text;
pub mod screen;
pub mod session;
pub mod snapshot;
pub mod tesseract_ocr;
pub mod video_reader;

use opencv::core::Rect;
use opencv::core::Vector;
use opencv::prelude::Mat;

use crate::error::PlateError;

/// Produces BGR frames. `Ok(None)` means the device returned nothing this time.
pub trait FrameSource {
    fn read_frame(&mut self) -> Result<Option<Mat>, PlateError>;
}

/// Proposes plate candidates on a grayscale frame.
pub trait PlateDetector {
    fn detect(&mut self, grey: &Mat) -> Result<Vector<Rect>, PlateError>;
}

/// Reads the raw text of a grayscale plate crop.
pub trait TextRecognizer {
    fn recognize(&mut self, grey: &Mat) -> Result<String, PlateError>;
}

/// Area in pixels, computed wide so huge rectangles cannot overflow.
pub fn region_area(region: &Rect) -> i64 {
    region.width as i64 * region.height as i64
}
