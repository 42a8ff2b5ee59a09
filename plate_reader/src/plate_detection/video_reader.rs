use log::debug;
use log::error;

use opencv::core::Size;

use opencv::imgproc::resize;
use opencv::imgproc::INTER_LINEAR;
use opencv::prelude::Mat;
use opencv::prelude::MatTraitConst;

use opencv::prelude::VideoCaptureTrait;
use opencv::prelude::VideoCaptureTraitConst;
use opencv::videoio::VideoCapture;

use opencv::videoio::CAP_ANY;
use opencv::videoio::CAP_PROP_FRAME_HEIGHT;
use opencv::videoio::CAP_PROP_FRAME_WIDTH;

use super::FrameSource;
use crate::error::PlateError;

/// Where frames come from: a camera index or a video file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureSource {
    Device(i32),
    File(String),
}

impl CaptureSource {
    /// `"0"` and `"/dev/video0"` are devices, anything else is a file.
    pub fn parse(source: &str) -> Self {
        if let Ok(index) = source.parse::<i32>() {
            return CaptureSource::Device(index);
        }
        if let Some(index) = source.strip_prefix("/dev/video") {
            if let Ok(index) = index.parse::<i32>() {
                return CaptureSource::Device(index);
            }
        }
        CaptureSource::File(source.to_string())
    }
}

/// Owns the capture device for the lifetime of the reader.
pub struct VideoReader {
    capture: VideoCapture,
    frame_size: Size,
}

impl VideoReader {
    pub fn open(source: &str, width: i32, height: i32) -> Result<Self, PlateError> {
        let open_error = || PlateError::CameraOpen {
            source_uri: source.to_string(),
        };

        let mut capture = match CaptureSource::parse(source) {
            CaptureSource::Device(index) => VideoCapture::new(index, CAP_ANY),
            CaptureSource::File(path) => VideoCapture::from_file(&path, CAP_ANY),
        }
        .map_err(|_| open_error())?;

        if !capture.is_opened()? {
            return Err(open_error());
        }

        // Not every backend honours these, frames are resized on read anyway.
        capture.set(CAP_PROP_FRAME_WIDTH, width as f64)?;
        capture.set(CAP_PROP_FRAME_HEIGHT, height as f64)?;

        Ok(Self {
            capture,
            frame_size: Size::new(width, height),
        })
    }
}

impl FrameSource for VideoReader {
    fn read_frame(&mut self) -> Result<Option<Mat>, PlateError> {
        let mut image = Mat::default();
        let grabbed = self.capture.read(&mut image)?;

        if !grabbed || image.empty() {
            return Ok(None);
        }

        if image.cols() == self.frame_size.width && image.rows() == self.frame_size.height {
            return Ok(Some(image));
        }

        let mut image_resized = Mat::default();
        resize(
            &image,
            &mut image_resized,
            self.frame_size,
            0.0,
            0.0,
            INTER_LINEAR,
        )?;
        Ok(Some(image_resized))
    }
}

impl Drop for VideoReader {
    fn drop(&mut self) {
        debug!("Releasing video capture");
        if let Err(err) = self.capture.release() {
            error!("Cannot release video capture: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(CaptureSource::parse("0"), CaptureSource::Device(0));
        assert_eq!(CaptureSource::parse("/dev/video2"), CaptureSource::Device(2));
        assert_eq!(
            CaptureSource::parse("data/traffic.mp4"),
            CaptureSource::File("data/traffic.mp4".to_string())
        );
        assert_eq!(
            CaptureSource::parse("/dev/videoX"),
            CaptureSource::File("/dev/videoX".to_string())
        );
    }

    #[test]
    fn test_missing_file_fails_to_open() {
        let result = VideoReader::open("data/does_not_exist.mp4", 640, 480);
        assert!(matches!(result, Err(PlateError::CameraOpen { .. })));
    }
}
