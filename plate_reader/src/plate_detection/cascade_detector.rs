use std::path::Path;

use opencv::core::Rect;
use opencv::core::Size;
use opencv::core::Vector;

use opencv::objdetect::CascadeClassifier;
use opencv::prelude::CascadeClassifierTrait;
use opencv::prelude::CascadeClassifierTraitConst;
use opencv::prelude::Mat;

use super::PlateDetector;
use crate::error::PlateError;

/// Haar cascade plate detector.
pub struct CascadeDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
}

impl CascadeDetector {
    pub fn from_file(
        path: &Path,
        scale_factor: f64,
        min_neighbors: i32,
    ) -> Result<Self, PlateError> {
        let model_error = || PlateError::Model {
            path: path.to_path_buf(),
        };

        let file_name = path.to_str().ok_or_else(model_error)?;
        let classifier = CascadeClassifier::new(file_name).map_err(|_| model_error())?;

        // A missing or malformed file still builds a classifier, just an empty one.
        if classifier.empty()? {
            return Err(model_error());
        }

        Ok(Self {
            classifier,
            scale_factor,
            min_neighbors,
        })
    }
}

impl PlateDetector for CascadeDetector {
    fn detect(&mut self, grey: &Mat) -> Result<Vector<Rect>, PlateError> {
        let mut plates = Vector::<Rect>::default();
        self.classifier.detect_multi_scale(
            grey,
            &mut plates,
            self.scale_factor,
            self.min_neighbors,
            0,
            Size::default(),
            Size::default(),
        )?;
        Ok(plates)
    }
}
