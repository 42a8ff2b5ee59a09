use std::ffi::CString;
use std::path::Path;

use leptess::tesseract::TessApi;

use opencv::prelude::Mat;
use opencv::prelude::MatTraitConst;
use opencv::prelude::MatTraitConstManual;

use super::TextRecognizer;
use crate::error::PlateError;

pub struct TesseractOcr {
    ocr: TessApi,
}

impl TesseractOcr {
    pub fn new(
        data_path: Option<&Path>,
        language: &str,
        page_seg_mode: u8,
    ) -> Result<Self, PlateError> {
        let data_path = match data_path {
            Some(path) => Some(path.to_str().ok_or_else(|| {
                PlateError::OcrInit(format!("tessdata path {path:?} is not valid UTF-8"))
            })?),
            None => None,
        };

        let mut api = TessApi::new(data_path, language)
            .map_err(|e| PlateError::OcrInit(format!("{e:?}")))?;

        let name = CString::new("tessedit_pageseg_mode")
            .map_err(|e| PlateError::OcrInit(e.to_string()))?;
        let value = CString::new(page_seg_mode.to_string())
            .map_err(|e| PlateError::OcrInit(e.to_string()))?;
        api.raw
            .set_variable(&name, &value)
            .map_err(|e| PlateError::OcrInit(format!("{e:?}")))?;

        Ok(Self { ocr: api })
    }
}

impl TextRecognizer for TesseractOcr {
    fn recognize(&mut self, grey: &Mat) -> Result<String, PlateError> {
        // Crops share the frame buffer, tesseract needs its own contiguous copy.
        let cropped = grey.try_clone()?;

        let cols = cropped.cols();
        let rows = cropped.rows();
        self.ocr
            .raw
            .set_image(cropped.data_bytes()?, cols, rows, 1, cols)
            .map_err(|e| PlateError::Ocr(format!("{e:?}")))?;

        self.ocr
            .get_utf8_text()
            .map_err(|e| PlateError::Ocr(format!("{e:?}")))
    }
}
