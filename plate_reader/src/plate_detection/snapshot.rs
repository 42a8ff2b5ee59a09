use std::fs;
use std::path::Path;
use std::path::PathBuf;

use opencv::core::Vector;
use opencv::imgcodecs::imwrite;
use opencv::prelude::Mat;

use crate::error::PlateError;

/// Destination of the plate crops saved on request.
pub trait SnapshotSink {
    fn save(&mut self, index: usize, plate: &Mat) -> Result<PathBuf, PlateError>;
}

/// Writes `scaned_img_<index>.jpg` files into one directory.
pub struct JpegSnapshots {
    dir: PathBuf,
}

impl JpegSnapshots {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("scaned_img_{index}.jpg"))
    }
}

impl SnapshotSink for JpegSnapshots {
    fn save(&mut self, index: usize, plate: &Mat) -> Result<PathBuf, PlateError> {
        fs::create_dir_all(&self.dir).map_err(|source| PlateError::SnapshotDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(index);
        let written = match path.to_str() {
            Some(file_name) => imwrite(file_name, plate, &Vector::<i32>::new())?,
            None => false,
        };
        if !written {
            return Err(PlateError::Snapshot { path });
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Scalar;
    use opencv::core::CV_8UC3;
    use opencv::prelude::MatTraitConst;
    use tempfile::TempDir;

    #[test]
    fn test_writes_numbered_jpeg() {
        let dir = TempDir::new().unwrap();
        let plates = dir.path().join("plates");
        let mut snapshots = JpegSnapshots::new(&plates);

        let crop =
            Mat::new_rows_cols_with_default(30, 90, CV_8UC3, Scalar::all(128.0)).unwrap();
        let path = snapshots.save(0, &crop).unwrap();

        assert_eq!(path, plates.join("scaned_img_0.jpg"));
        let read_back =
            opencv::imgcodecs::imread(path.to_str().unwrap(), opencv::imgcodecs::IMREAD_COLOR)
                .unwrap();
        assert_eq!((read_back.cols(), read_back.rows()), (90, 30));
    }

    #[test]
    fn test_path_for() {
        let snapshots = JpegSnapshots::new(Path::new("plates"));
        assert_eq!(snapshots.path_for(7), PathBuf::from("plates/scaned_img_7.jpg"));
    }
}
