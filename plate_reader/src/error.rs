use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlateError {
    #[error("cannot open video source {source_uri:?}")]
    CameraOpen { source_uri: String },
    #[error("cannot load cascade model {path:?}")]
    Model { path: PathBuf },
    #[error("cannot initialise tesseract: {0}")]
    OcrInit(String),
    #[error("tesseract failed on region: {0}")]
    Ocr(String),
    #[error("cannot append to plate log")]
    PlateLog(#[source] io::Error),
    #[error("cannot create snapshot directory {path:?}")]
    SnapshotDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write snapshot {path:?}")]
    Snapshot { path: PathBuf },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    OpenCv(#[from] opencv::Error),
}
