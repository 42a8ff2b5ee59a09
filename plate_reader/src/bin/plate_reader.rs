use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use plate_reader::config::ReaderConfig;
use plate_reader::plate_detection::cascade_detector::CascadeDetector;
use plate_reader::plate_detection::frame_loop::{FrameLoop, LoopSettings};
use plate_reader::plate_detection::plate_log::PlateLog;
use plate_reader::plate_detection::screen::HighGuiScreen;
use plate_reader::plate_detection::snapshot::JpegSnapshots;
use plate_reader::plate_detection::tesseract_ocr::TesseractOcr;
use plate_reader::plate_detection::video_reader::VideoReader;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ReaderConfig::parse();
    config.validate()?;
    info!("Starting plate_reader on source {}", config.source);

    let source = VideoReader::open(&config.source, config.width, config.height)
        .context("Cannot open the camera, check that it is connected")?;
    let detector =
        CascadeDetector::from_file(&config.cascade, config.scale_factor, config.min_neighbors)?;
    let recognizer = TesseractOcr::new(
        config.tessdata.as_deref(),
        &config.language,
        config.page_seg_mode,
    )?;
    let plate_log = PlateLog::append_to(&config.plate_log)
        .with_context(|| format!("Cannot open {}", config.plate_log.display()))?;

    let mut frame_loop = FrameLoop::new(
        source,
        detector,
        recognizer,
        HighGuiScreen::default(),
        JpegSnapshots::new(&config.snapshot_dir),
        plate_log,
        LoopSettings::from(&config),
    );
    frame_loop.run()?;

    info!(
        "Exiting, last plate {:?}, {} snapshots saved",
        frame_loop.session().last_plate(),
        frame_loop.session().saved()
    );
    Ok(())
}
