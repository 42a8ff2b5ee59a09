//! The per-frame controller.
//!
//! One [`FrameLoop::step`] reads a frame, looks for plates, reads and logs
//! them, refreshes the windows and reacts to the keyboard. The loop is
//! `Running` until the quit key moves it to `Stopped`.

use std::io::Write;
use std::time::Duration;

use log::debug;
use log::info;
use log::warn;

use opencv::core::Rect;
use opencv::imgproc::cvt_color;
use opencv::imgproc::COLOR_BGR2GRAY;
use opencv::prelude::Mat;
use opencv::prelude::MatTraitConst;

use super::bounding_box_render::draw_plate_marker;
use super::bounding_box_render::draw_saved_banner;
use super::plate_log::PlateLog;
use super::plate_text::clean_text;
use super::region_area;
use super::screen::KeyCommand;
use super::screen::Screen;
use super::screen::Window;
use super::session::PlateSession;
use super::snapshot::SnapshotSink;
use super::FrameSource;
use super::PlateDetector;
use super::TextRecognizer;
use crate::config::ReaderConfig;
use crate::error::PlateError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct LoopSettings {
    pub min_area: i64,
    pub key_delay: Duration,
    pub banner_delay: Duration,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self::from(&ReaderConfig::default())
    }
}

impl From<&ReaderConfig> for LoopSettings {
    fn from(config: &ReaderConfig) -> Self {
        Self {
            min_area: config.min_area,
            key_delay: config.key_delay(),
            banner_delay: config.banner_delay(),
        }
    }
}

pub struct FrameLoop<F, D, R, S, K, W>
where
    W: Write,
{
    source: F,
    detector: D,
    recognizer: R,
    screen: S,
    snapshots: K,
    plate_log: PlateLog<W>,
    settings: LoopSettings,
    session: PlateSession,
    state: LoopState,
}

impl<F, D, R, S, K, W> FrameLoop<F, D, R, S, K, W>
where
    F: FrameSource,
    D: PlateDetector,
    R: TextRecognizer,
    S: Screen,
    K: SnapshotSink,
    W: Write,
{
    pub fn new(
        source: F,
        detector: D,
        recognizer: R,
        screen: S,
        snapshots: K,
        plate_log: PlateLog<W>,
        settings: LoopSettings,
    ) -> Self {
        Self {
            source,
            detector,
            recognizer,
            screen,
            snapshots,
            plate_log,
            settings,
            session: PlateSession::default(),
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &PlateSession {
        &self.session
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub fn snapshots(&self) -> &K {
        &self.snapshots
    }

    pub fn plate_log(&self) -> &PlateLog<W> {
        &self.plate_log
    }

    /// Steps until the quit key is pressed.
    pub fn run(&mut self) -> Result<(), PlateError> {
        while self.step()? == LoopState::Running {}
        Ok(())
    }

    pub fn step(&mut self) -> Result<LoopState, PlateError> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        let frame = match self.source.read_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                warn!("Cannot read from camera, trying again");
                return Ok(self.state);
            }
            Err(err) => {
                warn!("Cannot read from camera ({err}), trying again");
                return Ok(self.state);
            }
        };

        let mut grey = Mat::default();
        cvt_color(&frame, &mut grey, COLOR_BGR2GRAY, 0)?;
        let plates = self.detector.detect(&grey)?;

        let mut annotated = frame.try_clone()?;
        let mut last_crop = None;
        for plate in plates {
            if region_area(&plate) <= self.settings.min_area {
                continue;
            }
            draw_plate_marker(&mut annotated, plate)?;
            last_crop = Some(self.read_plate(&frame, plate)?);
        }

        self.screen.show(Window::Result, &annotated)?;

        match self.screen.poll_key(self.settings.key_delay)? {
            Some(KeyCommand::Save) => self.save_snapshot(&mut annotated, last_crop.as_ref())?,
            Some(KeyCommand::Quit) => {
                info!("Quit requested");
                self.state = LoopState::Stopped;
            }
            None => {}
        }

        Ok(self.state)
    }

    /// OCRs one region, logs it when it is a new plate and previews the crop.
    fn read_plate(&mut self, frame: &Mat, plate: Rect) -> Result<Mat, PlateError> {
        let crop = frame.apply_1(plate)?.try_clone()?;
        let mut crop_grey = Mat::default();
        cvt_color(&crop, &mut crop_grey, COLOR_BGR2GRAY, 0)?;

        let raw = match self.recognizer.recognize(&crop_grey) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("OCR failed on {plate:?}: {err}");
                String::new()
            }
        };
        let text = clean_text(&raw);
        debug!("OCR {:?} -> {:?} at {:?}", raw.trim(), text, plate);

        if self.session.is_new_plate(&text) {
            info!("Plate detected: {text}");
            self.plate_log.record(&text)?;
            self.session.remember(&text);
        }

        self.screen.show(Window::Roi, &crop)?;
        Ok(crop)
    }

    fn save_snapshot(&mut self, annotated: &mut Mat, crop: Option<&Mat>) -> Result<(), PlateError> {
        let Some(crop) = crop else {
            warn!("No plate in this frame, nothing to save");
            return Ok(());
        };

        let path = self.snapshots.save(self.session.saved(), crop)?;
        info!("Plate saved to {}", path.display());

        draw_saved_banner(annotated)?;
        self.screen.show(Window::Result, annotated)?;
        self.screen.hold(self.settings.banner_delay)?;
        self.session.mark_saved();
        Ok(())
    }
}
