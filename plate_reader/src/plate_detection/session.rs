use super::plate_text::has_plate_format;

/// State carried from one frame to the next: the last logged plate and the
/// number of snapshots written so far.
#[derive(Debug, Default)]
pub struct PlateSession {
    last_plate: Option<String>,
    saved: usize,
}

impl PlateSession {
    pub fn last_plate(&self) -> Option<&str> {
        self.last_plate.as_deref()
    }

    /// True when `text` is a well formed plate that differs from the last one.
    pub fn is_new_plate(&self, text: &str) -> bool {
        self.last_plate.as_deref() != Some(text) && has_plate_format(text)
    }

    pub fn remember(&mut self, text: &str) {
        self.last_plate = Some(text.to_string());
    }

    /// Index used for the next snapshot file name.
    pub fn saved(&self) -> usize {
        self.saved
    }

    pub fn mark_saved(&mut self) {
        self.saved += 1;
    }
}
