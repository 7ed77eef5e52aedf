//! Drop target for staging a file by drag and drop.
//!
//! Uses egui's dropped_files functionality. The zone draws the same whether
//! or not a drag is in progress; only a completed drop changes state.

use egui::{Context, Response, Sense, Ui, Vec2};
use std::path::PathBuf;

/// Collects file drops from the window, one frame at a time.
pub struct DropZone {
    /// Paths dropped since the last take
    dropped: Vec<PathBuf>,
}

impl Default for DropZone {
    fn default() -> Self {
        Self::new()
    }
}

impl DropZone {
    pub fn new() -> Self {
        Self {
            dropped: Vec::new(),
        }
    }

    /// Capture any files dropped this frame. Call once per frame.
    pub fn update(&mut self, ctx: &Context) {
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    self.dropped.push(path.clone());
                }
            }
        });
    }

    /// First file of the pending drop payload, if any. The rest of the
    /// payload is discarded; this is a single-file uploader.
    pub fn take_first_dropped(&mut self) -> Option<PathBuf> {
        if self.dropped.is_empty() {
            return None;
        }
        let first = self.dropped.remove(0);
        self.dropped.clear();
        Some(first)
    }

    pub fn has_dropped_files(&self) -> bool {
        !self.dropped.is_empty()
    }

    /// Draw the drop zone.
    pub fn show(&mut self, ui: &mut Ui, size: Vec2) -> Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let visuals = ui.visuals().widgets.inactive;

        ui.painter().rect(rect, 8.0, visuals.bg_fill, visuals.bg_stroke);

        ui.painter().text(
            rect.center() - Vec2::new(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "Drag & drop a file here",
            egui::FontId::proportional(14.0),
            ui.visuals().text_color(),
        );
        ui.painter().text(
            rect.center() + Vec2::new(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "or click Browse below",
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );

        response
    }
}
