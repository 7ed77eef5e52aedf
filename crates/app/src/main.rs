use eframe::egui;
use parking_lot::Mutex;
use std::sync::Arc;

mod state;
pub use state::*;

mod utils;
mod widgets;

use utils::{file_type_label, human_size};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 460.0])
            .with_min_inner_size([420.0, 380.0]),
        vsync: true,
        ..Default::default()
    };
    eframe::run_native(
        "FileDrop",
        options,
        Box::new(|_cc| {
            Box::new(FileDropApp {
                state: Arc::new(Mutex::new(AppState::default())),
            })
        }),
    )
}

struct FileDropApp {
    state: Arc<Mutex<AppState>>,
}

impl eframe::App for FileDropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut s = self.state.lock();

        // Capture drops and settled uploads before drawing anything
        s.drop_zone.update(ctx);
        if let Some(path) = s.drop_zone.take_first_dropped() {
            s.select_file(path);
        }
        s.poll_upload_result();

        // Keep polling while a request is in flight
        if s.uploads_in_flight() {
            ctx.request_repaint();
        }

        let mut style = (*ctx.style()).clone();
        style.visuals.window_rounding = egui::Rounding::same(12.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.panel_fill = egui::Color32::from_rgb(250, 250, 252);
        ctx.set_style(style);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(245, 247, 250)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.heading(
                        egui::RichText::new("Upload a File")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(60, 100, 200)),
                    );
                });
                ui.add_space(12.0);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(250, 250, 252))
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let zone_width = ui.available_width().min(420.0);
                    s.drop_zone.show(ui, egui::vec2(zone_width, 120.0));

                    ui.add_space(8.0);
                    if ui.button("Browse…").clicked() {
                        s.browse();
                    }

                    if let Some(file) = s.selected.clone() {
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.label("Selected file:");
                            ui.label(egui::RichText::new(&file.name).strong());
                        });
                        let detail = match std::fs::metadata(&file.path) {
                            Ok(meta) => format!(
                                "{} · {}",
                                human_size(meta.len()),
                                file_type_label(&file.path)
                            ),
                            Err(_) => file_type_label(&file.path).to_string(),
                        };
                        ui.label(egui::RichText::new(detail).size(11.0).weak());
                    }

                    ui.add_space(12.0);
                    let upload_btn = egui::Button::new(
                        egui::RichText::new("Upload").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(70, 130, 180))
                    .rounding(egui::Rounding::same(6.0));
                    if ui.add_enabled(s.selected.is_some(), upload_btn).clicked() {
                        s.start_upload();
                    }

                    if let Some(message) = s.status.clone() {
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new(message).size(16.0));
                    }

                    if let Some(event) = s.last_event() {
                        let when = event
                            .timestamp
                            .with_timezone(&chrono::Local)
                            .format("%H:%M");
                        ui.label(
                            egui::RichText::new(format!(
                                "Last attempt: {} at {}",
                                event.file_name, when
                            ))
                            .size(10.0)
                            .weak(),
                        );
                    }
                });
            });
    }
}
