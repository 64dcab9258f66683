use std::sync::Arc;

use eframe::egui;
use tracing::warn;

use crate::host::{CONTROL_PORT, HostHandle, PortEvent};
use crate::messages;
use crate::uris::SamplerUris;

// 1024 bytes comfortably fits any realistic file path once wrapped in the
// patch:Set object; the MIDI trigger needs far less.
const OBJ_BUF_SIZE: usize = 1024;
const MIDI_BUF_SIZE: usize = 64;

pub struct SamplerApp {
    uris: Arc<SamplerUris>,
    host: HostHandle,
    sample_label: String,
    error_message: Option<String>,
}

impl SamplerApp {
    pub fn new(uris: Arc<SamplerUris>, host: HostHandle) -> Self {
        Self {
            uris,
            host,
            sample_label: "?".to_string(),
            error_message: None,
        }
    }

    fn process_host_events(&mut self) {
        while let Ok(event) = self.host.notify_rx.try_recv() {
            if event.format != self.uris.atom_event_transfer {
                warn!(format = event.format, "unknown transfer format");
                continue;
            }
            match messages::read_set_file(&self.uris, &event.buffer) {
                Some(path) => {
                    let path = path.strip_suffix(&[0]).unwrap_or(path);
                    self.sample_label = String::from_utf8_lossy(path).into_owned();
                    self.error_message = None;
                }
                None => warn!("unknown message sent to UI"),
            }
        }
    }

    fn send(&self, buffer: &[u8]) {
        let _ = self.host.control_tx.send(PortEvent {
            port: CONTROL_PORT,
            format: self.uris.atom_event_transfer,
            buffer: buffer.to_vec(),
        });
    }

    fn load_sample(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Load Sample")
            .add_filter("Audio", &["wav", "aif", "aiff", "flac"])
            .pick_file()
        else {
            return;
        };

        let mut scratch = [0u8; OBJ_BUF_SIZE];
        match messages::write_set_file(&mut scratch, &self.uris, path.to_string_lossy().as_bytes())
        {
            Ok(msg) => self.send(msg),
            Err(e) => {
                self.error_message = Some(format!("Failed to encode set-file message: {}", e));
            }
        }
    }

    fn trigger(&mut self) {
        let mut scratch = [0u8; MIDI_BUF_SIZE];
        match messages::write_trigger(&mut scratch, &self.uris) {
            Ok(msg) => self.send(msg),
            Err(e) => {
                self.error_message = Some(format!("Failed to encode trigger message: {}", e));
            }
        }
    }
}

impl eframe::App for SamplerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_host_events();

        if let Some(ref error) = self.error_message {
            egui::TopBottomPanel::top("error").show(ctx, |ui| {
                ui.colored_label(egui::Color32::RED, error);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(&self.sample_label);
                ui.add_space(12.0);

                if ui.button("Load Sample").clicked() {
                    self.load_sample();
                }

                ui.add_space(4.0);

                if ui.button("Trigger").clicked() {
                    self.trigger();
                }
            });
        });

        ctx.request_repaint();
    }
}
