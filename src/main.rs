use std::sync::Arc;

use sampad::{HostUriMap, SamplerApp, SamplerUris, spawn_host};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut map = HostUriMap::new();
    let uris = Arc::new(SamplerUris::from_map(&mut map));
    let host = spawn_host(uris.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 200.0])
            .with_title("Sampad"),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "Sampad",
        options,
        Box::new(|_cc| Ok(Box::new(SamplerApp::new(uris, host)))),
    );
}
