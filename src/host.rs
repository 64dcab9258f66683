use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender};
use tracing::{info, warn};

use crate::atom::AtomRef;
use crate::messages;
use crate::uris::{SamplerUris, Urid};

/// Plugin control input.
pub const CONTROL_PORT: u32 = 0;
/// Plugin notification output.
pub const NOTIFY_PORT: u32 = 1;

/// One buffer crossing the transport boundary, in either direction.
#[derive(Debug, Clone)]
pub struct PortEvent {
    pub port: u32,
    pub format: Urid,
    pub buffer: Vec<u8>,
}

pub struct HostHandle {
    pub control_tx: Sender<PortEvent>,
    pub notify_rx: Receiver<PortEvent>,
}

/// Spawns the loopback plugin side: it logs trigger events and answers
/// set-file messages with a set-file notification, the way the sampler
/// plugin notifies its UI once a sample is loaded.
pub fn spawn_host(uris: Arc<SamplerUris>) -> HostHandle {
    let (control_tx, control_rx) = crossbeam::channel::unbounded();
    let (notify_tx, notify_rx) = crossbeam::channel::unbounded();

    std::thread::spawn(move || {
        host_thread(uris, control_rx, notify_tx);
    });

    HostHandle {
        control_tx,
        notify_rx,
    }
}

fn host_thread(
    uris: Arc<SamplerUris>,
    control_rx: Receiver<PortEvent>,
    notify_tx: Sender<PortEvent>,
) {
    loop {
        match control_rx.recv() {
            Ok(event) => handle_control_event(&uris, &event, &notify_tx),
            Err(crossbeam::channel::RecvError) => break,
        }
    }
}

fn handle_control_event(uris: &SamplerUris, event: &PortEvent, notify_tx: &Sender<PortEvent>) {
    if event.format != uris.atom_event_transfer {
        warn!(format = event.format, "dropping event of unknown format");
        return;
    }

    let Some(atom) = AtomRef::parse(&event.buffer) else {
        warn!(len = event.buffer.len(), "dropping undersized atom buffer");
        return;
    };

    if atom.ty == uris.midi_event {
        if let &[status, note, velocity] = atom.body {
            info!(status, note, velocity, "midi event");
        } else {
            warn!(size = atom.body.len(), "malformed midi event");
        }
        return;
    }

    match messages::read_set_file(uris, &event.buffer) {
        Some(path) => {
            let path = path.strip_suffix(&[0]).unwrap_or(path);
            info!(path = %String::from_utf8_lossy(path), "loading sample");

            let mut scratch = [0u8; 1024];
            match messages::write_set_file(&mut scratch, uris, path) {
                Ok(msg) => {
                    let _ = notify_tx.send(PortEvent {
                        port: NOTIFY_PORT,
                        format: uris.atom_event_transfer,
                        buffer: msg.to_vec(),
                    });
                }
                Err(e) => warn!(error = %e, "failed to encode notification"),
            }
        }
        None => warn!("unknown message sent to plugin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uris::HostUriMap;
    use std::time::Duration;

    fn test_uris() -> Arc<SamplerUris> {
        Arc::new(SamplerUris::from_map(&mut HostUriMap::new()))
    }

    #[test]
    fn set_file_is_echoed_as_notification() {
        let uris = test_uris();
        let host = spawn_host(uris.clone());

        let mut buf = [0u8; 1024];
        let msg = messages::write_set_file(&mut buf, &uris, b"/tmp/kick.wav").unwrap();
        host.control_tx
            .send(PortEvent {
                port: CONTROL_PORT,
                format: uris.atom_event_transfer,
                buffer: msg.to_vec(),
            })
            .unwrap();

        let reply = host.notify_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(reply.port, NOTIFY_PORT);
        assert_eq!(reply.format, uris.atom_event_transfer);
        assert_eq!(
            messages::read_set_file(&uris, &reply.buffer).unwrap(),
            b"/tmp/kick.wav\0"
        );
    }

    #[test]
    fn unknown_format_gets_no_reply() {
        let uris = test_uris();
        let host = spawn_host(uris.clone());

        host.control_tx
            .send(PortEvent {
                port: CONTROL_PORT,
                format: 0,
                buffer: vec![0xAB; 16],
            })
            .unwrap();

        assert!(
            host.notify_rx
                .recv_timeout(Duration::from_millis(200))
                .is_err()
        );
    }

    #[test]
    fn trigger_gets_no_reply() {
        let uris = test_uris();
        let host = spawn_host(uris.clone());

        let mut buf = [0u8; 64];
        let msg = messages::write_trigger(&mut buf, &uris).unwrap();
        host.control_tx
            .send(PortEvent {
                port: CONTROL_PORT,
                format: uris.atom_event_transfer,
                buffer: msg.to_vec(),
            })
            .unwrap();

        assert!(
            host.notify_rx
                .recv_timeout(Duration::from_millis(200))
                .is_err()
        );
    }
}
