pub mod atom;
pub mod host;
pub mod messages;
pub mod ui;
pub mod uris;

pub use atom::{AtomRef, AtomWriter, EncodeError, ObjectRef, PropertyRef};
pub use host::{CONTROL_PORT, HostHandle, NOTIFY_PORT, PortEvent, spawn_host};
pub use messages::{read_set_file, write_set_file, write_trigger};
pub use ui::SamplerApp;
pub use uris::{HostUriMap, SamplerUris, UriMap, Urid};
