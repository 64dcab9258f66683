use std::collections::HashMap;

pub type Urid = u32;

pub const ATOM_EVENT_TRANSFER: &str = "http://lv2plug.in/ns/ext/atom#eventTransfer";
pub const ATOM_BLANK: &str = "http://lv2plug.in/ns/ext/atom#Blank";
pub const ATOM_OBJECT: &str = "http://lv2plug.in/ns/ext/atom#Object";
pub const ATOM_PATH: &str = "http://lv2plug.in/ns/ext/atom#Path";
pub const ATOM_URID: &str = "http://lv2plug.in/ns/ext/atom#URID";
pub const MIDI_EVENT: &str = "http://lv2plug.in/ns/ext/midi#MidiEvent";
pub const PATCH_SET: &str = "http://lv2plug.in/ns/ext/patch#Set";
pub const PATCH_PROPERTY: &str = "http://lv2plug.in/ns/ext/patch#property";
pub const PATCH_VALUE: &str = "http://lv2plug.in/ns/ext/patch#value";
pub const SAMPLER_SAMPLE: &str = "http://lv2plug.in/plugins/eg-sampler#sample";

/// Host-provided URI to integer lookup, called once per URI at startup.
pub trait UriMap {
    fn map(&mut self, uri: &str) -> Urid;
}

#[derive(Debug, Clone)]
pub struct SamplerUris {
    pub atom_event_transfer: Urid,
    pub atom_blank: Urid,
    pub atom_object: Urid,
    pub atom_path: Urid,
    pub atom_urid: Urid,
    pub midi_event: Urid,
    pub patch_set: Urid,
    pub patch_property: Urid,
    pub patch_value: Urid,
    pub sampler_sample: Urid,
}

impl SamplerUris {
    pub fn from_map(map: &mut impl UriMap) -> Self {
        Self {
            atom_event_transfer: map.map(ATOM_EVENT_TRANSFER),
            atom_blank: map.map(ATOM_BLANK),
            atom_object: map.map(ATOM_OBJECT),
            atom_path: map.map(ATOM_PATH),
            atom_urid: map.map(ATOM_URID),
            midi_event: map.map(MIDI_EVENT),
            patch_set: map.map(PATCH_SET),
            patch_property: map.map(PATCH_PROPERTY),
            patch_value: map.map(PATCH_VALUE),
            sampler_sample: map.map(SAMPLER_SAMPLE),
        }
    }
}

/// Demo-host mapping: small sequential ids, stable per URI.
#[derive(Debug, Default)]
pub struct HostUriMap {
    ids: HashMap<String, Urid>,
}

impl HostUriMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UriMap for HostUriMap {
    fn map(&mut self, uri: &str) -> Urid {
        if let Some(&id) = self.ids.get(uri) {
            return id;
        }
        let id = self.ids.len() as Urid + 1;
        self.ids.insert(uri.to_string(), id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_distinct() {
        let mut map = HostUriMap::new();
        let uris = SamplerUris::from_map(&mut map);

        assert_eq!(map.map(MIDI_EVENT), uris.midi_event);
        assert_eq!(map.map(PATCH_SET), uris.patch_set);

        let all = [
            uris.atom_event_transfer,
            uris.atom_blank,
            uris.atom_object,
            uris.atom_path,
            uris.atom_urid,
            uris.midi_event,
            uris.patch_set,
            uris.patch_property,
            uris.patch_value,
            uris.sampler_sample,
        ];
        for (i, a) in all.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
