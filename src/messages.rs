use tracing::warn;

use crate::atom::{AtomRef, AtomWriter, EncodeError, ObjectRef};
use crate::uris::SamplerUris;

/// Full-velocity note on, the only event the trigger button sends.
pub const TRIGGER_NOTE_ON: [u8; 3] = [0x90, 0x7F, 0x7F];

pub fn write_trigger<'a>(
    buf: &'a mut [u8],
    uris: &SamplerUris,
) -> Result<&'a [u8], EncodeError> {
    let mut writer = AtomWriter::new(buf);
    writer.write_atom(uris.midi_event, &TRIGGER_NOTE_ON)?;
    Ok(writer.finish())
}

/// Builds the patch:Set object telling the plugin to load `path`. The path
/// is stored with a trailing NUL, as the plugin expects a C string.
pub fn write_set_file<'a>(
    buf: &'a mut [u8],
    uris: &SamplerUris,
    path: &[u8],
) -> Result<&'a [u8], EncodeError> {
    if path.is_empty() {
        return Err(EncodeError::EmptyPath);
    }

    let mut writer = AtomWriter::new(buf);
    let object = writer.begin_object(uris.atom_object, 0, uris.patch_set)?;

    writer.property_head(uris.patch_property)?;
    writer.urid_atom(uris.atom_urid, uris.sampler_sample)?;

    writer.property_head(uris.patch_value)?;
    writer.begin_atom(uris.atom_path, path.len() as u32 + 1)?;
    writer.raw(path)?;
    writer.raw(&[0])?;
    writer.pad()?;

    writer.end_object(object)?;
    Ok(writer.finish())
}

/// Returns the path bytes (trailing NUL included) of a set-file message, or
/// None for anything else on the channel. Other message kinds are a valid
/// "ignore" outcome, not an error.
pub fn read_set_file<'a>(uris: &SamplerUris, buf: &'a [u8]) -> Option<&'a [u8]> {
    let atom = AtomRef::parse(buf)?;
    if atom.ty != uris.atom_object && atom.ty != uris.atom_blank {
        warn!(ty = atom.ty, "ignoring atom of unrecognized type");
        return None;
    }
    let object = ObjectRef::from_atom(&atom)?;
    if object.otype != uris.patch_set {
        warn!(otype = object.otype, "ignoring object that is not a patch:Set");
        return None;
    }

    let mut is_sample = false;
    let mut value = None;
    for prop in object.properties() {
        if prop.key == uris.patch_property {
            is_sample = prop.value.as_urid(uris.atom_urid) == Some(uris.sampler_sample);
        } else if prop.key == uris.patch_value {
            value = Some(prop.value);
        }
    }

    if !is_sample {
        return None;
    }
    value.map(|v| v.body)
}
