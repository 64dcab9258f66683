use super::{HEADER_SIZE, padded};
use crate::uris::Urid;

/// Borrowed view of one atom; valid only as long as the source buffer.
#[derive(Debug, Clone, Copy)]
pub struct AtomRef<'a> {
    pub ty: Urid,
    pub body: &'a [u8],
}

impl<'a> AtomRef<'a> {
    pub fn parse(buf: &'a [u8]) -> Option<Self> {
        if buf.len() < HEADER_SIZE {
            return None;
        }
        let ty = u32::from_ne_bytes(buf[0..4].try_into().ok()?);
        let size = u32::from_ne_bytes(buf[4..8].try_into().ok()?) as usize;
        let body = buf.get(HEADER_SIZE..HEADER_SIZE.checked_add(size)?)?;
        Some(Self { ty, body })
    }

    pub fn size(&self) -> usize {
        self.body.len()
    }

    pub fn as_urid(&self, urid_ty: Urid) -> Option<Urid> {
        if self.ty != urid_ty || self.body.len() != 4 {
            return None;
        }
        Some(u32::from_ne_bytes(self.body.try_into().ok()?))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectRef<'a> {
    pub id: u32,
    pub otype: Urid,
    body: &'a [u8],
}

impl<'a> ObjectRef<'a> {
    pub fn from_atom(atom: &AtomRef<'a>) -> Option<Self> {
        if atom.body.len() < 8 {
            return None;
        }
        let id = u32::from_ne_bytes(atom.body[0..4].try_into().ok()?);
        let otype = u32::from_ne_bytes(atom.body[4..8].try_into().ok()?);
        Some(Self {
            id,
            otype,
            body: &atom.body[8..],
        })
    }

    pub fn properties(&self) -> Properties<'a> {
        Properties { rest: self.body }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyRef<'a> {
    pub key: Urid,
    pub context: u32,
    pub value: AtomRef<'a>,
}

/// Iterates the key/value pairs of an object body, stepping over each value
/// atom's padding. A malformed tail ends iteration instead of panicking.
pub struct Properties<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Properties<'a> {
    type Item = PropertyRef<'a>;

    fn next(&mut self) -> Option<PropertyRef<'a>> {
        let rest = self.rest;
        if rest.len() < 8 + HEADER_SIZE {
            return None;
        }
        let key = u32::from_ne_bytes(rest[0..4].try_into().ok()?);
        let context = u32::from_ne_bytes(rest[4..8].try_into().ok()?);
        let value = AtomRef::parse(&rest[8..])?;
        let step = 8 + padded(HEADER_SIZE + value.size());
        self.rest = rest.get(step..).unwrap_or(&[]);
        Some(PropertyRef {
            key,
            context,
            value,
        })
    }
}
