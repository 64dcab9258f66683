use super::{ALIGN, EncodeError};
use crate::uris::Urid;

/// Bounds-checked cursor over a caller-owned scratch buffer. Every write
/// either lands completely or returns `InsufficientSpace` and the caller
/// discards the buffer contents.
pub struct AtomWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

/// Open object atom whose size field is backpatched on `end_object`.
pub struct ObjectFrame {
    size_at: usize,
    body: usize,
}

impl<'a> AtomWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    pub fn bytes_written(&self) -> usize {
        self.len
    }

    pub fn finish(self) -> &'a [u8] {
        &self.buf[..self.len]
    }

    pub fn raw(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let end = self.len + bytes.len();
        if end > self.buf.len() {
            return Err(EncodeError::InsufficientSpace {
                needed: end,
                capacity: self.buf.len(),
            });
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    fn u32(&mut self, v: u32) -> Result<(), EncodeError> {
        self.raw(&v.to_ne_bytes())
    }

    /// Zero-fill up to the next alignment boundary.
    pub fn pad(&mut self) -> Result<(), EncodeError> {
        while self.len % ALIGN != 0 {
            self.raw(&[0])?;
        }
        Ok(())
    }

    /// Header only, for payloads assembled from parts; follow with `raw`
    /// writes and a final `pad`.
    pub fn begin_atom(&mut self, ty: Urid, size: u32) -> Result<(), EncodeError> {
        self.u32(ty)?;
        self.u32(size)
    }

    pub fn write_atom(&mut self, ty: Urid, payload: &[u8]) -> Result<(), EncodeError> {
        self.begin_atom(ty, payload.len() as u32)?;
        self.raw(payload)?;
        self.pad()
    }

    pub fn urid_atom(&mut self, urid_ty: Urid, value: Urid) -> Result<(), EncodeError> {
        self.write_atom(urid_ty, &value.to_ne_bytes())
    }

    pub fn begin_object(
        &mut self,
        ty: Urid,
        id: u32,
        otype: Urid,
    ) -> Result<ObjectFrame, EncodeError> {
        self.u32(ty)?;
        let size_at = self.len;
        self.u32(0)?;
        let body = self.len;
        self.u32(id)?;
        self.u32(otype)?;
        Ok(ObjectFrame { size_at, body })
    }

    pub fn end_object(&mut self, frame: ObjectFrame) -> Result<(), EncodeError> {
        let size = (self.len - frame.body) as u32;
        self.buf[frame.size_at..frame.size_at + 4].copy_from_slice(&size.to_ne_bytes());
        self.pad()
    }

    /// Property key plus the zero context word, preceding a value atom.
    pub fn property_head(&mut self, key: Urid) -> Result<(), EncodeError> {
        self.u32(key)?;
        self.u32(0)
    }
}
