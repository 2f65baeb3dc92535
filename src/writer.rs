use zerocopy::byteorder::{F32, F64, LE};
use zerocopy::IntoBytes;

use crate::varint::{encode_varint, zigzag_encode, MAX_VARINT_LEN};
use crate::Tap;

impl<'a> Tap<'a> {
    /// Writes a `null`. Does nothing.
    #[inline(always)]
    pub fn write_null(&mut self) {}

    /// Writes a `boolean`. True is encoded as 1. False is encoded as 0.
    #[inline(always)]
    pub fn write_boolean(&mut self, value: bool) {
        self.put(&[value as u8])
    }

    /// Writes a `long` as a zigzag varint, using the fewest bytes possible.
    ///
    /// The encoded value is written in full or not at all.
    pub fn write_long(&mut self, value: i64) {
        let mut out = [0u8; MAX_VARINT_LEN];
        let len = encode_varint(zigzag_encode(value), &mut out);
        self.put(&out[..len])
    }

    /// Writes an `int`. This uses the same encoding as `long`.
    #[inline(always)]
    pub fn write_int(&mut self, value: i32) {
        self.write_long(i64::from(value))
    }

    /// Writes a `float` using its 4-byte little-endian representation.
    pub fn write_float(&mut self, value: f32) {
        self.put(F32::<LE>::new(value).as_bytes())
    }

    /// Writes a `double` using its 8-byte little-endian representation.
    pub fn write_double(&mut self, value: f64) {
        self.put(F64::<LE>::new(value).as_bytes())
    }

    /// Writes a `bytes` value: its length as a `long`, then its contents.
    pub fn write_bytes(&mut self, value: &[u8]) {
        // Slices never exceed isize::MAX bytes, so the length always fits.
        self.write_long(value.len() as i64);
        self.put(value)
    }

    /// Writes a `string`: the length of its UTF-8 form as a `long`, then the UTF-8 bytes.
    #[inline(always)]
    pub fn write_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes())
    }

    /// Writes a `fixed` value of `size` bytes, taken from the start of `value`. There is no length
    /// prefix.
    ///
    /// If `value` is shorter than `size`, the missing bytes are written as zeroes.
    pub fn write_fixed(&mut self, value: &[u8], size: usize) {
        if size > self.remaining() {
            self.advance(size);
            return;
        }
        let start = self.pos;
        self.pos += size;
        let dst = &mut self.buf[start..self.pos];
        let n = value.len().min(size);
        dst[..n].copy_from_slice(&value[..n]);
        dst[n..].fill(0);
    }

    /// Writes the first `len` bytes of `source`, with no length prefix.
    ///
    /// Either all `len` bytes are written, or the buffer is left untouched and the tap becomes
    /// invalid. The tap also becomes invalid, without writing, if `source` has fewer than `len`
    /// bytes.
    pub fn write_binary(&mut self, source: &[u8], len: usize) {
        match source.get(..len) {
            Some(bytes) => self.put(bytes),
            None => self.invalidate(),
        }
    }
}
