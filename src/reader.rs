use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use zerocopy::byteorder::{F32, F64, LE};
use zerocopy::FromBytes;

use crate::varint::{decode_varint, varint_len, zigzag_decode};
use crate::Tap;

impl<'a> Tap<'a> {
    /// Reads a `null`. Nulls have no encoded form, so this never moves the position.
    #[inline(always)]
    pub fn read_null(&mut self) {}

    /// Skips a `null`. Does nothing.
    #[inline(always)]
    pub fn skip_null(&mut self) {}

    /// Reads a `boolean`, which is encoded as a single byte. Any nonzero byte is `true`.
    #[inline(always)]
    pub fn read_boolean(&mut self) -> bool {
        self.take(1).is_some_and(|b| b[0] != 0)
    }

    /// Skips a `boolean`.
    #[inline(always)]
    pub fn skip_boolean(&mut self) {
        self.advance(1)
    }

    /// Reads the zigzag varint at the position, without undoing the zigzag mapping.
    ///
    /// If the buffer ends before the varint does, the tap becomes invalid and this returns 0.
    fn read_varint(&mut self) -> u64 {
        let Some(len) = varint_len(self.tail()) else {
            self.invalidate();
            return 0;
        };
        let start = self.pos;
        self.pos += len;
        decode_varint(&self.buf[start..self.pos])
    }

    /// Reads a `long`, encoded as a zigzag varint.
    ///
    /// Each byte encodes 7 bits of the zigzagged value, least significant group first, and uses
    /// its high bit to indicate that more bytes follow. Returns 0 if the buffer ends before the
    /// final byte of the varint.
    #[inline(always)]
    pub fn read_long(&mut self) -> i64 {
        zigzag_decode(self.read_varint())
    }

    /// Skips a `long`. Moves over exactly as many bytes as [`Tap::read_long`] would.
    pub fn skip_long(&mut self) {
        match varint_len(self.tail()) {
            Some(len) => self.pos += len,
            None => self.invalidate(),
        }
    }

    /// Reads an `int`. This uses the same encoding as `long`; bits above the low 32 are
    /// discarded.
    #[inline(always)]
    pub fn read_int(&mut self) -> i32 {
        self.read_long() as i32
    }

    /// Skips an `int`.
    #[inline(always)]
    pub fn skip_int(&mut self) {
        self.skip_long()
    }

    /// Reads a `float` from 4 bytes in little-endian byte order.
    pub fn read_float(&mut self) -> f32 {
        self.take(4)
            .and_then(|b| F32::<LE>::read_from_bytes(b).ok())
            .map_or(0.0, |v| v.get())
    }

    /// Skips a `float`.
    #[inline(always)]
    pub fn skip_float(&mut self) {
        self.advance(4)
    }

    /// Reads a `double` from 8 bytes in little-endian byte order.
    pub fn read_double(&mut self) -> f64 {
        self.take(8)
            .and_then(|b| F64::<LE>::read_from_bytes(b).ok())
            .map_or(0.0, |v| v.get())
    }

    /// Skips a `double`.
    #[inline(always)]
    pub fn skip_double(&mut self) {
        self.advance(8)
    }

    /// Reads the length prefix of a `bytes` or `string` value.
    ///
    /// A negative length cannot be satisfied by any buffer, so it invalidates the tap and
    /// returns `None`.
    fn read_len(&mut self) -> Option<usize> {
        let len = self.read_long();
        if !self.is_valid() {
            return None;
        }
        match usize::try_from(len) {
            Ok(len) => Some(len),
            Err(_) => {
                self.invalidate();
                None
            }
        }
    }

    /// Reads a length-prefixed `bytes` value. This does not copy any data; the returned slice
    /// points into the buffer.
    ///
    /// Returns an empty slice on overrun.
    pub fn read_bytes_ref(&mut self) -> &[u8] {
        match self.read_len() {
            Some(len) => self.take(len).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Reads a length-prefixed `bytes` value and copies it out.
    pub fn read_bytes(&mut self) -> Vec<u8> {
        self.read_bytes_ref().to_vec()
    }

    /// Skips a length-prefixed `bytes` value.
    pub fn skip_bytes(&mut self) {
        if let Some(len) = self.read_len() {
            self.advance(len);
        }
    }

    /// Reads a length-prefixed `string` and returns it as `&str`, without copying.
    ///
    /// Returns `None` if the contents are not well-formed UTF-8. The contents are consumed either
    /// way, and malformed contents do not make the tap invalid. Returns `Some("")` on overrun.
    pub fn read_str_ref(&mut self) -> Option<&str> {
        core::str::from_utf8(self.read_bytes_ref()).ok()
    }

    /// Reads a length-prefixed `string`.
    ///
    /// The contents are expected to be valid UTF-8. Byte sequences that are not are replaced with
    /// the Unicode replacement character and the rest of the string is processed. Returns an
    /// empty string on overrun.
    pub fn read_string(&mut self) -> String {
        String::from_utf8_lossy(self.read_bytes_ref()).into_owned()
    }

    /// Reads a length-prefixed `string` and returns it as `bstr::BStr`, without copying and
    /// without validating the contents.
    #[cfg(feature = "bstr")]
    pub fn read_string_bstr(&mut self) -> &bstr::BStr {
        bstr::BStr::new(self.read_bytes_ref())
    }

    /// Skips a length-prefixed `string`.
    #[inline(always)]
    pub fn skip_string(&mut self) {
        self.skip_bytes()
    }

    /// Reads a `fixed` value of `size` bytes. Fixed values have no length prefix.
    ///
    /// On overrun, this returns `size` zero bytes.
    pub fn read_fixed(&mut self, size: usize) -> Vec<u8> {
        match self.take(size) {
            Some(b) => b.to_owned(),
            None => vec![0; size],
        }
    }

    /// Reads a `fixed` value whose size is `out.len()` into `out`. On overrun, `out` is zeroed.
    pub fn read_fixed_into(&mut self, out: &mut [u8]) {
        match self.take(out.len()) {
            Some(b) => out.copy_from_slice(b),
            None => out.fill(0),
        }
    }

    /// Skips a `fixed` value of `size` bytes.
    #[inline(always)]
    pub fn skip_fixed(&mut self, size: usize) {
        self.advance(size)
    }
}
