//! Conversions between the varint `long` encoding and a fixed-width 8-byte form.
//!
//! Some callers keep longs as an 8-byte little-endian two's-complement array rather than as a
//! native integer, for example because their own numeric type cannot hold the full 64-bit range.
//! `unpack_long` and `pack_long` move values between that form and the wire without going
//! through any lossy type.

use zerocopy::byteorder::{I64, LE};
use zerocopy::FromBytes;

use crate::{Tap, TapError};

impl<'a> Tap<'a> {
    /// Reads a `long` and returns it as 8 bytes, in little-endian two's-complement form.
    ///
    /// Small values are sign-extended, so `-5` unpacks to `[0xfb, 0xff, 0xff, 0xff, 0xff, 0xff,
    /// 0xff, 0xff]`. The position moves exactly as it would for [`Tap::read_long`]. On overrun,
    /// this returns 8 zero bytes.
    pub fn unpack_long(&mut self) -> [u8; 8] {
        I64::<LE>::new(self.read_long()).to_bytes()
    }

    /// Writes a `long` given as 8 bytes in little-endian two's-complement form.
    ///
    /// The value is written with the same minimal varint encoding as [`Tap::write_long`], so the
    /// position usually moves by fewer than 8 bytes.
    pub fn pack_long(&mut self, packed: &[u8; 8]) {
        self.write_long(I64::<LE>::from_bytes(*packed).get())
    }

    /// Same as [`Tap::pack_long`], but takes a slice. Fails with [`TapError::LongWidth`], without
    /// writing anything, unless the slice is exactly 8 bytes long.
    pub fn pack_long_slice(&mut self, packed: &[u8]) -> Result<(), TapError> {
        let value =
            I64::<LE>::read_from_bytes(packed).map_err(|_| TapError::LongWidth(packed.len()))?;
        self.write_long(value.get());
        Ok(())
    }
}
