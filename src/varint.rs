/// Maximum number of bytes in an encoded `long`. 64 bits in 7-bit groups.
pub const MAX_VARINT_LEN: usize = 10;

const MORE: u8 = 0x80; // bit indicating there are more bytes
const MASK: u8 = 0x7f;

/// Maps a signed value to an unsigned one so that values of small magnitude, positive or
/// negative, end up close to zero: `0, -1, 1, -2, 2, ...` become `0, 1, 2, 3, 4, ...`.
#[inline(always)]
pub fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Inverts [`zigzag_encode`].
#[inline(always)]
pub fn zigzag_decode(z: u64) -> i64 {
    (z >> 1) as i64 ^ -((z & 1) as i64)
}

/// Encodes `z` as a base-128 varint into `out`, returning the number of bytes used.
pub(crate) fn encode_varint(mut z: u64, out: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut len = 0;
    loop {
        if z < u64::from(MORE) {
            out[len] = z as u8;
            return len + 1;
        }
        out[len] = (z as u8 & MASK) | MORE;
        z >>= 7;
        len += 1;
    }
}

/// Returns the length of the varint at the start of `data`, including its final byte, or `None`
/// if `data` ends before the final byte.
#[inline(always)]
pub(crate) fn varint_len(data: &[u8]) -> Option<usize> {
    data.iter().position(|&b| b & MORE == 0).map(|i| i + 1)
}

/// Decodes a complete varint, as located by [`varint_len`].
///
/// Groups past the 64th bit are ignored. Writers never produce them, but a reader has to go
/// somewhere with them.
pub(crate) fn decode_varint(data: &[u8]) -> u64 {
    let mut z: u64 = 0;
    for (i, &b) in data.iter().enumerate() {
        let shift = i * 7;
        if shift < 64 {
            z |= u64::from(b & MASK) << shift;
        }
    }
    z
}
