//! Ordering of encoded values, without decoding them into owned values.
//!
//! Each `match_*` method reads one value from `self` and one value of the same type from `other`,
//! advancing both, and compares them. This lets callers sort or compare records that are still in
//! their binary form.

use core::cmp::Ordering;

use crate::Tap;

impl<'a> Tap<'a> {
    /// Compares two `boolean` values. `false` sorts before `true`.
    pub fn match_boolean(&mut self, other: &mut Tap<'_>) -> Ordering {
        self.read_boolean().cmp(&other.read_boolean())
    }

    /// Compares two `int` values.
    pub fn match_int(&mut self, other: &mut Tap<'_>) -> Ordering {
        self.read_int().cmp(&other.read_int())
    }

    /// Compares two `long` values.
    pub fn match_long(&mut self, other: &mut Tap<'_>) -> Ordering {
        self.read_long().cmp(&other.read_long())
    }

    /// Compares two `float` values. If either is NaN, `self` sorts after `other`.
    pub fn match_float(&mut self, other: &mut Tap<'_>) -> Ordering {
        let (a, b) = (self.read_float(), other.read_float());
        a.partial_cmp(&b).unwrap_or(Ordering::Greater)
    }

    /// Compares two `double` values. If either is NaN, `self` sorts after `other`.
    pub fn match_double(&mut self, other: &mut Tap<'_>) -> Ordering {
        let (a, b) = (self.read_double(), other.read_double());
        a.partial_cmp(&b).unwrap_or(Ordering::Greater)
    }

    /// Compares two `bytes` values byte by byte. A value that is a prefix of the other sorts
    /// first.
    pub fn match_bytes(&mut self, other: &mut Tap<'_>) -> Ordering {
        self.read_bytes_ref().cmp(other.read_bytes_ref())
    }

    /// Compares two `string` values by their UTF-8 bytes, which is also code point order.
    #[inline(always)]
    pub fn match_string(&mut self, other: &mut Tap<'_>) -> Ordering {
        self.match_bytes(other)
    }

    /// Compares two `fixed` values of `size` bytes.
    pub fn match_fixed(&mut self, other: &mut Tap<'_>, size: usize) -> Ordering {
        let a = self.take(size).unwrap_or(&[]);
        let b = other.take(size).unwrap_or(&[]);
        a.cmp(b)
    }
}
