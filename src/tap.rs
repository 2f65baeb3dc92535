use core::fmt;

/// A cursor over a fixed-size byte buffer, which reads and writes values using the Avro binary
/// encoding rules.
///
/// The buffer is borrowed from the caller and is never grown, shrunk or reallocated. Reads and
/// writes start at [`Tap::position`] and advance it by the number of bytes consumed or produced.
///
/// # Overruns
///
/// None of the `read_*`, `write_*` or `skip_*` methods fail. If an operation needs more bytes than
/// remain in the buffer, it does not touch the buffer, moves the position past the end of the
/// buffer, and (for reads) returns a default value such as `0`, `false` or an empty string.
/// [`Tap::is_valid`] then returns `false`.
///
/// Validity is computed from the position, not stored. Calling [`Tap::set_position`] with an
/// in-bounds offset makes the tap valid again, which allows optimistic decoding: try to decode a
/// value, and if the tap is no longer valid, rewind and try again with more data.
///
/// ```
/// # use avro_tap::Tap;
/// let mut buf = [0u8; 4];
/// let mut tap = Tap::new(&mut buf);
/// tap.write_long(-3);
/// tap.write_string("abc");
/// assert!(!tap.is_valid());
///
/// tap.set_position(0);
/// assert!(tap.is_valid());
/// assert_eq!(tap.read_long(), -3);
/// ```
pub struct Tap<'a> {
    pub(crate) buf: &'a mut [u8],
    pub(crate) pos: usize,
}

impl<'a> Tap<'a> {
    /// Constructor. The position starts at 0.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Creates a tap that starts at `pos`.
    pub fn with_position(buf: &'a mut [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    /// Returns `true` if no operation has run past the end of the buffer since the position was
    /// last set in bounds.
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.pos <= self.buf.len()
    }

    /// Converts [`Tap::is_valid`] into a `Result`, for callers that want to use `?` after
    /// decoding or encoding a batch of values.
    pub fn check(&self) -> Result<(), TapError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(TapError::Overrun {
                position: self.pos,
                capacity: self.buf.len(),
            })
        }
    }

    /// The current offset into the buffer. This can be greater than [`Tap::capacity`] after an
    /// overrun.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor. Any offset is accepted; offsets past the end make the tap invalid.
    #[inline(always)]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The length of the buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The number of bytes between the position and the end of the buffer. This is 0 if the tap
    /// is invalid.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Accesses the whole buffer, regardless of position.
    pub fn buffer(&self) -> &[u8] {
        &*self.buf
    }

    /// Accesses the whole buffer mutably, regardless of position.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut *self.buf
    }

    /// The bytes before the position, i.e. everything written so far when encoding from offset 0.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos.min(self.buf.len())]
    }

    /// Releases the buffer.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.buf
    }

    /// The unread part of the buffer. Empty if the tap is invalid.
    #[inline(always)]
    pub(crate) fn tail(&self) -> &[u8] {
        self.buf.get(self.pos..).unwrap_or(&[])
    }

    /// Consumes `len` bytes. On overrun, the position still moves by `len` and `None` is
    /// returned.
    #[inline(always)]
    pub(crate) fn take(&mut self, len: usize) -> Option<&[u8]> {
        let start = self.pos;
        if len > self.remaining() {
            self.overrun(len);
            return None;
        }
        self.pos = start + len;
        Some(&self.buf[start..self.pos])
    }

    /// Writes all of `bytes`, or none of them.
    #[inline(always)]
    pub(crate) fn put(&mut self, bytes: &[u8]) {
        let start = self.pos;
        if bytes.len() > self.remaining() {
            self.overrun(bytes.len());
            return;
        }
        self.pos = start + bytes.len();
        self.buf[start..self.pos].copy_from_slice(bytes);
    }

    /// Moves the position forward by `len` without looking at the data.
    #[inline(always)]
    pub(crate) fn advance(&mut self, len: usize) {
        if len > self.remaining() {
            self.overrun(len);
        } else {
            self.pos += len;
        }
    }

    /// Marks the tap invalid when the size of the value that could not be handled is unknown,
    /// such as a varint that has no final byte.
    pub(crate) fn invalidate(&mut self) {
        let past_end = self.buf.len().saturating_add(1);
        trace_overrun(self.pos, 0, self.buf.len());
        if self.pos < past_end {
            self.pos = past_end;
        }
    }

    #[cold]
    fn overrun(&mut self, needed: usize) {
        trace_overrun(self.pos, needed, self.buf.len());
        self.pos = self.pos.saturating_add(needed);
    }
}

#[inline(always)]
fn trace_overrun(position: usize, needed: usize, capacity: usize) {
    tracing::trace!(target: "avro_tap", position, needed, capacity, "tap overrun");
}

impl fmt::Debug for Tap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tap")
            .field("pos", &self.pos)
            .field("capacity", &self.buf.len())
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// Error type for the checked entry points of [`Tap`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TapError {
    /// An operation ran past the end of the buffer. Reported by [`Tap::check`].
    Overrun {
        /// The position of the tap when it was checked.
        position: usize,
        /// The length of the buffer.
        capacity: usize,
    },

    /// A packed long was not exactly 8 bytes long. Contains the length that was given.
    LongWidth(usize),
}

impl core::error::Error for TapError {}

impl fmt::Display for TapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overrun { position, capacity } => write!(
                f,
                "Ran past the end of the buffer (position {position}, capacity {capacity})"
            ),
            Self::LongWidth(len) => write!(f, "A packed long must be 8 bytes, not {len}"),
        }
    }
}
