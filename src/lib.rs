//! Reads and writes values in a fixed-size buffer using the Avro binary encoding rules.
//!
//! The central type is [`Tap`], a cursor over a caller-owned `&mut [u8]`. Running past the end
//! of the buffer never panics and never returns an error from the individual `read_*`, `write_*`
//! or `skip_*` calls. Instead, the cursor moves past the end and [`Tap::is_valid`] reports
//! `false`. Callers typically encode or decode a whole record and check validity once.
//!
//! # References
//! * <https://avro.apache.org/docs/1.11.1/specification/#binary-encoding>

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod compare;
mod pack;
mod reader;
mod tap;
mod varint;
mod writer;


pub use tap::{Tap, TapError};
pub use varint::{zigzag_decode, zigzag_encode, MAX_VARINT_LEN};
