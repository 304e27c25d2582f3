//! Decoder for streams of `'0'`/`'1'` characters written with an externally
//! supplied prefix code.
//!
//! The codebook is never derived from symbol frequencies. It arrives as an
//! ordered list of `(token, code)` pairs, usually parsed from a header file with
//! [`header::parse_header`], and is validated into a [`Codebook`] trie once.
//! The trie is then immutable and can drive any number of decode passes.
//!
//! ```
//! use ruhuff::Codebook;
//!
//! let codebook = Codebook::build([("a", "0"), ("b", "10"), ("c", "11")]).unwrap();
//! let tokens = codebook.decode_str("011100").unwrap();
//! assert_eq!(tokens, ["a", "c", "b", "a"]);
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub const VERBOSE: bool = false;

macro_rules! vprintln {
    ($($x:expr),*) => {
        #[cfg(feature = "std")]
        if crate::VERBOSE {
            std::println!($($x),*);
        }
    }
}

pub mod decoding;
pub mod header;
pub mod sniff;
pub mod trie;
#[cfg(test)]
mod tests;

pub use decoding::{CodebookDecoder, DecodeError, DecodedTokens};
#[cfg(feature = "std")]
pub use decoding::DecodeStreamError;
pub use trie::{BuildError, Codebook};

/// Whitespace as the C locale classifies it: space, `\t`, `\n`, `\v`, `\f` and `\r`.
#[inline]
pub(crate) fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
