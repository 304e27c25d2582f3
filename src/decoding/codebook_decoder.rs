use super::errors::DecodeError;
use crate::trie::{Codebook, ROOT};
use alloc::vec::Vec;
use core::iter::FusedIterator;

/// Walks a [`Codebook`] one character at a time and emits a token for every completed code.
///
/// The decoder owns nothing but its cursor, so any number of them can share one codebook.
/// After an error the decoder should be discarded or [`reset`](CodebookDecoder::reset).
pub struct CodebookDecoder<'cb> {
    codebook: &'cb Codebook,
    cursor: usize,
    /// bits consumed since the cursor last left the root
    depth: usize,
    chars_consumed: usize,
}

impl<'cb> CodebookDecoder<'cb> {
    pub fn new(codebook: &'cb Codebook) -> CodebookDecoder<'cb> {
        CodebookDecoder {
            codebook,
            cursor: ROOT,
            depth: 0,
            chars_consumed: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cursor = ROOT;
        self.depth = 0;
        self.chars_consumed = 0;
    }

    /// True if the decoder is between two codes, which is the only valid place for the stream to end.
    pub fn is_at_root(&self) -> bool {
        self.cursor == ROOT
    }

    /// Number of characters fed into the decoder so far, whitespace included.
    pub fn chars_consumed(&self) -> usize {
        self.chars_consumed
    }

    /// Feeds one character into the decoder.
    ///
    /// Whitespace is skipped, `'0'` and `'1'` advance the cursor, anything else is an error.
    /// Returns the token if this character completed a code.
    pub fn decode_char(&mut self, c: char) -> Result<Option<&'cb str>, DecodeError> {
        use DecodeError as err;

        let offset = self.chars_consumed;
        self.chars_consumed += 1;

        let slot = match c {
            '0' => 0,
            '1' => 1,
            // '0' and '1' are matched first, so they can never be skipped as whitespace
            c if crate::is_c_space(c) => return Ok(None),
            got => return Err(err::NonBinaryCharacter { got, offset }),
        };

        let next = self.codebook.node(self.cursor).children[slot]
            .ok_or(err::BrokenTraversal { offset })?;
        let node = self.codebook.node(next);

        if !node.is_leaf() {
            self.cursor = next;
            self.depth += 1;
            return Ok(None);
        }

        let token = node
            .token
            .as_deref()
            .ok_or(err::CorruptLeaf { offset })?;
        self.cursor = ROOT;
        self.depth = 0;
        Ok(Some(token))
    }

    /// Checks that the stream did not end in the middle of a code.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.is_at_root() {
            Ok(())
        } else {
            Err(DecodeError::TruncatedStream {
                pending_bits: self.depth,
            })
        }
    }
}

/// Lazy sequence of decoded tokens, returned by [`Codebook::decode_chars`].
///
/// Yields every token as soon as its last bit was read. The first error is yielded once and
/// ends the sequence. Tokens yielded before it stay valid.
pub struct DecodedTokens<'cb, I> {
    decoder: CodebookDecoder<'cb>,
    chars: I,
    done: bool,
}

impl<'cb, I: Iterator<Item = char>> Iterator for DecodedTokens<'cb, I> {
    type Item = Result<&'cb str, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for c in self.chars.by_ref() {
            match self.decoder.decode_char(c) {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        self.done = true;
        self.decoder.finish().err().map(Err)
    }
}

impl<'cb, I: Iterator<Item = char>> FusedIterator for DecodedTokens<'cb, I> {}

impl Codebook {
    pub fn decoder(&self) -> CodebookDecoder<'_> {
        CodebookDecoder::new(self)
    }

    /// Decodes a sequence of characters lazily, see [`DecodedTokens`].
    pub fn decode_chars<I>(&self, chars: I) -> DecodedTokens<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        DecodedTokens {
            decoder: self.decoder(),
            chars: chars.into_iter(),
            done: false,
        }
    }

    /// Decodes a whole string of bits. Stops at the first error.
    pub fn decode_str<'cb>(&'cb self, bits: &str) -> Result<Vec<&'cb str>, DecodeError> {
        self.decode_chars(bits.chars()).collect()
    }
}
