use super::errors::DecodeStreamError;
use crate::Codebook;
use std::io::{ErrorKind, Read, Write};

/// Written after every token by [`Codebook::decode_to_writer`].
pub const DEFAULT_SEPARATOR: &str = "\n";

const CHUNK_SIZE: usize = 8 * 1024;

impl Codebook {
    /// Decodes everything `source` yields and writes one token per line into `target`.
    ///
    /// See [`Codebook::decode_to_writer_with_separator`].
    pub fn decode_to_writer<R: Read, W: Write>(
        &self,
        source: R,
        target: W,
    ) -> Result<u64, DecodeStreamError> {
        self.decode_to_writer_with_separator(source, target, DEFAULT_SEPARATOR)
    }

    /// Decodes everything `source` yields in a single forward pass and writes every token,
    /// followed by `separator`, into `target`. Returns the number of tokens written.
    ///
    /// The source is read in fixed size chunks, never as a whole. Each byte is one character,
    /// so a non-ASCII byte is reported as the Latin-1 character with that value.
    ///
    /// Tokens decoded before an error have already been written and `target` is flushed
    /// either way.
    pub fn decode_to_writer_with_separator<R: Read, W: Write>(
        &self,
        mut source: R,
        mut target: W,
        separator: &str,
    ) -> Result<u64, DecodeStreamError> {
        let outcome = self.pump(&mut source, &mut target, separator);
        let flushed = target.flush();
        let tokens = outcome?;
        flushed?;
        Ok(tokens)
    }

    fn pump<R: Read, W: Write>(
        &self,
        source: &mut R,
        target: &mut W,
        separator: &str,
    ) -> Result<u64, DecodeStreamError> {
        let mut decoder = self.decoder();
        let mut chunk = [0u8; CHUNK_SIZE];
        let mut tokens_written = 0;

        loop {
            let read = match source.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &chunk[..read] {
                if let Some(token) = decoder.decode_char(char::from(byte))? {
                    target.write_all(token.as_bytes())?;
                    target.write_all(separator.as_bytes())?;
                    tokens_written += 1;
                }
            }
        }

        decoder.finish()?;
        vprintln!(
            "Decoded {} tokens from {} characters",
            tokens_written,
            decoder.chars_consumed()
        );
        Ok(tokens_written)
    }
}
