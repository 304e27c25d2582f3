//! Cheap check whether a code stream looks like a stream of bits at all, before any
//! decoding work is done. Only the first non-whitespace character is inspected.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SniffError {
    #[error("First non-whitespace character in code is not 0/1: {got:?}")]
    NotBinary { got: char },
    #[error("Code stream appears empty")]
    Empty,
    #[cfg(feature = "std")]
    #[error("Failed to read code stream")]
    Io(#[from] std::io::Error),
}

/// Checks that the first non-whitespace character is `'0'` or `'1'`.
pub fn sniff_chars<I: IntoIterator<Item = char>>(chars: I) -> Result<(), SniffError> {
    match chars.into_iter().find(|c| !crate::is_c_space(*c)) {
        Some('0' | '1') => Ok(()),
        Some(got) => Err(SniffError::NotBinary { got }),
        None => Err(SniffError::Empty),
    }
}

/// Like [`sniff_chars`], reading one byte per character from `source`.
///
/// Stops reading at the first non-whitespace byte.
#[cfg(feature = "std")]
pub fn sniff_reader<R: std::io::Read>(source: R) -> Result<(), SniffError> {
    for byte in source.bytes() {
        let c = char::from(byte?);
        if !crate::is_c_space(c) {
            return sniff_chars([c]);
        }
    }
    Err(SniffError::Empty)
}
