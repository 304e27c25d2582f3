mod random_codebooks;

use crate::{BuildError, Codebook, DecodeError};
use alloc::string::String;

#[test]
fn header_to_tokens() {
    let pairs = crate::header::parse_header("a 0\nb 10\nc 11\n").unwrap();
    let codebook = Codebook::build(pairs).unwrap();
    assert_eq!(codebook.decode_str("011100").unwrap(), ["a", "c", "b", "a"]);
}

#[test]
fn prefix_conflict_is_symmetric() {
    for pairs in [[("A", "0"), ("B", "01")], [("B", "01"), ("A", "0")]] {
        assert!(matches!(
            Codebook::build(pairs),
            Err(BuildError::PrefixConflict { .. })
        ));
    }
}

#[test]
fn failed_build_leaves_nothing_behind() {
    let first = Codebook::build([("a", "0"), ("b", "0")]);
    assert!(matches!(first, Err(BuildError::DuplicateCode { .. })));

    // a fresh build is not influenced by the failed one
    let second = Codebook::build([("b", "0"), ("c", "1")]).unwrap();
    assert_eq!(second.decode_str("01").unwrap(), ["b", "c"]);
}

#[test]
fn stream_codebook_mismatch() {
    let codebook = Codebook::build([("a", "00"), ("b", "01"), ("c", "1")]).unwrap();
    let other = Codebook::build([("x", "0"), ("y", "10")]).unwrap();

    // "11" is two tokens for the first codebook and no path at all in the second
    assert_eq!(codebook.decode_str("11").unwrap(), ["c", "c"]);
    assert_eq!(
        other.decode_str("11"),
        Err(DecodeError::BrokenTraversal { offset: 1 })
    );
}

#[test]
fn codebook_is_shared_between_decoders() {
    let codebook = Codebook::build([("a", "0"), ("b", "1")]).unwrap();
    let mut first = codebook.decoder();
    let mut second = codebook.decoder();

    assert_eq!(first.decode_char('0'), Ok(Some("a")));
    assert_eq!(second.decode_char('1'), Ok(Some("b")));
    assert_eq!(first.decode_char('1'), Ok(Some("b")));
    assert!(first.finish().is_ok());
    assert!(second.finish().is_ok());
}

#[test]
fn parallel_decode_passes() {
    let codebook = Codebook::build([("x", "0"), ("y", "10"), ("z", "11")]).unwrap();

    std::thread::scope(|scope| {
        let handles: alloc::vec::Vec<_> = (0..4)
            .map(|n| {
                let codebook = &codebook;
                scope.spawn(move || {
                    let bits: String = core::iter::repeat("0 10 11 ").take(n + 1).collect();
                    codebook.decode_str(&bits).map(|tokens| tokens.len())
                })
            })
            .collect();
        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(3 * (n + 1)));
        }
    });
}

#[test]
fn error_messages_name_the_culprit() {
    use alloc::string::ToString;

    let err = Codebook::build([("a", "0"), ("b", "0b")]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid bit 'b' in code for token: b");

    let err = Codebook::build([("a", "0")]).unwrap().decode_str("0 2").unwrap_err();
    assert!(err.to_string().contains("'2'"));
}
