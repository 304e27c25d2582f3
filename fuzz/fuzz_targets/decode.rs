#![no_main]
use libfuzzer_sys::fuzz_target;

// header text and code stream, separated by the first NUL byte
fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|b| *b == 0).unwrap_or(data.len());
    let (header, code) = data.split_at(split);

    let Ok(header) = std::str::from_utf8(header) else {
        return;
    };
    let Ok(pairs) = ruhuff::header::parse_header(header) else {
        return;
    };
    if let Ok(codebook) = ruhuff::Codebook::build(pairs) {
        let _ = codebook.decode_to_writer(code, std::io::sink());
    }
});
