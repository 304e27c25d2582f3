#![no_main]
use libfuzzer_sys::fuzz_target;

// every two bytes make one code: its length and its bit pattern. The token is the index.
fuzz_target!(|data: &[u8]| {
    let pairs: Vec<(String, String)> = data
        .chunks(2)
        .enumerate()
        .map(|(idx, chunk)| {
            let len = usize::from(chunk[0] % 12) + 1;
            let bits = chunk.get(1).copied().unwrap_or(0);
            let code = (0..len)
                .map(|i| if (bits >> (i % 8)) & 1 == 1 { '1' } else { '0' })
                .collect();
            (idx.to_string(), code)
        })
        .collect();

    if let Ok(codebook) = ruhuff::Codebook::build(pairs.iter().map(|(t, c)| (t, c))) {
        assert_eq!(codebook.len(), pairs.len());
        for (token, code) in codebook.entries() {
            let idx: usize = token.parse().unwrap();
            assert_eq!(pairs[idx].1, code);
            assert_eq!(codebook.decode_str(&code).unwrap(), [token]);
        }
    }
});
