#![no_main]

use libfuzzer_sys::fuzz_target;
use vigenere_breaker::codec::{decrypt, encrypt};
use vigenere_breaker::text::normalize;

fuzz_target!(|data: &[u8]| {
    // First line is the key, the rest is plaintext
    if let Ok(input) = std::str::from_utf8(data) {
        let (key, plain) = input.split_once('\n').unwrap_or((input, ""));
        let key = normalize(key);

        let cipher = encrypt(plain, &key);
        assert_eq!(cipher.chars().count(), plain.chars().count());
        assert_eq!(decrypt(&cipher, &key), plain.to_ascii_uppercase());
    }
});
