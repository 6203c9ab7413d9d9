// src/base62.rs - Positional Base62 encoding of integers and byte buffers

/// Character set for Base62 encoding: digits, lowercase, uppercase.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Converts a number to its base62 representation (0-9, a-z, A-Z).
///
/// Zero encodes to `"0"`.
pub fn encode_u64(mut num: u64) -> String {
    if num == 0 {
        return "0".to_string();
    }

    let mut result = Vec::new();

    while num > 0 {
        result.push(ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }

    // Remainders come out least-significant first
    result.reverse();
    String::from_utf8(result).expect("alphabet is ASCII")
}

/// Encodes a byte buffer as the base62 representation of the big-endian
/// unsigned integer it spells.
///
/// Leading zero bytes carry no numeric weight and are silently dropped, so
/// output length varies with magnitude, not byte count: a buffer starting
/// with `0x00` encodes shorter than one of the same length that does not.
/// An empty or all-zero buffer encodes to the empty string.
pub fn encode_bytes(buffer: &[u8]) -> String {
    let Some(start) = buffer.iter().position(|&b| b != 0) else {
        return String::new();
    };

    // Repeated long division of the base-256 digit string by 62, collecting
    // remainders least-significant first.
    let mut digits = buffer[start..].to_vec();
    let mut result = Vec::new();

    while !digits.is_empty() {
        let mut remainder: u32 = 0;
        let mut quotient = Vec::with_capacity(digits.len());

        for &byte in &digits {
            let acc = remainder * 256 + u32::from(byte);
            let q = (acc / 62) as u8;
            remainder = acc % 62;
            if !(quotient.is_empty() && q == 0) {
                quotient.push(q);
            }
        }

        result.push(ALPHABET[remainder as usize]);
        digits = quotient;
    }

    result.reverse();
    String::from_utf8(result).expect("alphabet is ASCII")
}

/// Returns true if every character of `s` belongs to the alphabet.
pub fn is_valid(s: &str) -> bool {
    s.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit_value(ch: u8) -> u128 {
        ALPHABET.iter().position(|&c| c == ch).expect("base62 digit") as u128
    }

    fn decode(s: &str) -> u128 {
        s.bytes().fold(0u128, |acc, ch| acc * 62 + digit_value(ch))
    }

    #[test]
    fn encodes_known_integers() {
        assert_eq!(encode_u64(0), "0");
        assert_eq!(encode_u64(1), "1");
        assert_eq!(encode_u64(10), "a");
        assert_eq!(encode_u64(35), "z");
        assert_eq!(encode_u64(36), "A");
        assert_eq!(encode_u64(61), "Z");
        assert_eq!(encode_u64(62), "10");
        assert_eq!(encode_u64(3843), "ZZ"); // 62^2 - 1
        assert_eq!(encode_u64(u64::MAX), "lYGhA16ahyf");
    }

    #[test]
    fn integer_round_trip() {
        for v in [1u64, 61, 62, 63, 999_999, 14_776_336, u64::MAX / 3, u64::MAX] {
            assert_eq!(decode(&encode_u64(v)), u128::from(v));
        }
    }

    #[test]
    fn encodes_known_buffers() {
        assert_eq!(encode_bytes(b"hello"), "7TqlfhZ");
        assert_eq!(encode_bytes(&[0xFF; 4]), "4GFfc3");
        assert_eq!(encode_bytes(&[1, 0]), "48"); // 256 = 4*62 + 8
    }

    #[test]
    fn zero_magnitude_encodes_empty() {
        assert_eq!(encode_bytes(&[]), "");
        assert_eq!(encode_bytes(&[0]), "");
        assert_eq!(encode_bytes(&[0, 0, 0]), "");
    }

    #[test]
    fn leading_zero_bytes_are_insignificant() {
        assert_eq!(encode_bytes(&[0, 0, 1]), "1");
        assert_eq!(encode_bytes(&[0, 1, 0]), encode_bytes(&[1, 0]));
        assert!(encode_bytes(&[0, 0xFF, 0xFF]).len() < encode_bytes(&[0xFF, 0xFF, 0xFF]).len());
    }

    #[test]
    fn buffer_round_trip() {
        let buffers: [&[u8]; 4] = [
            &[1],
            &[0x12, 0x34, 0x56],
            &[0xFF, 0x00, 0xFF, 0x00],
            &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C],
        ];
        for buf in buffers {
            let mut value = 0u128;
            for &b in buf {
                value = value * 256 + u128::from(b);
            }
            assert_eq!(decode(&encode_bytes(buf)), value);
        }
    }

    #[test]
    fn length_band_for_full_magnitude_buffers() {
        // With a non-zero leading byte the encoded length sits in a fixed
        // two-value band for a given byte count.
        let mut twelve = [0xA5u8; 12];
        twelve[0] = 0x01;
        assert!((15..=17).contains(&encode_bytes(&twelve).len()));
        twelve[0] = 0xFF;
        assert!((15..=17).contains(&encode_bytes(&twelve).len()));

        let mut digest = [0x5Au8; 32];
        digest[0] = 0x01;
        assert!((42..=43).contains(&encode_bytes(&digest).len()));
        digest[0] = 0xFF;
        assert!((42..=43).contains(&encode_bytes(&digest).len()));
    }

    #[test]
    fn output_uses_only_alphabet_characters() {
        assert!(is_valid(&encode_bytes(b"any old bytes \x00\x01\xFF")));
        assert!(is_valid(&encode_u64(u64::MAX)));
    }
}
