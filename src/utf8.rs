//! UTF-8 validation tuned for predominantly 7-bit payloads.
//!
//! The built-in validator checks 16 bytes at a time for pure ASCII (all high
//! bits clear) and only decodes multi-byte sequences when that fast path
//! misses. Enabling the `simdutf` feature swaps the public entry point to the
//! `simdutf8` crate; both implement RFC 3629 exactly (no overlong forms, no
//! surrogates, nothing above U+10FFFF).

/// Returns true iff `buf` is a valid UTF-8 byte sequence.
#[inline]
pub fn is_valid_utf8(buf: &[u8]) -> bool {
    #[cfg(feature = "simdutf")]
    {
        simdutf8::basic::from_utf8(buf).is_ok()
    }

    #[cfg(not(feature = "simdutf"))]
    {
        is_valid_utf8_fallback(buf)
    }
}

#[cfg_attr(feature = "simdutf", allow(dead_code))]
fn is_valid_utf8_fallback(mut s: &[u8]) -> bool {
    while !s.is_empty() {
        if s.len() >= 16 {
            let mut lo = [0u8; 8];
            let mut hi = [0u8; 8];
            lo.copy_from_slice(&s[..8]);
            hi.copy_from_slice(&s[8..16]);
            if (u64::from_ne_bytes(lo) | u64::from_ne_bytes(hi)) & 0x8080_8080_8080_8080 == 0 {
                s = &s[16..];
                continue;
            }
        }

        while s[0] & 0x80 == 0 {
            s = &s[1..];
            if s.is_empty() {
                return true;
            }
        }

        let b0 = s[0];
        if b0 & 0x60 == 0x40 {
            // 110xxxxx 10xxxxxx
            if s.len() < 2 || s[1] & 0xc0 != 0x80 || b0 & 0xfe == 0xc0 {
                return false;
            }
            s = &s[2..];
        } else if b0 & 0xf0 == 0xe0 {
            // 1110xxxx 10xxxxxx 10xxxxxx
            if s.len() < 3
                || s[1] & 0xc0 != 0x80
                || s[2] & 0xc0 != 0x80
                || (b0 == 0xe0 && s[1] & 0xe0 == 0x80)
                || (b0 == 0xed && s[1] & 0xe0 == 0xa0)
            {
                return false;
            }
            s = &s[3..];
        } else if b0 & 0xf8 == 0xf0 {
            // 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
            if s.len() < 4
                || s[1] & 0xc0 != 0x80
                || s[2] & 0xc0 != 0x80
                || s[3] & 0xc0 != 0x80
                || (b0 == 0xf0 && s[1] & 0xf0 == 0x80)
                || (b0 == 0xf4 && s[1] > 0x8f)
                || b0 > 0xf4
            {
                return false;
            }
            s = &s[4..];
        } else {
            return false;
        }
    }
    true
}
