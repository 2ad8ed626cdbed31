//! Close-frame codec: the 2-byte big-endian status code plus optional UTF-8
//! reason, with the RFC 6455 reserved-range policy.

use crate::net::cond_byte_swap;
use crate::utf8::is_valid_utf8;
use crate::ERR_INVALID_CLOSE_PAYLOAD;

/// A decoded close payload.
///
/// `message` is `None` only for the synthetic [`CloseFrame::NO_STATUS`]
/// result; an empty reason decodes as `Some(&[])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseFrame<'a> {
    /// Close status code, possibly one of the synthetic sentinels.
    pub code: u16,
    /// Reason bytes following the code.
    pub message: Option<&'a [u8]>,
}

impl CloseFrame<'_> {
    /// Normal closure.
    pub const NORMAL: u16 = 1000;
    /// Endpoint going away.
    pub const GOING_AWAY: u16 = 1001;
    /// Protocol error.
    pub const PROTOCOL_ERROR: u16 = 1002;
    /// Synthetic: no status code present. Never valid on the wire.
    pub const NO_STATUS: u16 = 1005;
    /// Synthetic: abnormal closure. Never valid on the wire.
    pub const ABNORMAL: u16 = 1006;
    /// Message too big.
    pub const TOO_BIG: u16 = 1009;

    /// Length of the reason in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.message.map_or(0, <[u8]>::len)
    }

    /// True when no reason bytes are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// True iff `code` may appear on the wire: `[1000, 1011]` or `[4000, 4999]`,
/// excluding the reserved 1004 and the synthetic 1005/1006.
#[inline]
fn is_valid_close_code(code: u16) -> bool {
    !(code < 1000 || code > 4999 || (code > 1011 && code < 4000) || (1004..=1006).contains(&code))
}

/// Parses a close-frame payload.
///
/// A payload shorter than two bytes yields the [`CloseFrame::NO_STATUS`]
/// sentinel. A reserved code, or a reason that fails UTF-8 validation (unless
/// `skip_utf8_validation`), yields [`CloseFrame::ABNORMAL`] with
/// [`ERR_INVALID_CLOSE_PAYLOAD`] as the message.
pub fn parse_close_payload(src: &[u8], skip_utf8_validation: bool) -> CloseFrame<'_> {
    if src.len() < 2 {
        return CloseFrame {
            code: CloseFrame::NO_STATUS,
            message: None,
        };
    }

    let mut raw = [0u8; 2];
    raw.copy_from_slice(&src[..2]);
    let code = cond_byte_swap(u16::from_ne_bytes(raw));
    let message = &src[2..];

    if !is_valid_close_code(code) || (!skip_utf8_validation && !is_valid_utf8(message)) {
        return CloseFrame {
            code: CloseFrame::ABNORMAL,
            message: Some(ERR_INVALID_CLOSE_PAYLOAD.as_bytes()),
        };
    }

    CloseFrame {
        code,
        message: Some(message),
    }
}

/// Formats a close-frame payload into `dst`, returning the bytes written.
///
/// Code 0 and the synthetic 1005/1006 produce an empty payload. `dst` must
/// hold `message.len() + 2` bytes for any other code.
pub fn format_close_payload(dst: &mut [u8], code: u16, message: &[u8]) -> usize {
    if code != 0 && code != CloseFrame::NO_STATUS && code != CloseFrame::ABNORMAL {
        dst[..2].copy_from_slice(&cond_byte_swap(code).to_ne_bytes());
        dst[2..2 + message.len()].copy_from_slice(message);
        message.len() + 2
    } else {
        0
    }
}
