//! # wsframe: WebSocket framing protocol engine
//!
//! An allocation-free, byte-stream-driven parser and formatter for the
//! RFC 6455 framing layer. The engine consumes arbitrary byte chunks as they
//! arrive from a transport, reconstructs logical WebSocket messages
//! (fragmentation, masking, control frames, reserved bits), and writes framed
//! output buffers for transmission.
//!
//! ## Design
//!
//! - **Incremental**: [`FrameParser::consume`] survives any chunk boundary,
//!   including mid-header splits, buffering at most 13 header bytes between
//!   calls.
//! - **Zero allocation**: all state fits in the per-connection [`FrameParser`];
//!   payload bytes are unmasked in place inside the caller-owned buffer.
//! - **Role-monomorphized**: [`Server`] and [`Client`] select header sizes and
//!   mask handling at compile time, so the hot loop carries no role branches.
//! - **Callback-driven**: the consumer implements [`FrameHandler`]; fragments
//!   are delivered with a remaining-bytes hint instead of being buffered into
//!   whole messages.
//!
//! The HTTP upgrade handshake, permessage-deflate inflation, socket I/O, and
//! timers are deliberately out of scope; the engine exposes an RSV1 hook and
//! reports protocol violations through a single callback.
//!
//! ## Example
//!
//! Parsing a masked client frame on the server side:
//!
//! ```
//! use wsframe::{FrameHandler, FrameParser, OpCode, Role, Server, CONSUME_POST_PADDING};
//!
//! struct Collect {
//!     out: Vec<u8>,
//! }
//!
//! impl FrameHandler for Collect {
//!     fn handle_fragment(
//!         &mut self,
//!         payload: &mut [u8],
//!         _remaining: u64,
//!         _opcode: OpCode,
//!         _fin: bool,
//!         _last_in_buffer: bool,
//!     ) -> bool {
//!         self.out.extend_from_slice(payload);
//!         false
//!     }
//!
//!     fn force_close(&mut self, reason: &'static str) {
//!         panic!("protocol error: {reason}");
//!     }
//! }
//!
//! // "Hello" as a masked text frame
//! let frame = [0x81, 0x85, 0x37, 0xfa, 0x21, 0x3d, 0x7f, 0x9f, 0x4d, 0x51, 0x58];
//!
//! let pre = <Server as Role>::CONSUME_PRE_PADDING;
//! let mut buf = vec![0u8; pre + frame.len() + CONSUME_POST_PADDING];
//! buf[pre..pre + frame.len()].copy_from_slice(&frame);
//!
//! let mut parser = FrameParser::<Server>::new();
//! let mut handler = Collect { out: Vec::new() };
//! parser.consume(&mut buf, pre, frame.len(), &mut handler);
//!
//! assert_eq!(handler.out, b"Hello");
//! ```

pub mod close;
pub mod frame;
pub mod mask;
mod net;
pub mod parser;
pub mod utf8;

pub use close::{format_close_payload, parse_close_payload, CloseFrame};
pub use frame::{format_message, message_frame_size, OpCode};
pub use parser::{FrameHandler, FrameParser};
pub use utf8::is_valid_utf8;

/// Close reason for a message exceeding the configured payload limit.
pub const ERR_TOO_BIG_MESSAGE: &str = "Received too big message";
/// Close reason an external timer may use; the engine itself measures no time.
pub const ERR_WEBSOCKET_TIMEOUT: &str = "WebSocket timed out from inactivity";
/// Close reason for invalid UTF-8 in a text message, enforced by the consumer.
pub const ERR_INVALID_TEXT: &str = "Received invalid UTF-8";
/// Close reason an inflation layer may use when decompression fails or overflows.
pub const ERR_TOO_BIG_MESSAGE_INFLATION: &str =
    "Received too big message, or other inflation error";
/// Close reason carried by the sentinel [`CloseFrame`] for malformed close payloads.
pub const ERR_INVALID_CLOSE_PAYLOAD: &str = "Received invalid close payload";
/// Close reason for any framing-level protocol violation.
pub const ERR_PROTOCOL: &str = "Received invalid WebSocket frame";
/// Close reason for a transport that ended before the closing handshake.
pub const ERR_TCP_FIN: &str = "Received TCP FIN before WebSocket close frame";

/// Writable scratch bytes required after the data region passed to
/// [`FrameParser::consume`].
pub const CONSUME_POST_PADDING: usize = 4;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Server {}
    impl Sealed for super::Client {}
}

/// Endpoint role, fixed at compile time.
///
/// The role decides the header sizes of *incoming* frames (client frames carry
/// a 4-byte mask, server frames do not) and whether [`FrameParser`] unmasks
/// payloads. [`format_message`] uses the inverse sizes for outgoing frames.
pub trait Role: sealed::Sealed + 'static {
    /// True for the server end of a connection.
    const IS_SERVER: bool;
    /// Incoming header size for payloads under 126 bytes.
    const SHORT_MESSAGE_HEADER: usize;
    /// Incoming header size with a 16-bit extended length.
    const MEDIUM_MESSAGE_HEADER: usize;
    /// Incoming header size with a 64-bit extended length.
    const LONG_MESSAGE_HEADER: usize;
    /// Writable scratch bytes required before the data region passed to
    /// [`FrameParser::consume`]; holds spilled header bytes between calls.
    const CONSUME_PRE_PADDING: usize;
}

/// Server role: expects masked input, writes unmasked output.
#[derive(Debug, Clone, Copy)]
pub enum Server {}

impl Role for Server {
    const IS_SERVER: bool = true;
    const SHORT_MESSAGE_HEADER: usize = 6;
    const MEDIUM_MESSAGE_HEADER: usize = 8;
    const LONG_MESSAGE_HEADER: usize = 14;
    const CONSUME_PRE_PADDING: usize = Self::LONG_MESSAGE_HEADER - 1;
}

/// Client role: expects unmasked input, writes masked output.
#[derive(Debug, Clone, Copy)]
pub enum Client {}

impl Role for Client {
    const IS_SERVER: bool = false;
    const SHORT_MESSAGE_HEADER: usize = 2;
    const MEDIUM_MESSAGE_HEADER: usize = 4;
    const LONG_MESSAGE_HEADER: usize = 10;
    const CONSUME_PRE_PADDING: usize = Self::LONG_MESSAGE_HEADER - 1;
}
