use std::io::Cursor;

use byteorder::WriteBytesExt;

use super::codec::{check_frame, get_fixed_str, put_fixed_str};
use super::constants::{MAX_FRAME_LEN, TIMESTAMP_LEN};
use super::msg_type::{MsgType, TAG_PING, WireMessage};
use super::wire_error::WireError;

/// Clock-sync ping.
///
/// The clock-holding node broadcasts this periodically so its peer can stamp
/// outgoing reports with an absolute time.
///
/// Layout (26 bytes):
///   [tag 0x00][timestamp: 25 B ASCII ISO-8601, NUL-padded]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ping {
    /// ISO-8601 timestamp, e.g. "2025-11-23T15:30:00Z". At most 25 bytes.
    pub timestamp: String,
}

// The transport rejects frames above MAX_FRAME_LEN; the layout must fit.
const _: () = assert!(Ping::WIRE_SIZE <= MAX_FRAME_LEN);

impl Ping {
    pub const MSG_TYPE: MsgType = MsgType::Ping;
    pub const WIRE_SIZE: usize = 1 + TIMESTAMP_LEN;

    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl WireMessage for Ping {
    fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), WireError> {
        out.write_u8(TAG_PING)?;
        put_fixed_str(out, &self.timestamp, TIMESTAMP_LEN)
    }

    fn decode(frame: &[u8]) -> Result<Self, WireError> {
        check_frame(frame, TAG_PING, Self::WIRE_SIZE)?;
        let mut cursor = Cursor::new(&frame[1..]);
        let timestamp = get_fixed_str(&mut cursor, TIMESTAMP_LEN)?;
        Ok(Ping { timestamp })
    }
}
