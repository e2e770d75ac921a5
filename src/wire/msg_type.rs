// ---- Record tag byte ------------------------------------------------------

use super::image_chunk::ImageChunk;
use super::ping::Ping;
use super::sensor_report::SensorReport;
use super::wire_error::WireError;

/// Leading tag of a clock-sync ping.
pub const TAG_PING: u8 = 0x00;
/// Leading tag of a sensor report.
pub const TAG_SENSOR_REPORT: u8 = 0x01;
/// Leading tag of an image chunk.
pub const TAG_IMAGE_CHUNK: u8 = 0x02;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum MsgType {
    Ping = TAG_PING,
    SensorReport = TAG_SENSOR_REPORT,
    ImageChunk = TAG_IMAGE_CHUNK,
}

impl MsgType {
    pub fn from_u8(v: u8) -> Result<MsgType, WireError> {
        match v {
            TAG_PING => Ok(MsgType::Ping),
            TAG_SENSOR_REPORT => Ok(MsgType::SensorReport),
            TAG_IMAGE_CHUNK => Ok(MsgType::ImageChunk),
            other => Err(WireError::UnknownMsgType(other)),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Exact frame size of the record layout this tag announces. The tag
    /// selects the layout; the length never selects the tag.
    pub fn wire_size(self) -> usize {
        match self {
            MsgType::Ping => Ping::WIRE_SIZE,
            MsgType::SensorReport => SensorReport::WIRE_SIZE,
            MsgType::ImageChunk => ImageChunk::WIRE_SIZE,
        }
    }
}

// ---- Shared record surface ------------------------------------------------

/// Encode/decode surface shared by the three wire records.
pub trait WireMessage: Sized {
    /// Append the record's complete frame (tag included) to `out`.
    fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), WireError>;

    /// Decode a complete received frame. The frame must carry this record's
    /// tag and match its fixed size exactly.
    fn decode(frame: &[u8]) -> Result<Self, WireError>;

    /// Encode the record as a standalone frame.
    fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut out = Vec::new();
        self.encode_into(&mut out)?;
        Ok(out)
    }
}
