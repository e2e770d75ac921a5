use super::image_chunk::ImageChunk;
use super::msg_type::{MsgType, WireMessage};
use super::ping::Ping;
use super::sensor_report::SensorReport;
use super::wire_error::WireError;

/// The union of records that travel over the radio link.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Ping(Ping),
    SensorReport(SensorReport),
    ImageChunk(ImageChunk),
}

impl Frame {
    /// Decode one received frame, dispatching on the leading tag byte.
    ///
    /// The tag alone selects the layout; the frame length is then required
    /// to match that layout exactly, never the other way around.
    pub fn decode(buf: &[u8]) -> Result<Frame, WireError> {
        let tag = *buf.first().ok_or(WireError::Truncated)?;
        match MsgType::from_u8(tag)? {
            MsgType::Ping => Ok(Frame::Ping(Ping::decode(buf)?)),
            MsgType::SensorReport => Ok(Frame::SensorReport(SensorReport::decode(buf)?)),
            MsgType::ImageChunk => Ok(Frame::ImageChunk(ImageChunk::decode(buf)?)),
        }
    }

    /// Encode the carried record as a standalone frame.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        match self {
            Frame::Ping(ping) => ping.encode(),
            Frame::SensorReport(report) => report.encode(),
            Frame::ImageChunk(chunk) => chunk.encode(),
        }
    }

    pub fn msg_type(&self) -> MsgType {
        match self {
            Frame::Ping(_) => Ping::MSG_TYPE,
            Frame::SensorReport(_) => SensorReport::MSG_TYPE,
            Frame::ImageChunk(_) => ImageChunk::MSG_TYPE,
        }
    }
}
