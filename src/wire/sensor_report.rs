use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::codec::{check_frame, get_fixed_str, put_fixed_str};
use super::constants::{MAX_FRAME_LEN, TIMESTAMP_LEN};
use super::msg_type::{MsgType, TAG_SENSOR_REPORT, WireMessage};
use super::wire_error::WireError;

/// Snapshot of the six sensor readings plus image-transfer metadata.
///
/// The sensor/camera node sends this ahead of an image transfer; `image_len`
/// and `chunk_count` tell the receiver how many `ImageChunk` frames follow.
/// Semantic ranges (node id in {1, 2}, light in 0-4095) are conventions and
/// are not validated here.
///
/// Layout (51 bytes):
///   [tag 0x01][node_id u8][timestamp 25 B][temperature f32]
///   [soil_humidity f32][ambient_humidity f32][light f32]
///   [motion u8][camera_active u8][image_len u32][chunk_count u16]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorReport {
    /// Sending node, 1 or 2 by convention.
    pub node_id: u8,
    /// Timestamp copied from the most recently received `Ping`.
    pub timestamp: String,
    /// Ambient temperature, °C.
    pub temperature: f32,
    /// Soil humidity, %.
    pub soil_humidity: f32,
    /// Ambient humidity, %.
    pub ambient_humidity: f32,
    /// Raw light level, 0-4095.
    pub light: f32,
    /// PIR motion detector tripped.
    pub motion: bool,
    /// Camera is powered and an image transfer follows.
    pub camera_active: bool,
    /// Total byte length of the encoded image.
    pub image_len: u32,
    /// Number of `ImageChunk` frames the image is split into.
    pub chunk_count: u16,
}

const _: () = assert!(SensorReport::WIRE_SIZE <= MAX_FRAME_LEN);

impl SensorReport {
    pub const MSG_TYPE: MsgType = MsgType::SensorReport;
    pub const WIRE_SIZE: usize = 1 + 1 + TIMESTAMP_LEN + 4 * 4 + 1 + 1 + 4 + 2;
}

impl WireMessage for SensorReport {
    fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), WireError> {
        out.write_u8(TAG_SENSOR_REPORT)?;
        out.write_u8(self.node_id)?;
        put_fixed_str(out, &self.timestamp, TIMESTAMP_LEN)?;
        out.write_f32::<LittleEndian>(self.temperature)?;
        out.write_f32::<LittleEndian>(self.soil_humidity)?;
        out.write_f32::<LittleEndian>(self.ambient_humidity)?;
        out.write_f32::<LittleEndian>(self.light)?;
        out.write_u8(self.motion as u8)?;
        out.write_u8(self.camera_active as u8)?;
        out.write_u32::<LittleEndian>(self.image_len)?;
        out.write_u16::<LittleEndian>(self.chunk_count)?;
        Ok(())
    }

    fn decode(frame: &[u8]) -> Result<Self, WireError> {
        check_frame(frame, TAG_SENSOR_REPORT, Self::WIRE_SIZE)?;
        let mut cursor = Cursor::new(&frame[1..]);
        let node_id = cursor.read_u8()?;
        let timestamp = get_fixed_str(&mut cursor, TIMESTAMP_LEN)?;
        let temperature = cursor.read_f32::<LittleEndian>()?;
        let soil_humidity = cursor.read_f32::<LittleEndian>()?;
        let ambient_humidity = cursor.read_f32::<LittleEndian>()?;
        let light = cursor.read_f32::<LittleEndian>()?;
        let motion = cursor.read_u8()? != 0;
        let camera_active = cursor.read_u8()? != 0;
        let image_len = cursor.read_u32::<LittleEndian>()?;
        let chunk_count = cursor.read_u16::<LittleEndian>()?;
        Ok(SensorReport {
            node_id,
            timestamp,
            temperature,
            soil_humidity,
            ambient_humidity,
            light,
            motion,
            camera_active,
            image_len,
            chunk_count,
        })
    }
}
