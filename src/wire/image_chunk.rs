use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::codec::check_frame;
use super::constants::{CHUNK_CAPACITY, MAX_FRAME_LEN};
use super::msg_type::{MsgType, TAG_IMAGE_CHUNK, WireMessage};
use super::wire_error::WireError;

/// One fragment of an image transfer.
///
/// The image announced by a `SensorReport` is split into `chunk_count`
/// fragments of up to 240 bytes each. The wire field is a fixed 240-byte
/// buffer; only the first `chunk_len` bytes are data and the tail is
/// padding. Reassembly and sequence tracking are up to the receiving
/// application.
///
/// Layout (246 bytes):
///   [tag 0x02][node_id u8][chunk_index u16][chunk_len u16][payload 240 B]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageChunk {
    /// Sending node, 1 or 2 by convention.
    pub node_id: u8,
    /// Zero-based position in the chunk sequence.
    pub chunk_index: u16,
    /// The valid payload bytes. At most `CHUNK_CAPACITY`.
    pub payload: Vec<u8>,
}

const _: () = assert!(ImageChunk::WIRE_SIZE <= MAX_FRAME_LEN);

impl ImageChunk {
    pub const MSG_TYPE: MsgType = MsgType::ImageChunk;
    pub const WIRE_SIZE: usize = 1 + 1 + 2 + 2 + CHUNK_CAPACITY;
}

impl WireMessage for ImageChunk {
    fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), WireError> {
        if self.payload.len() > CHUNK_CAPACITY {
            return Err(WireError::ChunkTooLong(self.payload.len()));
        }
        out.write_u8(TAG_IMAGE_CHUNK)?;
        out.write_u8(self.node_id)?;
        out.write_u16::<LittleEndian>(self.chunk_index)?;
        out.write_u16::<LittleEndian>(self.payload.len() as u16)?;
        out.extend_from_slice(&self.payload);
        out.extend(std::iter::repeat(0u8).take(CHUNK_CAPACITY - self.payload.len()));
        Ok(())
    }

    fn decode(frame: &[u8]) -> Result<Self, WireError> {
        check_frame(frame, TAG_IMAGE_CHUNK, Self::WIRE_SIZE)?;
        let mut cursor = Cursor::new(&frame[1..]);
        let node_id = cursor.read_u8()?;
        let chunk_index = cursor.read_u16::<LittleEndian>()?;
        let chunk_len = cursor.read_u16::<LittleEndian>()? as usize;
        if chunk_len > CHUNK_CAPACITY {
            return Err(WireError::ChunkTooLong(chunk_len));
        }
        let mut payload = vec![0u8; chunk_len];
        cursor.read_exact(&mut payload)?;
        Ok(ImageChunk {
            node_id,
            chunk_index,
            payload,
        })
    }
}
