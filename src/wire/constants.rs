/// Link constants and frame shape.
///
/// Every record travels as one radio frame:
///   [tag: u8][fixed-layout body...]
/// All multi-byte fields are little-endian and fields are tightly packed,
/// with no padding between or after them.
///
/// Hard payload ceiling of the radio transport, in bytes. No record layout
/// may exceed it; each record file carries a build-time assertion.
pub const MAX_FRAME_LEN: usize = 250;

/// Fixed width of the ISO-8601 timestamp field ("2025-11-23T15:30:00Z"),
/// NUL-padded when the value is shorter.
pub const TIMESTAMP_LEN: usize = 25;

/// Capacity of one image chunk payload.
pub const CHUNK_CAPACITY: usize = 240;

/// Conventional id of the clock-holding node (sends `Ping`).
pub const NODE_PRIMARY: u8 = 1;

/// Conventional id of the sensor/camera node (sends `SensorReport` and
/// `ImageChunk`). The {1, 2} domain is a convention between the two nodes,
/// not enforced on the wire.
pub const NODE_CAMERA: u8 = 2;
