//! Sensorlink defines the wire format for a two-node wireless sensor link.
//!
//! Two embedded nodes exchange fixed-layout binary records over a
//! connectionless short-range radio with a hard 250-byte frame limit.
//! Three record types exist, discriminated by the leading tag byte:
//! - `Ping`: clock synchronization, carries an ISO-8601 timestamp.
//! - `SensorReport`: a snapshot of six sensor readings plus metadata
//!   announcing an upcoming image transfer.
//! - `ImageChunk`: one fragment of the image payload.
//!
//! The crate defines layout only. Records are encoded to and decoded from
//! opaque byte buffers; the radio driver and the application layer that
//! reassembles chunk sequences live outside this crate.

/// On-wire record layouts, framing and codecs.
pub mod wire;
