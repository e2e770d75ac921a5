mod codec;
pub mod constants;
pub mod frame;
pub mod image_chunk;
pub mod msg_type;
pub mod ping;
pub mod sensor_report;
pub mod wire_error;


pub use frame::Frame;
pub use image_chunk::ImageChunk;
pub use msg_type::{MsgType, WireMessage};
pub use ping::Ping;
pub use sensor_report::SensorReport;
pub use wire_error::WireError;
