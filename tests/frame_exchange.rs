//! Simulates one full two-node session at the byte level: the clock node
//! pings, the camera node answers with a stamped report and an image split
//! into chunks, and every frame is pushed through the tag dispatcher the way
//! a receiver would.

#![allow(clippy::unwrap_used)]

use byteorder::WriteBytesExt;
use sensorlink::wire::constants::{CHUNK_CAPACITY, MAX_FRAME_LEN, NODE_CAMERA};
use sensorlink::wire::{Frame, ImageChunk, Ping, SensorReport, WireMessage};

#[test]
fn two_node_image_session() {
    // Node 1 broadcasts its clock.
    let ping = Ping::new("2025-11-23T15:30:00Z");
    let ping_frame = ping.encode().unwrap();
    assert!(ping_frame.len() <= MAX_FRAME_LEN);

    let received_ping = match Frame::decode(&ping_frame).unwrap() {
        Frame::Ping(p) => p,
        other => panic!("expected ping, got {:?}", other.msg_type()),
    };

    // Node 2 stamps its report with the received timestamp and announces a
    // 700-byte image split into ceil(700 / 240) = 3 chunks.
    let image: Vec<u8> = (0..700u32).map(|i| (i % 251) as u8).collect();
    let chunk_count = image.len().div_ceil(CHUNK_CAPACITY);

    let report = SensorReport {
        node_id: NODE_CAMERA,
        timestamp: received_ping.timestamp.clone(),
        temperature: 18.2,
        soil_humidity: 37.5,
        ambient_humidity: 61.0,
        light: 803.0,
        motion: false,
        camera_active: true,
        image_len: image.len() as u32,
        chunk_count: chunk_count as u16,
    };

    let mut frames = vec![report.encode().unwrap()];
    for (index, part) in image.chunks(CHUNK_CAPACITY).enumerate() {
        let chunk = ImageChunk {
            node_id: NODE_CAMERA,
            chunk_index: index as u16,
            payload: part.to_vec(),
        };
        frames.push(chunk.encode().unwrap());
    }

    // Node 1 receives the frames and reassembles the image, tracking the
    // chunk sequence against the report's declared totals.
    let mut announced: Option<SensorReport> = None;
    let mut image_back = Vec::new();
    let mut next_index = 0u16;
    for raw in &frames {
        assert!(raw.len() <= MAX_FRAME_LEN);
        match Frame::decode(raw).unwrap() {
            Frame::SensorReport(r) => announced = Some(r),
            Frame::ImageChunk(c) => {
                assert_eq!(c.chunk_index, next_index);
                next_index += 1;
                image_back.extend_from_slice(&c.payload);
            }
            Frame::Ping(_) => panic!("node 2 does not ping"),
        }
    }

    let announced = announced.unwrap();
    assert_eq!(announced.node_id, NODE_CAMERA);
    assert_eq!(announced.timestamp, "2025-11-23T15:30:00Z");
    assert_eq!(usize::from(announced.chunk_count), frames.len() - 1);
    assert_eq!(image_back.len(), announced.image_len as usize);
    assert_eq!(image_back, image);
}

#[test]
fn hand_built_ping_frame_decodes() {
    let mut frame = Vec::new();
    frame.write_u8(0x00).unwrap();
    frame.extend_from_slice(b"2025-11-23T15:30:00Z");
    frame.extend_from_slice(&[0u8; 5]);
    assert_eq!(frame.len(), Ping::WIRE_SIZE);

    let ping = Ping::decode(&frame).unwrap();
    assert_eq!(ping.timestamp, "2025-11-23T15:30:00Z");
}

#[test]
fn hand_built_chunk_with_garbage_tail_decodes_clean() {
    let mut frame = Vec::new();
    frame.write_u8(0x02).unwrap();
    frame.write_u8(NODE_CAMERA).unwrap();
    frame.extend_from_slice(&2u16.to_le_bytes());
    frame.extend_from_slice(&4u16.to_le_bytes());
    frame.extend_from_slice(b"data");
    // Unused buffer tail is unspecified on the wire; fill it with noise.
    frame.extend(std::iter::repeat(0x5A).take(CHUNK_CAPACITY - 4));
    assert_eq!(frame.len(), ImageChunk::WIRE_SIZE);

    let chunk = ImageChunk::decode(&frame).unwrap();
    assert_eq!(chunk.chunk_index, 2);
    assert_eq!(chunk.payload, b"data");
}
