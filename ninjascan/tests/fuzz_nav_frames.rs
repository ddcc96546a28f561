//! Proptest strategies that bury valid NAV frames in arbitrary bytes and
//! split the result at arbitrary points.

mod common;

use byteorder::{LittleEndian, WriteBytesExt};
use common::{gps_pages, ubx_frame};
use ninjascan::{read_u24_be, PageParser, ParserBuilder, UbxPacket, PAGE_SIZE};
use proptest::prelude::*;

/// Represents the NAV-VELNED payload
#[derive(Debug, Clone)]
pub struct NavVelNedPayload {
    pub itow: u32,
    pub vel: [i32; 3],
    pub speed: u32,
    pub ground_speed: u32,
    pub heading: i32,
}

fn nav_vel_ned_strategy() -> impl Strategy<Value = (NavVelNedPayload, Vec<u8>)> {
    (
        any::<u32>(),
        any::<[i32; 3]>(),
        any::<u32>(),
        any::<u32>(),
        any::<i32>(),
    )
        .prop_map(|(itow, vel, speed, ground_speed, heading)| {
            let expected = NavVelNedPayload {
                itow,
                vel,
                speed,
                ground_speed,
                heading,
            };
            let mut payload = Vec::with_capacity(36);
            payload.write_u32::<LittleEndian>(itow).unwrap();
            for v in vel {
                payload.write_i32::<LittleEndian>(v).unwrap();
            }
            payload.write_u32::<LittleEndian>(speed).unwrap();
            payload.write_u32::<LittleEndian>(ground_speed).unwrap();
            payload.write_i32::<LittleEndian>(heading).unwrap();
            payload.write_u32::<LittleEndian>(0).unwrap();
            payload.write_u32::<LittleEndian>(0).unwrap();
            (expected, ubx_frame(0x01, 0x12, &payload))
        })
}

/// Leading noise free of the first sync byte, so no candidate can swallow
/// the real frame
fn noise_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("not a sync byte", |b| *b != 0xb5), 0..64)
}

fn check_vel(packet: &UbxPacket, expected: &NavVelNedPayload) -> Result<(), TestCaseError> {
    let UbxPacket::NavVelNed(v) = packet else {
        return Err(TestCaseError::fail(format!("unexpected packet {packet:?}")));
    };
    prop_assert_eq!(v.itow, expected.itow);
    prop_assert_eq!([v.vel_north, v.vel_east, v.vel_down], expected.vel);
    prop_assert_eq!(v.speed_3d, expected.speed);
    prop_assert_eq!(v.ground_speed, expected.ground_speed);
    prop_assert_eq!(v.heading, expected.heading);
    Ok(())
}

proptest! {
    #[test]
    fn frame_after_noise_is_found(
        noise in noise_strategy(),
        (expected, frame) in nav_vel_ned_strategy(),
    ) {
        let mut data = noise;
        data.extend_from_slice(&frame);

        let mut parser = ParserBuilder::new().with_checksum_validation(true).with_fixed_buffer::<1024>();
        let packets: Vec<_> = parser.consume(&data).collect();
        prop_assert_eq!(packets.len(), 1);
        let packet = packets[0].as_ref().unwrap();
        check_vel(packet, &expected)?;
        prop_assert!(parser.is_buffer_empty());
    }

    #[test]
    fn frame_split_anywhere(
        (expected, frame) in nav_vel_ned_strategy(),
        split in 0usize..44,
    ) {
        let mut parser = ParserBuilder::new().with_fixed_buffer::<256>();
        let first: Vec<_> = parser.consume(&frame[..split]).collect();
        prop_assert!(first.is_empty());
        let second: Vec<_> = parser.consume(&frame[split..]).collect();
        prop_assert_eq!(second.len(), 1);
        check_vel(second[0].as_ref().unwrap(), &expected)?;
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let mut parser = ParserBuilder::new().with_fixed_buffer::<128>();
        for chunk in data.chunks(31) {
            for _ in parser.consume(chunk) {}
            prop_assert!(parser.buffer_len() <= 128);
        }
    }

    #[test]
    fn frames_through_gps_pages(
        frames in prop::collection::vec(nav_vel_ned_strategy(), 1..8),
    ) {
        let stream: Vec<u8> = frames.iter().flat_map(|(_, f)| f.iter().copied()).collect();
        let pages = gps_pages(&stream);
        let mut parser = PageParser::default();
        let mut outputs = 0;
        for record in pages.chunks(PAGE_SIZE) {
            parser.decode_page(record).unwrap();
            if parser.receiver().has_output() {
                outputs += 1;
            }
        }
        // at most one output per page, at least one page saw a frame
        prop_assert!(outputs >= 1);
        let last = &frames[frames.len() - 1].0;
        let vel = parser.receiver().state().vel_ned.unwrap();
        prop_assert_eq!(vel.itow, last.itow);
    }

    #[test]
    fn u24_never_sign_extends(bytes in any::<[u8; 3]>()) {
        let v = read_u24_be(bytes);
        prop_assert!(v <= 0x00ff_ffff);
        prop_assert_eq!(v >> 16, u32::from(bytes[0]));
        prop_assert_eq!(v & 0xff, u32::from(bytes[2]));
    }
}
