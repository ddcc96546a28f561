//! Frame and page builders shared by the integration tests.
#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

pub const SYNC_CHAR_1: u8 = 0xB5;
pub const SYNC_CHAR_2: u8 = 0x62;

/// Calculates the 8-bit Fletcher-16 checksum used by U-Blox.
pub fn calculate_checksum(data: &[u8]) -> (u8, u8) {
    let mut ck_a: u8 = 0;
    let mut ck_b: u8 = 0;
    for byte in data {
        ck_a = ck_a.wrapping_add(*byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }
    (ck_a, ck_b)
}

pub fn ubx_frame(class: u8, msg_id: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame_core = Vec::with_capacity(payload.len() + 4);
    frame_core.push(class);
    frame_core.push(msg_id);
    frame_core
        .write_u16::<LittleEndian>(payload.len() as u16)
        .unwrap();
    frame_core.extend_from_slice(payload);

    let (ck_a, ck_b) = calculate_checksum(&frame_core);

    let mut frame = Vec::with_capacity(frame_core.len() + 4);
    frame.push(SYNC_CHAR_1);
    frame.push(SYNC_CHAR_2);
    frame.extend_from_slice(&frame_core);
    frame.push(ck_a);
    frame.push(ck_b);
    frame
}

pub fn nav_pos_llh(itow: u32, lon: i32, lat: i32, height: i32, height_msl: i32) -> Vec<u8> {
    let mut p = Vec::with_capacity(28);
    p.write_u32::<LittleEndian>(itow).unwrap();
    p.write_i32::<LittleEndian>(lon).unwrap();
    p.write_i32::<LittleEndian>(lat).unwrap();
    p.write_i32::<LittleEndian>(height).unwrap();
    p.write_i32::<LittleEndian>(height_msl).unwrap();
    p.write_u32::<LittleEndian>(1500).unwrap();
    p.write_u32::<LittleEndian>(2500).unwrap();
    ubx_frame(0x01, 0x02, &p)
}

pub fn nav_status(itow: u32, fix_type: u8) -> Vec<u8> {
    let mut p = Vec::with_capacity(16);
    p.write_u32::<LittleEndian>(itow).unwrap();
    p.push(fix_type);
    p.push(0x0d);
    p.push(0);
    p.push(0);
    p.write_u32::<LittleEndian>(30_000).unwrap();
    p.write_u32::<LittleEndian>(120_000).unwrap();
    ubx_frame(0x01, 0x03, &p)
}

pub fn nav_sol(itow: u32, week: i16, fix_type: u8, pdop: u16, num_sv: u8) -> Vec<u8> {
    let mut p = Vec::with_capacity(52);
    p.write_u32::<LittleEndian>(itow).unwrap();
    p.write_i32::<LittleEndian>(0).unwrap();
    p.write_i16::<LittleEndian>(week).unwrap();
    p.push(fix_type);
    p.push(0x0d);
    p.write_i32::<LittleEndian>(-395_861_234).unwrap();
    p.write_i32::<LittleEndian>(333_722_100).unwrap();
    p.write_i32::<LittleEndian>(370_281_500).unwrap();
    p.write_u32::<LittleEndian>(350).unwrap();
    p.write_i32::<LittleEndian>(10).unwrap();
    p.write_i32::<LittleEndian>(-20).unwrap();
    p.write_i32::<LittleEndian>(30).unwrap();
    p.write_u32::<LittleEndian>(40).unwrap();
    p.write_u16::<LittleEndian>(pdop).unwrap();
    p.push(0);
    p.push(num_sv);
    p.extend_from_slice(&[0; 4]);
    ubx_frame(0x01, 0x06, &p)
}

pub fn nav_vel_ned(itow: u32, north: i32, east: i32, down: i32) -> Vec<u8> {
    let mut p = Vec::with_capacity(36);
    p.write_u32::<LittleEndian>(itow).unwrap();
    p.write_i32::<LittleEndian>(north).unwrap();
    p.write_i32::<LittleEndian>(east).unwrap();
    p.write_i32::<LittleEndian>(down).unwrap();
    p.write_u32::<LittleEndian>(500).unwrap();
    p.write_u32::<LittleEndian>(400).unwrap();
    p.write_i32::<LittleEndian>(9_000_000).unwrap();
    p.write_u32::<LittleEndian>(50).unwrap();
    p.write_u32::<LittleEndian>(100_000).unwrap();
    ubx_frame(0x01, 0x12, &p)
}

/// Split a UBX byte stream into G page records, zero padding the last one
pub fn gps_pages(stream: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in stream.chunks(31) {
        out.push(b'G');
        out.extend_from_slice(chunk);
        out.resize(out.len() + 31 - chunk.len(), 0);
    }
    out
}

pub struct InertialRecord {
    pub inner_time: u8,
    pub gps_time: u32,
    pub accel: [u32; 3],
    pub gyro: [u32; 3],
    pub pressure: u32,
    pub temp_pressure: u32,
    pub temp_gyro: i16,
}

impl InertialRecord {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut r = Vec::with_capacity(32);
        r.push(b'A');
        r.push(self.inner_time);
        r.write_u32::<LittleEndian>(self.gps_time).unwrap();
        for v in self
            .accel
            .iter()
            .chain(self.gyro.iter())
            .chain([self.pressure, self.temp_pressure].iter())
        {
            r.write_u24::<BigEndian>(*v).unwrap();
        }
        r.write_i16::<BigEndian>(self.temp_gyro).unwrap();
        r
    }
}

pub fn magnetic_record(inner_time: u8, gps_time: u32, mag: [i16; 3]) -> Vec<u8> {
    let mut r = Vec::with_capacity(32);
    r.push(b'M');
    r.extend_from_slice(&[0, 0]);
    r.push(inner_time);
    r.write_u32::<LittleEndian>(gps_time).unwrap();
    for v in mag {
        r.write_i16::<BigEndian>(v).unwrap();
    }
    r.extend_from_slice(&[0; 18]);
    r
}

pub fn pressure_record(gps_time: u32, d1: u32, d2: u32, coefficients: [u16; 6]) -> Vec<u8> {
    let mut r = Vec::with_capacity(32);
    r.push(b'P');
    r.extend_from_slice(&[0, 0]);
    r.push(1);
    r.write_u32::<LittleEndian>(gps_time).unwrap();
    r.write_u24::<BigEndian>(d1).unwrap();
    r.write_u24::<BigEndian>(d2).unwrap();
    r.extend_from_slice(&[0; 6]);
    for c in coefficients {
        r.write_u16::<BigEndian>(c).unwrap();
    }
    r
}
