//! # ninjascan
//!
//! Decoder for the binary stream written by NinjaScan flight data loggers.
//!
//! The stream is a run of 32-byte page records. Each record starts with a
//! header byte naming its type: inertial (`A`), magnetic (`M`), pressure (`P`),
//! human-powered aircraft (`H`), navigation (`N`) or GPS (`G`). Sensor pages are
//! decoded and calibrated into physical units. G pages carry the u-blox
//! receiver's UBX byte stream in 31-byte slices that ignore frame boundaries;
//! those slices are reassembled, the navigation messages decoded, and GGA and
//! ZDA sentences synthesized from them.
//!
//! Decoding Pages
//! ==============
//!
//! A [`PageParser`] owns the [`Calibration`] and the latest page of each type:
//! ```
//! use ninjascan::{PageParser, PAGE_SIZE};
//!
//! let mut pages = PageParser::default();
//! let mut record = [0u8; PAGE_SIZE];
//! record[0] = b'M';
//! record[9] = 100; // raw x axis, big-endian at bytes 8..10
//! assert_eq!(pages.consume(&record), 1);
//! let mag = pages.magnetic.unwrap();
//! assert_eq!(mag.mag[0], 100);
//! assert!((mag.cal_mag[0] - 10.0).abs() < 1e-9);
//! ```
//!
//! Parsing UBX
//! ===========
//!
//! The UBX synchronizer can be driven on its own. Bytes go in through
//! `consume()`, which returns an iterator over the frames completed so far:
//! ```
//! use ninjascan::Parser;
//!
//! let mut parser = Parser::default();
//! let my_raw_data = [0xb5, 0x62, 0x01]; // From a G page
//! for packet in parser.consume(&my_raw_data) {
//!     match packet {
//!         Ok(_packet) => {
//!             // A decoded navigation message
//!         },
//!         Err(_) => {
//!             // Known message with a malformed payload
//!         },
//!     }
//! }
//! ```
//!
//! no_std Support
//! ==============
//!
//! Without the `std` feature the crate only needs `alloc`, for the NMEA
//! sentences. The UBX buffer has a fixed size; pick it with
//! [`ParserBuilder::with_fixed_buffer`] or lend one with
//! [`FixedLinearBuffer`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
extern crate core;
#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    calibration::{AxisCalibration, Calibration, InertialCalibration, MagneticCalibration},
    constants::{PAGE_PAYLOAD_LEN, PAGE_SIZE, UBX_BUFFER_CAPACITY},
    error::{DateTimeError, ParserError},
    nmea::{degrees_to_nmea, nmea_checksum, NmeaState, GGA_NO_DATA, ZDA_NO_TIME},
    parser::{
        ubx_checksum, DefaultBuffer, FixedBuffer, FixedLinearBuffer, Parser, ParserBuilder,
        ParserIter, SyncState, UnderlyingBuffer,
    },
    receiver::{GpsReceiver, NavigationState},
    sylphide::{
        decode_page, ms5611_compensate, read_u24_be, FieldReader, GpsPage, HpaPage, InertialPage, MagneticPage,
        NavigationPage, Page, PageKind, PageParser, PressurePage,
    },
    ubx_packets::*,
};

pub mod calibration;
pub mod constants;
mod error;
pub mod nmea;
mod parser;
mod receiver;
pub mod sylphide;
mod ubx_packets;
