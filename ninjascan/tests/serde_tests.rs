#![cfg(feature = "serde")]

mod common;

use common::magnetic_record;
use ninjascan::{Calibration, GpsFix, NavStatus, Page, PageParser};

#[test]
fn calibration_from_json() {
    let mut calibration = Calibration::default();
    calibration.inertial.gyro[0].drift = 0.75;
    calibration.magnetic.mag[2].zero = -12.0;

    let json = serde_json::to_string(&calibration).unwrap();
    let loaded: Calibration = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, calibration);

    let mut parser = PageParser::new(loaded);
    parser.decode_page(&magnetic_record(0, 0, [0, 0, 0])).unwrap();
    assert!((parser.magnetic.unwrap().cal_mag[2] - 1.2).abs() < 1e-9);
}

#[test]
fn decoded_data_serializes() {
    let status = NavStatus {
        itow: 10,
        fix_type: GpsFix::Fix3D,
        ..Default::default()
    };
    let value = serde_json::to_value(status).unwrap();
    assert_eq!(value["itow"], 10);
    assert_eq!(value["fix_type"], "Fix3D");

    let page = Page::Magnetic(Default::default());
    let text = serde_json::to_string(&page).unwrap();
    assert!(text.starts_with("{\"Magnetic\""));
}
