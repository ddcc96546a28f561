// Sylphide outer protocol. Sequence number and CRC16 are not decoded.
pub const SYLPHIDE_SYNC_CHAR_1: u8 = 0xf7;
pub const SYLPHIDE_SYNC_CHAR_2: u8 = 0xe0;

/// One page record: header byte followed by a fixed-size payload
pub const PAGE_SIZE: usize = 32;
pub const PAGE_PAYLOAD_LEN: usize = PAGE_SIZE - 1;

pub const PAGE_HEADER_INERTIAL: u8 = b'A';
pub const PAGE_HEADER_MAGNETIC: u8 = b'M';
pub const PAGE_HEADER_PRESSURE: u8 = b'P';
pub const PAGE_HEADER_HPA: u8 = b'H';
pub const PAGE_HEADER_NAVIGATION: u8 = b'N';
pub const PAGE_HEADER_GPS: u8 = b'G';

pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;
pub(crate) const UBX_SYNC_SIZE: usize = 2;
pub(crate) const UBX_PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const UBX_CLASS_LEN: usize = 1;
pub(crate) const UBX_ID_LEN: usize = 1;
pub(crate) const UBX_HEADER_LEN: usize =
    UBX_SYNC_SIZE + UBX_PAYLOAD_SIZE_LEN + UBX_CLASS_LEN + UBX_ID_LEN;
pub(crate) const UBX_CHECKSUM_LEN: usize = 2;

/// Sync, id, length and checksum with an empty payload
pub const UBX_MIN_FRAME_LEN: usize = UBX_HEADER_LEN + UBX_CHECKSUM_LEN;

pub(crate) const UBX_CLASS_OFFSET: usize = 2; // After SYNC_CHAR_1, SYNC_CHAR_2
pub(crate) const UBX_MSG_ID_OFFSET: usize = 3; // After CLASS
pub(crate) const UBX_LENGTH_OFFSET: usize = 4; // After MSG_ID

/// Capacity of the rolling GPS sub-stream buffer
pub const UBX_BUFFER_CAPACITY: usize = 0x400;

pub const NMEA_SYNC_CHAR: u8 = b'$';
pub const NMEA_CHECKSUM_CHAR: u8 = b'*';
