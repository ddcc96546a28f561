//! Page records of the logger's outer (Sylphide) stream.
//!
//! A record is [`PAGE_SIZE`] bytes: one header byte naming the page type and a
//! fixed-layout payload. Sensor samples are big-endian on the wire, the
//! timestamps and the H and N pages are little-endian.

mod gps;
mod hpa;
mod inertial;
mod magnetic;
mod navigation;
mod pressure;

pub use gps::GpsPage;
pub use hpa::HpaPage;
pub use inertial::InertialPage;
pub use magnetic::MagneticPage;
pub use navigation::NavigationPage;
pub use pressure::{ms5611_compensate, PressurePage};

use core::fmt;

use log::{trace, warn};

use crate::{
    calibration::Calibration,
    constants::{
        PAGE_HEADER_GPS, PAGE_HEADER_HPA, PAGE_HEADER_INERTIAL, PAGE_HEADER_MAGNETIC,
        PAGE_HEADER_NAVIGATION, PAGE_HEADER_PRESSURE, PAGE_PAYLOAD_LEN, PAGE_SIZE,
    },
    error::ParserError,
    parser::{DefaultBuffer, UnderlyingBuffer},
    receiver::GpsReceiver,
};

/// Cursor over a fixed-layout record.
///
/// Reads never check bounds against the layout; decoders verify the record
/// length once before reading any field.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn skip(&mut self, count: usize) {
        self.pos += count;
    }

    pub fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    pub fn u8(&mut self) -> u8 {
        let [b] = self.take::<1>();
        b
    }

    pub fn u16_be(&mut self) -> u16 {
        u16::from_be_bytes(self.take())
    }

    pub fn i16_be(&mut self) -> i16 {
        i16::from_be_bytes(self.take())
    }

    /// 24-bit sample, zero-extended
    pub fn u24_be(&mut self) -> u32 {
        read_u24_be(self.take())
    }

    pub fn u32_be(&mut self) -> u32 {
        u32::from_be_bytes(self.take())
    }

    pub fn u16_le(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    pub fn u32_le(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }
}

/// Big-endian 3-byte value in the low bytes of a `u32`. Never sign-extended.
pub const fn read_u24_be(bytes: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

pub(crate) fn check_page_len(page: &'static str, payload: &[u8]) -> Result<(), ParserError> {
    if payload.len() < PAGE_PAYLOAD_LEN {
        return Err(ParserError::InvalidPacketLen {
            packet: page,
            expect: PAGE_PAYLOAD_LEN,
            got: payload.len(),
        });
    }
    Ok(())
}

/// Page type, as named by the record's header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageKind {
    Inertial,
    Magnetic,
    Pressure,
    Hpa,
    Navigation,
    Gps,
}

impl PageKind {
    pub const fn from_header(header: u8) -> Option<Self> {
        match header {
            PAGE_HEADER_INERTIAL => Some(PageKind::Inertial),
            PAGE_HEADER_MAGNETIC => Some(PageKind::Magnetic),
            PAGE_HEADER_PRESSURE => Some(PageKind::Pressure),
            PAGE_HEADER_HPA => Some(PageKind::Hpa),
            PAGE_HEADER_NAVIGATION => Some(PageKind::Navigation),
            PAGE_HEADER_GPS => Some(PageKind::Gps),
            _ => None,
        }
    }

    pub const fn header(self) -> u8 {
        match self {
            PageKind::Inertial => PAGE_HEADER_INERTIAL,
            PageKind::Magnetic => PAGE_HEADER_MAGNETIC,
            PageKind::Pressure => PAGE_HEADER_PRESSURE,
            PageKind::Hpa => PAGE_HEADER_HPA,
            PageKind::Navigation => PAGE_HEADER_NAVIGATION,
            PageKind::Gps => PAGE_HEADER_GPS,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} page", char::from(self.header()))
    }
}

/// A decoded page record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Page {
    Inertial(InertialPage),
    Magnetic(MagneticPage),
    Pressure(PressurePage),
    Hpa(HpaPage),
    Navigation(NavigationPage),
    Gps(GpsPage),
}

impl Page {
    pub const fn kind(&self) -> PageKind {
        match self {
            Page::Inertial(_) => PageKind::Inertial,
            Page::Magnetic(_) => PageKind::Magnetic,
            Page::Pressure(_) => PageKind::Pressure,
            Page::Hpa(_) => PageKind::Hpa,
            Page::Navigation(_) => PageKind::Navigation,
            Page::Gps(_) => PageKind::Gps,
        }
    }
}

/// Decode one record, header byte included.
///
/// `Ok(None)` means the header byte is not a known page type.
pub fn decode_page(record: &[u8], calibration: &Calibration) -> Result<Option<Page>, ParserError> {
    let Some((&header, payload)) = record.split_first() else {
        return Err(ParserError::InvalidPacketLen {
            packet: "page",
            expect: PAGE_SIZE,
            got: 0,
        });
    };
    let Some(kind) = PageKind::from_header(header) else {
        return Ok(None);
    };
    let page = match kind {
        PageKind::Inertial => Page::Inertial(InertialPage::decode(payload, &calibration.inertial)?),
        PageKind::Magnetic => Page::Magnetic(MagneticPage::decode(payload, &calibration.magnetic)?),
        PageKind::Pressure => Page::Pressure(PressurePage::decode(payload)?),
        PageKind::Hpa => Page::Hpa(HpaPage::decode(payload)?),
        PageKind::Navigation => Page::Navigation(NavigationPage::decode(payload)?),
        PageKind::Gps => Page::Gps(GpsPage::decode(payload)?),
    };
    Ok(Some(page))
}

/// Dispatches page records and keeps the latest page of each type.
///
/// G pages are forwarded to a [`GpsReceiver`], which reassembles the UBX
/// stream they carry.
pub struct PageParser<T: UnderlyingBuffer = DefaultBuffer> {
    calibration: Calibration,
    pending: [u8; PAGE_SIZE],
    pending_len: usize,
    pub inertial: Option<InertialPage>,
    pub magnetic: Option<MagneticPage>,
    pub pressure: Option<PressurePage>,
    pub hpa: Option<HpaPage>,
    pub navigation: Option<NavigationPage>,
    pub gps: Option<GpsPage>,
    receiver: GpsReceiver<T>,
}

impl Default for PageParser<DefaultBuffer> {
    fn default() -> Self {
        Self::new(Calibration::default())
    }
}

impl PageParser<DefaultBuffer> {
    pub fn new(calibration: Calibration) -> Self {
        Self::with_receiver(calibration, GpsReceiver::default())
    }
}

impl<T: UnderlyingBuffer> PageParser<T> {
    pub fn with_receiver(calibration: Calibration, receiver: GpsReceiver<T>) -> Self {
        Self {
            calibration,
            pending: [0; PAGE_SIZE],
            pending_len: 0,
            inertial: None,
            magnetic: None,
            pressure: None,
            hpa: None,
            navigation: None,
            gps: None,
            receiver,
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Changes apply to every page decoded afterwards
    pub fn calibration_mut(&mut self) -> &mut Calibration {
        &mut self.calibration
    }

    pub fn receiver(&self) -> &GpsReceiver<T> {
        &self.receiver
    }

    pub fn receiver_mut(&mut self) -> &mut GpsReceiver<T> {
        &mut self.receiver
    }

    /// Decode one record and store the result.
    ///
    /// Returns the kind of page that was updated, or `None` for an unknown
    /// header byte, which is logged and otherwise ignored.
    pub fn decode_page(&mut self, record: &[u8]) -> Result<Option<PageKind>, ParserError> {
        let Some(page) = decode_page(record, &self.calibration)? else {
            warn!("unknown page header {:#04x}", record[0]);
            return Ok(None);
        };
        let kind = page.kind();
        trace!("{kind} decoded");
        match page {
            Page::Inertial(p) => self.inertial = Some(p),
            Page::Magnetic(p) => self.magnetic = Some(p),
            Page::Pressure(p) => self.pressure = Some(p),
            Page::Hpa(p) => self.hpa = Some(p),
            Page::Navigation(p) => self.navigation = Some(p),
            Page::Gps(p) => {
                self.receiver.update(&p.raw);
                self.gps = Some(p);
            },
        }
        Ok(Some(kind))
    }

    /// Feed a run of records. A record split across calls is completed by
    /// the next call. Returns the number of pages decoded.
    pub fn consume(&mut self, mut data: &[u8]) -> usize {
        let mut decoded = 0;

        if self.pending_len > 0 {
            let wanted = (PAGE_SIZE - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + wanted]
                .copy_from_slice(&data[..wanted]);
            self.pending_len += wanted;
            data = &data[wanted..];
            if self.pending_len < PAGE_SIZE {
                return 0;
            }
            let record = self.pending;
            self.pending_len = 0;
            decoded += self.decode_logged(&record);
        }

        let mut records = data.chunks_exact(PAGE_SIZE);
        for record in records.by_ref() {
            decoded += self.decode_logged(record);
        }
        let rest = records.remainder();
        self.pending[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();

        decoded
    }

    fn decode_logged(&mut self, record: &[u8]) -> usize {
        match self.decode_page(record) {
            Ok(Some(_)) => 1,
            Ok(None) => 0,
            Err(e) => {
                warn!("dropping page record: {e}");
                0
            },
        }
    }
}
