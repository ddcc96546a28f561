use crate::{
    constants::{UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET},
    ParserError,
};

/// UBX [Fletcher-16 checksum](https://en.wikipedia.org/wiki/Fletcher%27s_checksum) calculator supporting both streaming and single-shot validation
#[derive(Default)]
pub(crate) struct UbxChecksumCalc {
    ck_a: u8,
    ck_b: u8,
}

impl UbxChecksumCalc {
    pub(crate) const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    /// Update checksum with new bytes
    pub(crate) const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub(crate) const fn update_byte(&mut self, byte: u8) {
        self.ck_a = self.ck_a.wrapping_add(byte);
        self.ck_b = self.ck_b.wrapping_add(self.ck_a);
    }

    /// Get the current checksum result
    pub(crate) const fn result(self) -> (u8, u8) {
        (self.ck_a, self.ck_b)
    }

    /// Validate checksum and return result
    pub(crate) const fn validate_result(
        self,
        received_ck_a: u8,
        received_ck_b: u8,
    ) -> Result<(), ParserError> {
        let (calculated_ck_a, calculated_ck_b) = self.result();
        if calculated_ck_a == received_ck_a && calculated_ck_b == received_ck_b {
            Ok(())
        } else {
            Err(ParserError::InvalidChecksum {
                expect: u16::from_le_bytes([received_ck_a, received_ck_b]),
                got: u16::from_le_bytes([calculated_ck_a, calculated_ck_b]),
            })
        }
    }

    /// Single-shot validation of a complete frame, sync bytes included
    pub(crate) fn validate_frame(frame: &[u8]) -> Result<(), ParserError> {
        let end = frame.len() - UBX_CHECKSUM_LEN;
        let mut calc = Self::new();
        calc.update(&frame[UBX_CLASS_OFFSET..end]);
        calc.validate_result(frame[end], frame[end + 1])
    }
}

/// Checksum over class, id, length and payload, i.e. everything between the
/// sync bytes and the checksum itself.
pub const fn ubx_checksum(data: &[u8]) -> (u8, u8) {
    let mut calc = UbxChecksumCalc::new();
    calc.update(data);
    calc.result()
}
