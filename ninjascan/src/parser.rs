//! UBX frame synchronizer for the byte stream carried in G pages.
//!
//! Bytes are appended with [`Parser::consume`] and frames are pulled out of the
//! returned iterator. The stream may start at any offset, so everything before
//! the first `0xB5 0x62` pair is thrown away and the parser keeps scanning until
//! it lines up with a frame boundary. Losing sync is never reported as an error.

mod buffer;
mod checksum;

pub use buffer::{FixedBuffer, FixedLinearBuffer, UnderlyingBuffer};
pub use checksum::ubx_checksum;
pub(crate) use checksum::UbxChecksumCalc;

use log::{debug, trace};

use crate::{
    constants::{
        UBX_BUFFER_CAPACITY, UBX_CLASS_OFFSET, UBX_HEADER_LEN, UBX_LENGTH_OFFSET,
        UBX_MIN_FRAME_LEN, UBX_MSG_ID_OFFSET, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
    },
    error::ParserError,
    ubx_packets::{match_packet, message_name, UbxPacket},
};

/// Storage used by [`Parser::default`]
pub type DefaultBuffer = FixedBuffer<UBX_BUFFER_CAPACITY>;

/// Where the synchronizer stands with respect to the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Looking for the first sync byte
    SeekHeader0,
    /// First sync byte at the buffer start, second one not confirmed yet
    SeekHeader1,
    /// A whole frame is buffered and being dispatched
    FrameReady,
    /// Positioned on a candidate frame that is not fully buffered
    AwaitMoreBytes,
}

#[derive(Debug, Clone, Copy)]
struct FrameHeader {
    class: u8,
    msg_id: u8,
    payload_len: usize,
}

impl FrameHeader {
    const fn frame_len(&self) -> usize {
        self.payload_len + UBX_MIN_FRAME_LEN
    }
}

/// Streaming UBX parser over a bounded buffer.
///
/// Once a sync candidate is found, the bytes before it are dropped, so a
/// candidate always sits at the start of the buffer.
pub struct Parser<T: UnderlyingBuffer = DefaultBuffer> {
    buf: T,
    header: Option<FrameHeader>,
    state: SyncState,
    validate_checksum: bool,
}

impl Default for Parser<DefaultBuffer> {
    fn default() -> Self {
        Self::new(DefaultBuffer::new())
    }
}

impl<T: UnderlyingBuffer> Parser<T> {
    pub fn new(underlying: T) -> Self {
        Self {
            buf: underlying,
            header: None,
            state: SyncState::SeekHeader0,
            validate_checksum: false,
        }
    }

    pub fn is_buffer_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn validates_checksum(&self) -> bool {
        self.validate_checksum
    }

    /// Forget everything buffered so far
    pub fn reset(&mut self) {
        self.buf.clear();
        self.lose_sync();
    }

    /// Append `new_data` and iterate over the frames that became complete
    pub fn consume<'a>(&'a mut self, new_data: &[u8]) -> ParserIter<'a, T> {
        self.append(new_data);
        ParserIter { parser: self }
    }

    fn append(&mut self, new_data: &[u8]) {
        let capacity = self.buf.max_capacity();
        let data = if new_data.len() > capacity {
            debug!(
                "chunk of {} bytes exceeds buffer capacity {capacity}, keeping its tail",
                new_data.len()
            );
            self.reset();
            &new_data[new_data.len() - capacity..]
        } else {
            new_data
        };

        let overflow = (self.buf.len() + data.len()).saturating_sub(capacity);
        if overflow > 0 {
            debug!("buffer full, dropping {overflow} oldest bytes");
            self.buf.drain(overflow);
            self.lose_sync();
        }
        self.buf.extend_from_slice(data);
    }

    fn lose_sync(&mut self) {
        self.header = None;
        self.state = SyncState::SeekHeader0;
    }

    fn discard(&mut self, count: usize) {
        self.buf.drain(count);
        self.lose_sync();
    }

    /// Runs the sync state machine until a frame is dispatched or more bytes
    /// are needed.
    fn next_packet(&mut self) -> Option<Result<UbxPacket, ParserError>> {
        loop {
            if self.state == SyncState::SeekHeader0 {
                match self.buf.find(UBX_SYNC_CHAR_1) {
                    Some(pos) => {
                        if pos > 0 {
                            debug!("skipping {pos} bytes before sync");
                            self.buf.drain(pos);
                        }
                        self.state = SyncState::SeekHeader1;
                    },
                    None => {
                        if !self.buf.is_empty() {
                            debug!("no sync in {} buffered bytes", self.buf.len());
                        }
                        self.buf.clear();
                        return None;
                    },
                }
            }

            if self.buf.len() < UBX_MIN_FRAME_LEN {
                self.state = SyncState::AwaitMoreBytes;
                return None;
            }

            let header = match self.header {
                Some(header) => header,
                None => match self.confirm_header() {
                    Some(header) => header,
                    None => continue,
                },
            };

            if header.frame_len() > self.buf.len() {
                self.state = SyncState::AwaitMoreBytes;
                return None;
            }

            self.state = SyncState::FrameReady;
            let frame_len = header.frame_len();
            if self.validate_checksum {
                let checked = UbxChecksumCalc::validate_frame(&self.buf[0..frame_len]);
                if let Err(e) = checked {
                    debug!(
                        "bad checksum on frame {:02x}/{:02x}",
                        header.class, header.msg_id
                    );
                    self.discard(UBX_CLASS_OFFSET);
                    return Some(Err(e));
                }
            }

            let payload = &self.buf[UBX_HEADER_LEN..UBX_HEADER_LEN + header.payload_len];
            let packet = match_packet(header.class, header.msg_id, payload);
            self.discard(frame_len);
            match packet {
                Some(packet) => {
                    trace!(
                        "frame {:02x}/{:02x}, {} bytes payload",
                        header.class,
                        header.msg_id,
                        header.payload_len
                    );
                    return Some(packet);
                },
                None => {
                    debug!(
                        "skipping {} frame {:02x}/{:02x}",
                        message_name(header.class, header.msg_id).unwrap_or("unknown"),
                        header.class,
                        header.msg_id
                    );
                },
            }
        }
    }

    /// Checks the second sync byte and the declared length of the candidate
    /// at the buffer start. Returns `None` when the candidate was dropped.
    fn confirm_header(&mut self) -> Option<FrameHeader> {
        let len = self.buf.len();
        let Some(header1) = self.buf.find_from(UBX_SYNC_CHAR_2, 1) else {
            // a trailing first sync byte may still start a frame
            if self.buf[len - 1] == UBX_SYNC_CHAR_1 {
                self.discard(len - 1);
            } else {
                self.discard(len);
            }
            return None;
        };

        if header1 != 1 {
            if self.buf[header1 - 1] == UBX_SYNC_CHAR_1 {
                self.buf.drain(header1 - 1);
            } else {
                self.discard(header1 + 1);
            }
            return None;
        }

        let payload_len = usize::from(u16::from_le_bytes([
            self.buf[UBX_LENGTH_OFFSET],
            self.buf[UBX_LENGTH_OFFSET + 1],
        ]));
        if payload_len > self.buf.max_capacity() / 2 {
            debug!("false sync, declared payload of {payload_len} bytes");
            self.discard(UBX_CLASS_OFFSET);
            return None;
        }

        let header = FrameHeader {
            class: self.buf[UBX_CLASS_OFFSET],
            msg_id: self.buf[UBX_MSG_ID_OFFSET],
            payload_len,
        };
        self.header = Some(header);
        Some(header)
    }
}

/// Iterator over the frames buffered in a [`Parser`]
pub struct ParserIter<'a, T: UnderlyingBuffer> {
    parser: &'a mut Parser<T>,
}

impl<T: UnderlyingBuffer> Iterator for ParserIter<'_, T> {
    type Item = Result<UbxPacket, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_packet()
    }
}

/// Configures a [`Parser`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserBuilder {
    validate_checksum: bool,
}

impl ParserBuilder {
    pub const fn new() -> Self {
        Self {
            validate_checksum: false,
        }
    }

    /// Report frames whose checksum does not match instead of decoding them
    pub const fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    pub fn with_fixed_buffer<const N: usize>(self) -> Parser<FixedBuffer<N>> {
        self.with_buffer(FixedBuffer::<N>::new())
    }

    pub fn with_buffer<T: UnderlyingBuffer>(self, buf: T) -> Parser<T> {
        let mut parser = Parser::new(buf);
        parser.validate_checksum = self.validate_checksum;
        parser
    }
}
