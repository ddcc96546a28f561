use log::{trace, warn};

use crate::{
    error::DateTimeError,
    nmea::NmeaState,
    parser::{DefaultBuffer, Parser, UnderlyingBuffer},
    ubx_packets::{NavPosLlh, NavSolution, NavStatus, NavTimeUtc, NavVelNed, UbxPacket},
};

/// Latest value of every decoded navigation message
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState {
    pub pos_llh: Option<NavPosLlh>,
    pub status: Option<NavStatus>,
    pub solution: Option<NavSolution>,
    pub vel_ned: Option<NavVelNed>,
    pub time_utc: Option<NavTimeUtc>,
    /// Rebuilt on every NAV-VELNED
    pub nmea: Option<NmeaState>,
}

impl NavigationState {
    /// Store `packet`. Returns `true` when the NMEA sentences were rebuilt.
    ///
    /// Messages that have not been received yet count as all zero, which
    /// yields the "no data" and "no time" sentences.
    pub fn apply(&mut self, packet: UbxPacket) -> Result<bool, DateTimeError> {
        match packet {
            UbxPacket::NavPosLlh(p) => self.pos_llh = Some(p),
            UbxPacket::NavStatus(p) => self.status = Some(p),
            UbxPacket::NavSolution(p) => self.solution = Some(p),
            UbxPacket::NavTimeUtc(p) => self.time_utc = Some(p),
            UbxPacket::NavVelNed(p) => {
                self.vel_ned = Some(p);
                self.nmea = Some(NmeaState::synthesize(
                    &self.pos_llh.unwrap_or_default(),
                    &self.solution.unwrap_or_default(),
                    &self.status.unwrap_or_default(),
                )?);
                return Ok(true);
            },
        }
        Ok(false)
    }
}

/// Consumer of G page payloads
pub struct GpsReceiver<T: UnderlyingBuffer = DefaultBuffer> {
    parser: Parser<T>,
    state: NavigationState,
    has_output: bool,
}

impl Default for GpsReceiver<DefaultBuffer> {
    fn default() -> Self {
        Self::new(Parser::default())
    }
}

impl<T: UnderlyingBuffer> GpsReceiver<T> {
    pub fn new(parser: Parser<T>) -> Self {
        Self {
            parser,
            state: NavigationState::default(),
            has_output: false,
        }
    }

    /// Feed raw sub-stream bytes. Returns whether new NMEA sentences came out
    /// of them, the same value [`has_output`](Self::has_output) reports until
    /// the next update.
    pub fn update(&mut self, raw: &[u8]) -> bool {
        self.has_output = false;
        for result in self.parser.consume(raw) {
            let packet = match result {
                Ok(packet) => packet,
                Err(e) => {
                    warn!("undecodable UBX frame: {e}");
                    continue;
                },
            };
            trace!("applying {:?}", packet.class_and_msg_id());
            match self.state.apply(packet) {
                Ok(rebuilt) => self.has_output |= rebuilt,
                Err(e) => warn!("cannot build NMEA time: {e}"),
            }
        }
        self.has_output
    }

    pub fn has_output(&self) -> bool {
        self.has_output
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn parser(&self) -> &Parser<T> {
        &self.parser
    }

    /// Latest GGA sentence, if a NAV-VELNED has been seen
    pub fn gpgga(&self) -> Option<&str> {
        self.state.nmea.as_ref().map(|n| n.gpgga.as_str())
    }

    /// Latest ZDA sentence, if a NAV-VELNED has been seen
    pub fn gpzda(&self) -> Option<&str> {
        self.state.nmea.as_ref().map(|n| n.gpzda.as_str())
    }
}
