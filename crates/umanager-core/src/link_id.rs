use crate::error::CoreError;
use jiff::Timestamp;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

const LINK_ID_LEN: usize = 12;
const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Identifier of a stored link.
///
/// The 12 bytes follow the usual document-store object id layout:
///
/// | bytes  | content                                   |
/// |--------|-------------------------------------------|
/// | 0..4   | seconds since the Unix epoch, big-endian  |
/// | 4..9   | random value fixed for the process        |
/// | 9..12  | counter seeded randomly, big-endian       |
///
/// The textual form is 24 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId([u8; LINK_ID_LEN]);

impl LinkId {
    /// Generates a fresh identifier.
    ///
    /// Only storage backends should call this; identifiers are never taken
    /// from clients.
    pub fn generate() -> Self {
        Self::generate_at(Timestamp::now())
    }

    /// Generates a fresh identifier with the given creation time embedded.
    pub fn generate_at(timestamp: Timestamp) -> Self {
        let seconds = u32::try_from(timestamp.as_second()).unwrap_or(0);
        let counter = next_counter();

        let mut bytes = [0u8; LINK_ID_LEN];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process_unique());
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; LINK_ID_LEN] {
        &self.0
    }

    /// Parses the 24-character hex form. Both letter cases are accepted.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidLinkId {
            id: s.to_string(),
            reason,
        };

        if s.len() != LINK_ID_LEN * 2 {
            return Err(invalid(format!(
                "expected {} hex characters, got {}",
                LINK_ID_LEN * 2,
                s.len()
            )));
        }

        let mut bytes = [0u8; LINK_ID_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| invalid(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Returns the lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Creation second embedded in the identifier.
    pub fn timestamp(&self) -> Option<Timestamp> {
        let mut seconds = [0u8; 4];
        seconds.copy_from_slice(&self.0[0..4]);
        Timestamp::from_second(i64::from(u32::from_be_bytes(seconds))).ok()
    }
}

fn process_unique() -> &'static [u8; 5] {
    static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
    PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>)
}

fn next_counter() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));
    counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK
}

impl FromStr for LinkId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LinkId").field(&self.to_hex()).finish()
    }
}
