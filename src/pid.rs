//! LIN 2.1 Protected Identifier computation.
//!
//! The protected identifier field (LIN 2.1, section 2.3.1.3) carries the 6-bit
//! frame identifier in bits 0-5 and two parity bits in bits 6 and 7:
//!
//! ```text
//! P0 = ID0 ^ ID1 ^ ID2 ^ ID4
//! P1 = !(ID1 ^ ID3 ^ ID4 ^ ID5)
//!
//!  7    6    5    4    3    2    1    0
//! P1   P0  ID5  ID4  ID3  ID2  ID1  ID0
//! ```

/// Largest LIN frame identifier (6 bits).
pub const MAX_ID: u8 = 0x3F;

/// Returned by [`compute_pid`] for IDs that do not fit in 6 bits.
///
/// 0xFF is not a valid PID: the PID of 0x3F is 0xBF.
pub const INVALID_PID: u8 = 0xFF;

const PARITY_MASK: u8 = 0xC0;

/// PIDs for every frame identifier, indexed by ID.
pub const REFERENCE_PID_TABLE: [u8; MAX_ID as usize + 1] = [
    0x80, 0xC1, 0x42, 0x03, 0xC4, 0x85, 0x06, 0x47, //
    0x08, 0x49, 0xCA, 0x8B, 0x4C, 0x0D, 0x8E, 0xCF, //
    0x50, 0x11, 0x92, 0xD3, 0x14, 0x55, 0xD6, 0x97, //
    0xD8, 0x99, 0x1A, 0x5B, 0x9C, 0xDD, 0x5E, 0x1F, //
    0x20, 0x61, 0xE2, 0xA3, 0x64, 0x25, 0xA6, 0xE7, //
    0xA8, 0xE9, 0x6A, 0x2B, 0xEC, 0xAD, 0x2E, 0x6F, //
    0xF0, 0xB1, 0x32, 0x73, 0xB4, 0xF5, 0x76, 0x37, //
    0x78, 0x39, 0xBA, 0xFB, 0x3C, 0x7D, 0xFE, 0xBF, //
];

/// An ID and its protected identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PidEntry {
    /// Frame identifier (0-63).
    pub id: u8,
    /// Protected identifier.
    pub pid: u8,
}

impl PidEntry {
    /// Build the entry for `id`, or `None` if it exceeds [`MAX_ID`].
    pub fn new(id: u8) -> Option<Self> {
        (id <= MAX_ID).then(|| Self {
            id,
            pid: compute_pid(id),
        })
    }
}

#[inline]
fn bit(value: u8, n: u8) -> u8 {
    (value >> n) & 0x01
}

/// Compute the protected identifier for a frame identifier.
///
/// Returns [`INVALID_PID`] when `id` is greater than [`MAX_ID`]. Range checking
/// and reporting is the caller's job; this function only refuses to produce a
/// PID for an ID it cannot encode.
///
/// # Example
///
/// ```
/// use lin_pid::{compute_pid, INVALID_PID};
///
/// assert_eq!(compute_pid(0x27), 0xE7);
/// assert_eq!(compute_pid(0x40), INVALID_PID);
/// ```
pub fn compute_pid(id: u8) -> u8 {
    if id > MAX_ID {
        return INVALID_PID;
    }

    let p0 = bit(id, 0) ^ bit(id, 1) ^ bit(id, 2) ^ bit(id, 4);
    let p1 = !(bit(id, 1) ^ bit(id, 3) ^ bit(id, 4) ^ bit(id, 5)) & 0x01;
    id | (p0 << 6) | (p1 << 7)
}

/// Check whether `pid` is one of the 64 valid protected identifiers.
pub fn is_valid_pid(pid: u8) -> bool {
    frame_id(pid).is_some()
}

/// Recover the frame identifier from a PID, checking its parity bits.
///
/// Returns `None` if the parity bits do not match the identifier bits.
pub fn frame_id(pid: u8) -> Option<u8> {
    let id = pid & !PARITY_MASK;
    (compute_pid(id) == pid).then_some(id)
}

/// Iterate over all IDs and their PIDs in ascending ID order.
pub fn reference_table() -> impl Iterator<Item = PidEntry> {
    REFERENCE_PID_TABLE
        .iter()
        .enumerate()
        .map(|(id, &pid)| PidEntry { id: id as u8, pid })
}
