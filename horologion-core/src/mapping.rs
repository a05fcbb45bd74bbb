//! Bit-level column remapping between buffer order and wiring order.

use crate::error::Error;

/// A permutation of the 16 column bits in one display word.
///
/// Boards route the HT16K33 row outputs to LED columns in whatever order
/// made layout easiest, so the logical buffer order rarely matches the
/// wire order. `map[i] = j` moves source bit `i` to destination bit `j`.
///
/// Construction rejects tables with out-of-range or duplicate targets:
/// a non-bijective map silently drops pixels on the wire, and a wiring
/// table is configuration that should fail at startup, not render
/// garbage for the life of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnMap {
    map: [u8; 16],
}

impl ColumnMap {
    /// The identity permutation: buffer order is wire order.
    pub const IDENTITY: Self = Self {
        map: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    };

    pub fn new(map: [u8; 16]) -> Result<Self, Error> {
        let mut seen = [false; 16];
        for &target in &map {
            let target = usize::from(target);
            if target >= 16 || seen[target] {
                return Err(Error::Configuration);
            }
            seen[target] = true;
        }
        Ok(Self { map })
    }

    /// Permute the bits of one 16-column word.
    pub fn map_word(&self, word: u16) -> u16 {
        let mut out = 0u16;
        for (i, &target) in self.map.iter().enumerate() {
            out |= ((word >> i) & 1) << target;
        }
        out
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}
