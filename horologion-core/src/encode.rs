//! Wire-format encoding for HT16K33 display RAM writes.
//!
//! A display RAM update is a single I2C write: the RAM address opcode
//! (0x00) followed by 16 data bytes. The controller latches even bytes
//! onto one row-driver bank and odd bytes onto the other, which is why
//! 8-row sources are spread onto even offsets before encoding.

use crate::mapping::ColumnMap;

/// RAM address opcode carried as the first wire byte.
const RAM_ADDRESS: u8 = 0x00;

pub const SEGMENT_WIRE_LEN: usize = 17;
pub const MATRIX_WIRE_LEN: usize = 33;

/// Encode a segment buffer for the wire: opcode byte plus the buffer
/// verbatim. The segment backpack wires digits in buffer order, so no
/// column remapping applies.
pub fn render_segment(buffer: &[u8; 16]) -> [u8; SEGMENT_WIRE_LEN] {
    let mut wire = [0u8; SEGMENT_WIRE_LEN];
    wire[0] = RAM_ADDRESS;
    wire[1..].copy_from_slice(buffer);
    wire
}

/// Encode a 16x8 matrix buffer for the wire.
///
/// Consecutive byte pairs form one little-endian 16-column word each;
/// every word is permuted through the column map and written back
/// little-endian after the opcode byte.
pub fn render_matrix(buffer: &[u8; 32], map: &ColumnMap) -> [u8; MATRIX_WIRE_LEN] {
    let mut wire = [0u8; MATRIX_WIRE_LEN];
    wire[0] = RAM_ADDRESS;
    for (i, pair) in buffer.chunks_exact(2).enumerate() {
        let word = u16::from_le_bytes([pair[0], pair[1]]);
        let mapped = map.map_word(word).to_le_bytes();
        wire[1 + i * 2] = mapped[0];
        wire[2 + i * 2] = mapped[1];
    }
    wire
}

/// Spread an 8-row buffer onto even offsets of a 16-byte frame, leaving
/// the odd (second-bank) bytes zero.
pub fn spread_rows(rows: &[u8; 8]) -> [u8; 16] {
    let mut spread = [0u8; 16];
    for (i, &row) in rows.iter().enumerate() {
        spread[i * 2] = row;
    }
    spread
}

/// Encode an 8-row buffer: spread onto even offsets, then permute each
/// byte pair through the column map as [`render_matrix`] does.
pub fn render_rows(rows: &[u8; 8], map: &ColumnMap) -> [u8; SEGMENT_WIRE_LEN] {
    let spread = spread_rows(rows);
    let mut wire = [0u8; SEGMENT_WIRE_LEN];
    wire[0] = RAM_ADDRESS;
    for (i, pair) in spread.chunks_exact(2).enumerate() {
        let word = u16::from_le_bytes([pair[0], pair[1]]);
        let mapped = map.map_word(word).to_le_bytes();
        wire[1 + i * 2] = mapped[0];
        wire[2 + i * 2] = mapped[1];
    }
    wire
}
