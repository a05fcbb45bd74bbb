//! Error taxonomy for buffer mutation and configuration validation.

/// Errors raised by display encoding and construction.
///
/// These are fail-fast by firmware convention: a bad symbol, position or
/// column map has no recovery path, and halting beats rendering garbage.
/// Bus-level faults carry the transport's error type and live with the
/// drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Symbol outside the active charset
    InvalidSymbol,
    /// Digit, column or pixel index outside the display
    PositionOutOfRange,
    /// Icon bitmap empty or wider than the display
    InvalidGlyphLength,
    /// Invalid construction parameter (column map, I2C address)
    Configuration,
}
