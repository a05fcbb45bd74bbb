/// The surface the clock loop needs from an LED display.
///
/// Buffer mutation happens on the concrete type; this trait only covers
/// what generic face-cycling code has to call.
pub trait LedDisplay {
    type Error;

    /// Blank the in-memory image. Takes effect on the next [`draw`].
    ///
    /// [`draw`]: LedDisplay::draw
    fn clear(&mut self);

    /// Push the in-memory image to the panel.
    fn draw(&mut self) -> Result<(), Self::Error>;

    /// Set the dimming level, 0 (dimmest) to 15.
    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error>;
}
