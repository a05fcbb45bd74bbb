/// A network link the clock can wait on.
///
/// The clock never drives the link beyond kicking off a connection and
/// asking whether it is up; everything else is the link's own business.
pub trait NetworkLink {
    /// Begin connecting. Non-blocking; progress is observed via
    /// [`is_up`].
    ///
    /// [`is_up`]: NetworkLink::is_up
    fn connect(&mut self);

    fn is_up(&self) -> bool;
}
