//! In-memory display buffers.
//!
//! Buffers hold raw display RAM images and carry every mutation the
//! faces need. They are plain data: rendering to the wire lives in
//! [`crate::encode`], bus traffic in the driver crate.

mod matrix;
mod segment;

pub use matrix::{MatrixBuffer, Scroller, MATRIX_BUFFER_LEN, MATRIX_HEIGHT, MATRIX_WIDTH};
pub use segment::{SegmentBuffer, DIGIT_COUNT, SEGMENT_BUFFER_LEN};
