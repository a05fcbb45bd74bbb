//! Clock face rendering and cycling.
//!
//! Faces are pure buffer painters: they take the current time and
//! preferences and mutate a display buffer. Pushing the result to the
//! panel is the caller's job.

pub mod matrix;
pub mod segment;

use heapless::Vec;

use crate::prefs::Prefs;

/// Seconds each face stays up before the cycle advances.
pub const FLIP_SECS: u8 = 3;

/// The faces a clock can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Face {
    Clock,
    Date,
    Temperature,
}

/// Rotates through the enabled faces on a fixed cadence.
///
/// The cycle advances once per distinct multiple-of-[`FLIP_SECS`]
/// second; the latch keeps a face from advancing again while the same
/// second is polled repeatedly.
#[derive(Debug, Clone)]
pub struct FaceCycle {
    faces: Vec<Face, 3>,
    index: usize,
    flipped: bool,
}

impl FaceCycle {
    pub fn new(prefs: &Prefs) -> Self {
        let mut faces: Vec<Face, 3> = Vec::new();
        // Capacity matches the face count, these cannot fail.
        let _ = faces.push(Face::Clock);
        if prefs.show_date {
            let _ = faces.push(Face::Date);
        }
        if prefs.show_temp {
            let _ = faces.push(Face::Temperature);
        }
        Self {
            faces,
            index: 0,
            flipped: false,
        }
    }

    pub fn current(&self) -> Face {
        self.faces[self.index]
    }

    /// Feed the current wall-clock second; returns the face to show.
    pub fn tick(&mut self, second: u8) -> Face {
        if second % FLIP_SECS == 0 {
            if !self.flipped {
                self.index = (self.index + 1) % self.faces.len();
                self.flipped = true;
            }
        } else {
            self.flipped = false;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(show_date: bool, show_temp: bool) -> Prefs {
        Prefs {
            show_date,
            show_temp,
            ..Prefs::default()
        }
    }

    #[test]
    fn a_lone_clock_face_never_changes() {
        let mut cycle = FaceCycle::new(&prefs(false, false));
        for second in 0..10 {
            assert_eq!(cycle.tick(second), Face::Clock);
        }
    }

    #[test]
    fn advances_once_per_flip_second() {
        let mut cycle = FaceCycle::new(&prefs(true, true));
        assert_eq!(cycle.current(), Face::Clock);
        // Repeated polls within second 0 flip exactly once.
        assert_eq!(cycle.tick(0), Face::Date);
        assert_eq!(cycle.tick(0), Face::Date);
        assert_eq!(cycle.tick(1), Face::Date);
        assert_eq!(cycle.tick(2), Face::Date);
        assert_eq!(cycle.tick(3), Face::Temperature);
        assert_eq!(cycle.tick(4), Face::Temperature);
        assert_eq!(cycle.tick(6), Face::Clock);
    }

    #[test]
    fn skips_disabled_faces() {
        let mut cycle = FaceCycle::new(&prefs(true, false));
        assert_eq!(cycle.tick(0), Face::Date);
        assert_eq!(cycle.tick(3), Face::Clock);
        assert_eq!(cycle.tick(6), Face::Date);
    }
}
