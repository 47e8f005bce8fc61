//! Component state for the display board.

use gloo_timers::callback::Interval;

use common::model::award::Award;

use crate::carousel::Rotation;

/// Main state container for the display board.
///
/// The interval is a scoped resource tied to the cached collection: it
/// exists only while the collection is non-empty, is replaced together with
/// the collection, and cancels the underlying browser timer when dropped on
/// unmount.
pub struct DisplayBoard {
    /// Local cache of the award collection.
    pub awards: Vec<Award>,
    /// Pointer into `awards`; `None` while the collection is empty.
    pub rotation: Option<Rotation>,
    /// Repeating tick source driving the rotation.
    pub interval: Option<Interval>,
    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self {
            awards: Vec::new(),
            rotation: None,
            interval: None,
            loaded: false,
        }
    }
}
