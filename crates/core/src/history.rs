//! Recent-color history: a small, capacity-bounded, most-recent-first list.

use crate::color::Rgb;

/// Default number of colors retained.
pub const DEFAULT_CAPACITY: usize = 10;

/// A bounded list of recently selected colors, most recent first.
///
/// Colors are deduplicated by their quantized byte triple: re-picking a color
/// already in the history moves it to the front instead of storing it twice.
/// The oldest entry is dropped once the capacity is exceeded.
#[derive(Debug, Clone)]
pub struct ColorHistory {
    colors: Vec<Rgb>,
    capacity: usize,
}

impl ColorHistory {
    /// Creates an empty history holding up to [`DEFAULT_CAPACITY`] colors.
    pub fn new() -> ColorHistory {
        ColorHistory::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty history with a custom capacity.
    ///
    /// A capacity of zero yields a history that never retains anything.
    pub fn with_capacity(capacity: usize) -> ColorHistory {
        ColorHistory {
            colors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a color at the front of the history.
    ///
    /// Any existing entry with the same byte triple is removed first, then the
    /// list is truncated to the capacity.
    pub fn push(&mut self, color: Rgb) {
        let key = color.to_bytes();
        self.colors.retain(|c| c.to_bytes() != key);
        self.colors.insert(0, color);
        self.colors.truncate(self.capacity);
    }

    /// Returns the recorded colors, most recent first.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns the number of recorded colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorHistory {
    fn default() -> Self {
        ColorHistory::new()
    }
}
