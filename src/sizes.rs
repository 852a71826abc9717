//! Size tables and slider-index translation for the font size sliders.
//!
//! Both sliders select from a fixed, ascending table of pixel sizes rather
//! than a continuous range, so the slider position is an index into the
//! table and preference values have to be translated back to an index.

/// Selectable default font sizes in pixels, ascending.
pub const FONT_SIZE_RANGE: [i32; 25] = [
    9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 40, 44, 48, 56, 64,
    72,
];

/// Selectable minimum font sizes in pixels, ascending.
pub const MINIMUM_FONT_SIZE_RANGE: [i32; 16] =
    [6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 20, 22, 24];

/// Gap in pixels kept between the standard default size and the derived
/// fixed-width default size.
pub const FIXED_STANDARD_SIZE_GAP: i32 = 3;

/// Returns the exact table position of `size`, if present.
pub fn exact_index(table: &[i32], size: i32) -> Option<usize> {
    table.binary_search(&size).ok()
}

/// Returns the position of the table entry closest to `size`.
///
/// Sizes outside the table clamp to the first or last entry; a size halfway
/// between two entries resolves to the smaller one.
pub fn nearest_index(table: &[i32], size: i32) -> usize {
    match table.binary_search(&size) {
        Ok(idx) => idx,
        Err(0) => 0,
        Err(idx) if idx == table.len() => table.len() - 1,
        Err(idx) => {
            let below = table[idx - 1];
            let above = table[idx];
            if size - below <= above - size { idx - 1 } else { idx }
        }
    }
}

/// State of one discrete size slider bound to a table of pixel sizes.
///
/// The widget edits `index` directly while the user interacts with it;
/// [`SizeSlider::sync_to_size`] moves it to follow an external preference
/// value, but refuses while a drag is in progress so the thumb never jumps
/// under the pointer. Releasing a drag arms a one-shot resync request that
/// tells the observer pass to run its handler once more even when the
/// committed value matches the one it last saw.
#[derive(Debug)]
pub struct SizeSlider {
    table: &'static [i32],
    /// Live slider position, edited by the widget each frame.
    pub index: usize,
    dragging: bool,
    resync: bool,
}

impl SizeSlider {
    pub fn new(table: &'static [i32]) -> Self {
        Self {
            table,
            index: 0,
            dragging: false,
            resync: false,
        }
    }

    /// The table this slider selects from.
    pub fn table(&self) -> &'static [i32] {
        self.table
    }

    /// Upper bound of the slider range.
    pub fn max_index(&self) -> usize {
        self.table.len() - 1
    }

    /// Pixel size at the current slider position.
    pub fn size(&self) -> i32 {
        self.table[self.index.min(self.max_index())]
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Records whether the user is currently dragging the thumb. The end of
    /// a drag arms the resync request.
    pub fn set_dragging(&mut self, dragging: bool) {
        if self.dragging && !dragging {
            self.resync = true;
        }
        self.dragging = dragging;
    }

    /// Consumes the drag-release resync request.
    pub fn take_resync(&mut self) -> bool {
        std::mem::take(&mut self.resync)
    }

    /// Moves the slider to the position matching `size`, unless a drag is in
    /// progress. Sizes not in the table land on the nearest entry. Returns
    /// whether the position was updated.
    pub fn sync_to_size(&mut self, size: i32) -> bool {
        if self.dragging {
            return false;
        }
        self.index = nearest_index(self.table, size);
        true
    }
}
