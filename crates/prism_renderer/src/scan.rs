//! Raster-order scan cursor over a pixel grid.

/// Result of advancing the scan cursor.
///
/// The cursor is cyclic: wrapping back to (0, 0) means the *last* pixel of
/// the grid was just completed, which is the sole termination signal for a
/// render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// More pixels remain in the current cycle.
    Scanning,
    /// The cursor wrapped back to (0, 0): a full raster cycle completed.
    Done,
}

/// Cursor over a width x height pixel grid, advanced in raster order
/// (x first, wrapping to the next row).
#[derive(Debug, Clone)]
pub struct ScanCursor {
    width: u32,
    height: u32,
    x: u32,
    y: u32,
}

impl ScanCursor {
    /// Create a cursor at (0, 0) over a grid of the given dimensions.
    ///
    /// Both dimensions must be at least 1; the render driver validates
    /// screen geometry before constructing cursors.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self {
            width,
            height,
            x: 0,
            y: 0,
        }
    }

    /// Get the current pixel coordinate.
    pub fn current(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// True when the cursor sits on the last column of a row, i.e. the row
    /// is complete once the current pixel has been handled.
    pub fn row_complete(&self) -> bool {
        self.x + 1 == self.width
    }

    /// Move to the next pixel in raster order.
    ///
    /// Returns [`ScanStatus::Done`] exactly when the cursor wraps back to
    /// (0, 0), meaning the pixel just left was the last of the grid. A
    /// 1x1 grid therefore reports `Done` on the very first call.
    pub fn advance(&mut self) -> ScanStatus {
        self.x = (self.x + 1) % self.width;
        if self.x == 0 {
            self.y = (self.y + 1) % self.height;
        }

        if self.x == 0 && self.y == 0 {
            ScanStatus::Done
        } else {
            ScanStatus::Scanning
        }
    }

    /// Return to (0, 0) without any side effect, ready for a new pass.
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_order() {
        let mut cursor = ScanCursor::new(3, 2);
        let mut visited = vec![cursor.current()];

        while cursor.advance() == ScanStatus::Scanning {
            visited.push(cursor.current());
        }

        assert_eq!(
            visited,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(cursor.current(), (0, 0));
    }

    #[test]
    fn test_cycle_length_is_width_times_height() {
        let (w, h) = (7, 5);
        let mut cursor = ScanCursor::new(w, h);

        let mut advances = 0;
        loop {
            advances += 1;
            match cursor.advance() {
                ScanStatus::Done => break,
                ScanStatus::Scanning => assert!(advances < w * h, "wrapped late"),
            }
        }
        assert_eq!(advances, w * h);
    }

    #[test]
    fn test_single_pixel_grid_is_done_immediately() {
        let mut cursor = ScanCursor::new(1, 1);
        assert_eq!(cursor.advance(), ScanStatus::Done);
        assert_eq!(cursor.current(), (0, 0));
    }

    #[test]
    fn test_row_complete() {
        let mut cursor = ScanCursor::new(2, 2);
        assert!(!cursor.row_complete());
        cursor.advance();
        assert!(cursor.row_complete());
        cursor.advance();
        assert!(!cursor.row_complete());
    }

    #[test]
    fn test_reset() {
        let mut cursor = ScanCursor::new(4, 4);
        cursor.advance();
        cursor.advance();
        assert_ne!(cursor.current(), (0, 0));

        cursor.reset();
        assert_eq!(cursor.current(), (0, 0));

        // A reset cursor runs a full fresh cycle.
        let mut advances = 0;
        while cursor.advance() == ScanStatus::Scanning {
            advances += 1;
        }
        assert_eq!(advances + 1, 16);
    }
}
