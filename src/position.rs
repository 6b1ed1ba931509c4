//! Between-byte caret positions.

/// Which neighbour a between-byte position leans toward.
///
/// The index of a position names the gap *before* byte `index`. When that gap
/// sits on a row boundary, the same index can be drawn either after the last
/// byte of the previous row (`Backward`) or before the first byte of the next
/// row (`Forward`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bias {
    /// Leans toward the byte at `index`.
    #[default]
    Forward,
    /// Leans toward the byte at `index - 1`.
    Backward,
}

/// A caret position: a between-byte index plus its bias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexPosition {
    pub index: i64,
    pub bias: Bias,
}

impl IndexPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: i64, bias: Bias) -> Self {
        Self { index, bias }
    }

    /// Position before `index`, leaning toward it.
    #[must_use]
    pub const fn forward(index: i64) -> Self {
        Self::new(index, Bias::Forward)
    }

    /// Position after byte `index - 1`, leaning toward it.
    #[must_use]
    pub const fn backward(index: i64) -> Self {
        Self::new(index, Bias::Backward)
    }

    /// Row that displays this position for a layout with `bytes_per_row`.
    ///
    /// A `Backward` position in column 0 is drawn at the end of the previous
    /// row. Returns `None` for negative indices or a zero-width layout.
    #[must_use]
    pub fn visual_row(&self, bytes_per_row: i64) -> Option<i64> {
        if self.index < 0 || bytes_per_row <= 0 {
            return None;
        }
        let row = self.index / bytes_per_row;
        if self.wraps_to_previous_row(bytes_per_row) {
            Some(row - 1)
        } else {
            Some(row)
        }
    }

    /// Whether this position is drawn after the last byte of the previous row.
    #[must_use]
    pub fn wraps_to_previous_row(&self, bytes_per_row: i64) -> bool {
        bytes_per_row > 0
            && self.index > 0
            && self.bias == Bias::Backward
            && self.index % bytes_per_row == 0
    }
}

impl PartialOrd for IndexPosition {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexPosition {
    /// Orders by index; at equal index a `Backward` position comes first.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let rank = |b: Bias| match b {
            Bias::Backward => 0,
            Bias::Forward => 1,
        };
        self.index
            .cmp(&other.index)
            .then(rank(self.bias).cmp(&rank(other.bias)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_row_forward_at_boundary() {
        assert_eq!(IndexPosition::forward(16).visual_row(16), Some(1));
    }

    #[test]
    fn test_visual_row_backward_at_boundary() {
        assert_eq!(IndexPosition::backward(16).visual_row(16), Some(0));
        assert!(IndexPosition::backward(32).wraps_to_previous_row(16));
    }

    #[test]
    fn test_visual_row_backward_mid_row() {
        assert_eq!(IndexPosition::backward(17).visual_row(16), Some(1));
    }

    #[test]
    fn test_visual_row_zero_never_wraps() {
        assert_eq!(IndexPosition::backward(0).visual_row(16), Some(0));
    }

    #[test]
    fn test_visual_row_invalid() {
        assert_eq!(IndexPosition::forward(-1).visual_row(16), None);
        assert_eq!(IndexPosition::forward(3).visual_row(0), None);
    }

    #[test]
    fn test_ordering() {
        let a = IndexPosition::backward(4);
        let b = IndexPosition::forward(4);
        let c = IndexPosition::forward(5);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(b), b);
    }
}
