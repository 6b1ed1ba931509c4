//! Inclusive byte and row ranges with an explicit invalid sentinel.
//!
//! Both range kinds share the same arithmetic:
//!
//! - A *valid* range has `start >= 0` and covers `[start, end]` inclusive.
//! - An *empty* range is valid, has length 0 (`end == start - 1`), and still
//!   carries a position: `start` is where the range would begin.
//! - The *invalid* range (`start == end == -1`) has no position at all.
//!
//! Combining an invalid range with anything is a caller bug and panics.

macro_rules! inclusive_range {
    ($(#[$meta:meta])* $name:ident, $unit:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            pub start: i64,
            pub end: i64,
        }

        impl $name {
            /// The sentinel for "no range, no position".
            pub const INVALID: Self = Self { start: -1, end: -1 };

            #[doc = concat!("Create a range of ", $unit, " covering `[start, end]`.")]
            ///
            /// Returns [`Self::INVALID`] when `start` is negative or `end`
            /// lies more than one before `start`.
            #[must_use]
            pub const fn new(start: i64, end: i64) -> Self {
                if start < 0 || end < start - 1 {
                    Self::INVALID
                } else {
                    Self { start, end }
                }
            }

            /// An empty range positioned at `pos`.
            #[must_use]
            pub const fn empty_at(pos: i64) -> Self {
                Self::new(pos, pos - 1)
            }

            /// A range covering exactly one unit.
            #[must_use]
            pub const fn single(pos: i64) -> Self {
                Self::new(pos, pos)
            }

            /// Whether this range has a position.
            #[must_use]
            pub const fn is_valid(&self) -> bool {
                self.start >= 0
            }

            /// Whether this range is valid but covers nothing.
            #[must_use]
            pub const fn is_empty(&self) -> bool {
                self.is_valid() && self.end < self.start
            }

            #[doc = concat!("Number of ", $unit, " covered.")]
            #[must_use]
            pub fn len(&self) -> i64 {
                assert!(self.is_valid(), "len() on an invalid {}", stringify!($name));
                self.end - self.start + 1
            }

            /// Check whether `pos` lies inside the range.
            #[must_use]
            pub const fn contains(&self, pos: i64) -> bool {
                self.is_valid() && pos >= self.start && pos <= self.end
            }

            /// Overlap of two ranges.
            ///
            /// Ranges that merely touch produce an empty range positioned at
            /// the seam; ranges further apart produce [`Self::INVALID`].
            #[must_use]
            pub fn intersection(&self, other: &Self) -> Self {
                assert!(
                    self.is_valid() && other.is_valid(),
                    "intersection of invalid {}: {:?} / {:?}",
                    stringify!($name),
                    self,
                    other
                );
                Self::new(self.start.max(other.start), self.end.min(other.end))
            }

            /// Smallest range covering both, including any gap between them.
            #[must_use]
            pub fn union(&self, other: &Self) -> Self {
                assert!(
                    self.is_valid() && other.is_valid(),
                    "union of invalid {}: {:?} / {:?}",
                    stringify!($name),
                    self,
                    other
                );
                if self.is_empty() {
                    return *other;
                }
                if other.is_empty() {
                    return *self;
                }
                Self::new(self.start.min(other.start), self.end.max(other.end))
            }

            /// Units covered by exactly one of the two ranges, as at most two
            /// non-empty pieces in ascending order.
            #[must_use]
            pub fn symmetric_difference(&self, other: &Self) -> Vec<Self> {
                assert!(
                    self.is_valid() && other.is_valid(),
                    "symmetric difference of invalid {}: {:?} / {:?}",
                    stringify!($name),
                    self,
                    other
                );
                let (a, b) = if self.start <= other.start {
                    (*self, *other)
                } else {
                    (*other, *self)
                };
                if a.is_empty() || b.is_empty() {
                    return [a, b].into_iter().filter(|r| !r.is_empty()).collect();
                }
                let overlap = a.intersection(&b);
                if !overlap.is_valid() || overlap.is_empty() {
                    return vec![a, b];
                }

                let mut pieces = Vec::with_capacity(2);
                if a.start != b.start {
                    pieces.push(Self::new(a.start, b.start - 1));
                }
                if a.end != b.end {
                    pieces.push(Self::new(a.end.min(b.end) + 1, a.end.max(b.end)));
                }
                pieces
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

inclusive_range!(
    /// An inclusive range of byte indices.
    ByteRange,
    "bytes"
);

inclusive_range!(
    /// An inclusive range of row indices.
    RowRange,
    "rows"
);
