/// Width of a row in grid units.
pub const GRID_UNITS: usize = 12;

/// Number of grid units a feature column occupies at medium widths and up.
/// Below the breakpoint every column is full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan(usize);

impl ColumnSpan {
    pub const FULL: Self = Self(GRID_UNITS);

    /// Splits the row evenly between `count` columns, never below one unit.
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            return Self::FULL;
        }
        Self((GRID_UNITS / count).clamp(1, GRID_UNITS))
    }

    pub fn units(self) -> usize {
        self.0
    }

    pub fn class(self) -> String {
        crate::clsx!("col", format!("col--{}", self.0))
    }

    /// Whether `count` columns fill the row exactly.
    pub fn is_balanced(count: usize) -> bool {
        count > 0 && count <= GRID_UNITS && GRID_UNITS % count == 0
    }
}

impl Default for ColumnSpan {
    fn default() -> Self {
        Self::for_count(3)
    }
}
