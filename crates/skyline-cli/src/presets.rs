//! Bundled puzzles.

use clap::ValueEnum;

/// A bundled puzzle, selectable with `--puzzle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 4x4, solved by the clue bounds and one sweep.
    Easy4,
    /// 4x4 with four solutions; propagation stalls.
    Ambiguous4,
    /// 6x6 with a full-information clue.
    Medium6,
    /// 7x7 with a full-information clue.
    Easy7,
    /// 7x7 needing several sweeps.
    Hard7,
    /// 7x7 that propagation cannot finish.
    VeryHard7,
}

impl Preset {
    /// Returns the clue values in clockwise slot order.
    #[rustfmt::skip]
    pub fn clues(self) -> &'static [u8] {
        match self {
            Self::Easy4 => &[
                0, 0, 1, 2,
                0, 2, 0, 0,
                0, 3, 0, 0,
                0, 1, 0, 0,
            ],
            Self::Ambiguous4 => &[
                1, 0, 0, 2,
                0, 3, 0, 0,
                0, 2, 0, 0,
                2, 3, 0, 0,
            ],
            Self::Medium6 => &[
                0, 0, 0, 2, 2, 0,
                0, 0, 0, 6, 3, 0,
                0, 4, 0, 0, 0, 0,
                4, 4, 0, 3, 0, 0,
            ],
            Self::Easy7 => &[
                7, 0, 0, 0, 2, 2, 3,
                0, 0, 3, 0, 0, 0, 0,
                3, 0, 3, 0, 0, 5, 0,
                0, 0, 0, 0, 5, 0, 4,
            ],
            Self::Hard7 => &[
                0, 2, 3, 0, 2, 0, 0,
                5, 0, 4, 5, 0, 4, 0,
                0, 4, 2, 0, 0, 0, 6,
                0, 0, 0, 0, 0, 4, 0,
            ],
            Self::VeryHard7 => &[
                3, 3, 2, 1, 2, 2, 3,
                4, 3, 2, 4, 1, 4, 2,
                2, 4, 1, 4, 5, 3, 2,
                3, 1, 4, 2, 5, 2, 3,
            ],
        }
    }
}
