//! Letter grades and their grade points on a 4.0 scale.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
}

impl Grade {
    /// Every grade, in the order a grade picker lists them.
    pub const ALL: [Grade; 11] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
        }
    }

    pub fn points(&self) -> f64 {
        match self {
            Grade::APlus | Grade::A => 4.0,
            Grade::AMinus => 3.67,
            Grade::BPlus => 3.33,
            Grade::B => 3.0,
            Grade::BMinus => 2.67,
            Grade::CPlus => 2.33,
            Grade::C => 2.0,
            Grade::CMinus => 1.67,
            Grade::DPlus => 1.33,
            Grade::D => 1.0,
        }
    }

    /// Grade points for a raw grade string, `None` when it is not in the table.
    pub fn lookup(raw: &str) -> Option<f64> {
        raw.parse::<Grade>().ok().map(|g| g.points())
    }

    /// Position in `Grade::ALL`. Variants are declared in table order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Grade {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ModelError::UnknownGrade(s.to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/grade_tests.rs"]
mod tests;
