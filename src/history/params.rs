use std::fmt;

/// Bar size for historical prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    /// One minute bars (`1m`); Yahoo only serves the most recent days.
    I1m,
    /// Daily bars (`1d`).
    #[default]
    D1,
    /// Weekly bars (`1wk`).
    W1,
    /// Monthly bars (`1mo`).
    M1,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::D1 => "1d",
            Interval::W1 => "1wk",
            Interval::M1 => "1mo",
        }
    }

    /// `true` for bars shorter than a day.
    pub fn is_intraday(self) -> bool {
        matches!(self, Interval::I1m)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = crate::core::YfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Interval::I1m),
            "1d" => Ok(Interval::D1),
            "1wk" => Ok(Interval::W1),
            "1mo" => Ok(Interval::M1),
            other => Err(crate::core::YfError::Parse(format!(
                "unsupported interval `{other}` (expected 1d, 1wk, 1mo or 1m)"
            ))),
        }
    }
}
