use std::{fmt};
use std::str::{FromStr};

use super::{Error, Result};

/// Two named 64-bit constants with no combination semantics.
#[repr(i64)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RangeBound {
    /// `2^31`, one more than the largest 32-bit signed integer.
    Max = 2_147_483_648,
    Min = 255,
}

impl RangeBound {
    pub const ALL: [Self; 2] = [Self::Max, Self::Min];

    pub const fn value(self) -> i64 { self as i64 }

    pub fn name(self) -> &'static str {
        match self {
            Self::Max => "Max",
            Self::Min => "Min",
        }
    }
}

impl From<RangeBound> for i64 {
    fn from(bound: RangeBound) -> Self { bound.value() }
}

impl TryFrom<i64> for RangeBound {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::ALL.into_iter().find(|bound| bound.value() == value).ok_or(Error::BoundOutOfRange(value))
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for RangeBound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|bound| bound.name() == s).ok_or_else(|| {
            log::debug!("rejected range bound name {:?}", s);
            Error::UnknownBound(s.into())
        })
    }
}

// ----------------------------------------------------------------------------
