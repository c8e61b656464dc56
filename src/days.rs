use std::{fmt};
use std::str::{FromStr};

use arrayvec::{ArrayVec};

use super::{Error, Result};

/// One day of the week.
///
/// The discriminant of each day is its bit in [`WeekdayFlags`].
#[repr(u8)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 4,
    Thursday = 8,
    Friday = 16,
    Saturday = 32,
    Sunday = 64,
}

impl Weekday {
    /// Every day, in ascending bit order.
    pub const ALL: [Self; 7] = [
        Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday,
        Self::Friday, Self::Saturday, Self::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// The singleton set containing `self`.
    pub const fn flag(self) -> WeekdayFlags { WeekdayFlags(Bits::from_bits_truncate(self as u8)) }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|day| day.name() == s).ok_or_else(|| {
            log::debug!("rejected weekday name {:?}", s);
            Error::UnknownDay(s.into())
        })
    }
}

// ----------------------------------------------------------------------------

bitflags::bitflags! {
    /// The raw bits behind [`WeekdayFlags`].
    #[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
    struct Bits: u8 {
        const MONDAY = 1;
        const TUESDAY = 2;
        const WEDNESDAY = 4;
        const THURSDAY = 8;
        const FRIDAY = 16;
        const SATURDAY = 32;
        const SUNDAY = 64;
    }
}

/// A set of [`Weekday`]s, one bit per day.
///
/// Only the seven named bits can ever be set, so the numeric value is
/// always in `0..=127` and decomposes uniquely into days.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekdayFlags(Bits);

impl WeekdayFlags {
    /// The empty set.
    pub const NONE: Self = Self(Bits::empty());
    pub const MONDAY: Self = Self(Bits::MONDAY);
    pub const TUESDAY: Self = Self(Bits::TUESDAY);
    pub const WEDNESDAY: Self = Self(Bits::WEDNESDAY);
    pub const THURSDAY: Self = Self(Bits::THURSDAY);
    pub const FRIDAY: Self = Self(Bits::FRIDAY);
    pub const SATURDAY: Self = Self(Bits::SATURDAY);
    pub const SUNDAY: Self = Self(Bits::SUNDAY);

    pub const fn empty() -> Self { Self::NONE }

    /// Every day.
    pub const fn all() -> Self { Self(Bits::all()) }

    pub const fn bits(self) -> u8 { self.0.bits() }

    /// Returns `None` if any bit above the seven days is set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match Bits::from_bits(bits) {
            Some(b) => Some(Self(b)),
            None => None,
        }
    }

    /// Drops any bit above the seven days.
    pub const fn from_bits_truncate(bits: u8) -> Self { Self(Bits::from_bits_truncate(bits)) }

    pub const fn is_empty(self) -> bool { self.0.is_empty() }

    pub const fn contains(self, other: Self) -> bool { self.0.contains(other.0) }

    pub const fn union(self, other: Self) -> Self { Self(self.0.union(other.0)) }

    pub const fn intersection(self, other: Self) -> Self { Self(self.0.intersection(other.0)) }

    pub const fn difference(self, other: Self) -> Self { Self(self.0.difference(other.0)) }

    /// The days not in `self`.
    pub const fn complement(self) -> Self { Self(self.0.complement()) }

    /// The members of `self` in ascending bit order.
    pub fn days(self) -> ArrayVec<Weekday, 7> {
        Weekday::ALL.into_iter().filter(|day| self.contains(day.flag())).collect()
    }

    /// Returns `true` if `day` is in `self`.
    pub fn has(self, day: Weekday) -> bool { self.contains(day.flag()) }
}

impl std::ops::BitOr for WeekdayFlags {
    type Output = Self;

    fn bitor(self, other: Self) -> Self { self.union(other) }
}

impl std::ops::BitOrAssign for WeekdayFlags {
    fn bitor_assign(&mut self, other: Self) { *self = self.union(other); }
}

impl std::ops::BitAnd for WeekdayFlags {
    type Output = Self;

    fn bitand(self, other: Self) -> Self { self.intersection(other) }
}

impl std::ops::Sub for WeekdayFlags {
    type Output = Self;

    fn sub(self, other: Self) -> Self { self.difference(other) }
}

impl std::ops::Not for WeekdayFlags {
    type Output = Self;

    fn not(self) -> Self { self.complement() }
}

impl From<Weekday> for WeekdayFlags {
    fn from(day: Weekday) -> Self { day.flag() }
}

impl FromIterator<Weekday> for WeekdayFlags {
    fn from_iter<I: IntoIterator<Item=Weekday>>(days: I) -> Self {
        days.into_iter().fold(Self::NONE, |acc, day| acc | day.flag())
    }
}

impl TryFrom<u8> for WeekdayFlags {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self> {
        Self::from_bits(bits).ok_or(Error::InvalidBits(bits.into()))
    }
}

impl std::ops::BitOr for Weekday {
    type Output = WeekdayFlags;

    fn bitor(self, other: Self) -> WeekdayFlags { self.flag() | other.flag() }
}

/// Writes the member names separated by `", "`, or `None` for the empty set.
impl fmt::Display for WeekdayFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() { return f.write_str("None"); }
        let mut sep = "";
        for day in self.days() {
            write!(f, "{}{}", sep, day)?;
            sep = ", ";
        }
        Ok(())
    }
}

/// Accepts the output of `Display`, or a decimal number in `0..=127`.
impl FromStr for WeekdayFlags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "None" { return Ok(Self::NONE); }
        if let Ok(number) = s.parse::<i64>() {
            let bits = u8::try_from(number).map_err(|_| Error::InvalidBits(number))?;
            return Self::try_from(bits);
        }
        s.split(',').map(|name| name.trim().parse::<Weekday>()).collect()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn named_values() {
        assert_eq!(WeekdayFlags::NONE.bits(), 0);
        let bits: Vec<u8> = Weekday::ALL.iter().map(|day| day.flag().bits()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64]);
        assert_eq!(WeekdayFlags::all().bits(), 127);
    }

    #[test]
    fn union_and_decompose() {
        let flags = WeekdayFlags::MONDAY | WeekdayFlags::TUESDAY;
        assert_eq!(flags.bits(), 3);
        assert_eq!(&flags.days()[..], &[Weekday::Monday, Weekday::Tuesday]);
        assert_eq!(Weekday::Monday | Weekday::Tuesday, flags);
        assert!(flags.has(Weekday::Tuesday));
        assert!(!flags.has(Weekday::Sunday));
    }

    #[test]
    fn complement_stays_in_range() {
        let weekend = Weekday::Saturday | Weekday::Sunday;
        assert_eq!((!weekend).bits(), 31);
        assert_eq!((!WeekdayFlags::NONE).bits(), 127);
    }

    #[test]
    fn out_of_range_bits() {
        assert_eq!(WeekdayFlags::try_from(128u8), Err(Error::InvalidBits(128)));
        assert_eq!(WeekdayFlags::from_bits_truncate(0xff).bits(), 127);
    }

    #[test]
    fn constructors_stay_in_range() {
        let built = [
            WeekdayFlags::from_bits_truncate(0xff) | WeekdayFlags::MONDAY,
            !WeekdayFlags::from_bits_truncate(0x80),
            WeekdayFlags::all() - WeekdayFlags::NONE,
            (0..=u8::MAX).map(WeekdayFlags::from_bits_truncate).fold(WeekdayFlags::NONE, |a, b| a | b),
        ];
        for flags in built {
            assert!(flags.bits() <= 127, "bits {} out of range", flags.bits());
            let rebuilt: WeekdayFlags = flags.days().into_iter().collect();
            assert_eq!(rebuilt, flags);
        }
        assert_eq!(WeekdayFlags::from_bits(0x80), None);
        assert_eq!(WeekdayFlags::from_bits(0x7f), Some(WeekdayFlags::all()));
    }

    #[test]
    fn intersection_and_difference() {
        let weekend = Weekday::Saturday | Weekday::Sunday;
        let mut flags = Weekday::Friday | Weekday::Saturday;
        assert_eq!(flags & weekend, WeekdayFlags::SATURDAY);
        assert_eq!(flags - weekend, WeekdayFlags::FRIDAY);
        flags |= WeekdayFlags::SUNDAY;
        assert_eq!(flags.bits(), 112);
    }

    #[test]
    fn display() {
        assert_eq!(WeekdayFlags::NONE.to_string(), "None");
        assert_eq!((Weekday::Sunday | Weekday::Monday).to_string(), "Monday, Sunday");
    }

    #[test]
    fn parse() {
        assert_eq!("None".parse::<WeekdayFlags>(), Ok(WeekdayFlags::NONE));
        assert_eq!("Monday, Tuesday".parse::<WeekdayFlags>(), Ok(Weekday::Monday | Weekday::Tuesday));
        assert_eq!("Friday,Monday".parse::<WeekdayFlags>(), Ok(Weekday::Monday | Weekday::Friday));
        assert_eq!("3".parse::<WeekdayFlags>(), Ok(Weekday::Monday | Weekday::Tuesday));
        assert_eq!("200".parse::<WeekdayFlags>(), Err(Error::InvalidBits(200)));
        assert_eq!("300".parse::<WeekdayFlags>(), Err(Error::InvalidBits(300)));
        assert_eq!("-1".parse::<WeekdayFlags>(), Err(Error::InvalidBits(-1)));
        assert_eq!("monday".parse::<WeekdayFlags>(), Err(Error::UnknownDay("monday".into())));
    }

    proptest! {
        #[test]
        fn every_valid_value_decomposes(bits in 0u8..128) {
            let flags = WeekdayFlags::try_from(bits).unwrap();
            let rebuilt: WeekdayFlags = flags.days().into_iter().collect();
            prop_assert_eq!(rebuilt.bits(), bits);
            prop_assert_eq!(flags.to_string().parse::<WeekdayFlags>(), Ok(flags));
        }
    }
}
