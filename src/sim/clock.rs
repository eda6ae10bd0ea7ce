use std::fmt;

/// First daylight hour (inclusive).
pub const SUNRISE_HOUR: u8 = 6;
/// Last daylight hour (inclusive).
pub const SUNSET_HOUR: u8 = 18;

/// Cyclic hour-of-day counter running `1, 2, ..., 24, 1, ...`.
///
/// Hour `0` does not exist; midnight is reported as `24`.
///
/// # Examples
///
/// ```
/// use energy_dash::sim::clock::TimeOfDay;
///
/// let mut t = TimeOfDay::new(23).unwrap();
/// let mut hours = Vec::new();
/// for _ in 0..3 {
///     t = t.next();
///     hours.push(t.get());
/// }
/// assert_eq!(hours, vec![24, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u8);

impl TimeOfDay {
    /// Hour the dashboard opens at.
    pub const NOON: Self = Self(12);

    /// Creates a time of day, or `None` if `hour` is outside `1..=24`.
    pub fn new(hour: u8) -> Option<Self> {
        (1..=24).contains(&hour).then_some(Self(hour))
    }

    /// Returns the raw hour.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the following hour, wrapping 24 back to 1.
    pub fn next(self) -> Self {
        Self(self.0 % 24 + 1)
    }

    /// Returns `true` between sunrise and sunset, both inclusive.
    pub fn is_daylight(self) -> bool {
        (SUNRISE_HOUR..=SUNSET_HOUR).contains(&self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
