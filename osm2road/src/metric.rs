/// A distance across the road, in metres
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metre(f64);

impl Metre {
    pub const ZERO: Metre = Self(0.0);

    #[must_use]
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[must_use]
    pub const fn val(&self) -> f64 {
        self.0
    }
}

impl std::ops::Add for Metre {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}
impl std::ops::AddAssign for Metre {
    fn add_assign(&mut self, other: Self) {
        *self = Self(self.0 + other.0);
    }
}
impl std::ops::Mul<Metre> for f64 {
    type Output = Metre;
    fn mul(self, other: Metre) -> Self::Output {
        Metre::new(self * other.val())
    }
}
impl std::iter::Sum for Metre {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Metre>,
    {
        Self(iter.map(|m| m.0).sum())
    }
}

impl std::fmt::Display for Metre {
    /// One decimal place, suffixed with `m`
    ///
    /// ```
    /// use osm2road::metric::Metre;
    /// assert_eq!(Metre::new(3.0).to_string(), "3.0m");
    /// assert_eq!(Metre::new(4.5).to_string(), "4.5m");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}m", self.0)
    }
}
