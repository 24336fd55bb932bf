//! Scalar quantities carried by the model: durations and rates. A rate times a
//! duration is dimensionless (a utilization or a customer count), so that
//! product drops back to `f64`.

macro_rules! unit {
    ($name: ident) => {
        #[derive(
            Debug,
            Default,
            Copy,
            Clone,
            PartialOrd,
            PartialEq,
            derive_more::Add,
            derive_more::Sub,
            derive_more::AddAssign,
            derive_more::SubAssign,
            derive_more::Sum,
            derive_more::FromStr,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(f64);

        impl $name {
            pub const ZERO: $name = Self::new(0.0);

            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            pub const fn into_f64(self) -> f64 {
                self.0
            }
        }
    };
}

unit!(Secs);

impl std::fmt::Display for Secs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl std::ops::Mul<f64> for Secs {
    type Output = Secs;

    fn mul(self, rhs: f64) -> Secs {
        Secs::new(self.0 * rhs)
    }
}

unit!(PerSec);

impl std::fmt::Display for PerSec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/s", self.0)
    }
}

impl std::ops::Mul<Secs> for PerSec {
    type Output = f64;

    fn mul(self, rhs: Secs) -> f64 {
        self.0 * rhs.0
    }
}
