//! Calendar and clock values.
//!
//! Timestamps are immutable values: whatever their internal layout, a copy
//! is the same instant and is returned unchanged.

use std::time::{Instant, SystemTime};

use super::impl_deep_copy_by_clone;

impl_deep_copy_by_clone!(Timestamp => SystemTime, Instant);

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    use super::impl_deep_copy_by_clone;
    use crate::copy::{Copier, DeepCopy};
    use crate::error::CopyError;
    use crate::shape::Shape;

    impl_deep_copy_by_clone!(Timestamp => NaiveDate, NaiveTime, NaiveDateTime);

    impl<Tz: TimeZone> DeepCopy for DateTime<Tz> {
        const SHAPE: Shape = Shape::Timestamp;

        fn deep_copy(&self, _cx: &mut Copier<'_>) -> Result<Self, CopyError> {
            Ok(self.clone())
        }
    }
}
