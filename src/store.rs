use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::dates::{day_key, days_inclusive};
use crate::models::{Booking, Class};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Class already exists on {0}")]
    DayTaken(NaiveDate),
    #[error("You have already enrolled into class")]
    AlreadyEnrolled,
}

/// Calendar day -> class definition. At most one class occupies any given day.
#[derive(Default)]
pub struct ClassStore {
    days: Mutex<BTreeMap<NaiveDate, Class>>,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim every day in the class's date range, check-then-commit.
    ///
    /// The first pass rejects on the earliest day already taken; nothing is
    /// written until the whole range is known to be free. Both passes run
    /// under the store lock, so concurrent overlapping ranges cannot both
    /// commit.
    pub async fn insert_range(&self, class: Class) -> Result<(), StoreError> {
        let mut days = self.days.lock().await;

        for day in days_inclusive(class.start_date, class.end_date) {
            if days.contains_key(&day) {
                return Err(StoreError::DayTaken(day));
            }
        }

        for day in days_inclusive(class.start_date, class.end_date) {
            days.insert(day, class.clone());
        }
        Ok(())
    }

    pub async fn contains_day(&self, day: NaiveDate) -> bool {
        self.days.lock().await.contains_key(&day)
    }

    pub async fn class_on(&self, day: NaiveDate) -> Option<Class> {
        self.days.lock().await.get(&day).cloned()
    }

    pub async fn len(&self) -> usize {
        self.days.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.days.lock().await.is_empty()
    }
}

/// Day key (`YYYY-MM-DD`) -> enrolled names in booking order.
#[derive(Default)]
pub struct BookingStore {
    rosters: Mutex<HashMap<String, Vec<String>>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a booking to its day's roster.
    ///
    /// One booking per name per day, compared case-insensitively; a name is
    /// assumed to identify one person. The scan and the append hold the lock
    /// together.
    pub async fn enroll(&self, booking: &Booking) -> Result<(), StoreError> {
        let mut rosters = self.rosters.lock().await;
        let roster = rosters.entry(day_key(booking.date)).or_default();

        let incoming = booking.name.to_lowercase();
        if roster.iter().any(|name| name.to_lowercase() == incoming) {
            return Err(StoreError::AlreadyEnrolled);
        }

        roster.push(booking.name.clone());
        Ok(())
    }

    pub async fn roster(&self, day: NaiveDate) -> Vec<String> {
        self.rosters
            .lock()
            .await
            .get(&day_key(day))
            .cloned()
            .unwrap_or_default()
    }
}
