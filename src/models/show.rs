use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowInput {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
}

/// A show joined with the display fields of its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl ShowListing {
    #[must_use]
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.start_time > now
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ShowPartition {
    pub upcoming: Vec<ShowListing>,
    pub past: Vec<ShowListing>,
}

impl ShowPartition {
    /// Splits shows around `now`. A show starting exactly at `now` is past.
    #[must_use]
    pub fn split(shows: Vec<ShowListing>, now: NaiveDateTime) -> Self {
        let (upcoming, past) = shows.into_iter().partition(|s| s.is_upcoming(now));
        Self { upcoming, past }
    }
}
