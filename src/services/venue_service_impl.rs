//! `SeaORM` implementation of the `VenueService` trait.

use crate::db::Store;
use crate::models::show::ShowPartition;
use crate::models::venue::{Venue, VenueArea, VenueInput, VenueSummary};
use crate::services::venue_service::{VenueDetails, VenueError, VenueService};
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub struct SeaOrmVenueService {
    store: Store,
}

impl SeaOrmVenueService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn check_input(input: &VenueInput) -> Result<(), VenueError> {
        if input.name.trim().is_empty() {
            return Err(VenueError::Validation("name is required".to_string()));
        }
        Ok(())
    }
}

/// Groups venues by (city, state) in order of first appearance.
pub(crate) fn group_into_areas(
    venues: Vec<Venue>,
    upcoming: &std::collections::HashMap<i32, usize>,
) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for venue in venues {
        let city = venue.city.unwrap_or_default();
        let state = venue.state.unwrap_or_default();
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };

        match areas
            .iter_mut()
            .find(|a| a.city == city && a.state == state)
        {
            Some(area) => area.venues.push(summary),
            None => areas.push(VenueArea {
                city,
                state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

#[async_trait]
impl VenueService for SeaOrmVenueService {
    async fn list_venues(&self) -> Result<Vec<Venue>, VenueError> {
        Ok(self.store.list_venues().await?)
    }

    async fn list_areas(&self, now: NaiveDateTime) -> Result<Vec<VenueArea>, VenueError> {
        let venues = self.store.list_venues().await?;
        let upcoming = self.store.upcoming_show_counts_by_venue(now).await?;
        Ok(group_into_areas(venues, &upcoming))
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, VenueError> {
        Ok(self.store.search_venues(term).await?)
    }

    async fn get_venue(&self, id: i32) -> Result<Venue, VenueError> {
        self.store
            .get_venue(id)
            .await?
            .ok_or(VenueError::NotFound(id))
    }

    async fn venue_details(
        &self,
        id: i32,
        now: NaiveDateTime,
    ) -> Result<VenueDetails, VenueError> {
        let venue = self.get_venue(id).await?;
        let shows = self.store.list_shows_for_venue(id).await?;
        let ShowPartition { upcoming, past } = ShowPartition::split(shows, now);

        Ok(VenueDetails {
            venue,
            upcoming_shows_count: upcoming.len(),
            past_shows_count: past.len(),
            upcoming_shows: upcoming,
            past_shows: past,
        })
    }

    async fn create_venue(&self, input: VenueInput) -> Result<Venue, VenueError> {
        Self::check_input(&input)?;
        Ok(self.store.add_venue(&input).await?)
    }

    async fn update_venue(&self, id: i32, input: VenueInput) -> Result<Venue, VenueError> {
        Self::check_input(&input)?;
        self.store
            .update_venue(id, &input)
            .await?
            .ok_or(VenueError::NotFound(id))
    }

    async fn delete_venue(&self, id: i32) -> Result<Venue, VenueError> {
        self.store
            .remove_venue(id)
            .await?
            .ok_or(VenueError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::show::ShowInput;
    use chrono::{Duration, Utc};
    use std::collections::HashMap;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            address: None,
            phone: None,
            image_link: None,
            website_link: None,
            facebook_link: None,
            genres: Vec::new(),
            looking_for_talent: false,
            seeking_description: None,
        }
    }

    fn input(name: &str) -> VenueInput {
        VenueInput {
            name: name.to_string(),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            address: Some("335 Delancey Street".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn areas_group_by_city_and_state() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live", "San Francisco", "CA"),
        ];
        let upcoming = HashMap::from([(3, 2)]);

        let areas = group_into_areas(venues, &upcoming);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 2);
        assert_eq!(areas[1].venues[0].name, "The Dueling Pianos Bar");
    }

    #[tokio::test]
    async fn details_partition_shows_around_now() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeaOrmVenueService::new(store.clone());
        let venue = service.create_venue(input("The Dueling Pianos Bar")).await.unwrap();
        let artist = store
            .add_artist(&crate::models::artist::ArtistInput {
                name: "The Wild Sax Band".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let now = Utc::now().naive_utc();
        for offset in [-10, -1, 4] {
            store
                .add_show(&ShowInput {
                    venue_id: venue.id,
                    artist_id: artist.id,
                    start_time: now + Duration::days(offset),
                })
                .await
                .unwrap();
        }

        let details = service.venue_details(venue.id, now).await.unwrap();
        assert_eq!(details.upcoming_shows_count, 1);
        assert_eq!(details.past_shows_count, 2);
        assert!(details.upcoming_shows.iter().all(|s| s.start_time > now));
        assert!(details.past_shows.iter().all(|s| s.start_time <= now));
        assert_eq!(details.upcoming_shows[0].artist_name, "The Wild Sax Band");
    }

    #[tokio::test]
    async fn missing_venue_is_not_found() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeaOrmVenueService::new(store);
        let now = Utc::now().naive_utc();

        assert!(matches!(
            service.venue_details(42, now).await,
            Err(VenueError::NotFound(42))
        ));
        assert!(matches!(
            service.update_venue(42, input("Nowhere")).await,
            Err(VenueError::NotFound(42))
        ));
        assert!(matches!(
            service.delete_venue(42).await,
            Err(VenueError::NotFound(42))
        ));
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeaOrmVenueService::new(store.clone());

        let result = service.create_venue(input("   ")).await;
        assert!(matches!(result, Err(VenueError::Validation(_))));
        assert!(store.list_venues().await.unwrap().is_empty());
    }
}
