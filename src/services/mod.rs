pub mod artist_service;
pub mod artist_service_impl;
pub use artist_service::{ArtistDetails, ArtistError, ArtistService};
pub use artist_service_impl::SeaOrmArtistService;

pub mod show_service;
pub mod show_service_impl;
pub use show_service::{ShowError, ShowService};
pub use show_service_impl::SeaOrmShowService;

pub mod venue_service;
pub mod venue_service_impl;
pub use venue_service::{VenueDetails, VenueError, VenueService};
pub use venue_service_impl::SeaOrmVenueService;
