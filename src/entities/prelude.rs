pub use super::artist::Entity as Artist;
pub use super::show::Entity as Show;
pub use super::venue::Entity as Venue;
