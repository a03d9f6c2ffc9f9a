pub mod accommodation;
pub mod activity;
pub mod destination;
pub mod trip;

pub use accommodation::{Accommodation, AccommodationPatch, NewAccommodation};
pub use activity::{Activity, ActivityPatch, NewActivity};
pub use destination::{Continent, Destination, DestinationType};
pub use trip::{NewTrip, Trip, TripPatch};
