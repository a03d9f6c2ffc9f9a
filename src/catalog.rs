use crate::models::{Continent, Destination, DestinationType};

const IMAGE_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

pub static DESTINATIONS: [Destination; 8] = [
    Destination {
        id: "1",
        name: "Santorini",
        country: "Greece",
        continent: Continent::Europe,
        kind: DestinationType::Beach,
        image: "https://images.pexels.com/photos/1010657/pexels-photo-1010657.jpeg",
        rating: 4.8,
        description: "Famous for its stunning sunsets, white-washed buildings, and blue domes overlooking the Aegean Sea.",
    },
    Destination {
        id: "2",
        name: "Kyoto",
        country: "Japan",
        continent: Continent::Asia,
        kind: DestinationType::Cultural,
        image: "https://images.pexels.com/photos/1440476/pexels-photo-1440476.jpeg",
        rating: 4.7,
        description: "Known for its classical Buddhist temples, gardens, imperial palaces, and traditional wooden houses.",
    },
    Destination {
        id: "3",
        name: "Machu Picchu",
        country: "Peru",
        continent: Continent::SouthAmerica,
        kind: DestinationType::Historical,
        image: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        rating: 4.9,
        description: "An ancient Incan citadel set high in the Andes Mountains, featuring dry-stone walls and panoramic views.",
    },
    Destination {
        id: "4",
        name: "Barcelona",
        country: "Spain",
        continent: Continent::Europe,
        kind: DestinationType::City,
        image: "https://images.pexels.com/photos/819764/pexels-photo-819764.jpeg",
        rating: 4.6,
        description: "Known for its art and architecture, including Gaudí's Sagrada Família church and other modernist landmarks.",
    },
    Destination {
        id: "5",
        name: "Bali",
        country: "Indonesia",
        continent: Continent::Asia,
        kind: DestinationType::Beach,
        image: "https://images.pexels.com/photos/1694621/pexels-photo-1694621.jpeg",
        rating: 4.5,
        description: "A tropical paradise known for its forested volcanic mountains, iconic rice paddies, beaches, and coral reefs.",
    },
    Destination {
        id: "6",
        name: "New York City",
        country: "United States",
        continent: Continent::NorthAmerica,
        kind: DestinationType::City,
        image: "https://images.pexels.com/photos/802024/pexels-photo-802024.jpeg",
        rating: 4.7,
        description: "The Big Apple offers world-class dining, shopping, and entertainment, with iconic landmarks like Times Square and Central Park.",
    },
    Destination {
        id: "7",
        name: "Cape Town",
        country: "South Africa",
        continent: Continent::Africa,
        kind: DestinationType::Beach,
        image: "https://images.pexels.com/photos/259447/pexels-photo-259447.jpeg",
        rating: 4.6,
        description: "A stunning coastal city at the southern tip of Africa, known for Table Mountain, Cape Point, and vibrant culture.",
    },
    Destination {
        id: "8",
        name: "Swiss Alps",
        country: "Switzerland",
        continent: Continent::Europe,
        kind: DestinationType::Mountain,
        image: "https://images.pexels.com/photos/417074/pexels-photo-417074.jpeg",
        rating: 4.9,
        description: "Majestic mountain range offering world-class skiing, hiking, and breathtaking alpine scenery.",
    },
];

pub fn destinations() -> &'static [Destination] {
    &DESTINATIONS
}

/// The first `count` catalog entries, in catalog order.
pub fn popular(count: usize) -> &'static [Destination] {
    &DESTINATIONS[..count.min(DESTINATIONS.len())]
}

/// Pexels serves a resized rendition when these query params are present.
pub fn image_url(destination: &Destination) -> String {
    format!("{}{}", destination.image, IMAGE_PARAMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_stay_on_five_point_scale() {
        assert!(destinations()
            .iter()
            .all(|d| (0.0..=5.0).contains(&d.rating)));
    }

    #[test]
    fn popular_is_a_prefix() {
        let top = popular(4);
        assert_eq!(top.len(), 4);
        assert_eq!(top[0].name, "Santorini");
        assert_eq!(popular(100).len(), DESTINATIONS.len());
    }
}
