use chrono::{NaiveDate, NaiveTime};

use crate::models::{Accommodation, Activity, Trip};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The two sample trips the planner starts with.
pub fn sample_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "1".into(),
            title: "Summer in Paris".into(),
            destination: "Paris, France".into(),
            start_date: date(2023, 6, 15),
            end_date: date(2023, 6, 25),
            budget: 3000.0,
            cover_image: "https://images.pexels.com/photos/699466/pexels-photo-699466.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".into(),
            description: "Exploring the city of lights, visiting museums, and enjoying French cuisine.".into(),
            activities: vec![
                Activity {
                    id: "a1".into(),
                    title: "Eiffel Tower Visit".into(),
                    date: date(2023, 6, 16),
                    time: time(10, 0),
                    location: "Eiffel Tower".into(),
                    notes: "Buy tickets in advance to skip the line".into(),
                    cost: 25.0,
                },
                Activity {
                    id: "a2".into(),
                    title: "Louvre Museum".into(),
                    date: date(2023, 6, 17),
                    time: time(13, 0),
                    location: "Louvre Museum".into(),
                    notes: "Focus on the main attractions like Mona Lisa".into(),
                    cost: 15.0,
                },
            ],
            accommodations: vec![Accommodation {
                id: "acc1".into(),
                name: "Hotel de Paris".into(),
                address: "123 Rue de Rivoli, Paris".into(),
                check_in: date(2023, 6, 15),
                check_out: date(2023, 6, 25),
                price: 1200.0,
                booking_confirmation: Some("PARIS123456".into()),
            }],
        },
        Trip {
            id: "2".into(),
            title: "Tokyo Adventure".into(),
            destination: "Tokyo, Japan".into(),
            start_date: date(2023, 9, 10),
            end_date: date(2023, 9, 20),
            budget: 4500.0,
            cover_image: "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".into(),
            description: "Exploring Japanese culture, visiting temples, and trying authentic Japanese cuisine.".into(),
            activities: vec![
                Activity {
                    id: "a3".into(),
                    title: "Senso-ji Temple".into(),
                    date: date(2023, 9, 11),
                    time: time(9, 0),
                    location: "Asakusa".into(),
                    notes: "Visit early to avoid crowds".into(),
                    cost: 0.0,
                },
                Activity {
                    id: "a4".into(),
                    title: "Shibuya Crossing".into(),
                    date: date(2023, 9, 12),
                    time: time(18, 0),
                    location: "Shibuya".into(),
                    notes: "Best at sunset for photos".into(),
                    cost: 0.0,
                },
            ],
            accommodations: vec![Accommodation {
                id: "acc2".into(),
                name: "Tokyo Bay Hotel".into(),
                address: "456 Shibuya Street, Tokyo".into(),
                check_in: date(2023, 9, 10),
                check_out: date(2023, 9, 20),
                price: 1800.0,
                booking_confirmation: Some("TOKYO789012".into()),
            }],
        },
    ]
}

/// Cover images offered on the trip form.
pub const SAMPLE_COVER_IMAGES: [&str; 4] = [
    "https://images.pexels.com/photos/1271619/pexels-photo-1271619.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/2325446/pexels-photo-2325446.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/2440024/pexels-photo-2440024.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    "https://images.pexels.com/photos/2161467/pexels-photo-2161467.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
];
