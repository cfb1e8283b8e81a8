//! The brochure compiled into the binary.

use super::{Catalog, CatalogError, CatalogInfo, Section, Slide};

pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(info(), sections())
}

fn info() -> CatalogInfo {
    CatalogInfo {
        title: Some("Paradise Beach".to_string()),
        kicker: Some("Welcome to".to_string()),
        tagline: Some(
            "A paradise of blue sea and white sand.\n\
             Spend a special, restorative time with us."
                .to_string(),
        ),
        chips: vec!["Okinawa".to_string(), "9:00 - 18:00".to_string()],
        about: Some(
            "Beautiful nature and warm hospitality.\nWe look forward to your visit.".to_string(),
        ),
        contact: vec![
            "098-XXX-XXXX".to_string(),
            "info@paradise-beach.example".to_string(),
            "1-2-3 Example-cho, Example City, Okinawa".to_string(),
        ],
        hours: vec![
            "Open: 9:00 - 18:00".to_string(),
            "Closed: open every day".to_string(),
        ],
        notice: Some("Hours may change depending on the weather".to_string()),
        copyright: Some("\u{a9} 2025 Paradise Beach. All rights reserved.".to_string()),
    }
}

fn sections() -> Vec<Section> {
    vec![
        Section::new(
            1,
            "Scenic Movies",
            "#7eb8c9",
            vec![
                Slide::new(
                    101,
                    "Blue Sea and White Sand",
                    "A beach of remarkable clarity. Perfect for snorkeling and diving.",
                )
                .with_video("/videos/74939_1280x720.mp4"),
                Slide::new(
                    102,
                    "Horizon at Sunset",
                    "A spectacular close to the day. A moment you could watch forever.",
                )
                .with_video("/videos/146422_1280x720.mp4"),
                Slide::new(
                    103,
                    "Wrapped in the Sound of Waves",
                    "Let the gentle surf be your soundtrack and leave the everyday behind.",
                )
                .with_video("/videos/178081_1280x720.mp4"),
            ],
        ),
        Section::new(
            2,
            "Photo Spots",
            "#c9a87e",
            vec![
                Slide::new(
                    201,
                    "Beach at Daybreak",
                    "A view reserved for early risers. A time full of stillness and beauty.",
                )
                .with_image("/images/gabriel-ramos-BzxXl0U7zPs-unsplash.jpg"),
                Slide::new(
                    202,
                    "Palms and Blue Sky",
                    "A guaranteed photo spot. Capture a shot brimming with tropical mood.",
                )
                .with_image("/images/datingscout-iuhx63NQZ1Y-unsplash.jpg"),
                Slide::new(
                    203,
                    "Silhouettes at Dusk",
                    "The highlight of the day. Enjoy a romantic evening by the water.",
                )
                .with_image("/images/samuel-scrimshaw-ugg5bBw2NBY-unsplash.jpg"),
            ],
        ),
        Section::new(
            3,
            "Access",
            "#8bc9a8",
            vec![
                Slide::new(
                    301,
                    "From the Airport",
                    "About 30 minutes by car from the nearest airport. \
                     Use a rental car or the shuttle bus.",
                ),
                Slide::new(
                    302,
                    "Parking",
                    "Free parking for 100 cars. In peak season we recommend arriving early.",
                ),
            ],
        ),
        Section::new(
            4,
            "Food & Souvenirs",
            "#c99e8b",
            vec![
                Slide::new(
                    401,
                    "Seafood",
                    "Superb dishes made with freshly caught fish and shellfish. \
                     Savor the local flavors.",
                ),
                Slide::new(
                    402,
                    "Tropical Drinks",
                    "Drinks made with mango, passion fruit and other tropical fruits.",
                ),
                Slide::new(
                    403,
                    "Souvenir Shop",
                    "Local specialties and original goods, all in one place.",
                ),
            ],
        ),
    ]
}
