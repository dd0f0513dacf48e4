//! Demo post catalogue.
//!
//! On first-ever access to an empty store the content layer seeds five demo
//! posts so the blog list is not blank. The posts are authored by the
//! `"system"` sentinel and carry decreasing creation timestamps (0 through -4
//! days from seed time) so the default newest-first ordering is
//! deterministic.

use super::model::{BlogPost, SYSTEM_AUTHOR};
use crate::ids::format_timestamp;
use chrono::{DateTime, Duration, Utc};

struct SeedEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const SEED_ENTRIES: [SeedEntry; 5] = [
    SeedEntry {
        id: "1",
        title: "Top Football Transfers of the Season",
        description: "A roundup of the biggest and most surprising football transfers this season.",
        image: "https://e0.365dm.com/23/06/2048x1152/skysports-premier-league-transfers_6185760.jpg?20230613083616",
    },
    SeedEntry {
        id: "2",
        title: "Cricket World Cup 2024: Key Takeaways",
        description: "Analyzing the standout moments and performances from the 2024 Cricket World Cup.",
        image: "https://thesportzplanet.com/wp-content/uploads/2024/04/WhatsApp-Image-2023-03-18-at-1.04.16-AM.jpeg",
    },
    SeedEntry {
        id: "3",
        title: "Young Stars to Watch: Football & Cricket",
        description: "Meet the rising talents in both football and cricket set to dominate the next decade.",
        image: "https://res.cloudinary.com/jerrick/image/upload/d_642250b563292b35f27461a7.png,f_jpg,fl_progressive,q_auto,w_1024/642bbaa1c78bad001da8bcbc.jpg",
    },
    SeedEntry {
        id: "4",
        title: "Cricket’s IPL vs Football’s UCL: Clash of Giants",
        description: "Comparing the scale, viewership, and global impact of the IPL and UEFA Champions League.",
        image: "https://assets.telegraphindia.com/telegraph/2022/May/1653733728_lead-1_-2-join.jpg",
    },
    SeedEntry {
        id: "5",
        title: "Lewis Hamilton’s Road to F1 Greatness",
        description: "From humble beginnings to a record-equalling 7 world titles — a look at Hamilton's iconic career.",
        image: "https://media-cldnry.s-nbcnews.com/image/upload/t_fit-560w,f_auto,q_auto:best/rockcms/2024-02/240102-lewis-hamilton-mb-1209-65adb6.jpg",
    },
];

/// Builds the five demo posts relative to `seeded_at`.
///
/// Entry `n` (zero-based) is stamped `seeded_at - n` days, so the first entry
/// is the newest and the catalogue lists in id order under newest-first
/// sorting.
pub fn demo_posts(seeded_at: DateTime<Utc>) -> Vec<BlogPost> {
    SEED_ENTRIES
        .iter()
        .enumerate()
        .map(|(offset_days, entry)| BlogPost {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            image: entry.image.to_string(),
            author_id: SYSTEM_AUTHOR.to_string(),
            created_at: format_timestamp(seeded_at - Duration::days(offset_days as i64)),
        })
        .collect()
}
