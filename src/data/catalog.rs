//! Built-in reward catalog.

use crate::data::model::Reward;

const DEFAULT_CATALOG: &[(&str, &str, u32)] = &[
    ("reward_1", "Jaket Hoodie Dicoding", 7500),
    ("reward_2", "Sticker Dicoding", 250),
    ("reward_3", "Kaos Dicoding Pria", 3000),
    ("reward_4", "Kaos Dicoding Wanita", 3000),
    ("reward_5", "Tumbler Dicoding", 1500),
    ("reward_6", "Tote Bag Dicoding", 2000),
    ("reward_7", "Topi Dicoding", 1800),
    ("reward_8", "Voucher Kelas Dicoding", 5000),
    ("reward_9", "Mug Dicoding", 1200),
    ("reward_10", "Gantungan Kunci Dicoding", 500),
];

/// Rewards shipped with the app, ids starting at 0.
pub fn default_catalog() -> Vec<Reward> {
    DEFAULT_CATALOG
        .iter()
        .enumerate()
        .map(|(id, (image, title, required_point))| Reward {
            id: id as i64,
            image: (*image).to_string(),
            title: (*title).to_string(),
            required_point: *required_point,
        })
        .collect()
}
