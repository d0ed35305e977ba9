//! Afroman Catalog - Static read-only content data.
//!
//! The catalog is the app's source of truth for videos and merchandise:
//! two ordered video lists (free and premium) and one merchandise list,
//! each queryable by identifier. The data ships with the app; nothing here
//! is mutable or fetched.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::LazyLock;

use afroman_core::{MerchItem, MerchItemId, MerchType, Price, Video, VideoId};

static FREE_VIDEOS: LazyLock<Vec<Video>> = LazyLock::new(|| {
    vec![
        Video {
            id: VideoId::new("1"),
            title: "Because I Got High".to_owned(),
            description: "Official Music Video".to_owned(),
            thumbnail_url: "https://img.youtube.com/vi/WeYsTmIzjkw/maxresdefault.jpg".to_owned(),
            video_url: "https://www.youtube.com/embed/WeYsTmIzjkw".to_owned(),
            is_free: true,
            duration: Some("3:18".to_owned()),
        },
        Video {
            id: VideoId::new("2"),
            title: "Crazy Rap".to_owned(),
            description: "Official Music Video".to_owned(),
            thumbnail_url: "https://img.youtube.com/vi/SIMcktul77c/maxresdefault.jpg".to_owned(),
            video_url: "https://www.youtube.com/embed/SIMcktul77c".to_owned(),
            is_free: true,
            duration: Some("4:32".to_owned()),
        },
    ]
});

// No premium titles have shipped yet; the subscription gate is live ahead
// of the exclusive drops.
static PREMIUM_VIDEOS: LazyLock<Vec<Video>> = LazyLock::new(Vec::new);

static MERCHANDISE: LazyLock<Vec<MerchItem>> = LazyLock::new(|| {
    let all_sizes = || {
        ["S", "M", "L", "XL", "2XL", "3XL", "4XL", "5XL"]
            .map(str::to_owned)
            .to_vec()
    };

    vec![
        MerchItem {
            id: MerchItemId::new("tshirt-black"),
            name: "Afroman Official T-Shirt - Black".to_owned(),
            description: "Premium quality cotton t-shirt with official Afroman logo".to_owned(),
            price: Price::from_cents(3999),
            image_ref: "assets/images/9957216d-aaad-4d60-b360-5fbe38a62452.png".to_owned(),
            sizes: all_sizes(),
            merch_type: MerchType::Tshirt,
            color: "Black".to_owned(),
        },
        MerchItem {
            id: MerchItemId::new("tshirt-white"),
            name: "Afroman Official T-Shirt - White".to_owned(),
            description: "Premium quality cotton t-shirt with official Afroman logo".to_owned(),
            price: Price::from_cents(3999),
            image_ref: "assets/images/a61bc566-5ba4-4b73-ae79-f011a3d768f1.png".to_owned(),
            sizes: all_sizes(),
            merch_type: MerchType::Tshirt,
            color: "White".to_owned(),
        },
        MerchItem {
            id: MerchItemId::new("hoodie-black"),
            name: "Afroman Official Hoodie - Black".to_owned(),
            description: "Comfortable and stylish hoodie with official Afroman branding"
                .to_owned(),
            price: Price::from_cents(4999),
            image_ref: "assets/images/0b1b0006-dfc8-4ff3-b7d5-72058a084143.png".to_owned(),
            sizes: all_sizes(),
            merch_type: MerchType::Hoodie,
            color: "Black".to_owned(),
        },
        MerchItem {
            id: MerchItemId::new("hoodie-white"),
            name: "Afroman Official Hoodie - White".to_owned(),
            description: "Comfortable and stylish hoodie with official Afroman branding"
                .to_owned(),
            price: Price::from_cents(4999),
            image_ref: "assets/images/b3ad6fba-39e9-460f-8e13-34529f70d0af.png".to_owned(),
            sizes: all_sizes(),
            merch_type: MerchType::Hoodie,
            color: "White".to_owned(),
        },
    ]
});

/// Free videos, in display order.
#[must_use]
pub fn free_videos() -> &'static [Video] {
    &FREE_VIDEOS
}

/// Premium (subscription-gated) videos, in display order.
#[must_use]
pub fn premium_videos() -> &'static [Video] {
    &PREMIUM_VIDEOS
}

/// Every video, free first, preserving display order within each subset.
pub fn all_videos() -> impl Iterator<Item = &'static Video> {
    free_videos().iter().chain(premium_videos().iter())
}

/// Look up a video by identifier across both subsets.
#[must_use]
pub fn video_by_id(id: &VideoId) -> Option<&'static Video> {
    all_videos().find(|video| video.id == *id)
}

/// Merchandise items, in display order.
#[must_use]
pub fn merchandise() -> &'static [MerchItem] {
    &MERCHANDISE
}

/// Look up a merchandise item by identifier.
#[must_use]
pub fn merch_by_id(id: &MerchItemId) -> Option<&'static MerchItem> {
    merchandise().iter().find(|item| item.id == *id)
}
