//! Compile-time default site-content document.
//!
//! This is the document served when nothing has been edited; the admin
//! UI's edits land in the override file and win key-by-key. Every shoot
//! category gets a landing-page section so category pages never render
//! empty.

use serde_json::{json, Map, Value};

/// Landing-page copy per shoot category: (category, headline, intro,
/// gradient from, gradient to).
const CATEGORY_SECTIONS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "wedding",
        "Weddings",
        "Unhurried, documentary coverage of the whole day, from getting ready to the last dance.",
        "#2b1b3d",
        "#7a5c9e",
    ),
    (
        "portrait",
        "Portraits",
        "Studio and on-location portrait sessions with direction that never feels stiff.",
        "#1f2a33",
        "#5c7d8e",
    ),
    (
        "corporate",
        "Corporate",
        "Headshots and branded imagery for teams of two or two hundred.",
        "#16222e",
        "#3e5b73",
    ),
    (
        "event",
        "Events",
        "Launches, galas, and parties covered discreetly at full resolution.",
        "#33201b",
        "#8e6b5c",
    ),
    (
        "family",
        "Families",
        "Relaxed sessions at home or outdoors, built around how your family actually is.",
        "#233326",
        "#6b8e5c",
    ),
    (
        "maternity",
        "Maternity",
        "Quiet, warm sessions in the studio or golden-hour light.",
        "#33222b",
        "#8e5c7a",
    ),
    (
        "engagement",
        "Engagements",
        "A walk, a location you love, and an hour of photographs you will keep.",
        "#2b2333",
        "#715c8e",
    ),
    (
        "commercial",
        "Commercial",
        "Product, editorial, and campaign work delivered to spec.",
        "#1b2933",
        "#5c7d8e",
    ),
    (
        "lifestyle",
        "Lifestyle",
        "Unposed, editorial-style sessions for people and brands.",
        "#2e2e22",
        "#8e8a5c",
    ),
    (
        "other",
        "Something else?",
        "If it needs a camera, ask. We have photographed most things at least once.",
        "#222222",
        "#666666",
    ),
];

/// Build the full default document.
///
/// Built fresh per call; the store computes it once at construction and
/// keeps it for the process lifetime.
pub fn default_document() -> Value {
    let mut categories = Map::new();
    for (category, headline, intro, from, to) in CATEGORY_SECTIONS {
        categories.insert(
            (*category).to_string(),
            json!({
                "headline": headline,
                "intro": intro,
                "gradient": { "from": from, "to": to },
            }),
        );
    }

    json!({
        "home": {
            "hero": {
                "slides": [
                    {
                        "id": "hero-1",
                        "heading": "Photographs you will still love in thirty years",
                        "subheading": "Weddings, portraits, and commercial work from a working studio.",
                        "image": "/media/hero/studio-light.jpg",
                        "cta": { "label": "Book a shoot", "href": "/contact" },
                    },
                    {
                        "id": "hero-2",
                        "heading": "Your gallery, your order",
                        "subheading": "Every client gets a private online gallery, sequenced by hand.",
                        "image": "/media/hero/gallery-wall.jpg",
                        "cta": { "label": "See recent work", "href": "/galleries" },
                    },
                ],
                "autoplay_interval_secs": 6,
            },
            "services": {
                "heading": "What we shoot",
                "cards": [
                    { "id": "svc-weddings", "title": "Weddings", "blurb": "Full-day documentary coverage.", "href": "/weddings" },
                    { "id": "svc-portraits", "title": "Portraits", "blurb": "Studio and location sessions.", "href": "/portraits" },
                    { "id": "svc-commercial", "title": "Commercial", "blurb": "Product and campaign imagery.", "href": "/commercial" },
                ],
            },
            "testimonials": {
                "heading": "Kind words",
                "entries": [
                    {
                        "id": "t-1",
                        "quote": "The gallery made us cry, in the good way.",
                        "author": "Sarah & Tom",
                        "shoot_type": "wedding",
                    },
                    {
                        "id": "t-2",
                        "quote": "Painless headshots for forty people in one afternoon.",
                        "author": "Meridian Partners",
                        "shoot_type": "corporate",
                    },
                ],
            },
        },
        "categories": categories,
        "contact": {
            "business": {
                "name": "Darkroom Studio",
                "email": "hello@darkroom.example",
                "phone": "+1 (555) 014-2200",
                "address": "18 Foundry Lane, Portland, OR",
            },
            "hours": "By appointment, Tuesday to Saturday",
            "social": {
                "instagram": "https://instagram.com/darkroom.studio",
                "facebook": "https://facebook.com/darkroomstudio",
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use darkroom_core::shoot::SHOOT_TYPES;

    #[test]
    fn every_shoot_type_has_a_category_section() {
        let doc = default_document();
        let categories = doc["categories"].as_object().unwrap();
        for ty in SHOOT_TYPES {
            assert!(categories.contains_key(*ty), "missing category section for '{ty}'");
        }
        assert_eq!(categories.len(), SHOOT_TYPES.len());
    }

    #[test]
    fn hero_slides_present() {
        let doc = default_document();
        assert!(!doc["home"]["hero"]["slides"].as_array().unwrap().is_empty());
    }

    #[test]
    fn business_contact_present() {
        let doc = default_document();
        assert_eq!(doc["contact"]["business"]["name"], "Darkroom Studio");
    }
}
