//! Built-in APRIL catalog.

use super::{Collection, Product};
use crate::ids::ProductId;

const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

fn product(
    id: &str,
    name: &str,
    collection: &str,
    price: i64,
    image: &str,
    fabric: &str,
    badge: Option<&str>,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        collection: collection.to_string(),
        price,
        image: image.to_string(),
        fabric: fabric.to_string(),
        badge: badge.map(str::to_string),
        description: description.to_string(),
        sizes: SIZES.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "The Twilight Dress",
            "Rosé Whirl",
            4999,
            "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?w=800&q=80",
            "Organic Silk Blend",
            Some("Bestseller"),
            "A bias-cut slip dress that catches the last light of the evening.",
        ),
        product(
            "2",
            "Pearl Drape Blouse",
            "Shadow Pearl",
            2899,
            "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=800&q=80",
            "Handloom Cotton",
            Some("New"),
            "A softly draped blouse with an iridescent sheen.",
        ),
        product(
            "3",
            "Mist Wrap Skirt",
            "Silver Mist",
            2499,
            "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=800&q=80",
            "Washed Linen",
            None,
            "An easy wrap skirt in cool, dew-grey linen.",
        ),
        product(
            "4",
            "Ember Knit Cardigan",
            "Ash & Ember",
            3799,
            "https://images.unsplash.com/photo-1558171013-4c088753af8f?w=800&q=80",
            "Merino Wool",
            Some("Limited"),
            "A raw-textured cardigan with a refined, relaxed silhouette.",
        ),
        product(
            "5",
            "Rosé Slip Dress",
            "Rosé Whirl",
            3299,
            "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?w=800&q=80",
            "Cupro",
            None,
            "A fluid slip in delicate pink that dances with the light.",
        ),
        product(
            "6",
            "Shadow Tailored Trousers",
            "Shadow Pearl",
            3199,
            "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=800&q=80",
            "Tencel Twill",
            None,
            "High-waisted trousers cut for movement.",
        ),
        product(
            "7",
            "Dew Pleated Midi",
            "Silver Mist",
            4299,
            "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=800&q=80",
            "Recycled Georgette",
            Some("New"),
            "A sunray-pleated midi that moves like morning fog.",
        ),
        product(
            "8",
            "Ash Linen Shirt",
            "Ash & Ember",
            2199,
            "https://images.unsplash.com/photo-1558171013-4c088753af8f?w=800&q=80",
            "Washed Linen",
            None,
            "An oversized shirt with hand-finished seams.",
        ),
    ]
}

pub(super) fn collections() -> Vec<Collection> {
    let collection = |id, name: &str, description: &str, image: &str, product_count, price| {
        Collection {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            product_count,
            price,
        }
    };

    vec![
        collection(
            1,
            "Rosé Whirl",
            "Delicate pinks that dance with the light",
            "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?w=600&h=800&fit=crop",
            12,
            3499,
        ),
        collection(
            2,
            "Shadow Pearl",
            "Iridescent tones for the bold and beautiful",
            "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=600&h=800&fit=crop",
            8,
            4499,
        ),
        collection(
            3,
            "Silver Mist",
            "Cool tones that evoke morning dew",
            "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=600&h=800&fit=crop",
            15,
            3999,
        ),
        collection(
            4,
            "Ash & Ember",
            "Raw textures meet refined silhouettes",
            "https://images.unsplash.com/photo-1558171013-4c088753af8f?w=600&h=800&fit=crop",
            10,
            4199,
        ),
    ]
}
