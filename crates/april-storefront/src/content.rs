//! Static brand-story content.

use serde::{Deserialize, Serialize};

/// One slide of the brand-story carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandStory {
    pub number: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

/// The three brand-story slides, in order.
pub fn brand_stories() -> Vec<BrandStory> {
    let story = |number: &str, title: &str, subtitle: &str, description: &str, image: &str| {
        BrandStory {
            number: number.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    };

    vec![
        story(
            "01",
            "Artisanal Craft",
            "Hands That Shape Dreams",
            "Each piece begins with skilled artisans in our Nagaland studio, where traditional techniques meet contemporary vision.",
            "https://images.unsplash.com/photo-1558171013-4c088753af8f?w=800&q=80",
        ),
        story(
            "02",
            "Slow Fashion",
            "Quality Over Quantity",
            "We believe in creating fewer pieces, but better ones. Each garment is made to be cherished for years, not seasons.",
            "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=800&q=80",
        ),
        story(
            "03",
            "Sustainable",
            "Mindful by Design",
            "From organic fabrics to natural dyes, every choice we make honors both the wearer and the earth.",
            "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=800&q=80",
        ),
    ]
}
