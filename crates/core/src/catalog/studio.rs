//! Compiled-in studio inventory and client testimonials.

use crate::types::{Category, LeadTime, Price, ProductId, Rating, TestimonialId};

use super::{Product, Testimonial};

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    category: Category,
    rands: u64,
    dimensions: &'static str,
    wood: &'static str,
    resin: &'static str,
    image: &'static str,
    lead_time: LeadTime,
    description: &'static str,
    features: &'static [&'static str],
}

impl From<&ProductSeed> for Product {
    fn from(seed: &ProductSeed) -> Self {
        Self {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            category: seed.category,
            price: Price::zar(seed.rands),
            dimensions: seed.dimensions.to_owned(),
            wood: seed.wood.to_owned(),
            resin: seed.resin.to_owned(),
            image: seed.image.to_owned(),
            lead_time: seed.lead_time,
            description: seed.description.to_owned(),
            features: seed.features.iter().map(|&f| f.to_owned()).collect(),
        }
    }
}

const PRODUCTS: [ProductSeed; 6] = [
    ProductSeed {
        id: "1",
        name: "The Umgeni Dining Table",
        category: Category::Dining,
        rands: 42_000,
        dimensions: "2200 x 1000 mm",
        wood: "African Walnut",
        resin: "Deep River Blue",
        image: "https://images.unsplash.com/photo-1577140917170-285929fb55b7?auto=format&fit=crop&q=80&w=1000",
        lead_time: LeadTime::InStock,
        description: "A masterpiece of contrast, featuring locally sourced African Walnut with a translucent river running through its center. Finished with hard-wearing Rubio Monocoat.",
        features: &[
            "Solid African Walnut",
            "UV Resistant Resin",
            "Matte Finish",
            "Black Powder-coated Steel Legs",
        ],
    },
    ProductSeed {
        id: "2",
        name: "Kalahari Burl Coffee Table",
        category: Category::Coffee,
        rands: 18_500,
        dimensions: "1200 x 700 mm",
        wood: "Mappa Burl",
        resin: "Smokey Quartz",
        image: "https://images.unsplash.com/photo-1611269154421-4e27233ac5c7?auto=format&fit=crop&q=80&w=1000",
        lead_time: LeadTime::InStock,
        description: "The chaotic beauty of burl wood preserved in smokey quartz epoxy. A striking centerpiece for the modern lounge.",
        features: &[
            "Rare Mappa Burl",
            "High Clarity Resin",
            "Satin Sheen",
            "Geometric Base",
        ],
    },
    ProductSeed {
        id: "3",
        name: "Sentinel Conference Table",
        category: Category::Conference,
        rands: 95_000,
        dimensions: "3500 x 1400 mm",
        wood: "Kiaat",
        resin: "Midnight Black",
        image: "https://images.unsplash.com/photo-1604578762246-41134e37f9cc?auto=format&fit=crop&q=80&w=1000",
        lead_time: LeadTime::CustomOrder,
        description: "Commanding and elegant. This expansive conference table combines the warmth of Kiaat timber with professional midnight black resin.",
        features: &[
            "Integrated Cable Management",
            "Durable Nano-coating",
            "Seats 12-14",
            "Heavy-duty Steel Frame",
        ],
    },
    ProductSeed {
        id: "4",
        name: "Verde Console",
        category: Category::Console,
        rands: 24_000,
        dimensions: "1500 x 400 mm",
        wood: "French Oak",
        resin: "Emerald Green",
        image: "https://images.unsplash.com/photo-1533090481720-856c6e3c1fdc?auto=format&fit=crop&q=80&w=1000",
        lead_time: LeadTime::CustomOrder,
        description: "A slender statement piece for the hallway or entryway. The emerald resin captures light beautifully against the pale oak.",
        features: &[
            "Live Edge Detail",
            "Narrow Profile",
            "Hairpin Legs",
            "Protective Coating",
        ],
    },
    ProductSeed {
        id: "5",
        name: "Outeniqua Dining Slab",
        category: Category::Dining,
        rands: 58_000,
        dimensions: "2800 x 1100 mm",
        wood: "Matumi",
        resin: "Clear",
        image: "https://images.unsplash.com/photo-1595428774223-ef52624120d2?auto=format&fit=crop&q=80&w=1000",
        lead_time: LeadTime::CustomOrder,
        description: "Ancient Matumi wood, known for its density and rich history, paired with crystal clear resin to highlight the natural edge.",
        features: &[
            "Heritage Timber",
            "Glass-like Clarity",
            "Family Sized",
            "Custom Base Options",
        ],
    },
    ProductSeed {
        id: "6",
        name: "Karoo Round",
        category: Category::Coffee,
        rands: 21_000,
        dimensions: "900 mm Diameter",
        wood: "Olive Wood",
        resin: "Amber",
        image: "https://images.unsplash.com/photo-1574627883279-450f61d2446a?auto=format&fit=crop&q=80&w=1000",
        lead_time: LeadTime::InStock,
        description: "A circular coffee table capturing the golden hues of the Karoo. Olive wood grain swirls compliment the amber resin.",
        features: &[
            "Round Profile",
            "Warm Tones",
            "Tripod Base",
            "Compact Footprint",
        ],
    },
];

struct TestimonialSeed {
    id: u32,
    name: &'static str,
    location: &'static str,
    text: &'static str,
    rating: Rating,
}

const TESTIMONIALS: [TestimonialSeed; 3] = [
    TestimonialSeed {
        id: 1,
        name: "Sarah van der Merwe",
        location: "Constantia, Cape Town",
        text: "The craftsmanship is simply undeniable. It anchors our dining room perfectly. The team was communicative throughout the custom build process.",
        rating: Rating::FIVE,
    },
    TestimonialSeed {
        id: 2,
        name: "Michael Adebayo",
        location: "Sandton, Johannesburg",
        text: "I was looking for something that spoke to African luxury without being cliché. Arden Way delivered a boardroom table that impresses every client.",
        rating: Rating::FIVE,
    },
    TestimonialSeed {
        id: 3,
        name: "Elena Rossi",
        location: "Umhlanga",
        text: "Beautiful finish and sturdy construction. Delivered to KZN without a scratch. Highly recommended for bespoke furniture.",
        rating: Rating::FIVE,
    },
];

pub(super) fn products() -> Vec<Product> {
    PRODUCTS.iter().map(Product::from).collect()
}

pub(super) fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .map(|seed| Testimonial {
            id: TestimonialId::new(seed.id),
            name: seed.name.to_owned(),
            location: seed.location.to_owned(),
            text: seed.text.to_owned(),
            rating: seed.rating,
        })
        .collect()
}
