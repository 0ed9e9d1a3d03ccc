//! Fake data generation helpers.
//!
//! Provides deterministic fake text for the store tables: customer names,
//! product names, order descriptions and SKUs.

use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Product adjectives
const PRODUCT_ADJECTIVES: &[&str] = &[
    "Awesome",
    "Ergonomic",
    "Fantastic",
    "Generic",
    "Gorgeous",
    "Handcrafted",
    "Handmade",
    "Incredible",
    "Intelligent",
    "Licensed",
    "Practical",
    "Refined",
    "Rustic",
    "Sleek",
    "Small",
    "Tasty",
    "Unbranded",
];

/// Product materials
const PRODUCT_MATERIALS: &[&str] = &[
    "Bamboo", "Bronze", "Concrete", "Cotton", "Frozen", "Fresh", "Granite", "Marble", "Metal",
    "Plastic", "Rubber", "Soft", "Steel", "Wooden",
];

/// Product nouns
const PRODUCT_NOUNS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chicken", "Chips", "Computer", "Fish",
    "Gloves", "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt", "Shoes",
    "Soap", "Table", "Towels", "Tuna",
];

/// Openers for order descriptions
const DESCRIPTION_OPENERS: &[&str] = &[
    "The",
    "Our",
    "This",
    "Introducing the",
    "Discover the",
    "Experience the",
];

/// Closing phrases for order descriptions
const DESCRIPTION_PHRASES: &[&str] = &[
    "combines comfort with everyday durability",
    "is built for long-lasting performance",
    "ships with a two-year limited warranty",
    "features a slim profile and a lightweight frame",
    "is designed to fit your lifestyle",
    "brings premium quality at an honest price",
    "keeps up with the demands of a busy day",
    "pairs well with the rest of the collection",
];

/// Fake data generator with deterministic RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a person's full display name
    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// Generate a product name, e.g. "Handcrafted Granite Chair"
    pub fn product_name(&mut self) -> String {
        let adj = self.pick(PRODUCT_ADJECTIVES);
        let material = self.pick(PRODUCT_MATERIALS);
        let noun = self.pick(PRODUCT_NOUNS);
        format!("{} {} {}", adj, material, noun)
    }

    /// Generate a one-sentence product blurb for an order description
    pub fn product_description(&mut self) -> String {
        let opener = self.pick(DESCRIPTION_OPENERS);
        let adj = self.pick(PRODUCT_ADJECTIVES).to_lowercase();
        let noun = self.pick(PRODUCT_NOUNS).to_lowercase();
        let phrase = self.pick(DESCRIPTION_PHRASES);
        format!("{} {} {} {}.", opener, adj, noun, phrase)
    }

    /// Generate a random version-4 UUID string for use as a SKU
    pub fn sku(&mut self) -> String {
        format!(
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.rng.random::<u32>(),
            self.rng.random::<u16>(),
            (self.rng.random::<u16>() & 0x0FFF) | 0x4000, // Version 4
            (self.rng.random::<u16>() & 0x3FFF) | 0x8000, // Variant
            self.rng.random::<u64>() & 0xFFFF_FFFF_FFFF_u64
        )
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items[self.rng.random_range(0..items.len())]
    }
}
