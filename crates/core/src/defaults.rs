//! Built-in catalog used when nothing has been stored yet.

use crate::catalog::{Catalog, Wishlist};
use crate::types::{Category, PaymentTier, PriceMap, Product, ProductId};

/// Collections shown on a fresh install.
pub const SECTIONS: [&str; 3] = ["Birthday Cakes", "Anniversary Cakes", "Celebration Cakes"];

const BIRTHDAY: &str = "Birthday Cakes";
const ANNIVERSARY: &str = "Anniversary Cakes";
const CELEBRATION: &str = "Celebration Cakes";

#[derive(Clone, Copy)]
enum Pricing {
    Weight(u32, u32),
    Piece(u32),
}

struct Seed {
    id: &'static str,
    name: &'static str,
    category: Category,
    sections: &'static [&'static str],
    description: &'static str,
    pricing: Pricing,
    /// Unsplash photo IDs, or full URLs.
    images: &'static [&'static str],
    tier: PaymentTier,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "vanilla",
        name: "Vanilla Cake",
        category: Category::Cake,
        sections: &[BIRTHDAY, CELEBRATION],
        description: "A classic, light, and airy vanilla sponge layered with our signature Madagascar vanilla bean cream. Perfectly balanced sweetness for every occasion.",
        pricing: Pricing::Weight(380, 700),
        images: &["1535141192574-5d4897c12636", "1517427294546-5aa12163d019"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "blackforest",
        name: "Blackforest Cake",
        category: Category::Cake,
        sections: &[BIRTHDAY, ANNIVERSARY],
        description: "Delectable layers of moist chocolate sponge, whipped cream, and tart cherries. Garnished with generous chocolate shavings and maraschino cherries.",
        pricing: Pricing::Weight(380, 700),
        images: &["1606890737304-57a1ca8a5b62", "1578985545062-69928b1d9587"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "butterscotch",
        name: "Butterscotch Cake",
        category: Category::Cake,
        sections: &[BIRTHDAY, CELEBRATION],
        description: "Crunchy butterscotch bits paired with a smooth caramel-infused cream. A nostalgic flavor that never fails to delight.",
        pricing: Pricing::Weight(380, 700),
        images: &["1542826438-bd32f43d626f", "1558301211-0d8c8ddee6ec"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "mango",
        name: "Mango Cake",
        category: Category::Cake,
        sections: &[BIRTHDAY, CELEBRATION],
        description: "Made with real Alphonso mango pulp and fresh cream. This seasonal favorite is light, refreshing, and burst with tropical flavor.",
        pricing: Pricing::Weight(380, 700),
        images: &[
            "https://drive.google.com/thumbnail?id=1cBKfJw4_gVb473_b_aRaVjvHwF0n6o4M&sz=w1000",
            "1607252650355-f7fd0460ccdb",
        ],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "strawberry",
        name: "Strawberry Cake",
        category: Category::Cake,
        sections: &[BIRTHDAY],
        description: "Fresh strawberry compote layered between soft pink sponge and creamy frosting. A sweet and fruity indulgence.",
        pricing: Pricing::Weight(380, 700),
        images: &["1565958011703-44f9829ba187", "1586985289066-63f6831c21f9"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "pineapple",
        name: "Pineapple Cake",
        category: Category::Cake,
        sections: &[CELEBRATION],
        description: "Classic tropical treat with juicy pineapple chunks and vanilla whipped cream. Garnished with a glazed cherry.",
        pricing: Pricing::Weight(380, 700),
        images: &["1551807501-807089c74574", "1506459225024-1428097a7e18"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "blueberry",
        name: "Blueberry Cake",
        category: Category::Cake,
        sections: &[ANNIVERSARY],
        description: "Indulgent cake layered with premium blueberry compote. The perfect blend of tangy and sweet for sophisticated palates.",
        pricing: Pricing::Weight(400, 760),
        images: &["1563729768640-d813a21e69da", "1619985632461-13352f504381"],
        tier: PaymentTier::Premium,
    },
    Seed {
        id: "rasmali",
        name: "Rasmalai Fusion Cake",
        category: Category::Cake,
        sections: &[CELEBRATION, ANNIVERSARY],
        description: "An exquisite fusion of traditional Indian Rasmalai and Western patisserie. Topped with pistachios, rose petals, and saffron strands.",
        pricing: Pricing::Weight(400, 760),
        images: &["1605807646983-377bc5a76493", "1587314168485-3236d6710814"],
        tier: PaymentTier::Premium,
    },
    Seed {
        id: "mixed-fruit",
        name: "Mixed Fruit Cake",
        category: Category::Cake,
        sections: &[BIRTHDAY],
        description: "A colorful cornucopia of seasonal fresh fruits layered in light cream. Fresh, healthy, and absolutely delicious.",
        pricing: Pricing::Weight(400, 760),
        images: &["1621303837174-89787a7d4729", "1488477304112-4944851de03d"],
        tier: PaymentTier::Premium,
    },
    Seed {
        id: "choco-truffle",
        name: "Chocolate Truffle",
        category: Category::Cake,
        sections: &[BIRTHDAY, ANNIVERSARY],
        description: "The ultimate for chocolate lovers. Rich dark chocolate ganache between layers of moist cocoa sponge.",
        pricing: Pricing::Weight(420, 820),
        images: &["1578985545062-69928b1d9587", "1588195538326-c5b1e9f80a1b"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "choco-hazelnut",
        name: "Chocolate Hazlnut",
        category: Category::Cake,
        sections: &[ANNIVERSARY],
        description: "Creamy hazelnut spread mixed with rich chocolate ganache. Topped with roasted hazelnut pieces for extra crunch.",
        pricing: Pricing::Weight(420, 820),
        images: &["1606312619070-d48b4c652a52", "1558961363-fa8fdf82db35"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "choco-ferrero",
        name: "Chocolate Ferrero",
        category: Category::Cake,
        sections: &[ANNIVERSARY],
        description: "Inspired by the world-famous truffle. Layers of hazelnut chocolate cream and wafer bits, topped with real Ferrero Rocher.",
        pricing: Pricing::Weight(420, 820),
        images: &["1508737804141-4c3b688e2546", "1571115177098-24ec42ed204d"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "choco-chips",
        name: "Chocolate Chocochips",
        category: Category::Cake,
        sections: &[BIRTHDAY],
        description: "A playful chocolate cake loaded with crunchy dark chocochips in every bite. Kids and adults love it alike!",
        pricing: Pricing::Weight(420, 820),
        images: &["1576618148400-f54bed99fcfd", "1550617931-e17a7b70dce2"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "biscoff-cheese",
        name: "Biscoff Cheesecake",
        category: Category::Cake,
        sections: &[CELEBRATION],
        description: "Creamy baked cheesecake on a Lotus Biscoff biscuit base, topped with Biscoff spread and cookie crumbs.",
        pricing: Pricing::Weight(430, 820),
        images: &["1621303837174-89787a7d4729", "1533134242443-d4fd215305ad"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "blueberry-cheese",
        name: "Blueberry Cheesecake",
        category: Category::Cake,
        sections: &[CELEBRATION],
        description: "Classic velvety cheesecake topped with our house-made blueberry preserve. A timeless elegance.",
        pricing: Pricing::Weight(430, 820),
        images: &["1626803775151-61d756612fcd", "1533134242443-d4fd215305ad"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "mango-cheese",
        name: "Mango Cheesecake",
        category: Category::Cake,
        sections: &[CELEBRATION],
        description: "A summer delight featuring smooth cheesecake swirled with fresh mango puree and topped with fresh fruit.",
        pricing: Pricing::Weight(430, 820),
        images: &["1627054247563-3a5a755d9b4b", "1519340333755-56e9c1d04579"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "strawberry-cheese",
        name: "Strawberry Cheesecake",
        category: Category::Cake,
        sections: &[CELEBRATION],
        description: "Elegant cheesecake featuring a sweet and tangy strawberry glaze. Perfectly smooth and rich.",
        pricing: Pricing::Weight(430, 820),
        images: &["1565958011703-44f9829ba187", "1464349141505-f93309a4d8c1"],
        tier: PaymentTier::Luxury,
    },
    Seed {
        id: "mawa-cake",
        name: "Mawa Cake",
        category: Category::Cake,
        sections: &[CELEBRATION],
        description: "The soul of Parsi baking. Rich, dense, and full of aromatic cardamom and mawa. Best enjoyed with tea.",
        pricing: Pricing::Piece(199),
        images: &["1602351447937-745cb720612f", "1621303837174-89787a7d4729"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "popsicle",
        name: "Popsicle",
        category: Category::Confectionery,
        sections: &[],
        description: "Refreshing fruit-based ice popsicles. Made with real fruit extracts and no artificial preservatives.",
        pricing: Pricing::Piece(39),
        images: &["1488900128323-21503983a07e", "1505394033641-40c6ad1178d1"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "donuts",
        name: "Sprinkle Donuts",
        category: Category::Confectionery,
        sections: &[],
        description: "Hand-dipped donuts with a choice of chocolate or vanilla glaze and colorful rainbow sprinkles.",
        pricing: Pricing::Piece(49),
        images: &["1551024601-bec78aea704b", "1612240498936-31f880609590"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "cupcake",
        name: "Gourmet Cupcake",
        category: Category::Confectionery,
        sections: &[],
        description: "Individual masterpieces of cake and frosting. Perfectly portioned joy for any celebration.",
        pricing: Pricing::Piece(89),
        images: &["1614707267537-b85af00c4b81", "1486427944299-d1955d23e34d"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "brownies",
        name: "Chocolate Brownies",
        category: Category::Confectionery,
        sections: &[],
        description: "Decadent, fudgy chocolate brownies that melt in your mouth. Made with premium Belgian chocolate.",
        pricing: Pricing::Piece(70),
        images: &["1610611382875-52b6540c7931", "1515037893149-de7f840978e2"],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "combo-box-1",
        name: "B'day Party Combo 1",
        category: Category::Confectionery,
        sections: &[],
        description: "The ultimate Party Box Trio: Includes a Classic Burger, Golden French Fries, and a Gourmet Cupcake. Joy in a box!",
        pricing: Pricing::Piece(129),
        images: &[
            "1571091718767-18b5b1457add",
            "1573080496219-bb080dd4f877",
            "1614707267537-b85af00c4b81",
        ],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "combo-box-2",
        name: "B'day Party Combo 2",
        category: Category::Confectionery,
        sections: &[],
        description: "Party Box Duo: Includes a Mini Pizza and a refreshing fruit Popsicle. Perfect for kids parties!",
        pricing: Pricing::Piece(129),
        images: &[
            "1513104890138-7c749659a591",
            "1488900128323-21503983a07e",
            "1566478989037-eec170784d0b",
        ],
        tier: PaymentTier::Standard,
    },
    Seed {
        id: "combo-box-3",
        name: "B'day Party Combo 3",
        category: Category::Confectionery,
        sections: &[],
        description: "Gourmet Trio: Creamy White Sauce Pasta, a Sprinkle Donut, and Potato Smiles. The perfect treat!",
        pricing: Pricing::Piece(129),
        images: &[
            "1473093226795-af9932fe5855",
            "1551024601-bec78aea704b",
            "1541592106381-b31e9677c0e5",
        ],
        tier: PaymentTier::Standard,
    },
];

fn image_url(image: &str) -> String {
    if image.starts_with("https://") {
        image.to_owned()
    } else {
        format!("https://images.unsplash.com/photo-{image}?auto=format&fit=crop&q=80&w=800")
    }
}

impl Seed {
    fn to_product(&self) -> Product {
        let prices = match self.pricing {
            Pricing::Weight(half, one) => PriceMap::by_weight(half, one),
            Pricing::Piece(piece) => PriceMap::per_piece(piece),
        };
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_owned(),
            category: self.category,
            sections: self.sections.iter().map(|s| (*s).to_owned()).collect(),
            description: self.description.to_owned(),
            prices,
            images: self.images.iter().map(|i| image_url(i)).collect(),
            payment_tier: self.tier,
        }
    }
}

/// Default product list.
#[must_use]
pub fn products() -> Vec<Product> {
    SEEDS.iter().map(Seed::to_product).collect()
}

/// Default collection list.
#[must_use]
pub fn sections() -> Vec<String> {
    SECTIONS.iter().map(|s| (*s).to_owned()).collect()
}

/// Default catalog: [`products`] and [`sections`].
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(products(), sections())
}

/// Default wishlist (empty).
#[must_use]
pub fn wishlist() -> Wishlist {
    Wishlist::default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;

    use super::*;
    use crate::search::FALLBACK_IDS;

    #[test]
    fn test_catalog_size() {
        let catalog = catalog();
        assert_eq!(catalog.products().len(), 25);
        assert_eq!(catalog.sections().len(), 3);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = products().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_every_product_is_priced_and_pictured() {
        for product in products() {
            assert!(!product.prices.is_empty(), "{} has no price", product.id);
            assert!(!product.images.is_empty(), "{} has no image", product.id);
        }
    }

    #[test]
    fn test_fallback_products_exist() {
        let catalog = catalog();
        for id in FALLBACK_IDS {
            assert!(catalog.find(id).is_some(), "{id} missing");
        }
    }

    #[test]
    fn test_representative_entries() {
        let catalog = catalog();
        let blueberry = catalog.find("blueberry").expect("blueberry");
        assert_eq!(blueberry.payment_tier, PaymentTier::Premium);
        assert_eq!(blueberry.prices.one_kg, Some(Decimal::from(760)));

        let mawa = catalog.find("mawa-cake").expect("mawa");
        assert_eq!(mawa.category, Category::Cake);
        assert_eq!(mawa.prices.piece, Some(Decimal::from(199)));

        let mango = catalog.find("mango").expect("mango");
        let first = mango.images.first().expect("mango image");
        assert!(first.starts_with("https://drive.google.com/thumbnail"));
    }

    #[test]
    fn test_confectionery_has_no_sections() {
        let catalog = catalog();
        assert_eq!(catalog.by_category(Category::Confectionery).count(), 7);
        assert!(catalog
            .by_category(Category::Confectionery)
            .all(|p| p.sections.is_empty()));
    }
}
