use rust_decimal::Decimal;

use crate::domain::product::Product;

/// Fixed product catalog served by the storefront.
///
/// Built once at startup and shared read-only with every handler; there is
/// no mutation, persistence or reload path.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog with its ten fixed products, in id order.
    pub fn new() -> Self {
        let products = vec![
            product(
                1,
                "A Collection of Bad Moments",
                "Sky Trail",
                "Odnajdź się w samym centrum trudnych sytuacji - i wyjdź z nich cało",
                Decimal::new(14_49, 2),
            ),
            product(
                2,
                "Miasmata",
                "Ion FX",
                "Eksploruj zapomnianą wyspę, znajdź lek na tajemniczą chorobę, a przede wszystkim przetrwaj",
                Decimal::new(53_99, 2),
            ),
            product(
                3,
                "Dead Secret",
                "Robot Invader",
                "Rozwiąż zagadkę zabójcy zanim staniesz się następną ofiarą",
                Decimal::new(53_99, 2),
            ),
            product(
                4,
                "Unearthed: Trail of Ibn Battuta",
                "Semaphore",
                "Poczuj się jak ubogi kuzyn Nathana Drake'a",
                Decimal::new(17_99, 2),
            ),
            product(
                5,
                "Kholat",
                "IMGN.PRO",
                "Odkryj przyczyny tragedii na Przełęczy Diatłowa - i wyjdź z tego cało",
                Decimal::new(49_99, 2),
            ),
            product(
                6,
                "Flatout 3",
                "Team 6",
                "Kultowa seria powraca w budżetowej odsłonie",
                Decimal::new(8_99, 2),
            ),
            product(
                7,
                "Pineview Drive - Homeless",
                "VIS Games",
                "Sequel niszowego horroru, w pełnoprawnej odsłonie",
                Decimal::new(64_99, 2),
            ),
            product(
                8,
                "Night Book",
                "Wales Interactive",
                "Thriller FMV o okultystycznym zabarwieniu. Występuje między innymi rewelacyjny Colin Salmon",
                Decimal::new(67_99, 2),
            ),
            product(
                9,
                "雪女",
                "Chilla's Art",
                "Masz jedną szansę, by uwolnić dzieci porwane przez Yuki Onnę, w nowym retro horrorze stylizowanym na lata 90.",
                Decimal::new(22_99, 2),
            ),
            product(
                10,
                "Balan Wonderworld",
                "Square Enix",
                "Piękne światy i nieprzemyślany gameplay - to wszystko znajdziesz w tej platformówce",
                Decimal::new(165_00, 2),
            ),
        ];

        Self { products }
    }

    /// All catalog products, in id order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether `product_id` refers to a catalog entry.
    pub fn contains(&self, product_id: i32) -> bool {
        self.products.iter().any(|product| product.id == product_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn product(id: i32, name: &str, developer: &str, description: &str, price: Decimal) -> Product {
    Product {
        id,
        name: name.to_string(),
        developer: developer.to_string(),
        description: description.to_string(),
        price,
    }
}
