//! Seed catalog loaded at startup.

use super::models::{Category, Product};

fn category(id: i64, name: &str, description: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

fn product(
    id: i64,
    name: &str,
    category_id: i64,
    price: f64,
    unit: &str,
    brand: Option<&str>,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
        price,
        unit: unit.to_string(),
        is_available: true,
        brand: brand.map(str::to_string),
        description: Some(description.to_string()),
    }
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        category(1, "Vegetables", "Fresh vegetables"),
        category(2, "Fruits", "Seasonal and imported fruits"),
        category(3, "Dairy & Eggs", "Milk, curd, paneer, eggs, etc."),
        category(4, "Staples & Grains", "Rice, wheat, pulses, oils"),
        category(5, "Snacks & Beverages", "Chips, biscuits, tea, coffee, juices"),
    ]
}

pub fn seed_products() -> Vec<Product> {
    vec![
        // Vegetables
        product(101, "Tomato", 1, 40.0, "kg", None, "Fresh red tomatoes"),
        product(102, "Potato", 1, 30.0, "kg", None, "Regular potatoes"),
        product(103, "Onion", 1, 35.0, "kg", None, "Red onions"),
        product(104, "Cucumber", 1, 50.0, "kg", None, "Green cucumbers"),
        // Fruits
        product(201, "Banana (Dozen)", 2, 60.0, "dozen", None, "Fresh ripe bananas"),
        product(202, "Apple (Kashmiri)", 2, 180.0, "kg", None, "Kashmiri apples"),
        product(203, "Orange", 2, 120.0, "kg", None, "Juicy oranges"),
        product(204, "Grapes (Seedless)", 2, 150.0, "kg", None, "Green seedless grapes"),
        // Dairy & Eggs
        product(301, "Toned Milk 1L", 3, 60.0, "L", Some("Amul"), "Toned milk, 1 litre pack"),
        product(302, "Curd 500g", 3, 45.0, "g", Some("Mother Dairy"), "Fresh dahi 500g"),
        product(303, "Paneer 200g", 3, 85.0, "g", Some("Amul"), "Paneer block 200g"),
        product(304, "Eggs (6 pack)", 3, 55.0, "pack", None, "Pack of 6 eggs"),
        // Staples & Grains
        product(
            401,
            "Basmati Rice 5kg",
            4,
            650.0,
            "pack",
            Some("India Gate"),
            "5kg basmati rice",
        ),
        product(402, "Wheat Flour 5kg", 4, 280.0, "pack", Some("Aashirvaad"), "5kg atta"),
        product(403, "Toor Dal 1kg", 4, 160.0, "kg", None, "Toor/Arhar dal"),
        product(
            404,
            "Sunflower Oil 1L",
            4,
            160.0,
            "L",
            Some("Fortune"),
            "Refined sunflower oil 1L",
        ),
        // Snacks & Beverages
        product(501, "Potato Chips 100g", 5, 30.0, "g", Some("Lays"), "Classic salted chips"),
        product(502, "Marie Biscuits 200g", 5, 40.0, "g", Some("Britannia"), "Marie biscuits"),
        product(503, "Tea 250g", 5, 120.0, "g", Some("Tata Tea"), "Tea powder 250g"),
        product(504, "Instant Coffee 50g", 5, 180.0, "g", Some("Nescafe"), "Instant coffee jar"),
    ]
}
