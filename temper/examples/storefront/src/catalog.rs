use temper::price::filter::PriceRange;

#[derive(Clone, Debug)]
pub struct Product {
    pub name: &'static str,
    pub brand: &'static str,
    pub price: f64,
}

pub const BRANDS: [(&str, &str); 7] = [
    ("bosch", "Bosch"),
    ("braun", "Braun"),
    ("philips", "Philips"),
    ("redmond", "Redmond"),
    ("polaris", "Polaris"),
    ("tefal", "Tefal"),
    ("vitek", "Vitek"),
];

pub fn products() -> Vec<Product> {
    vec![
        Product { name: "Чайник электрический", brand: "tefal", price: 2490.0 },
        Product { name: "Блендер погружной", brand: "braun", price: 5990.0 },
        Product { name: "Кофемашина", brand: "philips", price: 34990.0 },
        Product { name: "Мультиварка", brand: "redmond", price: 7490.0 },
        Product { name: "Пылесос беспроводной", brand: "bosch", price: 18990.0 },
        Product { name: "Утюг", brand: "polaris", price: 3290.5 },
        Product { name: "Тостер", brand: "vitek", price: 1890.0 },
        Product { name: "Посудомоечная машина", brand: "bosch", price: 1249990.0 },
    ]
}

/// Products matching the selected brands (any, if none) within the price range.
pub fn filter<'a>(
    products: &'a [Product],
    brands: &[String],
    range: &PriceRange,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| brands.is_empty() || brands.iter().any(|b| b == product.brand))
        .filter(|product| range.contains(product.price))
        .collect()
}
