//! Demonstration rows inserted into a fresh catalog

use crate::core::coffee::{CoffeeType, NewCoffee, RoastDegree};

/// (name, roast, type, description, price, volume)
const DEMO_ROWS: [(&str, RoastDegree, CoffeeType, &str, f64, f64); 7] = [
    (
        "Эфиопия Иргачефф",
        RoastDegree::Medium,
        CoffeeType::Beans,
        "Цветочные и цитрусовые ноты с яркой кислотностью",
        1250.0,
        250.0,
    ),
    (
        "Колумбия Супремо",
        RoastDegree::Dark,
        CoffeeType::Ground,
        "Шоколадный вкус с ореховыми нотами",
        980.0,
        250.0,
    ),
    (
        "Кения АА",
        RoastDegree::Light,
        CoffeeType::Beans,
        "Ягодные тона с винным послевкусием",
        1450.0,
        200.0,
    ),
    (
        "Бразилия Сантос",
        RoastDegree::Medium,
        CoffeeType::Ground,
        "Ореховый вкус с сладким карамельным послевкусием",
        850.0,
        500.0,
    ),
    (
        "Гватемала Антивей",
        RoastDegree::Dark,
        CoffeeType::Beans,
        "Дымный аромат с пряными нотами",
        1100.0,
        300.0,
    ),
    (
        "Эспрессо Бленд",
        RoastDegree::Dark,
        CoffeeType::Ground,
        "Сбалансированный вкус для эспрессо",
        920.0,
        400.0,
    ),
    (
        "Коста Рика Тарразу",
        RoastDegree::Medium,
        CoffeeType::Beans,
        "Яркий вкус с нотками карамели и орехов",
        1350.0,
        250.0,
    ),
];

/// The fixed demonstration catalog, in insertion order
pub fn demo_coffees() -> Vec<NewCoffee> {
    DEMO_ROWS
        .iter()
        .map(
            |&(name, roast_degree, coffee_type, description, price, volume)| NewCoffee {
                name: name.to_string(),
                roast_degree,
                coffee_type,
                description: description.to_string(),
                price,
                volume,
            },
        )
        .collect()
}
