use game::map::Restaurant;
use game::stock::{FoodStock, StockError, SPIT_THEFT_DURATION};

fn set_quantity(stock: &mut FoodStock, name: &str, quantity: u32) {
    stock
        .ingredients
        .iter_mut()
        .find(|ing| ing.name == name)
        .unwrap()
        .quantity = quantity;
}

#[test]
fn test_use_recipe_is_atomic_on_missing_ingredient() {
    let mut stock = FoodStock::new(Restaurant::Tacos);
    set_quantity(&mut stock, "galette", 0);

    let result = stock.use_recipe(&["galette", "viande"]);

    assert_eq!(
        result,
        Err(StockError::MissingIngredient {
            name: "galette".to_string()
        })
    );
    assert_eq!(stock.quantity("viande"), 15);
    assert_eq!(stock.quantity("galette"), 0);
}

#[test]
fn test_use_recipe_consumes_one_of_each() {
    let mut stock = FoodStock::new(Restaurant::Kebab);
    stock.use_recipe(&["pain_pita", "viande_kebab"]).unwrap();
    assert_eq!(stock.quantity("pain_pita"), 19);
    assert_eq!(stock.quantity("viande_kebab"), 14);
}

#[test]
fn test_restock_fills_to_maximum_and_bills_the_deficit() {
    let mut stock = FoodStock::new(Restaurant::Tacos);
    set_quantity(&mut stock, "galette", 5);

    let (amount, cost) = stock.restock_cost("galette").unwrap();
    assert_eq!(amount, 25);
    assert_eq!(cost, 50);

    let (amount, cost) = stock.restock("galette", None).unwrap();
    assert_eq!((amount, cost), (25, 50));
    assert_eq!(stock.quantity("galette"), 30);
}

#[test]
fn test_restock_rejects_a_full_ingredient() {
    let mut stock = FoodStock::new(Restaurant::Tacos);
    set_quantity(&mut stock, "galette", 30);
    assert_eq!(
        stock.restock("galette", None),
        Err(StockError::StockFull {
            name: "galette".to_string()
        })
    );
}

#[test]
fn test_restock_rejects_unknown_ingredients() {
    let mut stock = FoodStock::new(Restaurant::Tacos);
    assert_eq!(
        stock.restock("ananas", None),
        Err(StockError::UnknownIngredient {
            name: "ananas".to_string()
        })
    );
}

#[test]
fn test_stolen_spit_comes_back_after_the_theft_window() {
    let mut stock = FoodStock::new(Restaurant::Kebab);
    assert!(stock.is_spit_available(10.0));

    stock.steal_spit(10.0, SPIT_THEFT_DURATION);

    assert!(!stock.is_spit_available(10.0));
    assert!(!stock.is_spit_available(39.9));
    assert!(stock.is_spit_available(40.0));
    assert_eq!(stock.spit_cooldown(25.0), 15.0);
}
