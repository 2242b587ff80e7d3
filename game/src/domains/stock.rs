use serde::{Deserialize, Serialize};

use crate::domains::map::Restaurant;

pub const SPIT_THEFT_DURATION: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dish {
    TacosXxl,
    Kebab,
}

impl Dish {
    pub fn for_restaurant(restaurant: Restaurant) -> Dish {
        match restaurant {
            Restaurant::Tacos => Dish::TacosXxl,
            Restaurant::Kebab => Dish::Kebab,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dish::TacosXxl => "Tacos XXL",
            Dish::Kebab => "Kebab",
        }
    }

    pub fn recipe(self) -> &'static [&'static str] {
        match self {
            Dish::TacosXxl => &["galette", "viande", "sauce_fromagere", "frites", "sel"],
            Dish::Kebab => &[
                "pain_pita",
                "viande_kebab",
                "salade",
                "tomates",
                "oignons",
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
    pub max: u32,
    pub unit_price: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stock {
    IngredientsConsumed {
        restaurant: Restaurant,
        dish: Dish,
    },
    IngredientRestocked {
        restaurant: Restaurant,
        name: String,
        amount: u32,
        cost: i32,
    },
    SpitStolen {
        restaurant: Restaurant,
        until: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StockError {
    MissingIngredient { name: String },
    UnknownIngredient { name: String },
    StockFull { name: String },
}

/// Per-restaurant ingredient pool. Owned exclusively by one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodStock {
    pub restaurant: Restaurant,
    pub ingredients: Vec<Ingredient>,
    has_spit: bool,
    spit_stolen_until: f32,
}

fn ingredient(name: &str, quantity: u32, max: u32, unit_price: f32) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        quantity,
        max,
        unit_price,
    }
}

impl FoodStock {
    pub fn new(restaurant: Restaurant) -> Self {
        let ingredients = match restaurant {
            Restaurant::Tacos => vec![
                ingredient("galette", 20, 30, 2.0),
                ingredient("viande", 15, 25, 5.0),
                ingredient("sauce_fromagere", 25, 40, 1.0),
                ingredient("frites", 30, 50, 2.0),
                ingredient("sel", 50, 100, 0.5),
            ],
            Restaurant::Kebab => vec![
                ingredient("pain_pita", 20, 30, 2.0),
                ingredient("viande_kebab", 15, 25, 6.0),
                ingredient("salade", 25, 40, 1.0),
                ingredient("tomates", 20, 35, 1.0),
                ingredient("oignons", 25, 40, 1.0),
                ingredient("sauce_blanche", 30, 50, 1.0),
            ],
        };
        Self {
            restaurant,
            ingredients,
            has_spit: true,
            spit_stolen_until: 0.0,
        }
    }

    fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ing| ing.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|ing| ing.name == name)
    }

    pub fn quantity(&self, name: &str) -> u32 {
        self.get(name).map(|ing| ing.quantity).unwrap_or(0)
    }

    /// Atomic check-then-consume: either every listed ingredient is
    /// decremented by one, or nothing changes and the first missing
    /// ingredient is reported.
    pub fn use_recipe(&mut self, recipe: &[&str]) -> Result<(), StockError> {
        for name in recipe {
            if let Some(ing) = self.get(name) {
                if ing.quantity < 1 {
                    return Err(StockError::MissingIngredient {
                        name: name.to_string(),
                    });
                }
            }
        }
        for name in recipe {
            if let Some(ing) = self.get_mut(name) {
                ing.quantity -= 1;
            }
        }
        Ok(())
    }

    /// Refills an ingredient, by default up to its maximum. Returns the
    /// amount added and its cost; the caller settles the money.
    pub fn restock(&mut self, name: &str, amount: Option<u32>) -> Result<(u32, i32), StockError> {
        let ing = self
            .get_mut(name)
            .ok_or_else(|| StockError::UnknownIngredient {
                name: name.to_string(),
            })?;
        let deficit = ing.max - ing.quantity;
        let amount = amount.unwrap_or(deficit).min(deficit);
        if amount == 0 {
            return Err(StockError::StockFull {
                name: name.to_string(),
            });
        }
        let cost = (amount as f32 * ing.unit_price) as i32;
        ing.quantity += amount;
        Ok((amount, cost))
    }

    /// Amount and cost of a full refill, without mutating.
    pub fn restock_cost(&self, name: &str) -> Result<(u32, i32), StockError> {
        let ing = self.get(name).ok_or_else(|| StockError::UnknownIngredient {
            name: name.to_string(),
        })?;
        let deficit = ing.max - ing.quantity;
        if deficit == 0 {
            return Err(StockError::StockFull {
                name: name.to_string(),
            });
        }
        Ok((deficit, (deficit as f32 * ing.unit_price) as i32))
    }

    /// Cost of refilling everything to maximum, without mutating.
    pub fn restock_all_cost(&self) -> i32 {
        self.ingredients
            .iter()
            .map(|ing| ((ing.max - ing.quantity) as f32 * ing.unit_price) as i32)
            .sum()
    }

    /// Refills every ingredient to maximum; ingredients already full are
    /// skipped. Returns one (name, amount, cost) entry per refill.
    pub fn restock_all(&mut self) -> Vec<(String, u32, i32)> {
        let names: Vec<String> = self.ingredients.iter().map(|ing| ing.name.clone()).collect();
        let mut refills = vec![];
        for name in names {
            if let Ok((amount, cost)) = self.restock(&name, None) {
                refills.push((name, amount, cost));
            }
        }
        refills
    }

    pub fn is_spit_available(&self, now: f32) -> bool {
        self.has_spit && now >= self.spit_stolen_until
    }

    pub fn steal_spit(&mut self, now: f32, duration: f32) {
        self.spit_stolen_until = now + duration;
    }

    pub fn spit_cooldown(&self, now: f32) -> f32 {
        (self.spit_stolen_until - now).max(0.0)
    }
}
