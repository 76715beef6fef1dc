//! Read-only dish catalog
//!
//! The catalog only feeds `OrderStateManager::add_item`; the manager never
//! looks prices up again after a dish is in the cart.

use shared::MenuItem;

/// Category filter value that matches every dish
pub const ALL_CATEGORIES: &str = "all";

/// (id, name, description, price, category, rating, cook time, vegetarian)
type DishRow = (
    &'static str,
    &'static str,
    &'static str,
    f64,
    &'static str,
    f32,
    &'static str,
    bool,
);

#[rustfmt::skip]
const HOUSE_MENU: &[DishRow] = &[
    ("1", "Bruschetta Trio", "Three varieties: classic tomato, prosciutto & fig, and ricotta & honey", 14.0, "appetizers", 4.8, "10 min", true),
    ("2", "Antipasto Platter", "Selection of Italian meats, cheeses, olives, and marinated vegetables", 18.0, "appetizers", 4.9, "5 min", false),
    ("3", "Arancini", "Crispy risotto balls stuffed with mozzarella and served with marinara", 12.0, "appetizers", 4.7, "15 min", true),
    ("4", "Osso Buco", "Slow-braised veal shanks with saffron risotto and gremolata", 35.0, "mains", 4.9, "45 min", false),
    ("5", "Lobster Ravioli", "Handmade pasta filled with lobster in a creamy tomato sauce", 28.0, "mains", 4.8, "25 min", false),
    ("6", "Margherita Pizza", "Wood-fired pizza with San Marzano tomatoes, fresh mozzarella, and basil", 22.0, "mains", 4.7, "12 min", true),
    ("7", "Chicken Parmigiana", "Breaded chicken breast with marinara and mozzarella over pasta", 24.0, "mains", 4.6, "30 min", false),
    ("8", "Seafood Linguine", "Fresh clams, mussels, and shrimp in a white wine garlic sauce", 26.0, "mains", 4.8, "20 min", false),
    ("9", "Tiramisu", "Classic Italian dessert with mascarpone, espresso, and cocoa", 12.0, "desserts", 4.9, "15 min", true),
    ("10", "Panna Cotta", "Silky vanilla custard with fresh berry compote", 10.0, "desserts", 4.7, "10 min", true),
    ("11", "Gelato Trio", "Three scoops of artisanal gelato: pistachio, stracciatella, and limoncello", 9.0, "desserts", 4.8, "5 min", true),
    ("12", "Chianti Classico", "Full-bodied red wine from Tuscany with notes of cherry and spice", 45.0, "drinks", 4.8, "0 min", false),
    ("13", "Limoncello", "Traditional Italian lemon liqueur, perfect digestif", 8.0, "drinks", 4.7, "0 min", false),
    ("14", "Espresso", "Rich, authentic Italian espresso", 4.0, "drinks", 4.9, "2 min", false),
];

/// Fixed list of orderable dishes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The restaurant's standard menu
    pub fn house_menu() -> Self {
        let items = HOUSE_MENU
            .iter()
            .map(
                |&(id, name, description, price, category, rating, cook_time, vegetarian)| {
                    MenuItem {
                        item_id: id.to_string(),
                        name: name.to_string(),
                        description: description.to_string(),
                        unit_price: price,
                        category: category.to_string(),
                        media_ref: Some(format!("dishes/{id}.jpg")),
                        rating: Some(rating),
                        cook_time: Some(cook_time.to_string()),
                        is_vegetarian: vegetarian,
                        is_spicy: false,
                    }
                },
            )
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.item_id == item_id)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }

    /// Dishes in `category`; [`ALL_CATEGORIES`] returns everything
    pub fn by_category(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| category == ALL_CATEGORIES || item.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_menu_lookup() {
        let catalog = Catalog::house_menu();
        assert_eq!(catalog.items().len(), 14);

        let pizza = catalog.get("6").unwrap();
        assert_eq!(pizza.name, "Margherita Pizza");
        assert_eq!(pizza.unit_price, 22.0);
        assert!(pizza.is_vegetarian);
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_categories_in_menu_order() {
        let catalog = Catalog::house_menu();
        assert_eq!(
            catalog.categories(),
            vec!["appetizers", "mains", "desserts", "drinks"]
        );
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::house_menu();
        assert_eq!(catalog.by_category("desserts").len(), 3);
        assert_eq!(catalog.by_category(ALL_CATEGORIES).len(), 14);
        assert!(catalog.by_category("pizza").is_empty());
    }
}
