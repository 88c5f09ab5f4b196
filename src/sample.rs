//! Built-in sample data for rendering without a layout service

use crate::models::{CatalogItem, FurniturePlacement, LayoutResult, RoomSpec};

/// Room the sample layout was generated for.
pub fn sample_room() -> RoomSpec {
    RoomSpec {
        length: 5.0,
        width: 8.0,
        budget: 3000.0,
    }
}

fn placement(name: &str, x: f64, y: f64, width: f64, length: f64, price: f64) -> FurniturePlacement {
    FurniturePlacement {
        name: Some(name.to_string()),
        x,
        y,
        width,
        length,
        price,
    }
}

/// A living-room layout as the service would return it.
pub fn sample_layout() -> LayoutResult {
    LayoutResult {
        furniture: vec![
            placement("Sofa", 1.5, 2.0, 2.2, 0.9, 899.99),
            placement("Coffee Table", 1.8, 3.5, 1.2, 0.6, 249.99),
            placement("TV Stand", 0.5, 0.5, 1.8, 0.4, 349.99),
            placement("Bookshelf", 6.5, 0.5, 1.0, 0.3, 299.99),
            placement("Armchair", 5.0, 2.0, 0.9, 0.9, 449.99),
            placement("Side Table", 6.0, 2.0, 0.5, 0.5, 129.99),
        ],
        total_cost: 2379.94,
        reasoning: Some(
            "The sofa faces the TV stand as the focal point, with the coffee table in easy \
             reach. The bookshelf adds storage along the wall, and the armchair with its side \
             table forms a reading nook."
                .to_string(),
        ),
        warnings: Vec::new(),
    }
}

fn item(id: i64, name: &str, width: f64, length: f64, price: f64, category: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        width,
        length,
        price,
        category: Some(category.to_string()),
    }
}

pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        item(1, "Sofa", 2.2, 0.9, 899.99, "Seating"),
        item(2, "Coffee Table", 1.2, 0.6, 249.99, "Tables"),
        item(3, "TV Stand", 1.8, 0.4, 349.99, "Storage"),
        item(4, "Bookshelf", 1.0, 0.3, 299.99, "Storage"),
        item(5, "Armchair", 0.9, 0.9, 449.99, "Seating"),
        item(6, "Side Table", 0.5, 0.5, 129.99, "Tables"),
        item(7, "Dining Table", 1.8, 0.9, 599.99, "Tables"),
        item(8, "Chair", 0.5, 0.5, 149.99, "Seating"),
        item(9, "Bed", 2.0, 2.0, 1299.99, "Bedroom"),
        item(10, "Desk", 1.4, 0.7, 399.99, "Office"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::reconcile;

    #[test]
    fn sample_total_matches_its_items() {
        let summary = reconcile(&sample_layout(), &sample_room());
        assert_eq!(summary.total_items, 6);
        assert_eq!(summary.cost_mismatch(), None);
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn sample_items_fit_the_sample_room() {
        let room = sample_room();
        assert!(sample_layout().furniture.iter().all(|p| p.fits_in(&room)));
    }
}
