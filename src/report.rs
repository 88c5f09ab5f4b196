//! Text report of a generated layout

use crate::appearance::Palette;
use crate::calculator::BudgetSummary;
use crate::models::{CatalogItem, LayoutResult, RoomSpec};

/// Header line describing the room, e.g. `4m × 5m room with $2000 budget`.
pub fn room_heading(room: &RoomSpec) -> String {
    format!("{}m × {}m room with ${} budget", room.width, room.length, room.budget)
}

/// Itemized furniture list.
pub fn format_furniture_list(layout: &LayoutResult, palette: &Palette) -> String {
    let mut output = String::from("=== Furniture Details ===\n");

    if layout.furniture.is_empty() {
        output.push_str("No furniture items placed in this layout\n");
        return output;
    }

    for placement in &layout.furniture {
        let appearance = palette.resolve(placement.name.as_deref());
        output.push_str(&format!(
            "{} {:<24} ${:>9.2}\n",
            appearance.icon,
            placement.label(),
            placement.price
        ));
        output.push_str(&format!("    At ({:.1}m, {:.1}m)\n", placement.x, placement.y));
        output.push_str(&format!(
            "    Size: {:.1}m × {:.1}m\n",
            placement.width, placement.length
        ));
    }
    output
}

/// Catalog table as printed by `catalog` and `sample --catalog`.
pub fn format_catalog(items: &[CatalogItem]) -> String {
    let mut output = format!(
        "{:<4} {:<20} {:<10} {:>12} {:>10}\n",
        "ID", "Name", "Category", "Size (m)", "Price ($)"
    );
    output.push_str(&format!("{}\n", "-".repeat(60)));

    for item in items {
        let size = format!("{:.1} × {:.1}", item.width, item.length);
        output.push_str(&format!(
            "{:<4} {:<20} {:<10} {:>12} {:>10.2}\n",
            item.id,
            item.name,
            item.category.as_deref().unwrap_or("-"),
            size,
            item.price
        ));
    }
    output
}

/// Placements that stick out of the room or overlap one another.
///
/// Informational only; nothing is moved or hidden.
pub fn placement_issues(layout: &LayoutResult, room: &RoomSpec) -> Vec<String> {
    let mut issues = Vec::new();
    let items = &layout.furniture;

    for (i, placement) in items.iter().enumerate() {
        if !placement.fits_in(room) {
            issues.push(format!("#{} {} extends beyond the room", i + 1, placement.label()));
        }
    }
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                issues.push(format!(
                    "#{} {} overlaps #{} {}",
                    i + 1,
                    a.label(),
                    j + 1,
                    b.label()
                ));
            }
        }
    }
    issues
}

/// Full report: heading, furniture list, budget panel, narrative and warnings.
pub fn format_report(
    room: &RoomSpec,
    layout: &LayoutResult,
    summary: &BudgetSummary,
    palette: &Palette,
) -> String {
    let mut output = String::from("Your Perfect Room Layout\n");
    output.push_str(&format!("{}\n\n", room_heading(room)));
    output.push_str(&format_furniture_list(layout, palette));
    output.push('\n');
    output.push_str(&summary.to_string());

    if let Some(reasoning) = layout.reasoning.as_deref().filter(|r| !r.is_empty()) {
        output.push_str(&format!("\nAI Insights:\n  {}\n", reasoning));
    }

    if !layout.warnings.is_empty() {
        output.push_str("\nService warnings:\n");
        for warning in &layout.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::reconcile;
    use crate::models::FurniturePlacement;

    fn room() -> RoomSpec {
        RoomSpec { length: 5.0, width: 4.0, budget: 2000.0 }
    }

    fn sofa() -> FurniturePlacement {
        FurniturePlacement {
            name: Some("Sofa".into()),
            x: 1.0,
            y: 1.0,
            width: 2.0,
            length: 1.0,
            price: 900.0,
        }
    }

    #[test]
    fn heading_mentions_dimensions_and_budget() {
        assert_eq!(room_heading(&room()), "4m × 5m room with $2000 budget");
    }

    #[test]
    fn list_shows_position_size_and_price() {
        let layout = LayoutResult { furniture: vec![sofa()], total_cost: 900.0, ..Default::default() };
        let list = format_furniture_list(&layout, &Palette::standard());
        assert!(list.contains("Sofa"));
        assert!(list.contains("$   900.00"));
        assert!(list.contains("At (1.0m, 1.0m)"));
        assert!(list.contains("Size: 2.0m × 1.0m"));
    }

    #[test]
    fn empty_layout_says_so() {
        let list = format_furniture_list(&LayoutResult::default(), &Palette::standard());
        assert_eq!(list, "=== Furniture Details ===\nNo furniture items placed in this layout\n");
    }

    #[test]
    fn issues_cover_overflow_and_overlap() {
        let layout = LayoutResult {
            furniture: vec![
                sofa(),
                FurniturePlacement { name: Some("Chair".into()), x: 2.5, y: 1.5, width: 0.5, length: 0.5, price: 149.99 },
                FurniturePlacement { name: Some("Bed".into()), x: 3.0, y: 3.5, width: 2.0, length: 2.0, price: 1299.99 },
            ],
            ..Default::default()
        };
        let issues = placement_issues(&layout, &room());
        assert_eq!(
            issues,
            vec![
                "#3 Bed extends beyond the room".to_string(),
                "#1 Sofa overlaps #2 Chair".to_string(),
            ]
        );
    }

    #[test]
    fn report_includes_reasoning_and_warnings() {
        let layout = LayoutResult {
            furniture: vec![sofa()],
            total_cost: 900.0,
            reasoning: Some("Sofa faces the window.".into()),
            warnings: vec!["Desk skipped: over budget".into()],
        };
        let summary = reconcile(&layout, &room());
        let report = format_report(&room(), &layout, &summary, &Palette::standard());
        assert!(report.starts_with("Your Perfect Room Layout\n4m × 5m room with $2000 budget\n"));
        assert!(report.contains("Budget used:  45.0% (normal)"));
        assert!(report.contains("AI Insights:\n  Sofa faces the window."));
        assert!(report.contains("  - Desk skipped: over budget"));
    }

    #[test]
    fn sample_catalog_prints_one_row_per_item() {
        let table = format_catalog(&crate::sample::sample_catalog());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 10);
        assert!(lines[0].starts_with("ID   Name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("1    Sofa"));
        assert!(lines[2].contains("2.2 × 0.9"));
        assert!(lines[2].ends_with("899.99"));
    }
}
