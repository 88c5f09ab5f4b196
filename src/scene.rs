//! Mapping of a room and its placements from meters to pixels

use crate::appearance::{Appearance, Palette};
use crate::models::{FurniturePlacement, LayoutResult, RoomSpec};

/// Fixed rendering scale shared by every floor plan.
pub const PIXELS_PER_METER: f64 = 60.0;

/// Margin around the room on every side of the canvas, in pixels.
pub const CANVAS_PADDING: f64 = 20.0;

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self
        }
    }
}

/// Map a placement's footprint to pixels relative to the room origin.
///
/// Linear in `scale`; nothing is clamped, so overflowing items stay where
/// the service put them.
pub fn to_pixels(placement: &FurniturePlacement, scale: f64) -> PixelRect {
    PixelRect {
        left: placement.x * scale,
        top: placement.y * scale,
        width: placement.width * scale,
        height: placement.length * scale,
    }
}

/// A placement ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub label: String,
    pub price: f64,
    /// Relative to the room's top-left corner.
    pub rect: PixelRect,
    pub appearance: Appearance,
}

impl SceneItem {
    pub fn tooltip(&self) -> String {
        format!("{} - ${:.2}", self.label, self.price)
    }
}

/// Pixel-space description of a whole floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub scale: f64,
    pub padding: f64,
    pub room_width_m: f64,
    pub room_length_m: f64,
    /// Room area in pixels, without padding.
    pub room_px: (f64, f64),
    pub items: Vec<SceneItem>,
}

impl Scene {
    /// Build a scene at the standard scale.
    pub fn build(room: &RoomSpec, layout: &LayoutResult, palette: &Palette) -> Self {
        Self::with_scale(room, layout, palette, PIXELS_PER_METER)
    }

    pub fn with_scale(room: &RoomSpec, layout: &LayoutResult, palette: &Palette, scale: f64) -> Self {
        let items = layout
            .furniture
            .iter()
            .map(|placement| SceneItem {
                label: placement.label().to_string(),
                price: placement.price,
                rect: to_pixels(placement, scale),
                appearance: palette.resolve(placement.name.as_deref()).clone(),
            })
            .collect();

        Self {
            scale,
            padding: CANVAS_PADDING,
            room_width_m: room.width,
            room_length_m: room.length,
            room_px: (room.width * scale, room.length * scale),
            items,
        }
    }

    /// Full canvas size including padding on both sides.
    pub fn canvas_size(&self) -> (f64, f64) {
        (
            self.room_px.0 + self.padding * 2.0,
            self.room_px.1 + self.padding * 2.0,
        )
    }

    /// Item rectangle in canvas coordinates.
    pub fn canvas_rect(&self, item: &SceneItem) -> PixelRect {
        item.rect.offset(self.padding, self.padding)
    }

    pub fn dimension_caption(&self) -> String {
        format!("{}m × {}m", self.room_width_m, self.room_length_m)
    }

    pub fn scale_legend(&self) -> String {
        format!("Scale: 1m = {}px", self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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
    fn placement_maps_linearly() {
        let rect = to_pixels(&sofa(), PIXELS_PER_METER);
        assert_eq!(rect, PixelRect { left: 60.0, top: 60.0, width: 120.0, height: 60.0 });
    }

    #[test]
    fn doubling_the_scale_doubles_every_value() {
        let p = FurniturePlacement { x: 0.7, y: 1.3, width: 2.2, length: 0.9, ..sofa() };
        for scale in [1.0, 13.0, 60.0, 97.5] {
            let a = to_pixels(&p, scale);
            let b = to_pixels(&p, scale * 2.0);
            assert_eq!(b.left, a.left * 2.0);
            assert_eq!(b.top, a.top * 2.0);
            assert_eq!(b.width, a.width * 2.0);
            assert_eq!(b.height, a.height * 2.0);
        }
    }

    #[test]
    fn canvas_adds_symmetric_padding() {
        let layout = LayoutResult { furniture: vec![sofa()], total_cost: 900.0, ..Default::default() };
        let scene = Scene::build(&room(), &layout, &Palette::standard());
        assert_eq!(scene.room_px, (240.0, 300.0));
        assert_eq!(scene.canvas_size(), (280.0, 340.0));
        assert_eq!(
            scene.canvas_rect(&scene.items[0]),
            PixelRect { left: 80.0, top: 80.0, width: 120.0, height: 60.0 }
        );
        assert_eq!(scene.items[0].tooltip(), "Sofa - $900.00");
        assert_eq!(scene.dimension_caption(), "4m × 5m");
        assert_eq!(scene.scale_legend(), "Scale: 1m = 60px");
    }

    #[test]
    fn overflowing_items_are_not_clamped() {
        let far = FurniturePlacement { x: 3.5, y: 4.8, ..sofa() };
        let layout = LayoutResult { furniture: vec![far], ..Default::default() };
        let scene = Scene::build(&room(), &layout, &Palette::standard());
        let rect = scene.items[0].rect;
        assert_eq!(rect.left + rect.width, 330.0);
        assert!(rect.left + rect.width > scene.room_px.0);
    }

    #[test]
    fn flat_and_nested_items_render_identically() {
        let layout: LayoutResult = serde_json::from_value(json!({
            "furniture": [
                { "name": "Bed", "x": 0.5, "y": 0.5, "width": 2.0, "length": 2.0, "price": 1299.99 },
                { "x": 0.5, "y": 0.5, "furniture": { "name": "Bed", "width": 2.0, "length": 2.0, "price": 1299.99 } }
            ],
            "totalCost": 2599.98
        }))
        .unwrap();
        let scene = Scene::build(&room(), &layout, &Palette::standard());
        assert_eq!(scene.items[0], scene.items[1]);
    }

    #[test]
    fn unnamed_items_use_fallback_appearance() {
        let layout = LayoutResult {
            furniture: vec![FurniturePlacement { name: None, ..sofa() }],
            ..Default::default()
        };
        let palette = Palette::standard();
        let scene = Scene::build(&room(), &layout, &palette);
        assert_eq!(&scene.items[0].appearance, palette.fallback());
        assert_eq!(scene.items[0].label, "");
    }
}
