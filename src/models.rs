//! Data models for rooms, furniture placements and layout results

use serde::{Deserialize, Deserializer, Serialize};

/// Room dimensions and budget as submitted to the layout service.
///
/// Ranges are enforced by the form, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub length: f64, // meters, top-to-bottom on the plan
    pub width: f64,  // meters, left-to-right on the plan
    pub budget: f64,
}

/// One furniture item positioned in the room, in meters.
///
/// The service sends placements either flat or with the descriptive fields
/// nested under `furniture`. Both shapes deserialize into this type, so the
/// rest of the crate only ever sees one form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PlacementWire")]
pub struct FurniturePlacement {
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64, // depth
    pub price: f64,
}

impl FurniturePlacement {
    /// Name for display; unnamed items show as blank.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// True when the whole footprint lies inside the room.
    pub fn fits_in(&self, room: &RoomSpec) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= room.width
            && self.y + self.length <= room.length
    }

    /// Open-interval overlap: touching edges do not count.
    pub fn overlaps(&self, other: &FurniturePlacement) -> bool {
        !(self.x + self.width <= other.x
            || self.x >= other.x + other.width
            || self.y + self.length <= other.y
            || self.y >= other.y + other.length)
    }
}

/// Descriptive fields as they appear under `furniture` in the nested shape.
#[derive(Debug, Default, Deserialize)]
struct FurnitureWire {
    name: Option<String>,
    width: Option<f64>,
    length: Option<f64>,
    depth: Option<f64>,
    price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct PlacementWire {
    name: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    length: Option<f64>,
    price: Option<f64>,
    furniture: Option<FurnitureWire>,
}

impl From<PlacementWire> for FurniturePlacement {
    fn from(wire: PlacementWire) -> Self {
        let nested = wire.furniture.unwrap_or_default();
        Self {
            name: wire.name.or(nested.name),
            x: wire.x.unwrap_or(0.0),
            y: wire.y.unwrap_or(0.0),
            width: wire.width.or(nested.width).unwrap_or(0.0),
            length: wire
                .length
                .or(nested.length)
                .or(nested.depth)
                .unwrap_or(0.0),
            price: wire.price.or(nested.price).unwrap_or(0.0),
        }
    }
}

/// Complete response of the layout service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub furniture: Vec<FurniturePlacement>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cost: f64, // trusted as sent, see calculator::reconcile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Read an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry of the furniture catalog served at `GET /furniture`.
///
/// The service reports an item's depth as `depth`, `length` or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogWire")]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub price: f64,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogWire {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    width: Option<f64>,
    length: Option<f64>,
    depth: Option<f64>,
    price: Option<f64>,
    category: Option<String>,
}

impl From<CatalogWire> for CatalogItem {
    fn from(wire: CatalogWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            width: wire.width.unwrap_or(0.0),
            length: wire.length.or(wire.depth).unwrap_or(0.0),
            price: wire.price.unwrap_or(0.0),
            category: wire.category,
        }
    }
}
