//! Vehicle model types for the selection and comparison screens.

use crate::ids::ModelId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Body style classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BodyType {
    #[default]
    Sedan,
    Suv,
    Coupe,
    Hatchback,
    Truck,
    Van,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Sedan => "sedan",
            BodyType::Suv => "suv",
            BodyType::Coupe => "coupe",
            BodyType::Hatchback => "hatchback",
            BodyType::Truck => "truck",
            BodyType::Van => "van",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedan" => Some(BodyType::Sedan),
            "suv" => Some(BodyType::Suv),
            "coupe" => Some(BodyType::Coupe),
            "hatchback" => Some(BodyType::Hatchback),
            "truck" => Some(BodyType::Truck),
            "van" => Some(BodyType::Van),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BodyType::Sedan => "Sedan",
            BodyType::Suv => "SUV",
            BodyType::Coupe => "Coupe",
            BodyType::Hatchback => "Hatchback",
            BodyType::Truck => "Truck",
            BodyType::Van => "Van",
        }
    }

    /// All body types, in filter-sidebar order.
    pub fn all() -> [BodyType; 6] {
        [
            BodyType::Sedan,
            BodyType::Suv,
            BodyType::Coupe,
            BodyType::Hatchback,
            BodyType::Truck,
            BodyType::Van,
        ]
    }
}

/// Powertrain classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Powertrain {
    #[default]
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl Powertrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Powertrain::Gasoline => "gasoline",
            Powertrain::Diesel => "diesel",
            Powertrain::Hybrid => "hybrid",
            Powertrain::Electric => "electric",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gasoline" => Some(Powertrain::Gasoline),
            "diesel" => Some(Powertrain::Diesel),
            "hybrid" => Some(Powertrain::Hybrid),
            "electric" => Some(Powertrain::Electric),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Powertrain::Gasoline => "Gasoline",
            Powertrain::Diesel => "Diesel",
            Powertrain::Hybrid => "Hybrid",
            Powertrain::Electric => "Electric",
        }
    }

    /// All powertrains, in filter-sidebar order.
    pub fn all() -> [Powertrain; 4] {
        [
            Powertrain::Gasoline,
            Powertrain::Diesel,
            Powertrain::Hybrid,
            Powertrain::Electric,
        ]
    }
}

/// A vehicle model on the selection screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleModel {
    /// Unique model identifier.
    pub id: ModelId,
    /// Display name, e.g. "GS90".
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Body style.
    pub body: BodyType,
    /// Powertrain.
    pub powertrain: Powertrain,
    /// Starting price of the cheapest trim.
    pub base_price: Money,
    /// Seat count.
    pub seats: u8,
    /// Range in kilometers, for electrified models.
    pub range_km: Option<u32>,
    /// Whether the model is in dealer stock.
    pub in_stock: bool,
    /// Short marketing line.
    pub tagline: String,
}

impl VehicleModel {
    /// Text searched by the chrome search bar and `ModelFilter::Text`.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.brand, self.name, self.tagline).to_lowercase()
    }
}
