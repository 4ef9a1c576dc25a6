//! Model selection filtering and comparison.

mod compare;
mod filter;
mod query;

pub use compare::{ComparisonSelection, MAX_COMPARE};
pub use filter::ModelFilter;
pub use query::{ModelQuery, SortOrder};

#[cfg(test)]
pub(crate) mod tests {
    use crate::catalog::{BodyType, Powertrain, VehicleModel};
    use crate::ids::ModelId;
    use crate::money::Money;

    /// Shared fixture: a small model list spanning brands, bodies,
    /// powertrains, and stock states.
    pub(crate) fn demo_models() -> Vec<VehicleModel> {
        let model = |id: &str,
                     name: &str,
                     brand: &str,
                     body: BodyType,
                     powertrain: Powertrain,
                     price: i64,
                     in_stock: bool,
                     tagline: &str| VehicleModel {
            id: ModelId::new(id),
            name: name.to_string(),
            brand: brand.to_string(),
            body,
            powertrain,
            base_price: Money::krw(price),
            seats: 5,
            range_km: matches!(powertrain, Powertrain::Electric).then_some(480),
            in_stock,
            tagline: tagline.to_string(),
        };

        vec![
            model(
                "model-gs90",
                "GS90",
                "Genesia",
                BodyType::Sedan,
                Powertrain::Gasoline,
                79_000_000,
                true,
                "Flagship comfort",
            ),
            model(
                "model-ev6",
                "Evo 6",
                "Kairo",
                BodyType::Suv,
                Powertrain::Electric,
                55_000_000,
                true,
                "Electric everyday",
            ),
            model(
                "model-sante",
                "Sante",
                "Hyrex",
                BodyType::Suv,
                Powertrain::Hybrid,
                42_000_000,
                false,
                "Family hauler",
            ),
            model(
                "model-aria",
                "Aria",
                "Kairo",
                BodyType::Hatchback,
                Powertrain::Gasoline,
                28_000_000,
                true,
                "City sized",
            ),
            model(
                "model-terra",
                "Terra",
                "Hyrex",
                BodyType::Truck,
                Powertrain::Diesel,
                48_000_000,
                true,
                "Work ready",
            ),
        ]
    }
}
