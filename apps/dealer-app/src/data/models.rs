//! Static vehicle model list for the selection and comparison screens.

use dealer_domain::prelude::*;

#[allow(clippy::too_many_arguments)]
fn model(
    id: &str,
    name: &str,
    brand: &str,
    body: BodyType,
    powertrain: Powertrain,
    price: i64,
    seats: u8,
    range_km: Option<u32>,
    in_stock: bool,
    tagline: &str,
) -> VehicleModel {
    VehicleModel {
        id: ModelId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        body,
        powertrain,
        base_price: Money::krw(price),
        seats,
        range_km,
        in_stock,
        tagline: tagline.to_string(),
    }
}

/// The full model list, in curated (featured) order.
pub fn vehicle_models() -> Vec<VehicleModel> {
    vec![
        model(
            "model-gs90",
            "GS90",
            "Genesia",
            BodyType::Sedan,
            Powertrain::Gasoline,
            79_000_000,
            5,
            None,
            true,
            "Flagship comfort for the long way home",
        ),
        model(
            "model-gs70",
            "GS70",
            "Genesia",
            BodyType::Sedan,
            Powertrain::Hybrid,
            52_000_000,
            5,
            None,
            true,
            "The executive sweet spot",
        ),
        model(
            "model-evo6",
            "Evo 6",
            "Kairo",
            BodyType::Suv,
            Powertrain::Electric,
            55_000_000,
            5,
            Some(494),
            true,
            "Electric everyday, charged in 18 minutes",
        ),
        model(
            "model-evo9",
            "Evo 9",
            "Kairo",
            BodyType::Van,
            Powertrain::Electric,
            68_000_000,
            7,
            Some(451),
            false,
            "Three rows, zero emissions",
        ),
        model(
            "model-aria",
            "Aria",
            "Kairo",
            BodyType::Hatchback,
            Powertrain::Gasoline,
            28_000_000,
            5,
            None,
            true,
            "City sized, highway hearted",
        ),
        model(
            "model-sante",
            "Sante",
            "Hyrex",
            BodyType::Suv,
            Powertrain::Hybrid,
            42_000_000,
            7,
            None,
            false,
            "The family hauler that sips",
        ),
        model(
            "model-terra",
            "Terra",
            "Hyrex",
            BodyType::Truck,
            Powertrain::Diesel,
            48_000_000,
            5,
            None,
            true,
            "Work ready, weekend willing",
        ),
        model(
            "model-stinger",
            "Stinger GT",
            "Kairo",
            BodyType::Coupe,
            Powertrain::Gasoline,
            58_000_000,
            4,
            None,
            true,
            "The grand tourer, sharpened",
        ),
    ]
}

/// Distinct brands in the model list, in first-appearance order.
pub fn brands() -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for m in vehicle_models() {
        if !out.contains(&m.brand) {
            out.push(m.brand);
        }
    }
    out
}

/// Budget brackets for the filter sidebar: label, min, max (won).
pub const BUDGET_BRACKETS: [(&str, Option<i64>, Option<i64>); 4] = [
    ("Under \u{20a9}40M", None, Some(40_000_000)),
    ("\u{20a9}40M \u{2013} \u{20a9}55M", Some(40_000_000), Some(55_000_000)),
    ("\u{20a9}55M \u{2013} \u{20a9}70M", Some(55_000_000), Some(70_000_000)),
    ("Over \u{20a9}70M", Some(70_000_000), None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_ids_are_unique() {
        let models = vehicle_models();
        let mut ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_brands_are_distinct() {
        let brands = brands();
        assert!(brands.contains(&"Genesia".to_string()));
        let mut sorted = brands.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), brands.len());
    }

    #[test]
    fn test_electric_models_have_range() {
        for m in vehicle_models() {
            if m.powertrain == Powertrain::Electric {
                assert!(m.range_km.is_some(), "{} missing range", m.name);
            }
        }
    }

    #[test]
    fn test_every_bracket_matches_some_model() {
        let models = vehicle_models();
        for (label, min, max) in BUDGET_BRACKETS {
            let filter = ModelFilter::budget(min.map(Money::krw), max.map(Money::krw));
            assert!(models.iter().any(|m| filter.matches(m)), "{label}");
        }
    }
}
