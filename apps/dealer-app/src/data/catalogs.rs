//! Static configurator catalogs.

use dealer_domain::prelude::*;

fn opt(id: &str, name: &str, price: i64, kind: OptionKind) -> ConfigOption {
    ConfigOption::new(id, name, Money::krw(price), kind)
}

/// The option catalogs and trims backing the configurator screen.
pub fn configurator_catalog() -> ConfiguratorCatalog {
    ConfiguratorCatalog {
        trims: vec![
            Trim::new("trim-base", "Base", Money::krw(42_000_000))
                .with_tagline("The essentials, well made"),
            Trim::new("trim-prestige", "Prestige", Money::krw(50_000_000))
                .with_tagline("Every comfort, standard"),
            Trim::new("trim-signature", "Signature", Money::krw(61_000_000))
                .with_tagline("The full expression"),
        ],
        engines: OptionCatalog::new(
            "engines",
            vec![
                opt("engine-i4", "2.5L I4", 0, OptionKind::Package)
                    .with_description("198 hp, balanced for the daily commute"),
                opt("engine-v6", "3.5L V6 Twin Turbo", 8_000_000, OptionKind::Package)
                    .with_description("375 hp with effortless overtaking"),
                opt("engine-hybrid", "2.5L Hybrid", 4_500_000, OptionKind::Package)
                    .with_description("Electrified efficiency, 17.8 km/L combined"),
            ],
        ),
        transmissions: OptionCatalog::new(
            "transmissions",
            vec![
                opt("trans-auto8", "8-speed Automatic", 0, OptionKind::Package),
                opt("trans-dct", "8-speed Wet DCT", 1_200_000, OptionKind::Package)
                    .with_description("Faster shifts in Sport mode"),
            ],
        ),
        paints: OptionCatalog::new(
            "paints",
            vec![
                opt("paint-snow", "Snow White Pearl", 0, OptionKind::Color).with_value("#f4f6f8"),
                opt("paint-midnight", "Midnight Blue", 800_000, OptionKind::Color)
                    .with_value("#0b1d3a"),
                opt("paint-obsidian", "Obsidian Black", 500_000, OptionKind::Color)
                    .with_value("#101114"),
                opt("paint-copper", "Sunset Copper Matte", 1_400_000, OptionKind::Color)
                    .with_value("#9c5a36"),
            ],
        ),
        wheels: OptionCatalog::new(
            "wheels",
            vec![
                opt("wheel-19", "19\" Alloy", 0, OptionKind::Wheel),
                opt("wheel-20-dark", "20\" Dark Sputtering", 900_000, OptionKind::Wheel),
                opt("wheel-21", "21\" Forged", 1_500_000, OptionKind::Wheel),
            ],
        ),
        upholstery: OptionCatalog::new(
            "upholstery",
            vec![
                opt("uph-cloth", "Black Cloth", 0, OptionKind::Interior),
                opt("uph-leather", "Black Leather", 1_200_000, OptionKind::Interior),
                opt("uph-nappa", "Brown Nappa Leather", 2_500_000, OptionKind::Interior)
                    .with_value("#6b4a35"),
            ],
        ),
        interior_trims: OptionCatalog::new(
            "interior-trims",
            vec![
                opt("itrim-aluminum", "Brushed Aluminum", 0, OptionKind::Interior),
                opt("itrim-walnut", "Open-pore Walnut", 600_000, OptionKind::Interior),
                opt("itrim-carbon", "Carbon Fiber", 900_000, OptionKind::Interior),
            ],
        ),
        packages: OptionCatalog::new(
            "packages",
            vec![
                opt("pkg-highway", "Highway Assist Package", 2_200_000, OptionKind::Package)
                    .with_description("Adaptive cruise, lane centering, junction assist"),
                opt("pkg-audio", "Premium Audio Package", 1_800_000, OptionKind::Package)
                    .with_description("17-speaker system with quad subwoofers"),
                opt("pkg-cold", "Cold Weather Package", 950_000, OptionKind::Package)
                    .with_description("Heated everything, headlamp washers"),
            ],
        ),
        accessories: OptionCatalog::new(
            "accessories",
            vec![
                opt("acc-floor-mats", "All-weather Floor Mats", 250_000, OptionKind::Accessory),
                opt("acc-roof-rack", "Roof Rack", 400_000, OptionKind::Accessory),
                opt("acc-dashcam", "Dashcam", 350_000, OptionKind::Accessory),
                opt("acc-cargo-net", "Cargo Net", 90_000, OptionKind::Accessory),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_singular_category_is_empty() {
        let catalog = configurator_catalog();
        for category in SingularCategory::all() {
            assert!(!catalog.singular(category).is_empty(), "{}", category.as_str());
        }
    }

    #[test]
    fn test_every_category_defaults_to_an_included_option() {
        let catalog = configurator_catalog();
        for category in SingularCategory::all() {
            assert!(catalog.singular(category).first().unwrap().price.is_zero());
        }
    }

    #[test]
    fn test_option_ids_are_unique() {
        let catalog = configurator_catalog();
        let mut ids: Vec<&str> = Vec::new();
        for category in SingularCategory::all() {
            ids.extend(catalog.singular(category).iter().map(|o| o.id.as_str()));
        }
        for category in MultiCategory::all() {
            ids.extend(catalog.multi(category).iter().map(|o| o.id.as_str()));
        }
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    /// The catalog reproduces the worked pricing scenario.
    #[test]
    fn test_worked_scenario_exists_in_data() {
        let catalog = configurator_catalog();
        let trim = catalog.trim(&"trim-prestige".into()).unwrap().clone();
        let mut session = ConfiguratorSession::start(trim, &catalog).unwrap();

        session
            .config
            .select(SingularCategory::Engine, &"engine-v6".into(), &catalog)
            .unwrap();
        session
            .config
            .select(SingularCategory::Paint, &"paint-midnight".into(), &catalog)
            .unwrap();
        session
            .config
            .toggle(MultiCategory::Accessories, &"acc-floor-mats".into(), &catalog)
            .unwrap();
        session
            .config
            .toggle(MultiCategory::Accessories, &"acc-roof-rack".into(), &catalog)
            .unwrap();

        assert_eq!(session.total(&catalog).amount, 59_450_000);
    }
}
