//! Brand catalog

use crate::error::ThemeError;
use heck::{ToKebabCase, ToLowerCamelCase};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Publications with a theme in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brand {
    CarAndDriver,
    RoadAndTrack,
    PopularMechanics,
    Esquire,
    Elle,
    Cosmopolitan,
    HarpersBazaar,
    GoodHousekeeping,
    MensHealth,
    WomensHealth,
    RunnersWorld,
    Delish,
}

impl Brand {
    /// Brand served when a lookup names an unknown brand
    pub const DEFAULT: Brand = Brand::CarAndDriver;

    /// Registry key (camelCase)
    pub fn id(self) -> &'static str {
        match self {
            Self::CarAndDriver => "carAndDriver",
            Self::RoadAndTrack => "roadAndTrack",
            Self::PopularMechanics => "popularMechanics",
            Self::Esquire => "esquire",
            Self::Elle => "elle",
            Self::Cosmopolitan => "cosmopolitan",
            Self::HarpersBazaar => "harpersBazaar",
            Self::GoodHousekeeping => "goodHousekeeping",
            Self::MensHealth => "mensHealth",
            Self::WomensHealth => "womensHealth",
            Self::RunnersWorld => "runnersWorld",
            Self::Delish => "delish",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::CarAndDriver => "Car and Driver",
            Self::RoadAndTrack => "Road & Track",
            Self::PopularMechanics => "Popular Mechanics",
            Self::Esquire => "Esquire",
            Self::Elle => "ELLE",
            Self::Cosmopolitan => "Cosmopolitan",
            Self::HarpersBazaar => "Harper's Bazaar",
            Self::GoodHousekeeping => "Good Housekeeping",
            Self::MensHealth => "Men's Health",
            Self::WomensHealth => "Women's Health",
            Self::RunnersWorld => "Runner's World",
            Self::Delish => "Delish",
        }
    }

    /// Value of the `data-theme` attribute (kebab-case of [`id`](Self::id))
    pub fn attribute_value(self) -> String {
        self.id().to_kebab_case()
    }

    /// Full catalog, in switcher order.
    pub fn all() -> &'static [Brand] {
        const BRANDS: [Brand; 12] = [
            Brand::CarAndDriver,
            Brand::RoadAndTrack,
            Brand::PopularMechanics,
            Brand::Esquire,
            Brand::Elle,
            Brand::Cosmopolitan,
            Brand::HarpersBazaar,
            Brand::GoodHousekeeping,
            Brand::MensHealth,
            Brand::WomensHealth,
            Brand::RunnersWorld,
            Brand::Delish,
        ];
        &BRANDS
    }

    /// Look a brand up by id, in registry (`carAndDriver`) or attribute
    /// (`car-and-driver`) style.
    pub fn from_id(id: &str) -> Option<Brand> {
        let key = id.trim().to_lower_camel_case();
        Self::all().iter().copied().find(|b| b.id() == key)
    }

    /// Total lookup: unknown ids fall back to [`Brand::DEFAULT`]
    pub fn from_id_or_default(id: &str) -> Brand {
        Self::from_id(id).unwrap_or(Self::DEFAULT)
    }

    /// Embedded alias token document for this brand
    pub(crate) fn embedded_tokens(self) -> &'static str {
        match self {
            Self::CarAndDriver => include_str!("../tokens/brands/car-and-driver.json"),
            Self::RoadAndTrack => include_str!("../tokens/brands/road-and-track.json"),
            Self::PopularMechanics => include_str!("../tokens/brands/popular-mechanics.json"),
            Self::Esquire => include_str!("../tokens/brands/esquire.json"),
            Self::Elle => include_str!("../tokens/brands/elle.json"),
            Self::Cosmopolitan => include_str!("../tokens/brands/cosmopolitan.json"),
            Self::HarpersBazaar => include_str!("../tokens/brands/harpers-bazaar.json"),
            Self::GoodHousekeeping => include_str!("../tokens/brands/good-housekeeping.json"),
            Self::MensHealth => include_str!("../tokens/brands/mens-health.json"),
            Self::WomensHealth => include_str!("../tokens/brands/womens-health.json"),
            Self::RunnersWorld => include_str!("../tokens/brands/runners-world.json"),
            Self::Delish => include_str!("../tokens/brands/delish.json"),
        }
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Brand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Brand {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ThemeError::UnknownBrand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_are_kebab_case_ids() {
        assert_eq!(Brand::CarAndDriver.attribute_value(), "car-and-driver");
        assert_eq!(Brand::HarpersBazaar.attribute_value(), "harpers-bazaar");
        assert_eq!(Brand::Elle.attribute_value(), "elle");
    }

    #[test]
    fn ids_are_accepted_in_both_styles() {
        for &brand in Brand::all() {
            assert_eq!(Brand::from_id(brand.id()), Some(brand));
            assert_eq!(Brand::from_id(&brand.attribute_value()), Some(brand));
        }
        assert_eq!("road-and-track".parse::<Brand>().unwrap(), Brand::RoadAndTrack);
    }

    #[test]
    fn unknown_ids_fall_back_to_the_default() {
        assert_eq!(Brand::from_id("unknown-brand-xyz"), None);
        assert_eq!(Brand::from_id(""), None);
        assert_eq!(Brand::from_id_or_default("unknown-brand-xyz"), Brand::CarAndDriver);
        assert!(matches!(
            "vogue".parse::<Brand>(),
            Err(ThemeError::UnknownBrand(id)) if id == "vogue"
        ));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = Brand::all().iter().map(|b| b.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Brand::all().len());
    }
}
