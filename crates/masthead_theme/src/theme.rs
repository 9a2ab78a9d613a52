//! Resolved brand theme

use crate::brand::Brand;
use crate::roles::{
    ColorRole, ColorRoles, FontRoles, RadiusScale, SpacingScale, SPACING_SCALE_ROLE,
};
use crate::state::THEME_ATTRIBUTE;
use heck::ToKebabCase;
use indexmap::IndexMap;
use std::fmt::Write as _;

/// One brand's fully resolved roles.
///
/// Every theme carries the same role set: the fields are fixed, so a
/// component written against `header_bg` works under every brand.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandTheme {
    brand: Brand,
    colors: ColorRoles,
    fonts: FontRoles,
    spacing: SpacingScale,
    radii: RadiusScale,
}

impl BrandTheme {
    pub fn new(
        brand: Brand,
        colors: ColorRoles,
        fonts: FontRoles,
        spacing: SpacingScale,
        radii: RadiusScale,
    ) -> Self {
        Self {
            brand,
            colors,
            fonts,
            spacing,
            radii,
        }
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Registry key (`carAndDriver`)
    pub fn id(&self) -> &'static str {
        self.brand.id()
    }

    pub fn display_name(&self) -> &'static str {
        self.brand.display_name()
    }

    pub fn colors(&self) -> &ColorRoles {
        &self.colors
    }

    pub fn color(&self, role: ColorRole) -> &str {
        self.colors.get(role)
    }

    pub fn fonts(&self) -> &FontRoles {
        &self.fonts
    }

    pub fn spacing(&self) -> SpacingScale {
        self.spacing
    }

    pub fn radii(&self) -> &RadiusScale {
        &self.radii
    }

    /// Role name to resolved value, in a stable order.
    ///
    /// Keys are identical for every brand: color role names (`headerBg`),
    /// then `fontFamily.*`, `spacing.scale` and `radius.*`.
    pub fn role_map(&self) -> IndexMap<&'static str, String> {
        let mut map = IndexMap::with_capacity(ColorRole::ALL.len() + 8);
        for (role, value) in self.colors.iter() {
            map.insert(role.name(), value.to_string());
        }
        for (role, value) in self.fonts.iter() {
            map.insert(role.name(), value.to_string());
        }
        map.insert(SPACING_SCALE_ROLE, self.spacing.multiplier.to_string());
        for (role, value) in self.radii.iter() {
            map.insert(role.name(), value.to_string());
        }
        map
    }

    /// Role values keyed by CSS custom property name (without `--`).
    ///
    /// ```ignore
    /// let vars = get_theme("elle").css_variables();
    /// // vars["color-header-bg"], vars["font-family-display"], vars["radius-md"]
    /// ```
    pub fn css_variables(&self) -> IndexMap<String, String> {
        self.role_map()
            .into_iter()
            .map(|(role, value)| (css_variable_name(role), value))
            .collect()
    }

    /// The rule a `data-theme` attribute set to this brand activates
    pub fn css_rule(&self) -> String {
        let mut rule = format!(
            "[{}=\"{}\"] {{\n",
            THEME_ATTRIBUTE,
            self.brand.attribute_value()
        );
        for (name, value) in self.css_variables() {
            let _ = writeln!(rule, "  --{name}: {value};");
        }
        rule.push('}');
        rule
    }
}

/// CSS custom property name for a role. Color roles get a `color-` prefix;
/// dotted role paths are already namespaced.
pub fn css_variable_name(role: &str) -> String {
    let name = role.to_kebab_case();
    if role.contains('.') {
        name
    } else {
        format!("color-{name}")
    }
}
