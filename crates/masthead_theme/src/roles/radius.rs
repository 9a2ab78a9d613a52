//! Border radius scale

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusRole {
    Sm,
    Md,
    Lg,
    Pill,
}

impl RadiusRole {
    pub const ALL: [RadiusRole; 4] = [RadiusRole::Sm, RadiusRole::Md, RadiusRole::Lg, RadiusRole::Pill];

    /// Role name; doubles as the alias token path
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "radius.sm",
            Self::Md => "radius.md",
            Self::Lg => "radius.lg",
            Self::Pill => "radius.pill",
        }
    }

    pub fn token_path(self) -> &'static str {
        self.name()
    }
}

/// Resolved radii (CSS lengths) for one brand
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiusScale {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub pill: String,
}

impl RadiusScale {
    pub fn from_fn(mut f: impl FnMut(RadiusRole) -> String) -> Self {
        Self {
            sm: f(RadiusRole::Sm),
            md: f(RadiusRole::Md),
            lg: f(RadiusRole::Lg),
            pill: f(RadiusRole::Pill),
        }
    }

    pub fn get(&self, role: RadiusRole) -> &str {
        match role {
            RadiusRole::Sm => &self.sm,
            RadiusRole::Md => &self.md,
            RadiusRole::Lg => &self.lg,
            RadiusRole::Pill => &self.pill,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RadiusRole, &str)> {
        RadiusRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
