//! Font-family roles

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontRole {
    /// Body copy and UI text
    Primary,
    /// Long-form and supporting text
    Secondary,
    /// Headlines and mastheads
    Display,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Primary, FontRole::Secondary, FontRole::Display];

    /// Role name; doubles as the alias token path
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "fontFamily.primary",
            Self::Secondary => "fontFamily.secondary",
            Self::Display => "fontFamily.display",
        }
    }

    pub fn token_path(self) -> &'static str {
        self.name()
    }
}

/// Resolved font stacks for one brand
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontRoles {
    pub primary: String,
    pub secondary: String,
    pub display: String,
}

impl FontRoles {
    pub fn from_fn(mut f: impl FnMut(FontRole) -> String) -> Self {
        Self {
            primary: f(FontRole::Primary),
            secondary: f(FontRole::Secondary),
            display: f(FontRole::Display),
        }
    }

    pub fn get(&self, role: FontRole) -> &str {
        match role {
            FontRole::Primary => &self.primary,
            FontRole::Secondary => &self.secondary,
            FontRole::Display => &self.display,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &str)> {
        FontRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
