//! Color roles

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Brand colors
    Primary,
    PrimaryHover,
    Secondary,
    Accent,

    // Surfaces
    Background,
    Surface,

    // Text
    Text,
    TextMuted,
    TextInverse,
    Link,
    LinkHover,

    // Borders
    Border,

    // Page chrome
    HeaderBg,
    HeaderText,
    FooterBg,
    FooterText,

    // Controls
    ButtonBg,
    ButtonText,
}

impl ColorRole {
    pub const ALL: [ColorRole; 18] = [
        ColorRole::Primary,
        ColorRole::PrimaryHover,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Text,
        ColorRole::TextMuted,
        ColorRole::TextInverse,
        ColorRole::Link,
        ColorRole::LinkHover,
        ColorRole::Border,
        ColorRole::HeaderBg,
        ColorRole::HeaderText,
        ColorRole::FooterBg,
        ColorRole::FooterText,
        ColorRole::ButtonBg,
        ColorRole::ButtonText,
    ];

    /// Role name as components refer to it
    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryHover => "primaryHover",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Text => "text",
            Self::TextMuted => "textMuted",
            Self::TextInverse => "textInverse",
            Self::Link => "link",
            Self::LinkHover => "linkHover",
            Self::Border => "border",
            Self::HeaderBg => "headerBg",
            Self::HeaderText => "headerText",
            Self::FooterBg => "footerBg",
            Self::FooterText => "footerText",
            Self::ButtonBg => "buttonBg",
            Self::ButtonText => "buttonText",
        }
    }

    /// Alias token the role is resolved from
    pub fn token_path(self) -> &'static str {
        match self {
            Self::Primary => "color.brand.primary",
            Self::PrimaryHover => "color.brand.primaryHover",
            Self::Secondary => "color.brand.secondary",
            Self::Accent => "color.brand.accent",
            Self::Background => "color.surface.background",
            Self::Surface => "color.surface.base",
            Self::Text => "color.text.default",
            Self::TextMuted => "color.text.muted",
            Self::TextInverse => "color.text.inverse",
            Self::Link => "color.link.default",
            Self::LinkHover => "color.link.hover",
            Self::Border => "color.border.default",
            Self::HeaderBg => "color.header.bg",
            Self::HeaderText => "color.header.text",
            Self::FooterBg => "color.footer.bg",
            Self::FooterText => "color.footer.text",
            Self::ButtonBg => "color.button.bg",
            Self::ButtonText => "color.button.text",
        }
    }
}

/// Complete set of resolved color roles for one brand
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRoles {
    // Brand colors
    pub primary: String,
    pub primary_hover: String,
    pub secondary: String,
    pub accent: String,

    // Surfaces
    pub background: String,
    pub surface: String,

    // Text
    pub text: String,
    pub text_muted: String,
    pub text_inverse: String,
    pub link: String,
    pub link_hover: String,

    // Borders
    pub border: String,

    // Page chrome
    pub header_bg: String,
    pub header_text: String,
    pub footer_bg: String,
    pub footer_text: String,

    // Controls
    pub button_bg: String,
    pub button_text: String,
}

impl ColorRoles {
    /// Build every role from a per-role function
    pub fn from_fn(mut f: impl FnMut(ColorRole) -> String) -> Self {
        Self {
            primary: f(ColorRole::Primary),
            primary_hover: f(ColorRole::PrimaryHover),
            secondary: f(ColorRole::Secondary),
            accent: f(ColorRole::Accent),
            background: f(ColorRole::Background),
            surface: f(ColorRole::Surface),
            text: f(ColorRole::Text),
            text_muted: f(ColorRole::TextMuted),
            text_inverse: f(ColorRole::TextInverse),
            link: f(ColorRole::Link),
            link_hover: f(ColorRole::LinkHover),
            border: f(ColorRole::Border),
            header_bg: f(ColorRole::HeaderBg),
            header_text: f(ColorRole::HeaderText),
            footer_bg: f(ColorRole::FooterBg),
            footer_text: f(ColorRole::FooterText),
            button_bg: f(ColorRole::ButtonBg),
            button_text: f(ColorRole::ButtonText),
        }
    }

    /// Get a color by role key
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::PrimaryHover => &self.primary_hover,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Surface => &self.surface,
            ColorRole::Text => &self.text,
            ColorRole::TextMuted => &self.text_muted,
            ColorRole::TextInverse => &self.text_inverse,
            ColorRole::Link => &self.link,
            ColorRole::LinkHover => &self.link_hover,
            ColorRole::Border => &self.border,
            ColorRole::HeaderBg => &self.header_bg,
            ColorRole::HeaderText => &self.header_text,
            ColorRole::FooterBg => &self.footer_bg,
            ColorRole::FooterText => &self.footer_text,
            ColorRole::ButtonBg => &self.button_bg,
            ColorRole::ButtonText => &self.button_text,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
