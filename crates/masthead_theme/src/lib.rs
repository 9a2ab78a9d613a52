//! Masthead Theme System
//!
//! Brand themes for the publisher's sites, generated from design tokens.
//!
//! # Overview
//!
//! - **Catalog**: [`Brand`] lists every publication; [`ThemeRegistry`]
//!   resolves each brand's alias tokens into a [`BrandTheme`]
//! - **Roles**: every theme exposes the same fixed roles (colors, font
//!   families, spacing multiplier, radii)
//! - **Propagation**: a [`ThemeProvider`] holds the active brand and writes it
//!   to the `data-theme` attribute as kebab-case
//!
//! # Quick Start
//!
//! ```rust
//! use masthead_theme::{get_theme, use_theme, ColorRole, ThemeProvider};
//!
//! // Lookups never fail; unknown ids get the default brand.
//! let theme = get_theme("road-and-track");
//! assert_eq!(theme.id(), "roadAndTrack");
//!
//! // Switch brands through a provider.
//! let provider = ThemeProvider::new("carAndDriver");
//! provider.set_theme("esquire");
//! assert_eq!(provider.attribute(), "esquire");
//!
//! provider.provide(|| {
//!     let header = use_theme().color(ColorRole::HeaderBg).to_string();
//!     assert!(header.starts_with('#'));
//! });
//! ```

mod brand;
mod error;
mod registry;
mod roles;
mod state;
mod theme;

pub use brand::Brand;
pub use error::ThemeError;
pub use registry::{get_theme, ThemeRegistry, TokenSet};
pub use roles::*;
pub use state::{
    set_redraw_callback, try_use_theme_provider, use_theme, use_theme_provider, ThemeProvider,
    ThemeState, THEME_ATTRIBUTE,
};
pub use theme::{css_variable_name, BrandTheme};
