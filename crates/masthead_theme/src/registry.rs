//! Theme registry
//!
//! The catalog is generated, not hand-maintained: each brand's alias tokens
//! are layered over the shared primitives and every role is run through the
//! resolver. The built-in catalog is built once per process from the token
//! documents compiled into the crate.
//!
//! Lookups are total. An unknown brand id gets the default brand's theme, and
//! a role that fails to resolve keeps its reference text (see
//! [`Resolved::as_str`](masthead_tokens::Resolved::as_str)) so pages still
//! render.

use crate::brand::Brand;
use crate::error::ThemeError;
use crate::roles::{
    ColorRole, ColorRoles, FontRole, FontRoles, RadiusRole, RadiusScale, SpacingScale,
    SPACING_SCALE_ROLE,
};
use crate::theme::BrandTheme;
use indexmap::IndexMap;
use masthead_tokens::{
    FileSource, LoadError, Resolver, StaticSource, TokenGraph, TokenGroup, TokenSource,
    UnresolvedToken, DEFAULT_MAX_DEPTH,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

const PRIMITIVES: &str = include_str!("../tokens/primitives.json");

/// Extensions tried, in order, when looking for a token document on disk
const DOCUMENT_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

static BUILTIN: OnceLock<Arc<ThemeRegistry>> = OnceLock::new();

/// Theme of a brand from the built-in catalog. Never fails: unknown or empty
/// ids return the [`Brand::DEFAULT`] theme.
///
/// ```rust
/// use masthead_theme::get_theme;
///
/// assert_eq!(get_theme("unknown-brand-xyz"), get_theme("car-and-driver"));
/// ```
pub fn get_theme(id: &str) -> &'static BrandTheme {
    ThemeRegistry::builtin().get_theme(id)
}

/// Shared primitives plus one alias layer per brand, before resolution
#[derive(Clone, Debug, Default)]
pub struct TokenSet {
    primitives: TokenGraph,
    brands: IndexMap<Brand, TokenGraph>,
}

impl TokenSet {
    pub fn new(primitives: TokenGraph) -> Self {
        Self {
            primitives,
            brands: IndexMap::new(),
        }
    }

    /// The token documents compiled into this crate
    pub fn embedded() -> Result<Self, LoadError> {
        let mut set = Self::new(StaticSource::json(PRIMITIVES).load()?);
        for &brand in Brand::all() {
            let doc = StaticSource::json(brand.embedded_tokens()).load()?;
            set.insert(brand, alias_layer(brand, doc));
        }
        Ok(set)
    }

    /// Load a directory laid out like the embedded data:
    /// `primitives.json` next to `brands/<brand-id>.json` (YAML also accepted).
    ///
    /// Every brand in the catalog must have a document.
    pub fn from_dir(dir: &Path) -> Result<Self, ThemeError> {
        let primitives = FileSource::new(find_document(dir, "primitives")?).load()?;
        let mut set = Self::new(primitives);

        let brands_dir = dir.join("brands");
        for &brand in Brand::all() {
            let path = find_document(&brands_dir, &brand.attribute_value())?;
            let doc = FileSource::new(path).load()?;
            set.insert(brand, alias_layer(brand, doc));
        }
        tracing::debug!(dir = %dir.display(), "loaded token directory");
        Ok(set)
    }

    /// Set a brand's alias layer over the shared primitives
    pub fn insert(&mut self, brand: Brand, alias: TokenGroup) {
        let graph = self.primitives.with_alias(alias);
        self.brands.insert(brand, graph);
    }

    pub fn primitives(&self) -> &TokenGraph {
        &self.primitives
    }

    /// Layered graph of a brand. A brand without an alias layer gets the
    /// primitives alone, so all of its roles stay unresolved.
    pub fn graph(&self, brand: Brand) -> TokenGraph {
        match self.brands.get(&brand) {
            Some(graph) => graph.clone(),
            None => self.primitives.with_alias(TokenGroup::default()),
        }
    }
}

/// Alias namespace of a brand document. Brands share one primitives layer,
/// so primitives in a brand document are ignored.
fn alias_layer(brand: Brand, doc: TokenGraph) -> TokenGroup {
    if !doc.primitives().is_empty() {
        tracing::warn!(
            brand = brand.id(),
            roots = ?doc.primitives().keys().collect::<Vec<_>>(),
            "brand token document has primitives; only the shared primitives are used"
        );
    }
    doc.alias().clone()
}

fn find_document(dir: &Path, stem: &str) -> Result<PathBuf, ThemeError> {
    DOCUMENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.is_file())
        .ok_or_else(|| ThemeError::MissingDocument {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
        })
}

#[derive(Debug)]
struct Entry {
    graph: TokenGraph,
    theme: Arc<BrandTheme>,
}

/// Every brand in the catalog with its resolved theme.
///
/// Entries are stored in [`Brand::all`] order, one per brand.
#[derive(Debug)]
pub struct ThemeRegistry {
    entries: Vec<Entry>,
    max_depth: usize,
}

impl ThemeRegistry {
    /// The catalog built from the embedded token documents
    pub fn builtin() -> &'static Arc<ThemeRegistry> {
        BUILTIN.get_or_init(|| {
            let set = TokenSet::embedded().unwrap_or_else(|err| {
                tracing::error!(%err, "embedded token documents failed to load");
                TokenSet::default()
            });
            Arc::new(Self::build(&set, DEFAULT_MAX_DEPTH))
        })
    }

    /// Resolve every brand. Roles that fail to resolve keep their reference
    /// text and are logged; an unusable spacing scale falls back to 1.
    pub fn build(set: &TokenSet, max_depth: usize) -> Self {
        let entries = Brand::all()
            .iter()
            .map(|&brand| {
                let graph = set.graph(brand);
                let theme = resolve_theme(brand, &graph, max_depth, false);
                Entry {
                    // Lenient resolution has no error path.
                    theme: Arc::new(theme.unwrap_or_else(|_| fallback_theme(brand))),
                    graph,
                }
            })
            .collect();
        tracing::debug!(brands = Brand::all().len(), max_depth, "built theme catalog");
        Self { entries, max_depth }
    }

    /// Resolve every brand, failing on the first role that does not resolve
    pub fn try_build(set: &TokenSet, max_depth: usize) -> Result<Self, ThemeError> {
        let entries = Brand::all()
            .iter()
            .map(|&brand| {
                let graph = set.graph(brand);
                let theme = resolve_theme(brand, &graph, max_depth, true)?;
                Ok(Entry {
                    theme: Arc::new(theme),
                    graph,
                })
            })
            .collect::<Result<Vec<_>, ThemeError>>()?;
        Ok(Self { entries, max_depth })
    }

    /// Lenient catalog from a token directory (see [`TokenSet::from_dir`]).
    /// Only loading fails; resolution degrades as in [`build`](Self::build).
    pub fn from_dir(dir: &Path, max_depth: usize) -> Result<Self, ThemeError> {
        let set = TokenSet::from_dir(dir)?;
        Ok(Self::build(&set, max_depth))
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn entry(&self, brand: Brand) -> &Entry {
        &self.entries[brand as usize]
    }

    pub fn get(&self, brand: Brand) -> &BrandTheme {
        &self.entry(brand).theme
    }

    /// Shared handle to a brand's theme
    pub fn theme(&self, brand: Brand) -> Arc<BrandTheme> {
        Arc::clone(&self.entry(brand).theme)
    }

    /// Total lookup by camelCase or kebab-case id
    pub fn get_theme(&self, id: &str) -> &BrandTheme {
        self.get(Self::resolve_brand(id))
    }

    /// Catalog brand an id selects, with the default fallback
    pub fn resolve_brand(id: &str) -> Brand {
        Brand::from_id(id).unwrap_or_else(|| {
            tracing::debug!(id, fallback = Brand::DEFAULT.id(), "unknown brand id");
            Brand::DEFAULT
        })
    }

    pub fn brands(&self) -> &'static [Brand] {
        Brand::all()
    }

    pub fn themes(&self) -> impl Iterator<Item = &BrandTheme> {
        self.entries.iter().map(|entry| entry.theme.as_ref())
    }

    /// Layered token graph a brand's theme was resolved from
    pub fn graph(&self, brand: Brand) -> &TokenGraph {
        &self.entry(brand).graph
    }

    pub fn resolver(&self, brand: Brand) -> Resolver<'_> {
        Resolver::new(self.graph(brand)).with_max_depth(self.max_depth)
    }

    /// Every token that fails to resolve, per brand
    pub fn audit(&self) -> Vec<(Brand, UnresolvedToken)> {
        Brand::all()
            .iter()
            .flat_map(|&brand| {
                self.resolver(brand)
                    .audit()
                    .into_iter()
                    .map(move |token| (brand, token))
            })
            .collect()
    }
}

fn resolve_theme(
    brand: Brand,
    graph: &TokenGraph,
    max_depth: usize,
    strict: bool,
) -> Result<BrandTheme, ThemeError> {
    let resolver = Resolver::new(graph).with_max_depth(max_depth);

    let roles = ColorRole::ALL
        .iter()
        .map(|r| (r.name(), r.token_path()))
        .chain(FontRole::ALL.iter().map(|r| (r.name(), r.token_path())))
        .chain([(SPACING_SCALE_ROLE, SPACING_SCALE_ROLE)])
        .chain(RadiusRole::ALL.iter().map(|r| (r.name(), r.token_path())));

    let mut values = IndexMap::new();
    for (role, path) in roles {
        let resolved = resolver.resolve_path(path);
        if strict {
            if let Some(unresolved) = resolved.unresolved() {
                return Err(ThemeError::UnresolvedRole {
                    brand,
                    role,
                    unresolved: unresolved.clone(),
                });
            }
        }
        values.insert(path, resolved.into_string());
    }

    let value = |path: &str| values.get(path).cloned().unwrap_or_default();
    let spacing_value = value(SPACING_SCALE_ROLE);
    let spacing = match SpacingScale::parse(&spacing_value) {
        Some(spacing) => spacing,
        None if strict => {
            return Err(ThemeError::InvalidSpacing {
                brand,
                value: spacing_value,
            })
        }
        None => {
            tracing::warn!(brand = brand.id(), value = %spacing_value, "unusable spacing scale, using 1");
            SpacingScale::default()
        }
    };

    Ok(BrandTheme::new(
        brand,
        ColorRoles::from_fn(|role| value(role.token_path())),
        FontRoles::from_fn(|role| value(role.token_path())),
        spacing,
        RadiusScale::from_fn(|role| value(role.token_path())),
    ))
}

/// Every role set to its own reference text
fn fallback_theme(brand: Brand) -> BrandTheme {
    let sentinel = |path: &str| format!("{{{path}}}");
    BrandTheme::new(
        brand,
        ColorRoles::from_fn(|role| sentinel(role.token_path())),
        FontRoles::from_fn(|role| sentinel(role.token_path())),
        SpacingScale::default(),
        RadiusScale::from_fn(|role| sentinel(role.token_path())),
    )
}
