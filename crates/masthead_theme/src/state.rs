//! Theme propagation
//!
//! A [`ThemeProvider`] owns the active brand and is the only writer of the
//! `data-theme` attribute. Readers either ask the provider in scope for the
//! current theme ([`use_theme`]) or subscribe to the attribute and react to
//! changes. Switching to the brand already active is a no-op: the attribute
//! keeps its value and subscribers are not woken.

use crate::brand::Brand;
use crate::registry::ThemeRegistry;
use crate::theme::BrandTheme;
use std::cell::RefCell;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use tokio::sync::watch;

/// Root element attribute selecting the active brand's CSS rule
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Process-wide root provider
static ROOT_PROVIDER: OnceLock<Arc<ThemeProvider>> = OnceLock::new();

/// Global redraw callback, set by the host to repaint after a theme switch
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

thread_local! {
    /// Providers scoped with [`ThemeProvider::provide`], innermost last
    static SCOPED: RefCell<Vec<Arc<ThemeProvider>>> = const { RefCell::new(Vec::new()) };
}

/// Set the redraw callback function
///
/// Called once per effective brand change, after the attribute is written.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = callback {
        callback();
    }
}

/// Holder of the active brand and writer of the `data-theme` attribute
pub struct ThemeProvider {
    registry: Arc<ThemeRegistry>,
    brand: RwLock<Brand>,
    attribute: watch::Sender<String>,
}

impl ThemeProvider {
    /// Provider over the built-in catalog, starting at `initial`
    /// (unknown ids start at the default brand)
    pub fn new(initial: &str) -> Arc<Self> {
        Self::with_registry(Arc::clone(ThemeRegistry::builtin()), initial)
    }

    pub fn with_registry(registry: Arc<ThemeRegistry>, initial: &str) -> Arc<Self> {
        let brand = ThemeRegistry::resolve_brand(initial);
        let (attribute, _) = watch::channel(brand.attribute_value());
        Arc::new(Self {
            registry,
            brand: RwLock::new(brand),
            attribute,
        })
    }

    /// Switch the active brand and return the brand now in effect.
    ///
    /// The attribute is written before this returns. Unknown ids select the
    /// default brand, like every other lookup.
    pub fn set_theme(&self, id: &str) -> Brand {
        let next = ThemeRegistry::resolve_brand(id);
        let mut current = self.brand.write().unwrap_or_else(PoisonError::into_inner);
        if *current == next {
            return next;
        }

        tracing::debug!(from = current.id(), to = next.id(), "switching theme");
        *current = next;
        let value = next.attribute_value();
        let changed = self.attribute.send_if_modified(|attribute| {
            if *attribute == value {
                false
            } else {
                *attribute = value;
                true
            }
        });
        drop(current);

        if changed {
            trigger_redraw();
        }
        next
    }

    pub fn brand(&self) -> Brand {
        *self.brand.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn theme(&self) -> Arc<BrandTheme> {
        self.registry.theme(self.brand())
    }

    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// Current `data-theme` value (kebab-case brand id)
    pub fn attribute(&self) -> String {
        self.attribute.borrow().clone()
    }

    /// Receiver woken on every attribute change
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.attribute.subscribe()
    }

    /// Run `f` with this provider in scope on the current thread.
    /// Scopes nest; the innermost provider wins.
    pub fn provide<R>(self: &Arc<Self>, f: impl FnOnce() -> R) -> R {
        struct ScopeGuard;

        impl Drop for ScopeGuard {
            fn drop(&mut self) {
                SCOPED.with(|scoped| {
                    scoped.borrow_mut().pop();
                });
            }
        }

        SCOPED.with(|scoped| scoped.borrow_mut().push(Arc::clone(self)));
        let _guard = ScopeGuard;
        f()
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("brand", &self.brand())
            .field("attribute", &self.attribute())
            .finish()
    }
}

/// Process-wide root provider
pub struct ThemeState;

impl ThemeState {
    /// Install the root provider (call once at startup). Later calls keep the
    /// first provider and return it.
    pub fn init(initial: &str) -> Arc<ThemeProvider> {
        Arc::clone(ROOT_PROVIDER.get_or_init(|| ThemeProvider::new(initial)))
    }

    /// Install a root provider over a custom catalog
    pub fn init_with(registry: Arc<ThemeRegistry>, initial: &str) -> Arc<ThemeProvider> {
        Arc::clone(ROOT_PROVIDER.get_or_init(|| ThemeProvider::with_registry(registry, initial)))
    }

    /// Get the root provider
    pub fn get() -> Arc<ThemeProvider> {
        match Self::try_get() {
            Some(provider) => provider,
            None => panic!("ThemeState not initialized. Call ThemeState::init() at app startup."),
        }
    }

    /// Try to get the root provider (returns None if not initialized)
    pub fn try_get() -> Option<Arc<ThemeProvider>> {
        ROOT_PROVIDER.get().cloned()
    }
}

/// Provider in scope: the innermost [`ThemeProvider::provide`] scope on this
/// thread, else the root provider
pub fn try_use_theme_provider() -> Option<Arc<ThemeProvider>> {
    SCOPED
        .with(|scoped| scoped.borrow().last().cloned())
        .or_else(ThemeState::try_get)
}

/// Provider in scope.
///
/// # Panics
///
/// Outside any provider. Reading the theme with nothing providing it is a
/// programming error.
pub fn use_theme_provider() -> Arc<ThemeProvider> {
    match try_use_theme_provider() {
        Some(provider) => provider,
        None => panic!(
            "use_theme called outside a ThemeProvider. Wrap the call in \
             ThemeProvider::provide or call ThemeState::init() at startup."
        ),
    }
}

/// Active theme of the provider in scope.
///
/// # Panics
///
/// Outside any provider, see [`use_theme_provider`].
pub fn use_theme() -> Arc<BrandTheme> {
    use_theme_provider().theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_starts_at_the_initial_brand() {
        let provider = ThemeProvider::new("harpersBazaar");
        assert_eq!(provider.brand(), Brand::HarpersBazaar);
        assert_eq!(provider.attribute(), "harpers-bazaar");

        let fallback = ThemeProvider::new("");
        assert_eq!(fallback.attribute(), "car-and-driver");
    }

    #[test]
    fn scopes_nest_and_unwind() {
        let outer = ThemeProvider::new("elle");
        let inner = ThemeProvider::new("delish");

        outer.provide(|| {
            assert_eq!(use_theme().brand(), Brand::Elle);
            inner.provide(|| assert_eq!(use_theme().brand(), Brand::Delish));
            assert_eq!(use_theme().brand(), Brand::Elle);
        });
    }

    #[test]
    fn scope_is_popped_on_panic() {
        let provider = ThemeProvider::new("esquire");
        let depth = || SCOPED.with(|scoped| scoped.borrow().len());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            provider.provide(|| panic!("render failed"))
        }));
        assert!(result.is_err());
        assert_eq!(depth(), 0);
    }
}
