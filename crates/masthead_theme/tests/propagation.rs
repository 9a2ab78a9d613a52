use masthead_theme::{use_theme, Brand, ThemeProvider, ThemeState, THEME_ATTRIBUTE};
use pretty_assertions::assert_eq;

#[test]
fn attribute_is_kebab_case() {
    let provider = ThemeProvider::new("carAndDriver");
    assert_eq!(THEME_ATTRIBUTE, "data-theme");

    provider.set_theme("goodHousekeeping");
    assert_eq!(provider.attribute(), "good-housekeeping");
    assert_eq!(provider.brand(), Brand::GoodHousekeeping);
    assert_eq!(provider.theme().brand(), Brand::GoodHousekeeping);
}

#[test]
fn setting_the_same_theme_twice_notifies_once() {
    let provider = ThemeProvider::new("carAndDriver");
    let mut rx = provider.subscribe();
    assert!(!rx.has_changed().unwrap());

    assert_eq!(provider.set_theme("elle"), Brand::Elle);
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), "elle");

    assert_eq!(provider.set_theme("elle"), Brand::Elle);
    assert!(!rx.has_changed().unwrap());
    assert_eq!(provider.attribute(), "elle");

    // Same brand, other id style.
    provider.set_theme("Elle");
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn unknown_ids_switch_to_the_default_brand() {
    let provider = ThemeProvider::new("delish");
    assert_eq!(provider.set_theme("unknown-brand-xyz"), Brand::CarAndDriver);
    assert_eq!(provider.attribute(), "car-and-driver");
}

#[test]
fn scoped_provider_serves_use_theme() {
    let provider = ThemeProvider::new("runnersWorld");
    provider.provide(|| {
        assert_eq!(use_theme().brand(), Brand::RunnersWorld);
        provider.set_theme("womens-health");
        assert_eq!(use_theme().brand(), Brand::WomensHealth);
    });
}

#[tokio::test]
async fn subscribers_see_changes_across_tasks() {
    let provider = ThemeProvider::new("esquire");
    let mut rx = provider.subscribe();

    let reader = tokio::spawn(async move {
        rx.changed().await.unwrap();
        rx.borrow_and_update().clone()
    });
    provider.set_theme("popular-mechanics");

    assert_eq!(reader.await.unwrap(), "popular-mechanics");
}

#[test]
fn root_provider_is_visible_from_other_threads() {
    let root = ThemeState::init("cosmopolitan");
    assert!(ThemeState::try_get().is_some());

    let brand = std::thread::spawn(|| use_theme().brand()).join().unwrap();
    assert_eq!(brand, root.brand());
}
