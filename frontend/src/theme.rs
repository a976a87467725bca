use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Interprets a raw stored value. Empty means nothing stored; any
    /// non-empty value other than `"dark"` counts as light.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }

    /// Stored preference wins, then the OS signal, then light.
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> Result<(), UiError>;
}

/// Where the applied theme is visible.
pub trait ThemeTarget {
    fn current(&self) -> Theme;
    fn apply(&self, theme: Theme);
}

pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<Theme> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
            .flatten()
            .and_then(|raw| Theme::from_stored(&raw))
    }

    fn save(&self, theme: Theme) -> Result<(), UiError> {
        let storage = window()
            .ok_or(UiError::NoWindow)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(UiError::StorageUnavailable)?;
        storage
            .set_item(config::THEME_STORAGE_KEY, theme.as_str())
            .map_err(|_| UiError::StorageWrite(config::THEME_STORAGE_KEY.to_string()))
    }
}

/// The `dark` class on `<html>`.
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn current(&self) -> Theme {
        let dark = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.class_list().contains(config::DARK_CLASS))
            .unwrap_or(false);
        if dark { Theme::Dark } else { Theme::Light }
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let classes = root.class_list();
            let _ = match theme {
                Theme::Dark => classes.add_1(config::DARK_CLASS),
                Theme::Light => classes.remove_1(config::DARK_CLASS),
            };
        }
    }
}

pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(config::DARK_MEDIA_QUERY).ok())
        .flatten()
        .map_or(false, |mq| mq.matches())
}

pub struct ThemeController<S, T> {
    store: S,
    target: T,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T) -> Self {
        Self { store, target }
    }

    pub fn init(&self, prefers_dark: bool) -> Theme {
        let theme = Theme::resolve(self.store.load(), prefers_dark);
        self.target.apply(theme);
        debug!("Applied {} theme", theme.as_str());
        theme
    }

    /// Flips whatever is currently applied and persists the result. A failed
    /// write leaves the new theme applied for this session only.
    pub fn toggle(&self) -> Theme {
        let next = self.target.current().toggled();
        self.target.apply(next);
        if let Err(err) = self.store.save(next) {
            warn!("Theme preference not saved: {}", err);
        }
        next
    }
}

pub fn page_theme() -> ThemeController<LocalPreferenceStore, DocumentRoot> {
    ThemeController::new(LocalPreferenceStore, DocumentRoot)
}

/// Runs once before the first render so the page never flashes the wrong theme.
pub fn init_theme() -> Theme {
    page_theme().init(system_prefers_dark())
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| DocumentRoot.current());

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(page_theme().toggle());
        })
    };

    html! {
        <button id="themeToggle" class="theme-toggle" aria-label="Toggle dark mode" {onclick}>
            {
                if *theme == Theme::Dark {
                    html! {
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="5"></circle>
                            <line x1="12" y1="1" x2="12" y2="3"></line>
                            <line x1="12" y1="21" x2="12" y2="23"></line>
                            <line x1="1" y1="12" x2="3" y2="12"></line>
                            <line x1="21" y1="12" x2="23" y2="12"></line>
                        </svg>
                    }
                } else {
                    html! {
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
                        </svg>
                    }
                }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<Theme>>,
        broken: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        fn save(&self, theme: Theme) -> Result<(), UiError> {
            if self.broken {
                return Err(UiError::StorageUnavailable);
            }
            *self.value.borrow_mut() = Some(theme);
            Ok(())
        }
    }

    struct MemoryRoot {
        dark: Cell<bool>,
    }

    impl MemoryRoot {
        fn new(theme: Theme) -> Self {
            Self { dark: Cell::new(theme == Theme::Dark) }
        }
    }

    impl ThemeTarget for MemoryRoot {
        fn current(&self) -> Theme {
            if self.dark.get() { Theme::Dark } else { Theme::Light }
        }

        fn apply(&self, theme: Theme) {
            self.dark.set(theme == Theme::Dark);
        }
    }

    fn theme_strategy() -> impl Strategy<Value = Theme> {
        prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
    }

    #[rstest]
    #[case(Some(Theme::Dark), false, Theme::Dark)]
    #[case(Some(Theme::Light), true, Theme::Light)]
    #[case(None, true, Theme::Dark)]
    #[case(None, false, Theme::Light)]
    fn resolves_effective_theme(#[case] stored: Option<Theme>, #[case] prefers_dark: bool, #[case] expected: Theme) {
        assert_eq!(Theme::resolve(stored, prefers_dark), expected);
    }

    #[rstest]
    #[case("dark", Some(Theme::Dark))]
    #[case("light", Some(Theme::Light))]
    #[case("sepia", Some(Theme::Light))]
    #[case("", None)]
    fn reads_stored_values(#[case] raw: &str, #[case] expected: Option<Theme>) {
        assert_eq!(Theme::from_stored(raw), expected);
    }

    #[test]
    fn init_applies_stored_preference() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some(Theme::Dark);
        let controller = ThemeController::new(store, MemoryRoot::new(Theme::Light));
        assert_eq!(controller.init(false), Theme::Dark);
        assert_eq!(controller.target.current(), Theme::Dark);
    }

    #[test]
    fn init_does_not_write_storage() {
        let controller = ThemeController::new(MemoryStore::default(), MemoryRoot::new(Theme::Light));
        controller.init(true);
        assert_eq!(controller.store.load(), None);
    }

    #[test]
    fn failed_write_still_flips_theme() {
        let store = MemoryStore { broken: true, ..Default::default() };
        let controller = ThemeController::new(store, MemoryRoot::new(Theme::Light));
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.target.current(), Theme::Dark);
        assert_eq!(controller.store.load(), None);
    }

    proptest! {
        #[test]
        fn double_toggle_is_identity(start in theme_strategy()) {
            let controller = ThemeController::new(MemoryStore::default(), MemoryRoot::new(start));
            controller.toggle();
            controller.toggle();
            prop_assert_eq!(controller.target.current(), start);
        }

        #[test]
        fn persisted_value_tracks_applied_theme(start in theme_strategy(), toggles in 1usize..8) {
            let controller = ThemeController::new(MemoryStore::default(), MemoryRoot::new(start));
            for _ in 0..toggles {
                let applied = controller.toggle();
                prop_assert_eq!(controller.target.current(), applied);
                prop_assert_eq!(controller.store.load(), Some(applied));
            }
        }
    }
}
