//! Light/dark theme preference.
//!
//! The preference lives in a [`ThemeStore`] owned by the app root and handed
//! to components through a Yew context. A small script in `index.html` stamps
//! the `dark` class before the WASM bundle loads; `main` resolves the same
//! preference again and the store owns it from then on.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{info, warn};
use thiserror::Error;
use yew::prelude::*;

pub const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";
const TRANSITION_CLASS: &str = "theme-transitioning";
const TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value. Anything other than `"light"`/`"dark"` is
    /// treated as no preference.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage call failed: {0}")]
    Access(String),
}

/// Durable home of the single theme key.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// The environment's "prefers dark" signal, read once at startup.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

/// Class list of the document root.
pub trait RootClasses {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
}

/// Persisted preference first, then the environment signal. A storage read
/// that fails counts as no preference.
pub fn resolve_initial_theme(storage: &dyn ThemeStorage, scheme: &dyn ColorScheme) -> Theme {
    let saved = match storage.load() {
        Ok(value) => value.as_deref().and_then(Theme::parse),
        Err(err) => {
            warn!("Could not read saved theme: {}", err);
            None
        }
    };

    saved.unwrap_or_else(|| {
        if scheme.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

type Listener = Rc<dyn Fn(Theme)>;

struct Shared {
    current: Cell<Theme>,
    storage: Box<dyn ThemeStorage>,
    apply: Box<dyn Fn(Theme)>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

/// Single source of truth for the active theme.
///
/// Cloning is cheap and every clone refers to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    shared: Rc<Shared>,
}

impl ThemeStore {
    pub fn new<S, A>(storage: S, initial: Theme, apply: A) -> Self
    where
        S: ThemeStorage + 'static,
        A: Fn(Theme) + 'static,
    {
        Self {
            shared: Rc::new(Shared {
                current: Cell::new(initial),
                storage: Box::new(storage),
                apply: Box::new(apply),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Resolves the starting theme and stamps it on `root` right away,
    /// without a transition. Later changes go through `apply`.
    pub fn resolve<S, A>(
        storage: S,
        scheme: &dyn ColorScheme,
        root: &dyn RootClasses,
        apply: A,
    ) -> Self
    where
        S: ThemeStorage + 'static,
        A: Fn(Theme) + 'static,
    {
        let initial = resolve_initial_theme(&storage, scheme);
        info!("Initial theme: {}", initial);
        set_dark_class(root, initial);
        Self::new(storage, initial, apply)
    }

    /// [`ThemeStore::resolve`] against `localStorage`, the system color scheme
    /// and `<html>`.
    pub fn in_browser() -> Self {
        Self::resolve(LocalStorage, &SystemColorScheme, &DocumentRoot, apply_theme)
    }

    pub fn get(&self) -> Theme {
        self.shared.current.get()
    }

    /// Updates memory first, then storage, then the document. A storage
    /// failure is logged and otherwise ignored.
    pub fn set(&self, theme: Theme) {
        self.shared.current.set(theme);
        if let Err(err) = self.shared.storage.save(theme.as_str()) {
            warn!("Could not persist theme '{}': {}", theme, err);
        }
        (self.shared.apply)(theme);
        self.notify(theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Registers `listener` for every change. The listener stays registered
    /// until the returned [`Subscription`] is dropped.
    #[must_use]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Theme) + 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }

    fn notify(&self, theme: Theme) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(theme);
        }
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

pub struct Subscription {
    shared: Weak<Shared>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Current theme plus a click handler that toggles it. Re-renders the
/// calling component whenever the store changes.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let store = use_context::<ThemeStore>();
    let current = {
        let store = store.clone();
        use_state(move || store.as_ref().map_or(Theme::Light, ThemeStore::get))
    };

    {
        let current = current.clone();
        use_effect_with_deps(
            move |store| {
                let subscription = store
                    .as_ref()
                    .map(|store| store.subscribe(move |theme| current.set(theme)));
                move || drop(subscription)
            },
            store.clone(),
        );
    }

    let toggle = Callback::from(move |_: MouseEvent| {
        if let Some(store) = &store {
            store.toggle();
        }
    });

    (*current, toggle)
}

/// `window.localStorage`, failing soft when blocked or absent.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ThemeStorage for LocalStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(STORAGE_KEY, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

pub struct SystemColorScheme;

impl ColorScheme for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
}

/// `document.documentElement`, looked up on every call.
#[derive(Clone, Copy)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

impl RootClasses for DocumentRoot {
    fn add(&self, class: &str) {
        if let Some(root) = Self::element() {
            let _ = root.class_list().add_1(class);
        }
    }

    fn remove(&self, class: &str) {
        if let Some(root) = Self::element() {
            let _ = root.class_list().remove_1(class);
        }
    }
}

fn set_dark_class(root: &dyn RootClasses, theme: Theme) {
    if theme.is_dark() {
        root.add(DARK_CLASS);
    } else {
        root.remove(DARK_CLASS);
    }
}

/// Opens the transition window and applies `theme`. The returned closure
/// closes the window again.
fn start_transition<R: RootClasses>(root: R, theme: Theme) -> impl FnOnce() {
    root.add(TRANSITION_CLASS);
    set_dark_class(&root, theme);
    move || root.remove(TRANSITION_CLASS)
}

/// Applies `theme` to `<html>` inside a short transition window so colors
/// fade instead of snapping.
pub fn apply_theme(theme: Theme) {
    let finish = start_transition(DocumentRoot, theme);
    Timeout::new(TRANSITION_MS, finish).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        value: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl MemoryStorage {
        fn with(value: &str) -> Self {
            Self {
                value: Rc::new(RefCell::new(Some(value.to_string()))),
                broken: false,
            }
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Access("SecurityError".into()));
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Access("QuotaExceededError".into()));
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingRoot {
        ops: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingRoot {
        fn ops(&self) -> Vec<String> {
            self.ops.borrow().clone()
        }
    }

    impl RootClasses for RecordingRoot {
        fn add(&self, class: &str) {
            self.ops.borrow_mut().push(format!("+{}", class));
        }

        fn remove(&self, class: &str) {
            self.ops.borrow_mut().push(format!("-{}", class));
        }
    }

    struct Scheme(bool);

    impl ColorScheme for Scheme {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    fn store_with(storage: MemoryStorage, initial: Theme) -> (ThemeStore, Rc<RefCell<Vec<Theme>>>) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&applied);
        let store = ThemeStore::new(storage, initial, move |t| sink.borrow_mut().push(t));
        (store, applied)
    }

    #[test]
    fn missing_key_follows_system_preference() {
        let storage = MemoryStorage::default();
        assert_eq!(resolve_initial_theme(&storage, &Scheme(true)), Theme::Dark);
        assert_eq!(resolve_initial_theme(&storage, &Scheme(false)), Theme::Light);
    }

    #[test]
    fn saved_key_wins_over_system_preference() {
        assert_eq!(
            resolve_initial_theme(&MemoryStorage::with("light"), &Scheme(true)),
            Theme::Light
        );
        assert_eq!(
            resolve_initial_theme(&MemoryStorage::with("dark"), &Scheme(false)),
            Theme::Dark
        );
    }

    #[test]
    fn garbage_key_falls_back_to_system_preference() {
        assert_eq!(
            resolve_initial_theme(&MemoryStorage::with("sepia"), &Scheme(true)),
            Theme::Dark
        );
    }

    #[test]
    fn unreadable_storage_defaults_to_light() {
        assert_eq!(
            resolve_initial_theme(&MemoryStorage::broken(), &Scheme(false)),
            Theme::Light
        );
    }

    #[test]
    fn toggle_keeps_memory_and_storage_in_step() {
        let storage = MemoryStorage::default();
        let (store, applied) = store_with(storage.clone(), Theme::Light);

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(storage.stored().as_deref(), Some("dark"));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(storage.stored().as_deref(), Some("light"));

        assert_eq!(*applied.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn toggle_survives_broken_storage() {
        let (store, applied) = store_with(MemoryStorage::broken(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(*applied.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn subscribers_hear_changes_until_dropped() {
        let (store, _) = store_with(MemoryStorage::default(), Theme::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |t| sink.borrow_mut().push(t));
        store.toggle();
        store.set(Theme::Dark);
        drop(subscription);
        store.toggle();

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Dark]);
    }

    #[test]
    fn clones_share_state() {
        let (store, _) = store_with(MemoryStorage::default(), Theme::Light);
        let other = store.clone();
        other.toggle();
        assert_eq!(store.get(), Theme::Dark);
        assert!(store == other);
    }

    #[test]
    fn first_application_does_not_animate() {
        let root = RecordingRoot::default();
        let store = ThemeStore::resolve(MemoryStorage::with("dark"), &Scheme(false), &root, |_| {});
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(root.ops(), vec!["+dark"]);

        let root = RecordingRoot::default();
        let store = ThemeStore::resolve(MemoryStorage::default(), &Scheme(false), &root, |_| {});
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(root.ops(), vec!["-dark"]);
    }

    #[test]
    fn resolve_hands_later_changes_to_apply() {
        let root = RecordingRoot::default();
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&applied);
        let store = ThemeStore::resolve(MemoryStorage::default(), &Scheme(true), &root, move |t| {
            sink.borrow_mut().push(t)
        });

        store.toggle();
        assert_eq!(*applied.borrow(), vec![Theme::Light]);
        assert_eq!(root.ops(), vec!["+dark"]);
    }

    #[test]
    fn transition_wraps_the_class_change() {
        let root = RecordingRoot::default();
        let finish = start_transition(root.clone(), Theme::Dark);
        assert_eq!(root.ops(), vec!["+theme-transitioning", "+dark"]);
        finish();
        assert_eq!(
            root.ops(),
            vec!["+theme-transitioning", "+dark", "-theme-transitioning"]
        );

        let root = RecordingRoot::default();
        start_transition(root.clone(), Theme::Light)();
        assert_eq!(
            root.ops(),
            vec!["+theme-transitioning", "-dark", "-theme-transitioning"]
        );
        assert_eq!(TRANSITION_MS, 300);
    }

    #[test]
    fn index_stamps_theme_before_the_wasm_bundle() {
        let index = include_str!("../index.html");
        let rust_link = index
            .find(r#"rel="rust""#)
            .expect("index.html loads the rust bundle");
        let head = &index[..rust_link];
        assert!(head.contains("<script>"));
        assert!(head.contains(&format!("localStorage.getItem('{}')", STORAGE_KEY)));
        assert!(head.contains(DARK_QUERY));
        assert!(head.contains(&format!("classList.toggle('{}'", DARK_CLASS)));
        assert!(head.contains("saved !== 'light'"));
        assert!(head.contains("catch (e)"));
    }

    #[test]
    fn theme_strings_round_trip() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
    }
}
