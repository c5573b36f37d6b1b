use std::rc::Rc;

use log::{debug, warn};

use crate::config::ThemeConfig;
use crate::ports::{IconClasses, PreferenceStore, ThemeTarget, ToggleControl};
use crate::theme::{Glyph, Theme};

/// Applies the persisted theme at startup and flips it on each activation.
///
/// None of the operations fail: storage and DOM errors are logged and the
/// controller carries on with whatever state it could apply.
pub struct ThemeController<S, T, I> {
    store: S,
    target: T,
    icon: Option<I>,
    config: ThemeConfig,
}

impl<S, T, I> ThemeController<S, T, I>
where
    S: PreferenceStore,
    T: ThemeTarget,
    I: IconClasses,
{
    pub fn new(store: S, target: T, icon: Option<I>, config: ThemeConfig) -> Self {
        Self {
            store,
            target,
            icon,
            config,
        }
    }

    /// The attribute as it stands on the target right now.
    pub fn current_attribute(&self) -> Option<String> {
        self.target.theme()
    }

    pub fn has_status_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Read the stored preference (default light), apply it, sync the icon.
    pub fn initialize(&self) -> Theme {
        let theme = self.stored_theme().unwrap_or_default();
        self.apply(theme);
        self.update_status_icon(theme);
        debug!("theme initialized to {}", theme);
        theme
    }

    /// Flip the theme. The live attribute decides the current state, not the
    /// store, so edits made to storage after startup are ignored here.
    pub fn on_toggle_activated(&self) -> Theme {
        let current = self.target.theme();
        let next = Theme::next_after(current.as_deref());

        self.apply(next);
        if let Err(e) = self.store.set(&self.config.storage_key, next.as_str()) {
            warn!("failed to persist theme {}: {}", next, e);
        }
        self.update_status_icon(next);

        debug!(
            "theme toggled from {} to {}",
            current.as_deref().unwrap_or("<unset>"),
            next
        );
        next
    }

    /// Show the sun glyph for dark, the moon glyph otherwise. Leaves exactly one
    /// of the two classes on the icon. No-op without an icon.
    pub fn update_status_icon(&self, theme: Theme) {
        let Some(icon) = &self.icon else {
            return;
        };

        let glyph = Glyph::for_theme(theme);
        let result = icon
            .remove_class(self.config.glyph_class(glyph.other()))
            .and_then(|_| icon.add_class(self.config.glyph_class(glyph)));
        if let Err(e) = result {
            warn!("failed to update theme icon: {}", e);
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        match self.store.get(&self.config.storage_key) {
            Ok(Some(value)) => match value.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!("ignoring stored theme: {}", e);
                    None
                }
            },
            Ok(None) => {
                debug!("no stored theme under {:?}", self.config.storage_key);
                None
            }
            Err(e) => {
                warn!("failed to read stored theme: {}", e);
                None
            }
        }
    }

    fn apply(&self, theme: Theme) {
        if let Err(e) = self.target.set_theme(theme.as_str()) {
            warn!("failed to apply theme {}: {}", theme, e);
        }
    }
}

/// Build the controller, initialize it, and subscribe it to `toggle` if the
/// page has one. This is the only place a handler gets registered.
pub fn install<S, T, C>(
    store: S,
    target: T,
    toggle: Option<C>,
    config: ThemeConfig,
) -> Rc<ThemeController<S, T, C::Icon>>
where
    S: PreferenceStore + 'static,
    T: ThemeTarget + 'static,
    C: ToggleControl,
    C::Icon: 'static,
{
    let icon = toggle.as_ref().and_then(|t| t.status_icon());
    let controller = Rc::new(ThemeController::new(store, target, icon, config));
    controller.initialize();

    let Some(toggle) = toggle else {
        debug!("no theme toggle on page, skipping wiring");
        return controller;
    };

    let handle = Rc::clone(&controller);
    if let Err(e) = toggle.on_activate(Box::new(move || {
        handle.on_toggle_activated();
    })) {
        warn!("failed to wire theme toggle: {}", e);
    }

    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryIcon, MemoryStore, MemoryTarget};

    fn controller_with(
        stored: Option<&str>,
    ) -> (
        ThemeController<MemoryStore, MemoryTarget, MemoryIcon>,
        MemoryStore,
        MemoryTarget,
        MemoryIcon,
    ) {
        let store = MemoryStore::new();
        if let Some(value) = stored {
            store.insert("gm-theme", value);
        }
        let target = MemoryTarget::new();
        let icon = MemoryIcon::new();
        let controller = ThemeController::new(
            store.clone(),
            target.clone(),
            Some(icon.clone()),
            ThemeConfig::default(),
        );
        (controller, store, target, icon)
    }

    #[test]
    fn test_initialize_applies_stored_dark() {
        let (controller, _store, target, icon) = controller_with(Some("dark"));

        assert_eq!(controller.initialize(), Theme::Dark);
        assert_eq!(target.value().as_deref(), Some("dark"));
        assert!(icon.has_class("bi-sun"));
        assert!(!icon.has_class("bi-moon-stars"));
    }

    #[test]
    fn test_initialize_defaults_to_light() {
        let (controller, store, target, icon) = controller_with(None);

        assert_eq!(controller.initialize(), Theme::Light);
        assert_eq!(target.value().as_deref(), Some("light"));
        assert!(icon.has_class("bi-moon-stars"));
        // initialization never writes
        assert_eq!(store.value("gm-theme"), None);
    }

    #[test]
    fn test_initialize_ignores_invalid_value() {
        let (controller, _store, target, _icon) = controller_with(Some("solarized"));

        assert_eq!(controller.initialize(), Theme::Light);
        assert_eq!(target.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_initialize_survives_read_failure() {
        let (controller, store, target, _icon) = controller_with(Some("dark"));
        store.fail_reads(true);

        assert_eq!(controller.initialize(), Theme::Light);
        assert_eq!(target.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let (controller, store, target, icon) = controller_with(None);
        controller.initialize();

        assert_eq!(controller.on_toggle_activated(), Theme::Dark);
        assert_eq!(target.value().as_deref(), Some("dark"));
        assert_eq!(store.value("gm-theme").as_deref(), Some("dark"));
        assert!(icon.has_class("bi-sun"));
        assert!(!icon.has_class("bi-moon-stars"));
    }

    #[test]
    fn test_toggle_without_attribute_goes_dark() {
        let (controller, store, target, _icon) = controller_with(None);

        assert_eq!(controller.on_toggle_activated(), Theme::Dark);
        assert_eq!(target.value().as_deref(), Some("dark"));
        assert_eq!(store.value("gm-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_keeps_ui_state_when_write_fails() {
        let (controller, store, target, icon) = controller_with(Some("dark"));
        controller.initialize();
        store.fail_writes(true);

        assert_eq!(controller.on_toggle_activated(), Theme::Light);
        assert_eq!(target.value().as_deref(), Some("light"));
        assert!(icon.has_class("bi-moon-stars"));
        assert_eq!(store.value("gm-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_update_icon_without_icon_is_noop() {
        let controller = ThemeController::new(
            MemoryStore::new(),
            MemoryTarget::new(),
            None::<MemoryIcon>,
            ThemeConfig::default(),
        );
        controller.update_status_icon(Theme::Dark);
        assert!(!controller.has_status_icon());
    }

    #[test]
    fn test_update_icon_leaves_one_glyph_class() {
        let (controller, _store, _target, icon) = controller_with(None);
        icon.add_class("bi").unwrap();
        icon.add_class("bi-sun").unwrap();
        icon.add_class("bi-moon-stars").unwrap();

        controller.update_status_icon(Theme::Light);

        assert!(icon.has_class("bi"));
        assert!(icon.has_class("bi-moon-stars"));
        assert!(!icon.has_class("bi-sun"));
    }
}
