use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::{install, ThemeController};
use crate::error::ThemeError;
use crate::ports::{IconClasses, PreferenceStore, ThemeTarget, ToggleControl};

pub type DomController = ThemeController<LocalStorage, DocumentRoot, DomIcon>;

/// `window.localStorage`. Access can throw (sandboxed iframes, some private
/// modes), in which case every call reports the store as unavailable.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!("localStorage access denied: {}", ThemeError::js_message(&e));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(ThemeError::storage)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(ThemeError::storage)
    }
}

/// The theme attribute on `document.documentElement`.
pub struct DocumentRoot {
    root: Element,
    attribute: String,
}

impl DocumentRoot {
    pub fn new(root: Element, attribute: &str) -> Self {
        Self {
            root,
            attribute: attribute.to_string(),
        }
    }
}

impl ThemeTarget for DocumentRoot {
    fn theme(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_theme(&self, value: &str) -> Result<(), ThemeError> {
        self.root
            .set_attribute(&self.attribute, value)
            .map_err(ThemeError::dom)
    }
}

pub struct DomIcon {
    element: Element,
}

impl IconClasses for DomIcon {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        self.element.class_list().add_1(class).map_err(ThemeError::dom)
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        self.element
            .class_list()
            .remove_1(class)
            .map_err(ThemeError::dom)
    }
}

pub struct DomToggle {
    element: Element,
    icon_selector: String,
}

impl DomToggle {
    pub fn new(element: Element, icon_selector: &str) -> Self {
        Self {
            element,
            icon_selector: icon_selector.to_string(),
        }
    }
}

impl ToggleControl for DomToggle {
    type Icon = DomIcon;

    fn status_icon(&self) -> Option<DomIcon> {
        match self.element.query_selector(&self.icon_selector) {
            Ok(element) => element.map(|element| DomIcon { element }),
            Err(e) => {
                warn!(
                    "bad icon selector {:?}: {}",
                    self.icon_selector,
                    ThemeError::js_message(&e)
                );
                None
            }
        }
    }

    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(ThemeError::dom)?;
        // The listener lives as long as the page does.
        closure.forget();
        Ok(())
    }
}

/// Bind the controller to the current document. Returns `None` outside a
/// browser, or when the document has no root element.
pub fn install_on_document(config: ThemeConfig) -> Option<Rc<DomController>> {
    let Some(window) = web_sys::window() else {
        warn!("no window, theme controller not installed");
        return None;
    };
    let Some(document) = window.document() else {
        warn!("no document, theme controller not installed");
        return None;
    };
    let Some(root) = document.document_element() else {
        warn!("document has no root element, theme controller not installed");
        return None;
    };

    let store = LocalStorage::from_window(&window);
    let target = DocumentRoot::new(root, &config.attribute);
    let toggle = document
        .get_element_by_id(&config.toggle_id)
        .map(|element| DomToggle::new(element, &config.icon_selector));
    if toggle.is_none() {
        debug!("no element #{} on page", config.toggle_id);
    }

    Some(install(store, target, toggle, config))
}
