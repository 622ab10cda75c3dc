use choco_catalog::{CatalogStore, ComicEntry};

use crate::components::Activation;

/// Resolve an activation against the list of the section that raised it.
#[must_use]
pub fn resolve(store: &CatalogStore, activation: &Activation) -> Option<ComicEntry> {
    store.find_comic(activation.kind, &activation.id).cloned()
}

/// Open a detail overlay for the activated comic.
///
/// Unknown ids are ignored. Returns whether an overlay was appended.
#[cfg(target_arch = "wasm32")]
pub fn show(store: &CatalogStore, activation: &Activation) -> bool {
    let Some(comic) = resolve(store, activation) else {
        log::debug!("no {} entry with id {}", activation.kind, activation.id);
        return false;
    };
    overlay::mount(comic).is_some()
}

#[cfg(target_arch = "wasm32")]
mod overlay {
    use std::cell::RefCell;
    use std::rc::Rc;

    use choco_catalog::ComicEntry;
    use yew::{AppHandle, Callback};

    use crate::components::overlay::{DetailOverlay, Props};
    use crate::dom;

    type Slot = Rc<RefCell<Option<AppHandle<DetailOverlay>>>>;

    /// Append a new overlay host to `<body>` and mount the overlay in it.
    ///
    /// Every call creates an independent overlay. Dismissal unmounts the
    /// component and removes its host from the page.
    pub(super) fn mount(comic: ComicEntry) -> Option<()> {
        let document = dom::document()?;
        let body = document.body()?;
        let host = document.create_element("div").ok()?;
        host.set_class_name("review-modal-host");
        body.append_child(&host).ok()?;

        let slot: Slot = Rc::default();
        let on_dismiss = {
            let slot = Rc::clone(&slot);
            let host = host.clone();
            Callback::from(move |()| {
                let slot = Rc::clone(&slot);
                let host = host.clone();
                // Unmount after the triggering event has finished dispatching.
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(handle) = slot.borrow_mut().take() {
                        handle.destroy();
                        host.remove();
                    }
                });
            })
        };

        let handle =
            yew::Renderer::<DetailOverlay>::with_root_and_props(host, Props { comic, on_dismiss })
                .render();
        *slot.borrow_mut() = Some(handle);
        Some(())
    }
}
