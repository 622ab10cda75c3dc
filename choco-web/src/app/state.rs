//! Application context owned by the page for its whole session.

#[cfg(target_arch = "wasm32")]
pub use context::AppContext;

#[cfg(target_arch = "wasm32")]
mod context {
    use std::cell::RefCell;
    use std::rc::Rc;

    use choco_catalog::{CatalogConfig, CatalogDocument, CatalogStore};
    use yew::Callback;

    use crate::app::bootstrap::{render_catalog, render_failure};
    use crate::app::host::DomSectionHost;
    use crate::app::{fetch, presenter};
    use crate::components::Activation;
    use crate::{dom, paths};

    /// Catalog store plus the page's section containers
    pub struct AppContext {
        config: CatalogConfig,
        store: RefCell<CatalogStore>,
        host: RefCell<DomSectionHost>,
    }

    impl AppContext {
        #[must_use]
        pub fn new(config: CatalogConfig) -> Self {
            let host = DomSectionHost::resolve(config.profile);
            Self {
                config,
                store: RefCell::new(CatalogStore::new()),
                host: RefCell::new(host),
            }
        }

        /// Fetch the catalog once and render it, or the failure message.
        #[allow(clippy::future_not_send)]
        pub async fn load(self: &Rc<Self>) {
            let url = paths::catalog_url(&self.config.catalog_url);
            match fetch::load(&url).await {
                Ok(catalog) => self.apply(catalog),
                Err(err) => {
                    log::error!("Error loading comic data: {err}");
                    let failed = render_failure(&mut *self.host.borrow_mut());
                    log::info!("showing load failure in {} section(s)", failed.len());
                }
            }
        }

        fn apply(self: &Rc<Self>, catalog: CatalogDocument) {
            log::info!(
                "loaded comic data; available sections: {:?}",
                catalog.present_sections()
            );
            self.store.borrow_mut().replace(catalog);

            let on_activate = self.activation_callback();
            let store = self.store.borrow();
            if let Some(catalog) = store.document() {
                let rendered = render_catalog(
                    &mut *self.host.borrow_mut(),
                    catalog,
                    dom::random_seed(),
                    &on_activate,
                );
                log::debug!("rendered sections: {rendered:?}");
            }
        }

        /// Activations keep the context alive for the rest of the session.
        fn activation_callback(self: &Rc<Self>) -> Callback<Activation> {
            let context = Rc::clone(self);
            Callback::from(move |activation: Activation| {
                presenter::show(&context.store.borrow(), &activation);
            })
        }
    }
}
