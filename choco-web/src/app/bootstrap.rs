use choco_catalog::{CatalogDocument, SectionContent, SectionKind};
use yew::Callback;

use crate::app::host::SectionHost;
use crate::components::Activation;
use crate::components::sections::Props as SectionProps;

/// Render every section of a loaded catalog into `host`.
///
/// Sections whose container is missing, or whose list is absent from the
/// catalog, are left untouched. Returns the sections that were rendered.
pub fn render_catalog<H: SectionHost + ?Sized>(
    host: &mut H,
    catalog: &CatalogDocument,
    seed: u64,
    on_activate: &Callback<Activation>,
) -> Vec<SectionKind> {
    let mut rendered = Vec::new();
    for kind in SectionKind::ALL {
        if !host.has_container(kind) {
            continue;
        }
        let Some(content) = SectionContent::from_catalog(catalog, kind) else {
            log::debug!("{kind} missing from catalog; keeping placeholder");
            continue;
        };
        log::debug!("rendering {} {kind} item(s)", content.item_count());
        let on_activate = if kind.is_activatable() {
            on_activate.clone()
        } else {
            Callback::noop()
        };
        host.mount(SectionProps {
            kind,
            content,
            seed,
            on_activate,
        });
        rendered.push(kind);
    }
    rendered
}

/// Write the uniform load-failure message into every container the page has.
pub fn render_failure<H: SectionHost + ?Sized>(host: &mut H) -> Vec<SectionKind> {
    let mut rendered = Vec::new();
    for kind in SectionKind::ALL {
        if !host.has_container(kind) {
            continue;
        }
        host.mount(SectionProps {
            kind,
            content: SectionContent::failure(),
            seed: 0,
            on_activate: Callback::noop(),
        });
        rendered.push(kind);
    }
    rendered
}

/// Read the page configuration and start loading the catalog.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use std::rc::Rc;

    let config = choco_catalog::CatalogConfig::from_attributes(
        crate::dom::body_attribute("data-catalog-url").as_deref(),
        crate::dom::body_attribute("data-catalog-profile").as_deref(),
    );
    log::debug!("starting with {config:?}");
    let context = Rc::new(crate::app::AppContext::new(config));
    wasm_bindgen_futures::spawn_local(async move {
        context.load().await;
    });
}
