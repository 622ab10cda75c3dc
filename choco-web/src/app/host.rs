use choco_catalog::SectionKind;

use crate::components::sections::Props as SectionProps;

/// The page's section containers, resolved once per page
///
/// Rendering only goes through this trait, so presence of a container is
/// checked in one place.
pub trait SectionHost {
    /// Whether the page exposes a container for `kind`.
    fn has_container(&self, kind: SectionKind) -> bool;

    /// Replace the content of the container for `view.kind`.
    ///
    /// Hosts ignore views for containers they do not have.
    fn mount(&mut self, view: SectionProps);
}

#[cfg(target_arch = "wasm32")]
pub use dom_host::DomSectionHost;

#[cfg(target_arch = "wasm32")]
mod dom_host {
    use std::collections::BTreeMap;

    use choco_catalog::{ContainerProfile, SectionKind};
    use web_sys::Element;
    use yew::AppHandle;

    use super::{SectionHost, SectionProps};
    use crate::components::sections::SectionView;
    use crate::dom;

    /// Section containers found in the live document
    pub struct DomSectionHost {
        containers: BTreeMap<SectionKind, Element>,
        mounted: BTreeMap<SectionKind, AppHandle<SectionView>>,
    }

    impl DomSectionHost {
        /// Look up every container id of `profile`; missing ones are skipped.
        #[must_use]
        pub fn resolve(profile: ContainerProfile) -> Self {
            let containers: BTreeMap<_, _> = profile
                .containers()
                .into_iter()
                .filter_map(|(kind, id)| {
                    let element = dom::element_by_id(id);
                    if element.is_none() {
                        log::debug!("page has no #{id}; {kind} will not render");
                    }
                    element.map(|element| (kind, element))
                })
                .collect();
            Self {
                containers,
                mounted: BTreeMap::new(),
            }
        }
    }

    impl SectionHost for DomSectionHost {
        fn has_container(&self, kind: SectionKind) -> bool {
            self.containers.contains_key(&kind)
        }

        fn mount(&mut self, view: SectionProps) {
            let kind = view.kind;
            let Some(container) = self.containers.get(&kind) else {
                return;
            };
            match self.mounted.remove(&kind) {
                Some(previous) => previous.destroy(),
                None => container.set_inner_html(""),
            }
            let handle =
                yew::Renderer::<SectionView>::with_root_and_props(container.clone(), view).render();
            self.mounted.insert(kind, handle);
        }
    }
}
