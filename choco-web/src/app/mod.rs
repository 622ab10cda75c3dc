//! Page wiring: fetch the catalog, render the sections, open details.

pub mod bootstrap;
pub mod fetch;
pub mod host;
pub mod presenter;
pub mod state;

pub use host::SectionHost;
#[cfg(target_arch = "wasm32")]
pub use state::AppContext;
