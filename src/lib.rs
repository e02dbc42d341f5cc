#[path = "core/model.rs"]
pub mod model;

#[path = "core/registry.rs"]
pub mod registry;

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/presenter.rs"]
pub mod presenter;

#[path = "core/loader.rs"]
pub mod loader;

pub mod views;

pub use loader::{DemoLauncher, DemoLoadError, DemoResolver, StaticResolver};
pub use model::{ApiEntry, Category, Demo, DemoId, Support, SupportMap, Vendor};
pub use presenter::{ActiveDemo, CloseHandle, DemoWidget, Presenter};
pub use registry::{Registry, RegistryError};
