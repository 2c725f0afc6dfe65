pub mod loader;
pub mod store;

pub use loader::load_catalog;
pub use store::MovieCatalog;
