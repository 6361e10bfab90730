//! Content screens
//!
//! One screen per drawer destination; the collection screen backs the
//! three shelf routes.

pub mod collection;
pub mod home;
pub mod profile;
pub mod settings;

pub use collection::CollectionScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use settings::SettingsScreen;
