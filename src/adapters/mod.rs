// Adapters layer: concrete store implementations over the text files the
// operations team already keeps.

pub mod text_store;

pub use text_store::{CsvVolunteerFile, SiteTableFile};
