pub mod deploy;
pub mod list;
pub mod matcher;
pub mod queue;
pub mod skills;

pub use crate::domain::model::{ReliefSite, Volunteer};
pub use crate::domain::ports::{LedgerStore, RegistrantStore, SiteStore};
pub use crate::utils::error::Result;
