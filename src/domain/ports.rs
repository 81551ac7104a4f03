use crate::core::list::LinkedList;
use crate::domain::model::{ReliefSite, Volunteer};
use crate::utils::error::Result;

/// Store of registered volunteers, one record per registration, in entry order.
pub trait RegistrantStore {
    fn load(&self) -> Result<Vec<Volunteer>>;
    fn append(&self, volunteer: &Volunteer) -> Result<()>;
}

/// Append-only ledger of volunteers that have completed deployment.
/// Loaded in full for dedup filtering; appended once per successful deployment.
pub trait LedgerStore {
    fn load(&self) -> Result<Vec<Volunteer>>;
    fn append(&self, volunteer: &Volunteer) -> Result<()>;
}

/// Relief site table. `save` rewrites the whole table, not a delta.
pub trait SiteStore {
    fn load(&self) -> Result<LinkedList<ReliefSite>>;
    fn save(&self, sites: &LinkedList<ReliefSite>) -> Result<()>;
}
