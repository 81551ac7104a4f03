pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvVolunteerFile, SiteTableFile};
pub use config::{cli::CliArgs, StoreConfig};
pub use core::deploy::{load_registration_queue, Deployment, DeploymentEngine, QueueLoad};
pub use core::list::LinkedList;
pub use core::queue::VolunteerQueue;
pub use core::skills::SkillCounter;
pub use domain::model::{ReliefSite, Volunteer};
pub use domain::ports::{LedgerStore, RegistrantStore, SiteStore};
pub use utils::error::{OpsError, Result};
