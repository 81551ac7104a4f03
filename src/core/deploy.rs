use crate::core::matcher;
use crate::core::queue::VolunteerQueue;
use crate::domain::model::Volunteer;
use crate::domain::ports::{LedgerStore, RegistrantStore, SiteStore};
use crate::utils::error::{OpsError, Result};

/// Outcome of one successful deployment, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub volunteer: Volunteer,
    pub site_name: String,
    pub previous_count: u32,
    pub new_count: u32,
    pub max_capacity: u32,
}

/// Outcome of building the initial queue from the registrant store.
pub struct QueueLoad {
    pub queue: VolunteerQueue,
    pub loaded: usize,
    pub skipped_deployed: usize,
}

/// Builds the registration queue in original entry order, excluding every
/// registrant already present in the deployment ledger (full structural
/// match on name, contact and skill). This is the only dedup point: the
/// orchestrator trusts that anything queued has not been deployed.
pub fn load_registration_queue<R, L>(registrants: &R, ledger: &L) -> Result<QueueLoad>
where
    R: RegistrantStore,
    L: LedgerStore,
{
    let deployed = ledger.load()?;
    let mut queue = VolunteerQueue::new();
    let mut loaded = 0;
    let mut skipped_deployed = 0;

    for volunteer in registrants.load()? {
        if deployed.contains(&volunteer) {
            tracing::debug!("Skipping already deployed volunteer: {}", volunteer.name);
            skipped_deployed += 1;
            continue;
        }
        queue.enqueue(volunteer);
        loaded += 1;
    }

    tracing::info!(
        "Loaded {} volunteers into queue ({} already deployed)",
        loaded,
        skipped_deployed
    );

    Ok(QueueLoad {
        queue,
        loaded,
        skipped_deployed,
    })
}

/// Executes the `Registered -> Deployed` transition: one dequeue, one site
/// counter increment, one ledger append, one site-table rewrite. Store
/// handles are injected; nothing here knows about file paths.
pub struct DeploymentEngine<L: LedgerStore, S: SiteStore> {
    ledger: L,
    site_store: S,
}

impl<L: LedgerStore, S: SiteStore> DeploymentEngine<L, S> {
    pub fn new(ledger: L, site_store: S) -> Self {
        Self { ledger, site_store }
    }

    /// Deploys the FIFO head of `queue` to the most needed site.
    ///
    /// Both precondition checks happen before the dequeue, so a failed
    /// attempt leaves the queue and the site table untouched. Once the
    /// head is dequeued the transition is irreversible: a persistence
    /// failure after that point does not re-enqueue the volunteer.
    pub fn deploy_next(&self, queue: &mut VolunteerQueue) -> Result<Deployment> {
        if queue.is_empty() {
            return Err(OpsError::NoVolunteers);
        }

        let mut sites = self.site_store.load()?;
        let best_index = matcher::most_needed_site(&sites).ok_or(OpsError::NoCapacity)?;

        let volunteer = queue.dequeue()?;

        let site = sites.at_mut(best_index)?;
        let previous_count = site.current_count;
        site.current_count += 1;
        debug_assert!(site.current_count <= site.max_capacity);

        let deployment = Deployment {
            site_name: site.name.clone(),
            previous_count,
            new_count: site.current_count,
            max_capacity: site.max_capacity,
            volunteer: volunteer.clone(),
        };

        self.ledger.append(&volunteer)?;
        self.site_store.save(&sites)?;

        tracing::info!(
            "Deployed {} to {} ({}/{})",
            deployment.volunteer.name,
            deployment.site_name,
            deployment.new_count,
            deployment.max_capacity
        );

        Ok(deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list::LinkedList;
    use crate::domain::model::ReliefSite;
    use std::cell::RefCell;

    struct MemoryVolunteers {
        records: Vec<Volunteer>,
        appended: RefCell<Vec<Volunteer>>,
    }

    impl MemoryVolunteers {
        fn new(records: Vec<Volunteer>) -> Self {
            Self {
                records,
                appended: RefCell::new(Vec::new()),
            }
        }
    }

    impl RegistrantStore for MemoryVolunteers {
        fn load(&self) -> Result<Vec<Volunteer>> {
            Ok(self.records.clone())
        }

        fn append(&self, volunteer: &Volunteer) -> Result<()> {
            self.appended.borrow_mut().push(volunteer.clone());
            Ok(())
        }
    }

    impl LedgerStore for MemoryVolunteers {
        fn load(&self) -> Result<Vec<Volunteer>> {
            Ok(self.records.clone())
        }

        fn append(&self, volunteer: &Volunteer) -> Result<()> {
            self.appended.borrow_mut().push(volunteer.clone());
            Ok(())
        }
    }

    struct MemorySites {
        sites: RefCell<LinkedList<ReliefSite>>,
        saves: RefCell<usize>,
    }

    impl MemorySites {
        fn new(specs: &[(&str, u32, u32)]) -> Self {
            let sites = specs
                .iter()
                .map(|&(name, current, max)| ReliefSite::new(name, current, max))
                .collect();
            Self {
                sites: RefCell::new(sites),
                saves: RefCell::new(0),
            }
        }

        fn site(&self, index: usize) -> ReliefSite {
            self.sites.borrow().get(index).unwrap().clone()
        }
    }

    impl SiteStore for MemorySites {
        fn load(&self) -> Result<LinkedList<ReliefSite>> {
            Ok(self.sites.borrow().clone())
        }

        fn save(&self, sites: &LinkedList<ReliefSite>) -> Result<()> {
            *self.sites.borrow_mut() = sites.clone();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn volunteer(name: &str) -> Volunteer {
        Volunteer::new(name, "555-0100", "medic").unwrap()
    }

    #[test]
    fn test_deploy_next_moves_head_to_least_filled_site() {
        let ledger = MemoryVolunteers::new(Vec::new());
        let sites = MemorySites::new(&[("A", 9, 10), ("B", 2, 10)]);
        let engine = DeploymentEngine::new(ledger, sites);

        let mut queue = VolunteerQueue::new();
        queue.enqueue(volunteer("V1"));

        let deployment = engine.deploy_next(&mut queue).unwrap();

        assert_eq!(deployment.site_name, "B");
        assert_eq!(deployment.previous_count, 2);
        assert_eq!(deployment.new_count, 3);
        assert_eq!(deployment.volunteer.name, "V1");
        assert!(queue.is_empty());

        assert_eq!(engine.site_store.site(0).current_count, 9);
        assert_eq!(engine.site_store.site(1).current_count, 3);
        assert_eq!(*engine.site_store.saves.borrow(), 1);
        assert_eq!(engine.ledger.appended.borrow().len(), 1);
        assert_eq!(engine.ledger.appended.borrow()[0].name, "V1");
    }

    #[test]
    fn test_empty_queue_fails_without_touching_sites() {
        let ledger = MemoryVolunteers::new(Vec::new());
        let sites = MemorySites::new(&[("A", 0, 10)]);
        let engine = DeploymentEngine::new(ledger, sites);

        let mut queue = VolunteerQueue::new();
        let err = engine.deploy_next(&mut queue).unwrap_err();

        assert!(matches!(err, OpsError::NoVolunteers));
        assert_eq!(*engine.site_store.saves.borrow(), 0);
        assert!(engine.ledger.appended.borrow().is_empty());
    }

    #[test]
    fn test_no_capacity_leaves_volunteer_queued() {
        let ledger = MemoryVolunteers::new(Vec::new());
        let sites = MemorySites::new(&[("A", 10, 10), ("B", 5, 5)]);
        let engine = DeploymentEngine::new(ledger, sites);

        let mut queue = VolunteerQueue::new();
        queue.enqueue(volunteer("V1"));

        let err = engine.deploy_next(&mut queue).unwrap_err();

        assert!(matches!(err, OpsError::NoCapacity));
        // The capacity check runs before the dequeue.
        assert_eq!(queue.len(), 1);
        assert_eq!(*engine.site_store.saves.borrow(), 0);
        assert!(engine.ledger.appended.borrow().is_empty());
    }

    #[test]
    fn test_capacity_bound_holds_across_repeated_deployments() {
        let ledger = MemoryVolunteers::new(Vec::new());
        let sites = MemorySites::new(&[("A", 1, 2), ("B", 0, 1)]);
        let engine = DeploymentEngine::new(ledger, sites);

        let mut queue = VolunteerQueue::new();
        for i in 0..3 {
            queue.enqueue(volunteer(&format!("V{i}")));
        }

        // B (0/1), then A (1/2), then A again (now least and only option).
        assert_eq!(engine.deploy_next(&mut queue).unwrap().site_name, "B");
        assert_eq!(engine.deploy_next(&mut queue).unwrap().site_name, "A");
        assert_eq!(engine.deploy_next(&mut queue).unwrap().site_name, "A");

        assert_eq!(engine.site_store.site(0).current_count, 2);
        assert_eq!(engine.site_store.site(1).current_count, 1);

        // Everything is full now; the next attempt fails cleanly.
        queue.enqueue(volunteer("left-behind"));
        assert!(matches!(
            engine.deploy_next(&mut queue),
            Err(OpsError::NoCapacity)
        ));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_load_queue_excludes_deployed_volunteers() {
        let registrants = MemoryVolunteers::new(vec![
            Volunteer::new("Ana", "555", "medic").unwrap(),
            Volunteer::new("Ben", "556", "cook").unwrap(),
            Volunteer::new("Cam", "557", "driver").unwrap(),
        ]);
        let ledger = MemoryVolunteers::new(vec![Volunteer::new("Ana", "555", "medic").unwrap()]);

        let load = load_registration_queue(&registrants, &ledger).unwrap();

        assert_eq!(load.loaded, 2);
        assert_eq!(load.skipped_deployed, 1);
        let names: Vec<&str> = load.queue.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Cam"]);
    }

    #[test]
    fn test_load_queue_keeps_near_duplicates() {
        // Same name but different contact is a different person.
        let registrants =
            MemoryVolunteers::new(vec![Volunteer::new("Ana", "555", "medic").unwrap()]);
        let ledger = MemoryVolunteers::new(vec![Volunteer::new("Ana", "999", "medic").unwrap()]);

        let load = load_registration_queue(&registrants, &ledger).unwrap();
        assert_eq!(load.loaded, 1);
        assert_eq!(load.skipped_deployed, 0);
    }
}
