use crate::core::list::LinkedList;
use crate::domain::model::ReliefSite;

/// Per-site entry of a capacity survey. `fill_ratio` is `None` for a site
/// already at capacity; such sites are reported FULL and excluded from
/// ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteStatus {
    pub name: String,
    pub current_count: u32,
    pub max_capacity: u32,
    pub fill_ratio: Option<f64>,
    pub highest_priority: bool,
}

/// Selects the deployment target: the qualifying site (`current_count <
/// max_capacity`) with the lowest real-valued fill ratio. Ties keep the
/// incumbent, so among equally-filled sites the first in sequence order
/// wins. `None` when no site qualifies.
pub fn most_needed_site(sites: &LinkedList<ReliefSite>) -> Option<usize> {
    let mut best_index = None;
    // Above any reachable ratio; "no site qualifies yet".
    let mut lowest_ratio = 1.1_f64;

    for (index, site) in sites.iter().enumerate() {
        if site.is_full() {
            continue;
        }

        let ratio = site.fill_ratio();
        if ratio < lowest_ratio {
            lowest_ratio = ratio;
            best_index = Some(index);
        }
    }

    best_index
}

/// Full ranking report in sequence order, with the selected site flagged.
pub fn capacity_survey(sites: &LinkedList<ReliefSite>) -> Vec<SiteStatus> {
    let best = most_needed_site(sites);

    sites
        .iter()
        .enumerate()
        .map(|(index, site)| SiteStatus {
            name: site.name.clone(),
            current_count: site.current_count,
            max_capacity: site.max_capacity,
            fill_ratio: (!site.is_full()).then(|| site.fill_ratio()),
            highest_priority: best == Some(index),
        })
        .collect()
}
