use crate::core::list::LinkedList;
use crate::domain::model::Volunteer;

/// One (skill, occurrences) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCount {
    pub skill: String,
    pub count: u32,
}

/// Frequency counter over an unbounded, unordered set of skill names,
/// built on the sequence container as a list of pairs.
///
/// Every operation is a linear scan. That is an accepted trade-off, not a
/// defect: the key cardinality is tens of distinct skills, and iteration
/// keeps first-insertion order, which the reports rely on.
#[derive(Debug, Clone, Default)]
pub struct SkillCounter {
    entries: LinkedList<SkillCount>,
}

impl SkillCounter {
    pub fn new() -> Self {
        Self {
            entries: LinkedList::new(),
        }
    }

    /// Counts every volunteer's skill in one pass.
    pub fn tally<'a, I>(volunteers: I) -> Self
    where
        I: IntoIterator<Item = &'a Volunteer>,
    {
        let mut counter = Self::new();
        for volunteer in volunteers {
            counter.increment(&volunteer.skill);
        }
        counter
    }

    pub fn increment(&mut self, skill: &str) {
        for entry in self.entries.iter_mut() {
            if entry.skill == skill {
                entry.count += 1;
                return;
            }
        }

        self.entries.push_back(SkillCount {
            skill: skill.to_string(),
            count: 1,
        });
    }

    /// 0 for a skill never seen.
    pub fn count(&self, skill: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.skill == skill)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillCount> {
        self.entries.iter()
    }
}
