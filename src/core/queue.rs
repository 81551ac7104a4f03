use crate::domain::model::Volunteer;
use crate::utils::error::{OpsError, Result};
use std::ptr;

struct Node {
    volunteer: Volunteer,
    next: Option<Box<Node>>,
}

/// FIFO waiting list of registered volunteers, backed by its own owned
/// chain: every node is exclusively owned by its predecessor (head owns the
/// first), and `tail` is a non-owning back-reference to the last node used
/// only for O(1) enqueue.
///
/// `len` is a full head-to-tail traversal on each call, kept that way on
/// purpose; the queue holds at most a working set of registrants.
pub struct VolunteerQueue {
    head: Option<Box<Node>>,
    // Dangling only when `head` is `None`; otherwise points at the last
    // node of the chain owned through `head`.
    tail: *mut Node,
}

impl VolunteerQueue {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
        }
    }

    /// Appends at the rear. O(1).
    pub fn enqueue(&mut self, volunteer: Volunteer) {
        let mut node = Box::new(Node {
            volunteer,
            next: None,
        });
        let raw: *mut Node = &mut *node;

        if self.head.is_none() {
            self.head = Some(node);
        } else {
            // `tail` is valid whenever the queue is non-empty.
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = raw;
    }

    /// Removes and returns the front volunteer. Always a reported failure
    /// on an empty queue, never a defaulted value.
    pub fn dequeue(&mut self) -> Result<Volunteer> {
        let node = self.head.take().ok_or(OpsError::EmptyQueue)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        Ok(node.volunteer)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts by traversing the whole chain. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Front-to-rear traversal without mutating the queue.
    pub fn iter(&self) -> QueueIter<'_> {
        QueueIter {
            current: self.head.as_deref(),
        }
    }
}

impl Default for VolunteerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VolunteerQueue {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop of a long chain
        // would exhaust the stack.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct QueueIter<'a> {
    current: Option<&'a Node>,
}

impl<'a> Iterator for QueueIter<'a> {
    type Item = &'a Volunteer;

    fn next(&mut self) -> Option<&'a Volunteer> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.volunteer)
    }
}
