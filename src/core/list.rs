use crate::utils::error::{OpsError, Result};
use std::marker::PhantomData;

/// One owned element plus the index of its successor. Slots live in the
/// arena vector and are only ever freed all at once by `clear`/drop, so
/// indices stay stable for the life of the chain.
#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    next: Option<usize>,
}

/// Generic owning singly-linked sequence, arena-backed: a vector of slots
/// plus an index-based `next` relation. The tail index is a non-owning
/// back-reference kept only to make `push_back` O(1).
///
/// Indexed access (`get`/`at`) is a deliberate O(i) walk from the head.
/// `Clone` is a full deep copy preserving order and length; reassignment
/// replaces the owned contents.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Appends at the tail. O(1).
    pub fn push_back(&mut self, value: T) {
        let idx = self.slots.len();
        self.slots.push(Slot { value, next: None });

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Prepends at the head. O(1).
    pub fn push_front(&mut self, value: T) {
        let idx = self.slots.len();
        self.slots.push(Slot {
            value,
            next: self.head,
        });

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Releases every slot at once.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    fn slot_index(&self, index: usize) -> Option<usize> {
        let mut current = self.head;
        for _ in 0..index {
            current = self.slots[current?].next;
        }
        current
    }

    /// Recoverable indexed read: `None` when out of range. O(index).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_index(index).map(|i| &self.slots[i].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_index(index)?;
        Some(&mut self.slots[slot].value)
    }

    /// Strict indexed read: out-of-range is a reported bounds violation.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.get(index).ok_or(OpsError::OutOfBounds { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.get_mut(index)
            .ok_or(OpsError::OutOfBounds { index, len })
    }

    /// Forward iteration in insertion order (for `push_back`).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: self.head,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            slots: self.slots.as_mut_ptr(),
            next: self.head,
            marker: PhantomData,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let idx = self.next?;
        let slot = &self.slots[idx];
        self.next = slot.next;
        Some(&slot.value)
    }
}

pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    next: Option<usize>,
    marker: PhantomData<&'a mut LinkedList<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let idx = self.next?;
        // The `next` chain is acyclic and visits each slot index at most
        // once, so no two yielded references alias.
        let slot = unsafe { &mut *self.slots.add(idx) };
        self.next = slot.next;
        Some(&mut slot.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
