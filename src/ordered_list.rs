//! A sorted, duplicate-rejecting sequence used as the priority structure for
//! tree building.
//!
//! Links live in an arena and refer to each other by slot index. Slot 0 is the
//! single sentinel, so the list is circular: it is empty when the sentinel's
//! successor is the sentinel itself. Nothing caches the length; `size` walks
//! the links.

use crate::error::{HuffmanError, Result};
use std::cmp::Ordering;

const SENTINEL: usize = 0;

#[derive(Debug, Clone)]
struct Link<T> {
    item: Option<T>,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    links: Vec<Link<T>>,
    // Slots unlinked by `remove`/`pop`, reused by the next `add`.
    vacant: Vec<usize>,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        OrderedList {
            links: vec![Link {
                item: None,
                prev: SENTINEL,
                next: SENTINEL,
            }],
            vacant: Vec::new(),
        }
    }

    /// O(1).
    pub fn is_empty(&self) -> bool {
        self.links[SENTINEL].next == SENTINEL
    }

    /// Number of items, counted by walking the links.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut slot = self.links[SENTINEL].next;
        while slot != SENTINEL {
            count += 1;
            slot = self.links[slot].next;
        }
        count
    }

    /// Iterates head (smallest) to tail (largest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.links[SENTINEL].next,
            back: self.links[SENTINEL].prev,
            done: self.is_empty(),
        }
    }

    /// Removes and returns the item at `position`, counting from the head.
    pub fn pop(&mut self, position: isize) -> Result<T> {
        let size = self.size();
        let out_of_range = HuffmanError::OutOfRange { position, size };
        if position < 0 || position as usize >= size {
            return Err(out_of_range);
        }

        let mut slot = self.links[SENTINEL].next;
        for _ in 0..position {
            slot = self.links[slot].next;
        }
        self.unlink(slot).ok_or(out_of_range)
    }

    fn unlink(&mut self, slot: usize) -> Option<T> {
        let Link { prev, next, .. } = self.links[slot];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        self.vacant.push(slot);
        self.links[slot].item.take()
    }

    fn link_before(&mut self, successor: usize, item: T) {
        let prev = self.links[successor].prev;
        let link = Link {
            item: Some(item),
            prev,
            next: successor,
        };
        let slot = match self.vacant.pop() {
            Some(slot) => {
                self.links[slot] = link;
                slot
            }
            None => {
                self.links.push(link);
                self.links.len() - 1
            }
        };
        self.links[prev].next = slot;
        self.links[successor].prev = slot;
    }
}

impl<T: Ord> OrderedList<T> {
    /// Inserts `item` in ascending position. Returns `false` and leaves the
    /// list untouched when an equal item is already present.
    pub fn add(&mut self, item: T) -> bool {
        let mut slot = self.links[SENTINEL].next;
        while slot != SENTINEL {
            match self.item_at(slot).map(|existing| existing.cmp(&item)) {
                Some(Ordering::Equal) => return false,
                Some(Ordering::Greater) => break,
                _ => slot = self.links[slot].next,
            }
        }
        self.link_before(slot, item);
        true
    }

    /// Removes the first item equal to `item`.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.find(item) {
            Some((_, slot)) => self.unlink(slot).is_some(),
            None => false,
        }
    }

    pub fn search(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Zero-based position of the first item equal to `item`.
    pub fn index(&self, item: &T) -> Option<usize> {
        self.find(item).map(|(position, _)| position)
    }

    fn find(&self, item: &T) -> Option<(usize, usize)> {
        let mut position = 0;
        let mut slot = self.links[SENTINEL].next;
        while slot != SENTINEL {
            if self.item_at(slot) == Some(item) {
                return Some((position, slot));
            }
            position += 1;
            slot = self.links[slot].next;
        }
        None
    }

    fn item_at(&self, slot: usize) -> Option<&T> {
        self.links[slot].item.as_ref()
    }
}

impl<T: Clone> OrderedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Tail to head, following `prev` links.
    pub fn to_reversed_vec(&self) -> Vec<T> {
        self.iter().rev().cloned().collect()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = OrderedList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: usize,
    back: usize,
    done: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let slot = self.front;
        self.done = self.front == self.back;
        self.front = self.list.links[slot].next;
        self.list.links[slot].item.as_ref()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let slot = self.back;
        self.done = self.front == self.back;
        self.back = self.list.links[slot].prev;
        self.list.links[slot].item.as_ref()
    }
}
