use std::borrow::Borrow;
use std::fmt::{self, Debug, Display};
use std::mem;

/// A key/value node of a [`LinkedList`].
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    next: Option<usize>,
}

impl<K, V> Node<K, V> {
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<usize> },
}

/// A singly-linked chain of key/value nodes.
///
/// Nodes are stored in a slot arena owned by the list and linked by slot index, so
/// removing a node does not free memory: the slot is pushed onto a free list and reused
/// by the next insert. New nodes are linked at the head of the chain.
#[derive(Debug, Clone)]
pub struct LinkedList<K, V> {
    slots: Vec<Slot<K, V>>,
    head: Option<usize>,
    free: Option<usize>,
    length: usize,
}

impl<K, V> LinkedList<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            free: None,
            length: 0,
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Links a new node holding `key` and `value` at the head of the chain. Does not
    /// check for an existing node with the same key.
    pub fn insert(&mut self, key: K, value: V) {
        let node: Node<K, V> = Node {
            key,
            value,
            next: self.head,
        };
        let index: usize = match self.free {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free = next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.head = Some(index);
        self.length += 1;
    }

    /// Returns the first node whose key equals `key`.
    pub fn contains<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.nodes().find(|node| Q::eq(key, node.key.borrow()))
    }

    /// Unlinks the first node whose key equals `key` and returns its contents. Returns
    /// `None` and leaves the chain untouched if no such node exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut prev: Option<usize> = None;
        let mut cursor: Option<usize> = self.head;
        while let Some(index) = cursor {
            let (matches, next) = match &self.slots[index] {
                Slot::Occupied(node) => (Q::eq(key, node.key.borrow()), node.next),
                Slot::Vacant { .. } => return None,
            };
            if matches {
                match prev {
                    None => self.head = next,
                    Some(p) => {
                        if let Slot::Occupied(node) = &mut self.slots[p] {
                            node.next = next;
                        }
                    }
                }
                let vacant: Slot<K, V> = Slot::Vacant {
                    next_free: self.free,
                };
                self.free = Some(index);
                self.length -= 1;
                return match mem::replace(&mut self.slots[index], vacant) {
                    Slot::Occupied(node) => Some((node.key, node.value)),
                    Slot::Vacant { .. } => None,
                };
            }
            prev = cursor;
            cursor = next;
        }
        None
    }

    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.free = None;
        self.length = 0;
    }

    /// Iterates over `(key, value)` pairs from head to tail.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: self.nodes(),
        }
    }

    fn nodes(&self) -> Nodes<'_, K, V> {
        Nodes {
            slots: &self.slots,
            cursor: self.head,
        }
    }
}

impl<K, V> Default for LinkedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

struct Nodes<'a, K, V> {
    slots: &'a [Slot<K, V>],
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Nodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let index: usize = self.cursor?;
        match &self.slots[index] {
            Slot::Occupied(node) => {
                self.cursor = node.next;
                Some(node)
            }
            Slot::Vacant { .. } => None,
        }
    }
}

pub struct Iter<'a, K, V> {
    nodes: Nodes<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| (&node.key, &node.value))
    }
}

/// Owning iterator over `(key, value)` pairs from head to tail.
pub struct IntoIter<K, V> {
    slots: Vec<Slot<K, V>>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let index: usize = self.cursor?;
        let taken: Slot<K, V> = mem::replace(
            &mut self.slots[index],
            Slot::Vacant { next_free: None },
        );
        match taken {
            Slot::Occupied(node) => {
                self.cursor = node.next;
                self.remaining -= 1;
                Some((node.key, node.value))
            }
            Slot::Vacant { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> IntoIterator for LinkedList<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots,
            cursor: self.head,
            remaining: self.length,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LinkedList<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Display for LinkedList<K, V>
where
    K: Display,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLL [")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}: {:?}", key, value)?;
        }
        write!(f, "]")
    }
}
