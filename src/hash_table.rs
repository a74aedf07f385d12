use std::fmt::{self, Debug, Display};
use std::mem;

use log::debug;

use crate::dynamic_array::DynamicArray;
use crate::hash_functions::HashStrategy;
use crate::linked_list::LinkedList;


type Bucket<V> = LinkedList<String, V>;

/// A string-keyed hash map that resolves collisions by separate chaining.
///
/// The bucket for a key is `hash_function(key) % capacity`. Each bucket owns a chain of
/// key/value nodes and every key appears in at most one node across the whole table.
/// The table never resizes on its own; callers grow or shrink it with
/// [`HashMap::resize_table`], usually after consulting [`HashMap::table_load`].
pub struct HashMap<V, H = fn(&str) -> usize> {
    buckets: DynamicArray<Bucket<V>>,
    capacity: usize,
    size: usize,
    hash_function: H,
}

impl<V, H> HashMap<V, H>
where
    H: HashStrategy,
{
    pub const MIN_CAPACITY: usize = 1;
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates a table with `capacity` empty buckets. A capacity below
    /// [`HashMap::MIN_CAPACITY`] is raised to it.
    pub fn new(capacity: usize, hash_function: H) -> Self {
        let capacity: usize = if capacity < Self::MIN_CAPACITY {
            debug!(
                "requested capacity {} raised to {}",
                capacity,
                Self::MIN_CAPACITY
            );
            Self::MIN_CAPACITY
        } else {
            capacity
        };
        HashMap {
            buckets: Self::allocate_buckets(capacity),
            capacity,
            size: 0,
            hash_function,
        }
    }

    pub fn with_hasher(hash_function: H) -> Self {
        Self::new(Self::DEFAULT_CAPACITY, hash_function)
    }

    fn allocate_buckets(capacity: usize) -> DynamicArray<Bucket<V>> {
        let mut buckets: DynamicArray<Bucket<V>> = DynamicArray::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.append(LinkedList::new());
        }
        buckets
    }

    #[inline]
    fn get_index(&self, key: &str, capacity: usize) -> usize {
        self.hash_function.hash(key) % capacity
    }

    /// Replace-on-put into a single chain. Returns the displaced value, if any.
    fn emplace(bucket: &mut Bucket<V>, key: String, value: V) -> Option<V> {
        let displaced: Option<V> = bucket.remove(key.as_str()).map(|(_, v)| v);
        bucket.insert(key, value);
        displaced
    }

    /// Number of key/value pairs stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let index: usize = self.get_index(key, self.capacity);
        self.buckets[index].contains(key).map(|node| node.value())
    }

    /// Associates `value` with `key`. An existing node for `key` is removed before the
    /// new one is inserted, so the table holds exactly one node per key afterwards.
    /// Returns the value that was replaced.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key: String = key.into();
        let index: usize = self.get_index(&key, self.capacity);
        let displaced: Option<V> = Self::emplace(&mut self.buckets[index], key, value);
        if displaced.is_some() {
            self.size -= 1;
        }
        self.size += 1;
        displaced
    }

    /// Removes `key` and returns its value. Removing an absent key does nothing.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index: usize = self.get_index(key, self.capacity);
        let (_, value) = self.buckets[index].remove(key)?;
        self.size -= 1;
        Some(value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let index: usize = self.get_index(key, self.capacity);
        self.buckets[index].contains(key).is_some()
    }

    /// Removes every pair. The capacity is unchanged.
    pub fn clear(&mut self) {
        debug!("clearing {} entries from {} buckets", self.size, self.capacity);
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.size = 0;
    }

    pub fn empty_buckets(&self) -> usize {
        self.buckets
            .iter()
            .filter(|bucket| bucket.length() == 0)
            .count()
    }

    /// The load factor, `size / capacity`.
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Rehashes every pair into a fresh array of `new_capacity` buckets. Targets below
    /// [`HashMap::MIN_CAPACITY`] are ignored.
    ///
    /// Pairs are moved in table order (bucket by bucket, each chain head to tail) and
    /// inserted with the same replace-on-put rule as [`HashMap::put`]. The new bucket
    /// array and capacity are installed together once every pair has been moved.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < Self::MIN_CAPACITY {
            debug!("ignoring resize to capacity {}", new_capacity);
            return;
        }

        let mut buckets: DynamicArray<Bucket<V>> = Self::allocate_buckets(new_capacity);
        let mut size: usize = 0;
        let old_buckets: DynamicArray<Bucket<V>> = mem::take(&mut self.buckets);
        for chain in old_buckets {
            for (key, value) in chain {
                let index: usize = self.get_index(&key, new_capacity);
                if Self::emplace(&mut buckets[index], key, value).is_none() {
                    size += 1;
                }
            }
        }
        debug_assert_eq!(size, self.size);

        debug!(
            "resized from {} to {} buckets, moved {} entries",
            self.capacity, new_capacity, size
        );
        self.capacity = new_capacity;
        self.buckets = buckets;
        self.size = size;
    }

    /// A fresh array of every key, in bucket order and chain order within a bucket.
    pub fn get_keys(&self) -> DynamicArray<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Iterates over pairs in the same order as [`HashMap::get_keys`].
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl<V, H> Debug for HashMap<V, H>
where
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("capacity", &self.capacity)
            .field("size", &self.size)
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<V, H> Display for HashMap<V, H>
where
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{}: {}", i, bucket)?;
        }
        Ok(())
    }
}
