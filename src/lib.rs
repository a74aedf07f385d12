//! Two classic in-memory collections: a string-keyed hash map with pluggable hash
//! functions and separately chained buckets, and an array-backed binary min-heap.

pub mod dynamic_array;
pub mod error;
pub mod hash_functions;
pub mod hash_table;
pub mod linked_list;
pub mod logger;
pub mod min_heap;

pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use hash_functions::{hash_function_1, hash_function_2, HashStrategy};
pub use hash_table::HashMap;
pub use linked_list::LinkedList;
pub use min_heap::MinHeap;
