use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::geometry::Coord;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Best known cost per reached coordinate, in first-reached order
pub type CostTable<C> = FxIndexMap<Coord, C>;
