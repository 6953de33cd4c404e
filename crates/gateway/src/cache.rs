//! List cache with tag invalidation and stale-response discarding.
//!
//! Reads are cached per request key until a mutation invalidates the
//! entity tag. Because list requests are async, a response can arrive
//! after the data it describes was invalidated; completion tickets carry
//! the generation they were issued under, and a completed response whose
//! generation no longer matches is discarded rather than stored.

use std::collections::HashMap;
use std::hash::Hash;

use stocklens_catalog::{Category, Product, User};
use stocklens_core::CategoryId;

/// Cache invalidation tags, one per remote entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityTag {
    Products,
    Categories,
    Users,
}

/// Cache key for product list requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
}

/// Issued when a read misses the cache; redeemed when its response lands.
#[derive(Debug)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

/// Whether a completed response was accepted into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Stored,
    /// The tag was invalidated between request and response; the response
    /// was dropped.
    Discarded,
}

#[derive(Debug)]
struct Slot<K, V> {
    generation: u64,
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Slot<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn begin(&self, key: K) -> Ticket<K> {
        Ticket {
            key,
            generation: self.generation,
        }
    }

    fn complete(&mut self, ticket: Ticket<K>, value: V) -> CacheOutcome {
        if ticket.generation == self.generation {
            self.entries.insert(ticket.key, value);
            CacheOutcome::Stored
        } else {
            CacheOutcome::Discarded
        }
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.entries.clear();
    }
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Self {
            generation: 0,
            entries: HashMap::new(),
        }
    }
}

/// Per-gateway list cache.
#[derive(Debug, Default)]
pub struct ListCache {
    products: Slot<ProductQuery, Vec<Product>>,
    categories: Slot<(), Vec<Category>>,
    users: Slot<(), Vec<User>>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products_get(&self, query: &ProductQuery) -> Option<Vec<Product>> {
        self.products.get(query).cloned()
    }

    pub fn products_begin(&self, query: ProductQuery) -> Ticket<ProductQuery> {
        self.products.begin(query)
    }

    pub fn products_complete(
        &mut self,
        ticket: Ticket<ProductQuery>,
        value: Vec<Product>,
    ) -> CacheOutcome {
        self.products.complete(ticket, value)
    }

    pub fn categories_get(&self) -> Option<Vec<Category>> {
        self.categories.get(&()).cloned()
    }

    pub fn categories_begin(&self) -> Ticket<()> {
        self.categories.begin(())
    }

    pub fn categories_complete(&mut self, ticket: Ticket<()>, value: Vec<Category>) -> CacheOutcome {
        self.categories.complete(ticket, value)
    }

    pub fn users_get(&self) -> Option<Vec<User>> {
        self.users.get(&()).cloned()
    }

    pub fn users_begin(&self) -> Ticket<()> {
        self.users.begin(())
    }

    pub fn users_complete(&mut self, ticket: Ticket<()>, value: Vec<User>) -> CacheOutcome {
        self.users.complete(ticket, value)
    }

    /// Drop everything cached under `tag` and retire outstanding tickets
    /// for it.
    pub fn invalidate(&mut self, tag: EntityTag) {
        match tag {
            EntityTag::Products => self.products.invalidate(),
            EntityTag::Categories => self.categories.invalidate(),
            EntityTag::Users => self.users.invalidate(),
        }
    }
}
