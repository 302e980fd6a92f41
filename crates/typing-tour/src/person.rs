use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source for [`Person`].
///
/// `get_id` returns the stored next id and bumps it, so a generator
/// created with [`IdGenerator::new`] hands out 1, 2, 3, ... Ids are never
/// reused, even across threads.
#[derive(Debug)]
pub struct IdGenerator {
    first: u64,
    next: AtomicU64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Generator whose first id is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            first,
            next: AtomicU64::new(first),
        }
    }

    pub fn get_id(&self) -> u64 {
        let id = self.next.fetch_add(1, Ordering::SeqCst);
        trace!("issued person id {}", id);
        id
    }

    /// Most recently issued id, without consuming one. `None` until the
    /// first `get_id`.
    pub fn last_issued(&self) -> Option<u64> {
        let next = self.next.load(Ordering::SeqCst);
        (next != self.first).then(|| next.wrapping_sub(1))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide id source behind [`Person::new`]. Issues 1 first and is never
/// reset; tests that assert exact ids should inject their own generator.
static PERSON_IDS: IdGenerator = IdGenerator::new();

#[derive(Debug, PartialEq, Eq)]
pub struct Person {
    id: u64,
    pub name: String,
    pub age: i64,
}

impl Person {
    /// Builds a person with an id from the process-wide generator.
    pub fn new(name: impl Into<String>, age: Option<i64>) -> Self {
        Self::with_ids(&PERSON_IDS, name, age)
    }

    pub fn with_ids(ids: &IdGenerator, name: impl Into<String>, age: Option<i64>) -> Self {
        let id = ids.get_id();
        let name = name.into();
        let age = age.unwrap_or(0);
        debug!("created person {} ({:?}, age {})", id, name, age);
        Self { id, name, age }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn age_and_name(&self) -> String {
        if self.age != 0 {
            format!("{} [{}]", self.name, self.age)
        } else {
            self.name.clone()
        }
    }

    pub fn rename(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        debug!("renaming person {} from {:?} to {:?}", self.id, self.name, new_name);
        self.name = new_name;
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.age_and_name())
    }
}
