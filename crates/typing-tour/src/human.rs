use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Human {
    pub nr_of_legs: u32,
}

impl Human {
    pub fn new() -> Self {
        Self { nr_of_legs: 2 }
    }
}

impl Default for Human {
    fn default() -> Self {
        Self::new()
    }
}
