use derive_more::Display;

pub const TODDLER_MESSAGE: &str = "So cuuute!";
pub const MINOR_MESSAGE: &str = "Wow, you have grown since last year!";
pub const ADULT_MESSAGE: &str = "Welcome to adulthood!";

/// Half-open age ranges, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AgeBracket {
    /// `age < 5`, negative ages included
    #[display("toddler")]
    Toddler,
    /// `5 <= age < 18`
    #[display("minor")]
    Minor,
    /// `age >= 18`
    #[display("adult")]
    Adult,
}

impl AgeBracket {
    pub fn classify(age: i64) -> Self {
        if age < 5 {
            return AgeBracket::Toddler;
        }
        if age < 18 {
            return AgeBracket::Minor;
        }
        AgeBracket::Adult
    }

    pub fn message(self) -> &'static str {
        match self {
            AgeBracket::Toddler => TODDLER_MESSAGE,
            AgeBracket::Minor => MINOR_MESSAGE,
            AgeBracket::Adult => ADULT_MESSAGE,
        }
    }
}

pub fn judge_my_age(age: i64) -> &'static str {
    AgeBracket::classify(age).message()
}
