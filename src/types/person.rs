//! Identity field types drawn from bundled lists: `firstname`,
//! `lastname`, `state`.

use crate::error::Result;
use crate::registry::{Config, GenContext, Registry, Value};
use crate::types::pick;

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("firstname", firstname_field);
    registry.register_generator("lastname", lastname_field);
    registry.register_generator("state", state_field);
}

/// Bundled first names.
pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Amir", "Anna", "Astrid", "Bob", "Brian", "Carmen", "Carol", "Chen", "Clara", "David",
    "Dmitri", "Elena", "Emma", "Erik", "Fatima", "Frank", "Grace", "Hannah", "Henry", "Ingrid",
    "Iris", "Jack", "Javier", "Kate", "Kenji", "Leila", "Leo", "Maria", "Maya", "Noah", "Olivia",
    "Omar", "Peter", "Priya", "Quinn", "Rose", "Sam", "Sofia", "Tara", "Uma", "Victor", "Wendy",
    "Xavier", "Yara", "Zack",
];

/// Bundled last names.
pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Chen", "Clark", "Davis", "Fischer", "Garcia", "Hall", "Harris",
    "Hansen", "Hill", "Ivanov", "Jackson", "Johnson", "Jones", "Kim", "King", "Kowalski", "Lee",
    "Lewis", "Martin", "Martinez", "Miller", "Moore", "Nakamura", "Nguyen", "Okafor", "Patel",
    "Robinson", "Rossi", "Schmidt", "Silva", "Smith", "Taylor", "Thomas", "Thompson", "Walker",
    "White", "Wright", "Young",
];

/// Bundled US states.
pub const US_STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas",
    "Utah", "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

fn firstname_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Str(pick(&mut ctx.rng, FIRST_NAMES).to_string()))
}

fn lastname_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Str(pick(&mut ctx.rng, LAST_NAMES).to_string()))
}

fn state_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    Ok(Value::Str(pick(&mut ctx.rng, US_STATES).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_come_from_bundled_lists() {
        let mut ctx = GenContext::with_seed(42);
        for _ in 0..50 {
            let first = firstname_field(&mut ctx, &Config::Raw(None)).unwrap().to_string();
            assert!(FIRST_NAMES.contains(&first.as_str()));

            let last = lastname_field(&mut ctx, &Config::Raw(None)).unwrap().to_string();
            assert!(LAST_NAMES.contains(&last.as_str()));

            let state = state_field(&mut ctx, &Config::Raw(None)).unwrap().to_string();
            assert!(US_STATES.contains(&state.as_str()));
        }
    }

    #[test]
    fn test_state_list_is_complete() {
        assert_eq!(US_STATES.len(), 50);
    }
}
