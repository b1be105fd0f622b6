//! Command implementations.

pub mod config;
pub mod run;
pub mod users;
pub mod version;

use usercraft::{Enrollment, FollowersFormula, WorkshopSettings};
use usercraft_config::{UserEntry, UsercraftConfig};

/// Translates the loaded configuration into workshop inputs.
pub fn workshop_settings(config: &UsercraftConfig) -> WorkshopSettings {
    let enrollment = |entry: &UserEntry| Enrollment::new(entry.name.clone(), entry.age);

    WorkshopSettings {
        seed: config.directory.seed.iter().map(enrollment).collect(),
        new_user: enrollment(&config.directory.new_user),
        friend: enrollment(&config.directory.friend),
        adult_age: config.rules.adult_age,
        formula: FollowersFormula::new(config.followers.base, config.followers.multiplier),
    }
}
