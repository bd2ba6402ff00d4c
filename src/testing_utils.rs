use crate::data_fetcher::{Address, User, UserWithNameMeta, attach_name_meta, sort_by_last_name};

/// Test utilities for creating mock user data
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a user with a generated address
    pub fn create_user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: None,
            email: None,
            phone: None,
            address: Self::create_address(id),
        }
    }

    /// Creates an address whose street and suite embed `id`
    pub fn create_address(id: u64) -> Address {
        Address {
            street: format!("{id} Kulas Light"),
            suite: format!("Apt. {id}"),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        }
    }

    /// Creates users numbered from 1 in the order given
    pub fn create_users(names: &[&str]) -> Vec<User> {
        names
            .iter()
            .zip(1u64..)
            .map(|(name, id)| Self::create_user(id, name))
            .collect()
    }

    /// Creates users numbered from 1, formats their names and sorts them by last name
    pub fn sorted_users(names: &[&str]) -> Vec<UserWithNameMeta> {
        let mut users = attach_name_meta(Self::create_users(names));
        sort_by_last_name(&mut users);
        users
    }

    /// JSON body shaped like the users endpoint response for `names`
    pub fn users_json(names: &[&str]) -> serde_json::Value {
        serde_json::to_value(Self::create_users(names)).unwrap_or_default()
    }
}

/// The ten names served by the public JSONPlaceholder `/users` endpoint
pub const SAMPLE_NAMES: [&str; 10] = [
    "Leanne Graham",
    "Ervin Howell",
    "Clementine Bauch",
    "Patricia Lebsack",
    "Chelsey Dietrich",
    "Mrs. Dennis Schulist",
    "Kurtis Weissnat",
    "Nicholas Runolfsdottir V",
    "Glenna Reichert",
    "Clementina DuBuque",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_users_numbers_from_one() {
        let users = TestDataBuilder::create_users(&["A B", "C D"]);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].address.suite, "Apt. 2");
    }

    #[test]
    fn test_users_json_round_trips_through_schema() {
        let json = TestDataBuilder::users_json(&SAMPLE_NAMES);
        let users: Vec<User> = serde_json::from_value(json).unwrap();
        assert_eq!(users.len(), SAMPLE_NAMES.len());
    }
}
