//! Address block shown for the selected user

use crate::data_fetcher::UserWithNameMeta;

/// Lines describing `user`: display name, street, suite, then "city, zipcode"
pub fn detail_lines(user: &UserWithNameMeta) -> Vec<String> {
    let address = user.address();
    vec![
        user.display().to_string(),
        address.street.clone(),
        address.suite.clone(),
        format!("{}, {}", address.city, address.zipcode),
    ]
}
