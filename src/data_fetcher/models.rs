use crate::names::{NameMeta, format_name};
use serde::{Deserialize, Serialize};

/// Postal address of a user. Fields beyond these four (e.g. `geo`) are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// A user record as returned by the users endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    /// Free-form full name, possibly with titles and a suffix
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: Address,
}

/// A user with its formatted name attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithNameMeta {
    pub user: User,
    pub name_meta: NameMeta,
}

impl UserWithNameMeta {
    /// Formats the user's name and pairs it with the record
    pub fn new(user: User) -> Self {
        let name_meta = format_name(&user.name);
        Self { user, name_meta }
    }

    /// Label shown in the picker
    pub fn display(&self) -> &str {
        self.name_meta.display()
    }

    pub fn sortable_last_name(&self) -> &str {
        self.name_meta.sortable_last_name()
    }

    pub fn address(&self) -> &Address {
        &self.user.address
    }
}

impl From<User> for UserWithNameMeta {
    fn from(user: User) -> Self {
        Self::new(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERVIN_JSON: &str = r#"{
        "id": 2,
        "name": "Dr. Ervin Howell Jr.",
        "username": "Antonette",
        "email": "Shanna@melissa.tv",
        "address": {
            "street": "Victor Plains",
            "suite": "Suite 879",
            "city": "Wisokyburgh",
            "zipcode": "90566-7771",
            "geo": { "lat": "-43.9509", "lng": "-34.4618" }
        },
        "phone": "010-692-6593 x09125",
        "website": "anastasia.net",
        "company": { "name": "Deckow-Crist" }
    }"#;

    #[test]
    fn test_user_deserialization_ignores_extra_fields() {
        let user: User = serde_json::from_str(ERVIN_JSON).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Dr. Ervin Howell Jr.");
        assert_eq!(user.username.as_deref(), Some("Antonette"));
        assert_eq!(user.address.street, "Victor Plains");
        assert_eq!(user.address.suite, "Suite 879");
        assert_eq!(user.address.city, "Wisokyburgh");
        assert_eq!(user.address.zipcode, "90566-7771");
    }

    #[test]
    fn test_user_without_optional_fields() {
        let json = r#"{
            "id": 7,
            "name": "Kurtis Weissnat",
            "address": { "street": "Rex Trail", "suite": "Suite 280", "city": "Howemouth", "zipcode": "58804-1099" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, None);
        assert_eq!(user.phone, None);

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(!serialized.contains("email"));
    }

    #[test]
    fn test_user_missing_address_is_rejected() {
        let json = r#"{ "id": 1, "name": "Leanne Graham" }"#;
        let err = serde_json::from_str::<User>(json).unwrap_err();
        assert!(err.to_string().contains("address"));
    }

    #[test]
    fn test_user_with_name_meta_formats_name() {
        let user: User = serde_json::from_str(ERVIN_JSON).unwrap();
        let formatted = UserWithNameMeta::from(user);
        assert_eq!(formatted.display(), "Howell Jr., Ervin (Dr.)");
        assert_eq!(formatted.sortable_last_name(), "howell");
        assert_eq!(formatted.address().city, "Wisokyburgh");
    }
}
