//! Contact domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a contact in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
}

impl Contact {
    /// Overwrites every field except `id` with the values from `write`.
    pub fn replace_with(&mut self, write: ContactWrite) {
        self.first_name = write.first_name;
        self.last_name = write.last_name;
        self.email = write.email;
        self.phone_number = write.phone_number;
        self.birth_date = write.birth_date;
        self.additional_data = write.additional_data;
    }
}

/// Request payload for creating or fully replacing a contact.
///
/// Every field is required except `additional_data`; there is no partial
/// update shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactWrite {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub additional_data: Option<String>,
}

/// Response payload for contact operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone_number: c.phone_number,
            birth_date: c.birth_date,
            additional_data: c.additional_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::faker::phone_number::en::PhoneNumber;
    use fake::Fake;

    fn ada() -> Contact {
        Contact {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone_number: "123".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            additional_data: None,
        }
    }

    fn fake_write() -> ContactWrite {
        ContactWrite {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: SafeEmail().fake(),
            phone_number: PhoneNumber().fake(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 31).unwrap(),
            additional_data: Some("met at conference".to_string()),
        }
    }

    #[test]
    fn test_contact_write_deserialization() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.com",
            "phone_number": "123",
            "birth_date": "1815-12-10"
        }"#;

        let write: ContactWrite = serde_json::from_str(json).unwrap();
        assert_eq!(write.first_name, "Ada");
        assert_eq!(write.last_name, "Lovelace");
        assert_eq!(
            write.birth_date,
            NaiveDate::from_ymd_opt(1815, 12, 10).unwrap()
        );
        assert!(write.additional_data.is_none());
    }

    #[test]
    fn test_contact_write_explicit_null_additional_data() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.com",
            "phone_number": "123",
            "birth_date": "1815-12-10",
            "additional_data": null
        }"#;

        let write: ContactWrite = serde_json::from_str(json).unwrap();
        assert!(write.additional_data.is_none());
    }

    #[test]
    fn test_contact_write_missing_required_field() {
        let json = r#"{
            "first_name": "Ada",
            "email": "ada@x.com",
            "phone_number": "123",
            "birth_date": "1815-12-10"
        }"#;

        let result: Result<ContactWrite, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_write_invalid_date() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.com",
            "phone_number": "123",
            "birth_date": "1815-13-40"
        }"#;

        let result: Result<ContactWrite, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_write_email_not_checked() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not an email",
            "phone_number": "call me maybe",
            "birth_date": "1815-12-10"
        }"#;

        let write: ContactWrite = serde_json::from_str(json).unwrap();
        assert_eq!(write.email, "not an email");
        assert_eq!(write.phone_number, "call me maybe");
    }

    #[test]
    fn test_replace_with_keeps_id() {
        let mut contact = ada();
        let write = fake_write();

        contact.replace_with(write.clone());

        assert_eq!(contact.id, 1);
        assert_eq!(contact.first_name, write.first_name);
        assert_eq!(contact.last_name, write.last_name);
        assert_eq!(contact.email, write.email);
        assert_eq!(contact.phone_number, write.phone_number);
        assert_eq!(contact.birth_date, write.birth_date);
        assert_eq!(contact.additional_data, write.additional_data);
    }

    #[test]
    fn test_replace_with_clears_additional_data() {
        let mut contact = ada();
        contact.additional_data = Some("notes".to_string());

        let mut write = fake_write();
        write.additional_data = None;
        contact.replace_with(write);

        assert!(contact.additional_data.is_none());
    }

    #[test]
    fn test_contact_response_serialization() {
        let response: ContactResponse = ada().into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["last_name"], "Lovelace");
        assert_eq!(json["email"], "ada@x.com");
        assert_eq!(json["phone_number"], "123");
        assert_eq!(json["birth_date"], "1815-12-10");
        assert!(json["additional_data"].is_null());
    }
}
