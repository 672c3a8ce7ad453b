//! Customer contact and postal address.

use serde::{Deserialize, Serialize};

/// Contact details of a customer or purchaser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl Contact {
    /// First and last name joined by a space, skipping missing parts.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Postal address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub region_custom: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::xml::from_xml;

    #[test]
    fn test_contact_from_xml() {
        let contact: Contact = from_xml(
            "<customer><firstName>Ada</firstName><lastName>Lovelace</lastName>\
             <email>ada@example.com</email></customer>",
        )
        .unwrap();
        assert_eq!(contact.first_name.as_deref(), Some("Ada"));
        assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
        assert_eq!(contact.company, None);
        assert_eq!(contact.full_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_full_name_partial() {
        let contact = Contact {
            last_name: Some("Hopper".to_string()),
            ..Contact::default()
        };
        assert_eq!(contact.full_name().as_deref(), Some("Hopper"));
        assert_eq!(Contact::default().full_name(), None);
    }

    #[test]
    fn test_address_from_xml() {
        let address: Address = from_xml(
            "<address><addressLine1>1 Main St</addressLine1><city>Springfield</city>\
             <postalCode>12345</postalCode><country>US</country></address>",
        )
        .unwrap();
        assert_eq!(address.address_line1.as_deref(), Some("1 Main St"));
        assert_eq!(address.postal_code.as_deref(), Some("12345"));
        assert_eq!(address.region, None);
    }
}
