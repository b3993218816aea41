use std::fmt;

/// A single address-book entry.
///
/// `id` is assigned by the storage layer on insert and stays `None` until
/// the contact has been saved. Assigned ids are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// A not-yet-persisted contact.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_listing_line() {
        let contact = Contact::new("Alice", "555-1111", "a@x.com");
        assert_eq!(
            contact.to_string(),
            "Name: Alice, Phone: 555-1111, Email: a@x.com"
        );
        assert_eq!(contact.id, None);
    }
}
