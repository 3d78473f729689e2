use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing value objects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{0} cannot be blank")]
    BlankField(&'static str),
}

/// Postal address value object
///
/// Every field is optional free text, so an all-empty address is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

/// Personal information shared by organizers and managers
///
/// # Invariants
/// - Name and surname are not blank
/// - Is immutable after construction
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use tournament_organizer::domain::common::{Address, PersonalInfo};
///
/// let info = PersonalInfo::new(
///     "Ada",
///     "Lovelace",
///     "ada@example.com",
///     NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date"),
///     Address::default(),
/// )
/// .expect("valid personal info");
///
/// assert_eq!(info.full_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    name: String,
    surname: String,
    email: String,
    birth_date: NaiveDate,
    address: Address,
}

impl PersonalInfo {
    /// Creates a new PersonalInfo value object
    ///
    /// # Returns
    /// * `Ok(PersonalInfo)` - If name and surname are present
    /// * `Err(ValueObjectError::BlankField)` - Naming the first blank field
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        address: Address,
    ) -> Result<Self, ValueObjectError> {
        let name = name.into();
        let surname = surname.into();

        if name.trim().is_empty() {
            return Err(ValueObjectError::BlankField("name"));
        }
        if surname.trim().is_empty() {
            return Err(ValueObjectError::BlankField("surname"));
        }

        Ok(Self {
            name,
            surname,
            email: email.into(),
            birth_date,
            address,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns "name surname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl fmt::Display for PersonalInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    fn ada(address: Address) -> PersonalInfo {
        PersonalInfo::new("Ada", "Lovelace", "ada@example.com", birth_date(), address).unwrap()
    }

    #[test]
    fn valid_personal_info() {
        let info = PersonalInfo::new(
            "test",
            "test",
            "test@gamil.com",
            birth_date(),
            Address::default(),
        );
        assert!(info.is_ok());
    }

    #[test]
    fn email_is_not_validated() {
        let info =
            PersonalInfo::new("test", "test", "test", birth_date(), Address::default()).unwrap();
        assert_eq!(info.email(), "test");
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = PersonalInfo::new("   ", "test", "a@b", birth_date(), Address::default());
        assert_eq!(result.unwrap_err(), ValueObjectError::BlankField("name"));
    }

    #[test]
    fn blank_surname_is_rejected() {
        let result = PersonalInfo::new("test", "", "a@b", birth_date(), Address::default());
        assert_eq!(result.unwrap_err(), ValueObjectError::BlankField("surname"));
    }

    #[test]
    fn equality_is_by_value() {
        let address = Address::new("Main St 1", "Springfield", "IL", "62701", "US");
        let a = ada(address.clone());
        let b = ada(address);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_address_is_valid() {
        let address = Address::new("", "", "", "", "");
        assert_eq!(address, Address::default());
        assert_eq!(address.city(), "");
    }

    #[test]
    fn personal_info_display() {
        let info = ada(Address::default());
        assert_eq!(info.to_string(), "Ada Lovelace <ada@example.com>");
    }
}
