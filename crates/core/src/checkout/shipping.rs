//! Shipping details

use crate::validation::{ValidationError, require_fields};

/// Shipping details captured by the checkout form.
///
/// Values are kept exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingInfo {
    /// Recipient's full name
    pub full_name: String,

    /// Contact email, also used for the order confirmation
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// ZIP or postal code
    pub zip_code: String,

    /// Country
    pub country: String,
}

impl ShippingInfo {
    /// Checks every field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming the blank fields in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_fields([
            ("full_name", self.full_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zip_code", self.zip_code.as_str()),
            ("country", self.country.as_str()),
        ])
    }

    /// "City, State Zip" line used in address summaries.
    pub fn locality_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ShippingInfo {
        ShippingInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Rose Lane".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip_code: "97201".to_string(),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_form_lists_all_fields() {
        let result = ShippingInfo::default().validate();

        assert_eq!(
            result,
            Err(ValidationError::MissingFields(vec![
                "full_name", "email", "phone", "address", "city", "state", "zip_code", "country",
            ]))
        );
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let info = ShippingInfo {
            city: "  ".to_string(),
            ..filled()
        };

        assert_eq!(
            info.validate(),
            Err(ValidationError::MissingFields(vec!["city"]))
        );
    }

    #[test]
    fn locality_line_joins_city_state_zip() {
        assert_eq!(filled().locality_line(), "Portland, OR 97201");
    }
}
