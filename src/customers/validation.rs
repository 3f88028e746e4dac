//! Customer validation.

use regex::Regex;

use crate::customers::{errors::CustomerError, models::Customer};

/// One `@`, a dot somewhere after it, and no whitespace.
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Validates customer fields before they are stored.
#[derive(Debug, Clone)]
pub struct CustomerValidator {
    email: Regex,
}

impl CustomerValidator {
    /// Create a validator.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Pattern`] if the email pattern fails to compile.
    pub fn new() -> Result<Self, CustomerError> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Returns true if the email address looks deliverable.
    pub fn validate_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    /// Returns true if the CNPJ is a positive number.
    pub fn validate_cnpj(cnpj: i64) -> bool {
        cnpj > 0
    }

    /// Check every field of a customer, email first.
    ///
    /// # Errors
    ///
    /// - [`CustomerError::InvalidEmail`]: the email address is malformed.
    /// - [`CustomerError::InvalidCnpj`]: the CNPJ is zero or negative.
    pub fn validate(&self, customer: &Customer) -> Result<(), CustomerError> {
        if !self.validate_email(&customer.email) {
            return Err(CustomerError::InvalidEmail(customer.email.clone()));
        }

        if !Self::validate_cnpj(customer.cnpj) {
            return Err(CustomerError::InvalidCnpj(customer.cnpj));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accepts_plain_addresses() -> TestResult {
        let validator = CustomerValidator::new()?;

        assert!(validator.validate_email("teste@email.com"));
        assert!(validator.validate_email("carlos@petrobahia.com"));

        Ok(())
    }

    #[test]
    fn rejects_malformed_addresses() -> TestResult {
        let validator = CustomerValidator::new()?;

        assert!(!validator.validate_email("testeemail.com"));
        assert!(!validator.validate_email("teste@"));
        assert!(!validator.validate_email("ana@@petrobahia"));
        assert!(!validator.validate_email("ana paula@petrobahia.com"));
        assert!(!validator.validate_email(""));

        Ok(())
    }

    #[test]
    fn cnpj_must_be_positive() {
        assert!(CustomerValidator::validate_cnpj(12_345_678_901_234));
        assert!(CustomerValidator::validate_cnpj(1));
        assert!(!CustomerValidator::validate_cnpj(0));
        assert!(!CustomerValidator::validate_cnpj(-123));
    }

    #[test]
    fn email_is_checked_before_cnpj() -> TestResult {
        let validator = CustomerValidator::new()?;
        let customer = Customer::new("Cliente Teste", "emailinvalido", -123);

        assert!(matches!(
            validator.validate(&customer),
            Err(CustomerError::InvalidEmail(_))
        ));

        Ok(())
    }

    #[test]
    fn invalid_cnpj_is_reported() -> TestResult {
        let validator = CustomerValidator::new()?;
        let customer = Customer::new("Cliente Teste", "valido@email.com", -123);

        assert!(matches!(
            validator.validate(&customer),
            Err(CustomerError::InvalidCnpj(-123))
        ));

        Ok(())
    }
}
