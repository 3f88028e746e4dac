//! Customers service.

use tracing::{info, warn};

use crate::customers::{
    errors::CustomerError, models::Customer, repository::CustomerRepository,
    validation::CustomerValidator,
};

/// Validates customers and persists the valid ones.
#[derive(Debug, Clone)]
pub struct CustomersService {
    validator: CustomerValidator,
    repository: CustomerRepository,
}

impl CustomersService {
    /// Create a service storing customers in `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Pattern`] if the validator cannot be built.
    pub fn new(repository: CustomerRepository) -> Result<Self, CustomerError> {
        Ok(Self {
            validator: CustomerValidator::new()?,
            repository,
        })
    }

    /// The backing repository.
    pub fn repository(&self) -> &CustomerRepository {
        &self.repository
    }

    /// Validate a customer and append it to the store.
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed email or CNPJ, or a storage
    /// error if the record cannot be written.
    #[tracing::instrument(name = "customers.register", skip_all, fields(customer = %customer.name))]
    pub fn register(&self, customer: &Customer) -> Result<(), CustomerError> {
        if let Err(error) = self.validator.validate(customer) {
            warn!(%error, "customer rejected");

            return Err(error);
        }

        self.repository.save(customer)?;

        info!(cnpj = customer.cnpj, "customer registered");

        Self::send_welcome_email(customer);

        Ok(())
    }

    /// Greet a newly registered customer.
    ///
    /// There is no mail transport yet, so the welcome is only logged.
    fn send_welcome_email(customer: &Customer) {
        info!(email = %customer.email, "sending welcome email");
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    /// Log sink shared between a test and its subscriber.
    #[derive(Debug, Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|buf| String::from_utf8_lossy(&buf).into_owned())
                .unwrap_or_default()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn register_capturing_logs(
        service: &CustomersService,
        customer: &Customer,
    ) -> (Result<(), CustomerError>, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || service.register(customer));

        (result, logs.contents())
    }

    fn service(dir: &TempDir) -> Result<CustomersService, CustomerError> {
        CustomersService::new(CustomerRepository::new(dir.path().join("clientes.txt")))
    }

    #[test]
    fn valid_customer_is_stored() -> TestResult {
        let dir = TempDir::new()?;
        let service = service(&dir)?;

        service.register(&Customer::new("Carlos", "carlos@petrobahia.com", 12345))?;

        assert!(service.repository().load()?.contains_key(&12345));

        Ok(())
    }

    #[test]
    fn invalid_email_is_not_stored() -> TestResult {
        let dir = TempDir::new()?;
        let service = service(&dir)?;

        let result = service.register(&Customer::new("Ana Paula", "ana@@petrobahia", 123));

        assert!(matches!(result, Err(CustomerError::InvalidEmail(_))));
        assert!(service.repository().load()?.is_empty());

        Ok(())
    }

    #[test]
    fn registered_customer_is_welcomed() -> TestResult {
        let dir = TempDir::new()?;
        let service = service(&dir)?;

        let customer = Customer::new("Carlos", "carlos@petrobahia.com", 12345);

        let (result, logs) = register_capturing_logs(&service, &customer);

        result?;

        assert!(logs.contains("sending welcome email"), "{logs}");
        assert!(logs.contains("carlos@petrobahia.com"), "{logs}");

        Ok(())
    }

    #[test]
    fn rejected_customer_is_not_welcomed() -> TestResult {
        let dir = TempDir::new()?;
        let service = service(&dir)?;

        let customer = Customer::new("Ana Paula", "ana@@petrobahia", 123);

        let (result, logs) = register_capturing_logs(&service, &customer);

        assert!(result.is_err());
        assert!(logs.contains("customer rejected"), "{logs}");
        assert!(!logs.contains("sending welcome email"), "{logs}");

        Ok(())
    }

    #[test]
    fn invalid_cnpj_is_not_stored() -> TestResult {
        let dir = TempDir::new()?;
        let service = service(&dir)?;

        let result = service.register(&Customer::new("Cliente Teste", "valido@email.com", -123));

        assert!(matches!(result, Err(CustomerError::InvalidCnpj(-123))));
        assert!(!service.repository().path().exists());

        Ok(())
    }
}
