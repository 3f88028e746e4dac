//! Customers
//!
//! Customer registration: records are validated and then appended to a
//! line-oriented store.

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::CustomerError;
pub use models::Customer;
pub use repository::CustomerRepository;
pub use service::CustomersService;
pub use validation::CustomerValidator;
