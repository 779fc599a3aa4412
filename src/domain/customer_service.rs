//! # Customer Service
//!
//! Registry operations: registering customers and looking them up for the
//! order flow.

use log::info;

use crate::domain::commands::customers::RegisterCustomerCommand;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::customer::Customer;
use crate::storage::repositories::CustomerRepository;
use crate::storage::traits::LedgerStore;

/// Registry of the shop's customers.
#[derive(Clone)]
pub struct CustomerService<S: LedgerStore> {
    customers: CustomerRepository<S>,
}

impl<S: LedgerStore> CustomerService<S> {
    /// Open the registry against the given store.
    pub fn new(store: &S) -> DomainResult<Self> {
        Ok(CustomerService {
            customers: CustomerRepository::new(store)?,
        })
    }

    /// Register a customer and return the stored record with its new id.
    ///
    /// Only the name is required. Duplicate names are allowed; orders
    /// reference the id, not the name.
    pub fn register_customer(&self, command: RegisterCustomerCommand) -> DomainResult<Customer> {
        if command.name.trim().is_empty() {
            return Err(DomainError::validation("customer name is required"));
        }

        let customer = Customer {
            id: self.customers.next_id()?,
            name: command.name,
            phone: command.phone,
            address: command.address,
        };
        self.customers.append(&customer)?;

        info!("registered customer {} '{}'", customer.id, customer.name);
        Ok(customer)
    }

    /// Look a customer up by id.
    pub fn find_customer(&self, id: u32) -> DomainResult<Option<Customer>> {
        Ok(self.customers.find_by_id(id)?)
    }

    /// All customers in registration order.
    pub fn list_customers(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.customers.list()?)
    }
}
