use database::{Page, SearchParams, search::lookup_filters};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{Customer, CustomerField, CreateCustomer, UpdateCustomer};
use crate::repository::CustomerRepository;

/// Service layer for Customer business logic
#[derive(Clone)]
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filtered, paginated listing. Every filter key must name a customer column.
    pub async fn search(&self, params: SearchParams) -> CustomerResult<Page<Customer>> {
        let filters = params.resolve::<CustomerField>()?;
        self.repository.search(filters, params.page).await
    }

    pub async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        input.validate()?;

        if let Some(email) = &input.email {
            if self.repository.email_taken(email, None).await? {
                return Err(CustomerError::EmailTaken);
            }
        }

        self.repository.insert(Customer::new(input)).await
    }

    /// Single live customer; lookup parameters outside the allow-list are ignored.
    pub async fn find_one(
        &self,
        id: Uuid,
        params: &BTreeMap<String, String>,
    ) -> CustomerResult<Customer> {
        self.repository
            .find_one(id, lookup_filters::<CustomerField>(params))
            .await?
            .ok_or(CustomerError::NotFound)
    }

    pub async fn update(&self, id: Uuid, input: UpdateCustomer) -> CustomerResult<Customer> {
        input.validate()?;

        let mut customer = self
            .repository
            .find_one(id, Vec::new())
            .await?
            .ok_or(CustomerError::NotFound)?;

        if let Some(email) = input.email.as_ref().filter(|s| **s != customer.email) {
            if self.repository.email_taken(email, Some(id)).await? {
                return Err(CustomerError::EmailTaken);
            }
        }

        customer.apply(input);
        self.repository.update(customer).await
    }

    pub async fn delete(&self, id: Uuid) -> CustomerResult<()> {
        if self.repository.soft_delete(id).await? {
            Ok(())
        } else {
            Err(CustomerError::NotFound)
        }
    }
}
