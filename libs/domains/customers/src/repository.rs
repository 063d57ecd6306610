use async_trait::async_trait;
use chrono::Utc;
use database::{Filter, Page, PageRequest};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{Customer, CustomerField};

/// Repository trait for Customer persistence
///
/// Every read except [`CustomerRepository::find_with_trashed`] skips
/// soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// One page of live customers matching every filter, ordered by id
    async fn search(
        &self,
        filters: Vec<Filter<CustomerField>>,
        page: PageRequest,
    ) -> CustomerResult<Page<Customer>>;

    /// Live customer by id, narrowed by the given filters
    async fn find_one(&self, id: Uuid, filters: Vec<Filter<CustomerField>>)
    -> CustomerResult<Option<Customer>>;

    /// Customer by id, including soft-deleted rows
    async fn find_with_trashed(&self, id: Uuid) -> CustomerResult<Option<Customer>>;

    /// Whether any customer other than `except` (trashed ones included) uses `email`
    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> CustomerResult<bool>;

    async fn insert(&self, customer: Customer) -> CustomerResult<Customer>;

    /// Writes every column of an existing live customer
    async fn update(&self, customer: Customer) -> CustomerResult<Customer>;

    /// Marks a live customer deleted; `false` when there was none
    async fn soft_delete(&self, id: Uuid) -> CustomerResult<bool>;
}

/// In-memory implementation of CustomerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<Uuid, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_all(customer: &Customer, filters: &[Filter<CustomerField>]) -> bool {
    filters
        .iter()
        .all(|filter| filter.matches(filter.field.text(customer).as_deref()))
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn search(
        &self,
        filters: Vec<Filter<CustomerField>>,
        page: PageRequest,
    ) -> CustomerResult<Page<Customer>> {
        let customers = self.customers.read().await;
        // BTreeMap iteration is id order, and v7 ids sort by creation time.
        let matching = customers
            .values()
            .filter(|c| c.deleted_at.is_none() && matches_all(c, &filters))
            .cloned()
            .collect();
        Ok(Page::from_vec(matching, page))
    }

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<CustomerField>>,
    ) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers
            .get(&id)
            .filter(|c| c.deleted_at.is_none() && matches_all(c, &filters))
            .cloned())
    }

    async fn find_with_trashed(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> CustomerResult<bool> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .any(|c| c.email == email && Some(c.id) != except))
    }

    async fn insert(&self, customer: Customer) -> CustomerResult<Customer> {
        let mut customers = self.customers.write().await;
        if customers.values().any(|c| c.email == customer.email) {
            return Err(CustomerError::EmailTaken);
        }
        customers.insert(customer.id, customer.clone());

        tracing::info!(customer_id = %customer.id, "Created customer");
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> CustomerResult<Customer> {
        let mut customers = self.customers.write().await;
        match customers.get(&customer.id) {
            Some(existing) if existing.deleted_at.is_none() => {}
            _ => return Err(CustomerError::NotFound),
        }
        if customers
            .values()
            .any(|c| c.email == customer.email && c.id != customer.id)
        {
            return Err(CustomerError::EmailTaken);
        }
        customers.insert(customer.id, customer.clone());

        tracing::info!(customer_id = %customer.id, "Updated customer");
        Ok(customer)
    }

    async fn soft_delete(&self, id: Uuid) -> CustomerResult<bool> {
        let mut customers = self.customers.write().await;
        match customers.get_mut(&id) {
            Some(customer) if customer.deleted_at.is_none() => {
                let now = Utc::now();
                customer.deleted_at = Some(now);
                customer.updated_at = now;
                tracing::info!(customer_id = %id, "Soft deleted customer");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateCustomer, Gender};

    fn customer(name: &str, email: &str, gender: Gender) -> Customer {
        Customer::new(CreateCustomer {
            name: Some(name.into()),
            email: Some(email.into()),
            gender: Some(gender),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_filters_are_and_combined() {
        let repo = InMemoryCustomerRepository::new();
        repo.insert(customer("Jane Roe", "jane@example.com", Gender::Female))
            .await
            .unwrap();
        repo.insert(customer("Jane Doe", "jdoe@example.com", Gender::Female))
            .await
            .unwrap();
        repo.insert(customer("John Doe", "john@example.com", Gender::Male))
            .await
            .unwrap();

        let page = repo
            .search(
                vec![
                    Filter::new(CustomerField::Name, "doe"),
                    Filter::new(CustomerField::Gender, "FEMALE"),
                ],
                PageRequest::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].email, "jdoe@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_even_after_delete() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo
            .insert(customer("Jane", "jane@example.com", Gender::Female))
            .await
            .unwrap();
        repo.soft_delete(first.id).await.unwrap();

        let second = repo
            .insert(customer("Jane", "jane@example.com", Gender::Female))
            .await;
        assert!(matches!(second, Err(CustomerError::EmailTaken)));
        assert!(repo.email_taken("jane@example.com", None).await.unwrap());
    }
}
