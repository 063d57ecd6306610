//! Integration tests for the Customers domain against real PostgreSQL.

use database::{Filter, PageRequest};
use domain_customers::*;
use std::collections::BTreeMap;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn input(builder: &TestDataBuilder, local: &str, gender: Gender) -> CreateCustomer {
    CreateCustomer {
        name: Some(builder.name("customer", local)),
        email: Some(builder.email(local)),
        gender: Some(gender),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_gender_enum_round_trips_through_postgres() {
    let db = TestDatabase::new().await;
    let repo = PgCustomerRepository::new(db.connection());
    let service = CustomerService::new(repo.clone());
    let builder = TestDataBuilder::from_test_name("gender_enum");

    let created = service
        .create(CreateCustomer {
            birthday: chrono::NaiveDate::from_ymd_opt(1990, 5, 17),
            ..input(&builder, "jane", Gender::Female)
        })
        .await
        .unwrap();
    service
        .create(input(&builder, "john", Gender::Male))
        .await
        .unwrap();

    let found = service.find_one(created.id, &BTreeMap::new()).await.unwrap();
    assert_eq!(found.gender, Gender::Female);
    assert_eq!(found.birthday, created.birthday);

    // Enum and date columns are matched through their text form.
    let page = repo
        .search(
            vec![
                Filter::new(CustomerField::Gender, "fem"),
                Filter::new(CustomerField::Birthday, "1990-05"),
            ],
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_uuid_eq(page.items[0].id, created.id, "filtered customer");
}

#[tokio::test]
async fn test_email_unique_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgCustomerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("email_unique");

    repo.insert(Customer::new(input(&builder, "jane", Gender::Female)))
        .await
        .unwrap();
    let duplicate = repo
        .insert(Customer::new(input(&builder, "jane", Gender::Female)))
        .await;

    assert!(matches!(duplicate, Err(CustomerError::EmailTaken)));
}

#[tokio::test]
async fn test_soft_deleted_customer_is_hidden() {
    let db = TestDatabase::new().await;
    let repo = PgCustomerRepository::new(db.connection());
    let service = CustomerService::new(repo.clone());
    let builder = TestDataBuilder::from_test_name("customer_soft_delete");

    let created = service
        .create(input(&builder, "gone", Gender::Male))
        .await
        .unwrap();
    service.delete(created.id).await.unwrap();

    assert!(
        service
            .find_one(created.id, &BTreeMap::new())
            .await
            .is_err()
    );
    let trashed = assert_some(
        repo.find_with_trashed(created.id).await.unwrap(),
        "trashed customer",
    );
    assert!(trashed.deleted_at.is_some());
}
