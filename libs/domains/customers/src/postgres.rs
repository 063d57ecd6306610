use async_trait::async_trait;
use chrono::Utc;
use database::{BaseRepository, Filter, Page, PageRequest, apply_filters};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{CustomerError, CustomerResult},
    models::{Customer, CustomerField},
    repository::CustomerRepository,
};

#[derive(Clone)]
pub struct PgCustomerRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn search(
        &self,
        filters: Vec<Filter<CustomerField>>,
        page: PageRequest,
    ) -> CustomerResult<Page<Customer>> {
        let select = apply_filters(self.base.live(), &filters);
        let page = self.base.fetch_page(select, page).await?;
        Ok(page.map(Customer::from))
    }

    async fn find_one(
        &self,
        id: Uuid,
        filters: Vec<Filter<CustomerField>>,
    ) -> CustomerResult<Option<Customer>> {
        let model = apply_filters(self.base.live_by_id(id), &filters)
            .one(self.base.db())
            .await?;
        Ok(model.map(Customer::from))
    }

    async fn find_with_trashed(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        Ok(self.base.find_with_trashed(id).await?.map(Customer::from))
    }

    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> CustomerResult<bool> {
        let mut query = entity::Entity::find().filter(entity::Column::Email.eq(email));
        if let Some(id) = except {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.count(self.base.db()).await? > 0)
    }

    async fn insert(&self, customer: Customer) -> CustomerResult<Customer> {
        let active_model: entity::ActiveModel = customer.into();
        let model = active_model.insert(self.base.db()).await?;

        tracing::info!(customer_id = %model.id, "Created customer");
        Ok(model.into())
    }

    async fn update(&self, customer: Customer) -> CustomerResult<Customer> {
        if self.base.find_live(customer.id).await?.is_none() {
            return Err(CustomerError::NotFound);
        }
        let active_model: entity::ActiveModel = customer.into();
        let model = active_model.update(self.base.db()).await?;

        tracing::info!(customer_id = %model.id, "Updated customer");
        Ok(model.into())
    }

    async fn soft_delete(&self, id: Uuid) -> CustomerResult<bool> {
        let now = Utc::now();
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel {
                deleted_at: Set(Some(now.into())),
                updated_at: Set(now.into()),
                ..Default::default()
            })
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null())
            .exec(self.base.db())
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(customer_id = %id, "Soft deleted customer");
        }
        Ok(result.rows_affected > 0)
    }
}
