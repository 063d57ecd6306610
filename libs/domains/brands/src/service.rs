use database::{Page, SearchParams, search::lookup_filters};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{BrandError, BrandResult};
use crate::models::{Brand, BrandField, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;

/// Service layer for Brand business logic
#[derive(Clone)]
pub struct BrandService<R: BrandRepository> {
    repository: Arc<R>,
}

impl<R: BrandRepository> BrandService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filtered, paginated listing. Every filter key must name a brand column.
    pub async fn search(&self, params: SearchParams) -> BrandResult<Page<Brand>> {
        let filters = params.resolve::<BrandField>()?;
        self.repository.search(filters, params.page).await
    }

    pub async fn create(&self, input: CreateBrand) -> BrandResult<Brand> {
        input.validate()?;

        if let Some(slug) = &input.slug {
            if self.repository.slug_taken(slug, None).await? {
                return Err(BrandError::SlugTaken);
            }
        }

        self.repository.insert(Brand::new(input)).await
    }

    /// Single live brand; lookup parameters outside the allow-list are ignored.
    pub async fn find_one(
        &self,
        id: Uuid,
        params: &BTreeMap<String, String>,
    ) -> BrandResult<Brand> {
        self.repository
            .find_one(id, lookup_filters::<BrandField>(params))
            .await?
            .ok_or(BrandError::NotFound)
    }

    pub async fn update(&self, id: Uuid, input: UpdateBrand) -> BrandResult<Brand> {
        input.validate()?;

        let mut brand = self
            .repository
            .find_one(id, Vec::new())
            .await?
            .ok_or(BrandError::NotFound)?;

        if let Some(slug) = input.slug.as_ref().filter(|s| **s != brand.slug) {
            if self.repository.slug_taken(slug, Some(id)).await? {
                return Err(BrandError::SlugTaken);
            }
        }

        brand.apply(input);
        self.repository.update(brand).await
    }

    pub async fn delete(&self, id: Uuid) -> BrandResult<()> {
        if self.repository.soft_delete(id).await? {
            Ok(())
        } else {
            Err(BrandError::NotFound)
        }
    }
}
