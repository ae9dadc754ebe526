//! Opinion service - Reviews and the homepage aggregate.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{HOMEPAGE_RECENT_OPINIONS, RESTAURANT_TOP_OPINIONS};
use crate::domain::{HomepageData, NewOpinion, Opinion, RestaurantOpinion};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait OpinionService: Send + Sync {
    /// All categories plus the most recent opinions
    async fn homepage(&self) -> AppResult<HomepageData>;

    /// Best-rated opinions of one restaurant
    async fn top_opinions(&self, restaurant_id: i32) -> AppResult<Vec<RestaurantOpinion>>;

    async fn create_opinion(&self, input: NewOpinion) -> AppResult<Opinion>;
}

pub struct OpinionManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OpinionManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OpinionService for OpinionManager<U> {
    async fn homepage(&self) -> AppResult<HomepageData> {
        let categories = self.uow.categories();
        let opinions = self.uow.opinions();

        let (categories, recent_opinions) = tokio::try_join!(
            categories.list(),
            opinions.recent(HOMEPAGE_RECENT_OPINIONS)
        )?;

        Ok(HomepageData {
            categories,
            recent_opinions,
        })
    }

    async fn top_opinions(&self, restaurant_id: i32) -> AppResult<Vec<RestaurantOpinion>> {
        self.uow
            .opinions()
            .top_for_restaurant(restaurant_id, RESTAURANT_TOP_OPINIONS)
            .await
    }

    async fn create_opinion(&self, input: NewOpinion) -> AppResult<Opinion> {
        let opinion = self.uow.opinions().create(input).await?;
        tracing::info!(
            opinion_id = opinion.id,
            restaurant_id = opinion.restaurant_id,
            "Opinion created"
        );
        Ok(opinion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, RecentOpinion};
    use crate::infra::{
        CategoryRepository, MockCategoryRepository, MockOpinionRepository, MockUnitOfWork,
        OpinionRepository,
    };
    use mockall::predicate::eq;

    fn service(
        categories: MockCategoryRepository,
        opinions: MockOpinionRepository,
    ) -> OpinionManager<MockUnitOfWork> {
        let categories: Arc<dyn CategoryRepository> = Arc::new(categories);
        let opinions: Arc<dyn OpinionRepository> = Arc::new(opinions);
        let mut uow = MockUnitOfWork::new();
        uow.expect_categories().returning(move || categories.clone());
        uow.expect_opinions().returning(move || opinions.clone());
        OpinionManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_homepage_combines_categories_and_recent_opinions() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| {
            Ok(vec![Category {
                id: 1,
                name: "Italiana".to_string(),
                image_url: None,
            }])
        });
        let mut opinions = MockOpinionRepository::new();
        opinions
            .expect_recent()
            .with(eq(HOMEPAGE_RECENT_OPINIONS))
            .returning(|_| {
                Ok(vec![RecentOpinion {
                    id: 9,
                    comment: "Excelente".to_string(),
                    rating: 5,
                    author: "Ana".to_string(),
                    restaurant: "La Tagliatella".to_string(),
                }])
            });

        let homepage = service(categories, opinions).homepage().await.unwrap();
        assert_eq!(homepage.categories.len(), 1);
        assert_eq!(homepage.recent_opinions[0].author, "Ana");
    }

    #[tokio::test]
    async fn test_top_opinions_requests_three() {
        let mut opinions = MockOpinionRepository::new();
        opinions
            .expect_top_for_restaurant()
            .with(eq(4), eq(RESTAURANT_TOP_OPINIONS))
            .returning(|_, _| Ok(vec![]));

        let top = service(MockCategoryRepository::new(), opinions)
            .top_opinions(4)
            .await
            .unwrap();
        assert!(top.is_empty());
    }
}
