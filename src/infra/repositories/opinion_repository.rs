//! Opinion repository implementation.
//!
//! Read paths join the author and restaurant names in a single query.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::opinion::{self, ActiveModel, Entity as OpinionEntity};
use super::entities::{restaurant, user};
use super::stamp_now;
use crate::domain::{NewOpinion, Opinion, RecentOpinion, RestaurantOpinion};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait OpinionRepository: Send + Sync {
    /// Insert an opinion stamped with the current time
    async fn create(&self, input: NewOpinion) -> AppResult<Opinion>;

    /// Most recent opinions across all restaurants, newest first
    async fn recent(&self, limit: u64) -> AppResult<Vec<RecentOpinion>>;

    /// Best-rated opinions of one restaurant; equal ratings keep insertion order
    async fn top_for_restaurant(
        &self,
        restaurant_id: i32,
        limit: u64,
    ) -> AppResult<Vec<RestaurantOpinion>>;
}

pub struct OpinionStore {
    db: DatabaseConnection,
}

impl OpinionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct RecentOpinionRow {
    id: i32,
    comment: String,
    rating: i32,
    author: String,
    restaurant: String,
}

impl From<RecentOpinionRow> for RecentOpinion {
    fn from(row: RecentOpinionRow) -> Self {
        RecentOpinion {
            id: row.id,
            comment: row.comment,
            rating: row.rating,
            author: row.author,
            restaurant: row.restaurant,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct RestaurantOpinionRow {
    comment: String,
    rating: i32,
    author: String,
}

impl From<RestaurantOpinionRow> for RestaurantOpinion {
    fn from(row: RestaurantOpinionRow) -> Self {
        RestaurantOpinion {
            comment: row.comment,
            rating: row.rating,
            author: row.author,
        }
    }
}

#[async_trait]
impl OpinionRepository for OpinionStore {
    async fn create(&self, input: NewOpinion) -> AppResult<Opinion> {
        let active = ActiveModel {
            comment: Set(input.comment),
            rating: Set(input.rating),
            user_id: Set(input.user_id),
            restaurant_id: Set(input.restaurant_id),
            created_at: Set(stamp_now()),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(AppError::from_reference_violation)?;
        Ok(Opinion::from(model))
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<RecentOpinion>> {
        let rows = OpinionEntity::find()
            .select_only()
            .column_as(opinion::Column::Id, "id")
            .column_as(opinion::Column::Comment, "comment")
            .column_as(opinion::Column::Rating, "rating")
            .column_as(user::Column::Name, "author")
            .column_as(restaurant::Column::Name, "restaurant")
            .join(JoinType::InnerJoin, opinion::Relation::User.def())
            .join(JoinType::InnerJoin, opinion::Relation::Restaurant.def())
            .order_by_desc(opinion::Column::CreatedAt)
            .order_by_desc(opinion::Column::Id)
            .limit(limit)
            .into_model::<RecentOpinionRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(RecentOpinion::from).collect())
    }

    async fn top_for_restaurant(
        &self,
        restaurant_id: i32,
        limit: u64,
    ) -> AppResult<Vec<RestaurantOpinion>> {
        let rows = OpinionEntity::find()
            .select_only()
            .column_as(opinion::Column::Comment, "comment")
            .column_as(opinion::Column::Rating, "rating")
            .column_as(user::Column::Name, "author")
            .join(JoinType::InnerJoin, opinion::Relation::User.def())
            .filter(opinion::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(opinion::Column::Rating)
            .order_by_asc(opinion::Column::Id)
            .limit(limit)
            .into_model::<RestaurantOpinionRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(RestaurantOpinion::from).collect())
    }
}
