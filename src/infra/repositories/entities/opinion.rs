//! Opinion database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Opinion;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "opiniones")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_opinion")]
    pub id: i32,
    #[sea_orm(column_name = "comentario", column_type = "Text")]
    pub comment: String,
    #[sea_orm(column_name = "calificacion")]
    pub rating: i32,
    #[sea_orm(column_name = "id_usuario")]
    pub user_id: i32,
    #[sea_orm(column_name = "id_restaurante")]
    pub restaurant_id: i32,
    #[sea_orm(column_name = "fecha_opinion")]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_delete = "Cascade"
    )]
    Restaurant,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Opinion {
    fn from(model: Model) -> Self {
        Opinion {
            id: model.id,
            comment: model.comment,
            rating: model.rating,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
            created_at: model.created_at,
        }
    }
}
