//! Reservation database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Reservation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_reserva")]
    pub id: i32,
    #[sea_orm(column_name = "id_usuario")]
    pub user_id: i32,
    #[sea_orm(column_name = "id_restaurante")]
    pub restaurant_id: i32,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "fecha_reserva")]
    pub date: Date,
    #[sea_orm(column_name = "hora_reserva")]
    pub time: Time,
    #[sea_orm(column_name = "numero_personas")]
    pub party_size: i32,
    #[sea_orm(column_name = "estado")]
    pub status: String,
    #[sea_orm(column_name = "comentarios", column_type = "Text")]
    pub comments: String,
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

impl From<Model> for Reservation {
    fn from(model: Model) -> Self {
        Reservation {
            id: model.id,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
            created_at: model.created_at,
            date: model.date,
            time: model.time,
            party_size: model.party_size,
            status: model.status,
            comments: model.comments,
        }
    }
}
