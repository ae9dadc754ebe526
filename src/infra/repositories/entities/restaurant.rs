//! Restaurant database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Restaurant;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurantes")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_restaurante")]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    #[sea_orm(column_name = "ubicacion")]
    pub location: String,
    #[sea_orm(column_name = "categoria")]
    pub category: String,
    #[sea_orm(column_name = "horario_apertura")]
    pub opening_time: Time,
    #[sea_orm(column_name = "horario_cierre")]
    pub closing_time: Time,
    #[sea_orm(column_name = "descripcion", column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "capacidad_maxima")]
    pub max_capacity: Option<i32>,
    #[sea_orm(column_name = "mapa_url", column_type = "Text", nullable)]
    pub map_url: Option<String>,
    #[sea_orm(column_name = "id_usuario")]
    pub owner_id: Option<i32>,
    #[sea_orm(column_name = "id_categoria")]
    pub category_id: Option<i32>,
    #[sea_orm(column_name = "imagen_url", column_type = "Text", nullable)]
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Owner,
    #[sea_orm(has_many = "super::opinion::Entity")]
    Opinion,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::opinion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Opinion.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Restaurant {
    fn from(model: Model) -> Self {
        Restaurant {
            id: model.id,
            name: model.name,
            location: model.location,
            category: model.category,
            opening_time: model.opening_time,
            closing_time: model.closing_time,
            description: model.description,
            max_capacity: model.max_capacity,
            map_url: model.map_url,
            owner_id: model.owner_id,
            category_id: model.category_id,
            image_url: model.image_url,
        }
    }
}
