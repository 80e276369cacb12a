use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub departure: String,
    pub destination: String,
    pub flight_date: Date,
    pub flight_duration: String,
    pub price: f64,
    pub stopover: Option<String>,
    pub price_business: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_booked_seat::Entity")]
    BookedSeats,
}

impl Related<super::flight_booked_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedSeats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
