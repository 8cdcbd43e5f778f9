use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "luxe_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub buyer_id: Option<i32>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::luxe_user::Entity",
        from = "Column::BuyerId",
        to = "super::luxe_user::Column::Id",
        on_delete = "SetNull"
    )]
    LuxeUser,
    #[sea_orm(has_many = "super::luxe_order_item::Entity")]
    LuxeOrderItem,
}

impl Related<super::luxe_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeUser.def()
    }
}

impl Related<super::luxe_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeOrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
