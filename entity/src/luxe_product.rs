use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "luxe_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seller_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: String,
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::luxe_user::Entity",
        from = "Column::SellerId",
        to = "super::luxe_user::Column::Id"
    )]
    LuxeUser,
    #[sea_orm(has_many = "super::luxe_cart_item::Entity")]
    LuxeCartItem,
    #[sea_orm(has_many = "super::luxe_order_item::Entity")]
    LuxeOrderItem,
}

impl Related<super::luxe_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeUser.def()
    }
}

impl Related<super::luxe_cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeCartItem.def()
    }
}

impl Related<super::luxe_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeOrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
