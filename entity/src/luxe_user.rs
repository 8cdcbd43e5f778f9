use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "luxe_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::luxe_cart_item::Entity")]
    LuxeCartItem,
    #[sea_orm(has_many = "super::luxe_expense::Entity")]
    LuxeExpense,
    #[sea_orm(has_many = "super::luxe_notification::Entity")]
    LuxeNotification,
    #[sea_orm(has_many = "super::luxe_order::Entity")]
    LuxeOrder,
    #[sea_orm(has_many = "super::luxe_product::Entity")]
    LuxeProduct,
}

impl Related<super::luxe_cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeCartItem.def()
    }
}

impl Related<super::luxe_expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeExpense.def()
    }
}

impl Related<super::luxe_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeNotification.def()
    }
}

impl Related<super::luxe_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeOrder.def()
    }
}

impl Related<super::luxe_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
