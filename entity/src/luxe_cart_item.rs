use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "luxe_cart_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::luxe_user::Entity",
        from = "Column::UserId",
        to = "super::luxe_user::Column::Id"
    )]
    LuxeUser,
    #[sea_orm(
        belongs_to = "super::luxe_product::Entity",
        from = "Column::ProductId",
        to = "super::luxe_product::Column::Id"
    )]
    LuxeProduct,
}

impl Related<super::luxe_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeUser.def()
    }
}

impl Related<super::luxe_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
