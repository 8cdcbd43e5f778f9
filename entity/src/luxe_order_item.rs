use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "luxe_order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    /// Product name at the time of purchase
    pub name: String,
    /// Unit price at the time of purchase
    pub price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::luxe_order::Entity",
        from = "Column::OrderId",
        to = "super::luxe_order::Column::Id"
    )]
    LuxeOrder,
    #[sea_orm(
        belongs_to = "super::luxe_product::Entity",
        from = "Column::ProductId",
        to = "super::luxe_product::Column::Id",
        on_delete = "SetNull"
    )]
    LuxeProduct,
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
