use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "luxe_notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub expense_id: Option<i32>,
    pub action: Option<String>,
    pub status: Option<String>,
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
}

impl Related<super::luxe_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LuxeUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
