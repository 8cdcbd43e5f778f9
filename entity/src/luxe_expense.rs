use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "luxe_expense")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub kind: String,
    pub amount: f64,
    pub category: String,
    pub payment_method: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub date: Date,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
