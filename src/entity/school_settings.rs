//! 学校设置实体（每个租户一行）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub school_name: Option<String>,
    pub school_phone: Option<String>,
    pub school_email: Option<String>,
    pub school_address: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_settings(self) -> crate::models::settings::entities::SchoolSettings {
        use crate::models::settings::entities::SchoolSettings;
        use chrono::{DateTime, Utc};

        SchoolSettings {
            id: self.id,
            school_name: self.school_name,
            school_phone: self.school_phone,
            school_email: self.school_email,
            school_address: self.school_address,
            logo_url: self.logo_url,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
