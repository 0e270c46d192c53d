use super::SeaOrmStorage;
use crate::entity::school_settings::{ActiveModel, Column, Entity as SchoolSettingsTable};
use crate::errors::{Result, SchoolAdminError};
use crate::models::settings::{entities::SchoolSettings, requests::UpdateSettingsRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 读取租户的学校设置，不存在时创建空行
    pub async fn get_or_create_settings_impl(&self, user_id: i64) -> Result<SchoolSettings> {
        let existing = SchoolSettingsTable::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询学校设置失败: {e}"))
            })?;

        if let Some(model) = existing {
            return Ok(model.into_settings());
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("创建学校设置失败: {e}"))
            })?;

        Ok(result.into_settings())
    }

    /// 更新学校设置
    pub async fn update_settings_impl(
        &self,
        user_id: i64,
        update: UpdateSettingsRequest,
    ) -> Result<SchoolSettings> {
        // 确保行存在
        let current = self.get_or_create_settings_impl(user_id).await?;

        let mut model = ActiveModel {
            id: Set(current.id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(school_name) = update.school_name {
            model.school_name = Set(Some(school_name));
        }
        if let Some(school_phone) = update.school_phone {
            model.school_phone = Set(Some(school_phone));
        }
        if let Some(school_email) = update.school_email {
            model.school_email = Set(Some(school_email));
        }
        if let Some(school_address) = update.school_address {
            model.school_address = Set(Some(school_address));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("更新学校设置失败: {e}"))
            })?;

        self.get_or_create_settings_impl(user_id).await
    }

    /// 更新校徽地址
    pub async fn set_settings_logo_url_impl(&self, user_id: i64, url: &str) -> Result<bool> {
        // 确保行存在
        self.get_or_create_settings_impl(user_id).await?;

        let now = chrono::Utc::now().timestamp();
        let result = SchoolSettingsTable::update_many()
            .col_expr(Column::LogoUrl, sea_orm::sea_query::Expr::value(url))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("更新校徽失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
