use super::SeaOrmStorage;
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::{Result, SchoolAdminError};
use crate::models::evaluations::{entities::Evaluation, requests::EvaluationListParams};
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入某学生某天的评价
    ///
    /// 以 (student_id, evaluation_date) 为冲突键做 upsert，
    /// 同一天重复保存会覆盖评价内容。
    pub async fn upsert_evaluation_impl(
        &self,
        user_id: i64,
        student_id: i64,
        date: NaiveDate,
        weekday: &str,
        text: &str,
    ) -> Result<Evaluation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            student_id: Set(student_id),
            evaluation_date: Set(date),
            weekday: Set(weekday.to_string()),
            evaluation_text: Set(text.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Evaluations::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::EvaluationDate])
                    .update_columns([Column::Weekday, Column::EvaluationText, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("保存评价失败: {e}")))?;

        // upsert 后重查，拿到最终行（含覆盖时保留的原 id / created_at）
        let result = Evaluations::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::EvaluationDate.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询评价失败: {e}")))?
            .ok_or_else(|| {
                SchoolAdminError::database_operation("评价保存后未找到记录".to_string())
            })?;

        Ok(result.into_evaluation())
    }

    /// 列出评价，可按学生和日期区间筛选
    pub async fn list_evaluations_impl(
        &self,
        user_id: i64,
        params: EvaluationListParams,
    ) -> Result<Vec<Evaluation>> {
        let mut select = Evaluations::find().filter(Column::UserId.eq(user_id));

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(from) = params.from {
            select = select.filter(Column::EvaluationDate.gte(from));
        }
        if let Some(to) = params.to {
            select = select.filter(Column::EvaluationDate.lte(to));
        }

        let evaluations = select
            .order_by_desc(Column::EvaluationDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询评价列表失败: {e}"))
            })?;

        Ok(evaluations.into_iter().map(|m| m.into_evaluation()).collect())
    }

    /// 删除评价
    pub async fn delete_evaluation_impl(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = Evaluations::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 某天已写评价的学生数
    pub async fn count_evaluations_on_impl(&self, user_id: i64, date: NaiveDate) -> Result<i64> {
        let count = Evaluations::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EvaluationDate.eq(date))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("统计评价数量失败: {e}"))
            })?;

        Ok(count as i64)
    }
}
