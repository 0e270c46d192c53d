use super::SeaOrmStorage;
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::{Result, SchoolAdminError};
use crate::models::payments::entities::Payment;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 批量插入付款记录，每个到期日期一条
    ///
    /// 调用方负责先过滤掉已有月份；(student_id, reference_month)
    /// 上的唯一索引兜底并发下的重复插入。
    pub async fn insert_payments_impl(
        &self,
        user_id: i64,
        student_id: i64,
        due_dates: &[NaiveDate],
        amount_cents: i64,
    ) -> Result<Vec<Payment>> {
        let now = chrono::Utc::now().timestamp();
        let mut created = Vec::with_capacity(due_dates.len());

        for date in due_dates {
            let model = ActiveModel {
                user_id: Set(user_id),
                student_id: Set(student_id),
                reference_month: Set(*date),
                amount_cents: Set(amount_cents),
                paid: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            let result = model.insert(&self.db).await.map_err(|e| {
                SchoolAdminError::database_operation(format!("插入付款记录失败: {e}"))
            })?;

            created.push(result.into_payment());
        }

        Ok(created)
    }

    /// 列出某学生的全部付款记录，按参考月份升序
    pub async fn list_payments_impl(&self, user_id: i64, student_id: i64) -> Result<Vec<Payment>> {
        let payments = Payments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::ReferenceMonth)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询付款列表失败: {e}"))
            })?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }

    /// 列出某学生已有付款记录的参考月份
    pub async fn list_payment_months_impl(
        &self,
        user_id: i64,
        student_id: i64,
    ) -> Result<Vec<NaiveDate>> {
        let months: Vec<NaiveDate> = Payments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::StudentId.eq(student_id))
            .select_only()
            .column(Column::ReferenceMonth)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询付款月份失败: {e}"))
            })?;

        Ok(months)
    }

    /// 标记付款 / 取消付款
    pub async fn set_payment_paid_impl(
        &self,
        user_id: i64,
        payment_id: i64,
        paid: bool,
    ) -> Result<Option<Payment>> {
        let existing = Payments::find_by_id(payment_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询付款记录失败: {e}"))
            })?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.paid = Set(paid);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(|e| {
            SchoolAdminError::database_operation(format!("更新付款状态失败: {e}"))
        })?;

        Ok(Some(result.into_payment()))
    }

    /// 删除付款记录
    pub async fn delete_payment_impl(&self, user_id: i64, payment_id: i64) -> Result<bool> {
        let result = Payments::delete_many()
            .filter(Column::Id.eq(payment_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("删除付款记录失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 统计参考月份区间内已收款总额（分）
    pub async fn sum_paid_between_impl(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64> {
        let amounts: Vec<i64> = Payments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Paid.eq(true))
            .filter(Column::ReferenceMonth.gte(from))
            .filter(Column::ReferenceMonth.lte(to))
            .select_only()
            .column(Column::AmountCents)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("统计收款总额失败: {e}"))
            })?;

        Ok(amounts.into_iter().sum())
    }
}
