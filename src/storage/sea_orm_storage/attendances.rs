use super::SeaOrmStorage;
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances};
use crate::entity::students;
use crate::errors::{Result, SchoolAdminError};
use crate::models::attendances::{
    entities::Attendance,
    requests::{AttendanceEntry, AttendanceListParams},
};
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::HashSet;

impl SeaOrmStorage {
    /// 批量登记一天的考勤
    ///
    /// 以 (student_id, attendance_date) 为冲突键做 upsert，
    /// 重复提交同一天的点名表会覆盖原有状态而不是报错。
    pub async fn upsert_attendances_impl(
        &self,
        user_id: i64,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<i64> {
        if entries.is_empty() {
            return Ok(0);
        }

        // 点名表中的学生必须全部属于当前租户，
        // 否则 upsert 的冲突键会命中其他租户的记录
        let requested: HashSet<i64> = entries.iter().map(|e| e.student_id).collect();
        let owned: Vec<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::UserId.eq(user_id))
            .filter(students::Column::Id.is_in(requested.iter().copied()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询学生失败: {e}")))?;
        let owned: HashSet<i64> = owned.into_iter().collect();
        if let Some(id) = requested.iter().find(|id| !owned.contains(id)) {
            return Err(SchoolAdminError::not_found(format!("学生不存在: {id}")));
        }

        let now = chrono::Utc::now().timestamp();

        let models: Vec<ActiveModel> = entries
            .iter()
            .map(|entry| ActiveModel {
                user_id: Set(user_id),
                student_id: Set(entry.student_id),
                attendance_date: Set(date),
                present: Set(entry.present),
                note: Set(entry.note.clone()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        Attendances::insert_many(models)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::AttendanceDate])
                    .update_columns([Column::Present, Column::Note, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("登记考勤失败: {e}")))?;

        Ok(entries.len() as i64)
    }

    /// 列出考勤记录，可按学生和日期区间筛选
    pub async fn list_attendances_impl(
        &self,
        user_id: i64,
        params: AttendanceListParams,
    ) -> Result<Vec<Attendance>> {
        let mut select = Attendances::find().filter(Column::UserId.eq(user_id));

        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(from) = params.from {
            select = select.filter(Column::AttendanceDate.gte(from));
        }
        if let Some(to) = params.to {
            select = select.filter(Column::AttendanceDate.lte(to));
        }

        let attendances = select
            .order_by_desc(Column::AttendanceDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询考勤列表失败: {e}"))
            })?;

        Ok(attendances.into_iter().map(|m| m.into_attendance()).collect())
    }

    /// 某天已登记考勤的学生数
    pub async fn count_attendance_on_impl(&self, user_id: i64, date: NaiveDate) -> Result<i64> {
        let count = Attendances::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AttendanceDate.eq(date))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("统计考勤数量失败: {e}"))
            })?;

        Ok(count as i64)
    }

    /// 某天的出勤 / 缺勤人数
    pub async fn attendance_counts_on_impl(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<(i64, i64)> {
        let present = Attendances::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AttendanceDate.eq(date))
            .filter(Column::Present.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("统计出勤人数失败: {e}"))
            })?;

        let absent = Attendances::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::AttendanceDate.eq(date))
            .filter(Column::Present.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("统计缺勤人数失败: {e}"))
            })?;

        Ok((present as i64, absent as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::test_util::{
        memory_storage, seed_tenant, student_request,
    };

    fn entry(student_id: i64, present: bool, note: Option<&str>) -> AttendanceEntry {
        AttendanceEntry {
            student_id,
            present,
            note: note.map(str::to_string),
        }
    }

    fn list_params(student_id: i64) -> AttendanceListParams {
        AttendanceListParams {
            student_id: Some(student_id),
            from: None,
            to: None,
        }
    }

    #[tokio::test]
    async fn test_resubmitted_sheet_updates_instead_of_duplicating() {
        let storage = memory_storage().await;
        let tenant = seed_tenant(&storage, "tutor").await;
        let student = storage
            .create_student_impl(tenant, student_request("Ana"))
            .await
            .unwrap();
        let day: NaiveDate = "2026-03-02".parse().unwrap();

        storage
            .upsert_attendances_impl(tenant, day, &[entry(student.id, true, None)])
            .await
            .unwrap();
        storage
            .upsert_attendances_impl(tenant, day, &[entry(student.id, false, Some("sick"))])
            .await
            .unwrap();

        let rows = storage
            .list_attendances_impl(tenant, list_params(student.id))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].present);
        assert_eq!(rows[0].note.as_deref(), Some("sick"));
    }

    #[tokio::test]
    async fn test_register_rejects_students_of_other_tenants() {
        let storage = memory_storage().await;
        let tenant_a = seed_tenant(&storage, "tutor-a").await;
        let tenant_b = seed_tenant(&storage, "tutor-b").await;
        let student_b = storage
            .create_student_impl(tenant_b, student_request("Bruno"))
            .await
            .unwrap();
        let day: NaiveDate = "2026-03-02".parse().unwrap();

        storage
            .upsert_attendances_impl(tenant_b, day, &[entry(student_b.id, true, None)])
            .await
            .unwrap();

        // 另一租户对同一 (student_id, attendance_date) 登记必须被拒绝
        let result = storage
            .upsert_attendances_impl(tenant_a, day, &[entry(student_b.id, false, Some("x"))])
            .await;
        assert!(matches!(result, Err(SchoolAdminError::NotFound(_))));

        let rows = storage
            .list_attendances_impl(tenant_b, list_params(student_b.id))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].present);
        assert_eq!(rows[0].note, None);
    }

    #[tokio::test]
    async fn test_register_rejects_mixed_sheet_containing_foreign_student() {
        let storage = memory_storage().await;
        let tenant_a = seed_tenant(&storage, "school-a").await;
        let tenant_b = seed_tenant(&storage, "school-b").await;
        let own = storage
            .create_student_impl(tenant_a, student_request("Clara"))
            .await
            .unwrap();
        let foreign = storage
            .create_student_impl(tenant_b, student_request("Davi"))
            .await
            .unwrap();
        let day: NaiveDate = "2026-03-03".parse().unwrap();

        let result = storage
            .upsert_attendances_impl(
                tenant_a,
                day,
                &[entry(own.id, true, None), entry(foreign.id, true, None)],
            )
            .await;
        assert!(result.is_err());

        // 整张表被拒绝，自己的学生也不应产生记录
        let rows = storage
            .list_attendances_impl(tenant_a, list_params(own.id))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
