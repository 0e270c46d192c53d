use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolAdminError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(
        &self,
        user_id: i64,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            name: Set(req.name),
            birth_date: Set(req.birth_date),
            guardian_name: Set(req.guardian_name),
            whatsapp: Set(req.whatsapp),
            email: Set(req.email),
            school_name: Set(req.school_name),
            grade: Set(req.grade),
            class_group: Set(req.class_group),
            shift: Set(req.shift),
            observations: Set(req.observations),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 按租户获取学生
    pub async fn get_student_impl(&self, user_id: i64, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        user_id: i64,
        params: StudentListParams,
    ) -> Result<StudentListResponse> {
        let page = params.pagination.page.max(1) as u64;
        let size = params.pagination.size.clamp(1, 100) as u64;

        let mut select = Students::find().filter(Column::UserId.eq(user_id));

        // 按学生或监护人姓名模糊搜索，ESCAPE 让 % / _ 按字面匹配
        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let pattern = format!("%{}%", escape_like_pattern(search.trim()));
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(LikeExpr::new(pattern.clone()).escape('\\')))
                    .add(Column::GuardianName.like(LikeExpr::new(pattern).escape('\\'))),
            );
        }

        // 活跃状态筛选
        if let Some(active) = params.active {
            select = select.filter(Column::Active.eq(active));
        }

        // 年级筛选
        if let Some(ref grade) = params.grade {
            select = select.filter(Column::Grade.eq(grade.clone()));
        }

        // 按姓名排序
        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolAdminError::database_operation(format!("查询学生列表失败: {e}"))
        })?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        user_id: i64,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_impl(user_id, id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }
        if let Some(guardian_name) = update.guardian_name {
            model.guardian_name = Set(Some(guardian_name));
        }
        if let Some(whatsapp) = update.whatsapp {
            model.whatsapp = Set(Some(whatsapp));
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(school_name) = update.school_name {
            model.school_name = Set(Some(school_name));
        }
        if let Some(grade) = update.grade {
            model.grade = Set(Some(grade));
        }
        if let Some(class_group) = update.class_group {
            model.class_group = Set(Some(class_group));
        }
        if let Some(shift) = update.shift {
            model.shift = Set(Some(shift));
        }
        if let Some(observations) = update.observations {
            model.observations = Set(Some(observations));
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_impl(user_id, id).await
    }

    /// 删除学生（级联删除付款、考勤、评价、文档记录）
    pub async fn delete_student_impl(&self, user_id: i64, id: i64) -> Result<bool> {
        let result = Students::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新学生照片地址
    pub async fn set_student_photo_url_impl(
        &self,
        user_id: i64,
        id: i64,
        url: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Students::update_many()
            .col_expr(Column::PhotoUrl, sea_orm::sea_query::Expr::value(url))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("更新学生照片失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 统计活跃学生数
    pub async fn count_active_students_impl(&self, user_id: i64) -> Result<i64> {
        let count = Students::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Active.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 最近创建的学生
    pub async fn recent_students_impl(&self, user_id: i64, limit: u64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("查询最近学生失败: {e}"))
            })?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::PaginationQuery;
    use crate::storage::sea_orm_storage::test_util::{
        memory_storage, seed_tenant, student_request,
    };

    fn search_params(search: &str) -> StudentListParams {
        StudentListParams {
            pagination: PaginationQuery { page: 1, size: 20 },
            search: Some(search.to_string()),
            active: None,
            grade: None,
        }
    }

    #[tokio::test]
    async fn test_search_treats_like_wildcards_as_literals() {
        let storage = memory_storage().await;
        let tenant = seed_tenant(&storage, "tutor").await;
        storage
            .create_student_impl(tenant, student_request("Turma 100%"))
            .await
            .unwrap();
        storage
            .create_student_impl(tenant, student_request("Turma 100x"))
            .await
            .unwrap();

        // "%" 按字面匹配，不能退化成 LIKE 通配符
        let result = storage
            .list_students_with_pagination_impl(tenant, search_params("100%"))
            .await
            .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Turma 100%");

        // "_" 同理
        storage
            .create_student_impl(tenant, student_request("a_b"))
            .await
            .unwrap();
        storage
            .create_student_impl(tenant, student_request("axb"))
            .await
            .unwrap();
        let result = storage
            .list_students_with_pagination_impl(tenant, search_params("a_b"))
            .await
            .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "a_b");
    }
}
