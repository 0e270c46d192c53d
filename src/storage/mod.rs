use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    attendances::{
        entities::Attendance,
        requests::{AttendanceEntry, AttendanceListParams},
    },
    documents::{entities::Document, requests::DocumentListParams},
    evaluations::{entities::Evaluation, requests::EvaluationListParams},
    payments::entities::Payment,
    settings::{entities::SchoolSettings, requests::UpdateSettingsRequest},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 待插入的文档记录
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub student_id: Option<i64>,
    pub kind: String,
    pub document_name: String,
    pub document_type: Option<String>,
    pub download_token: String,
    pub stored_name: String,
    pub file_size: i64,
    pub content_type: String,
}

/// 带落盘文件名的文档记录，下载时使用
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub document: Document,
    pub stored_name: String,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 更新当前用户资料（密码已哈希）
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 设置用户角色（启动时初始化管理员账号用）
    async fn set_user_role(&self, id: i64, role: UserRole) -> Result<bool>;

    /// 学生管理方法（均以租户 user_id 为作用域）
    async fn create_student(&self, user_id: i64, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student(&self, user_id: i64, id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        user_id: i64,
        params: StudentListParams,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        user_id: i64,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, user_id: i64, id: i64) -> Result<bool>;
    async fn set_student_photo_url(&self, user_id: i64, id: i64, url: &str) -> Result<bool>;
    async fn count_active_students(&self, user_id: i64) -> Result<i64>;
    async fn recent_students(&self, user_id: i64, limit: u64) -> Result<Vec<Student>>;

    /// 付款管理方法
    // 批量插入付款记录，每个日期一条
    async fn insert_payments(
        &self,
        user_id: i64,
        student_id: i64,
        due_dates: &[NaiveDate],
        amount_cents: i64,
    ) -> Result<Vec<Payment>>;
    // 列出某学生的全部付款记录
    async fn list_payments(&self, user_id: i64, student_id: i64) -> Result<Vec<Payment>>;
    // 列出某学生已有付款记录的参考月份日期
    async fn list_payment_months(&self, user_id: i64, student_id: i64) -> Result<Vec<NaiveDate>>;
    // 标记付款 / 取消付款
    async fn set_payment_paid(
        &self,
        user_id: i64,
        payment_id: i64,
        paid: bool,
    ) -> Result<Option<Payment>>;
    // 删除付款记录
    async fn delete_payment(&self, user_id: i64, payment_id: i64) -> Result<bool>;
    // 统计区间内已收款总额（分）
    async fn sum_paid_between(&self, user_id: i64, from: NaiveDate, to: NaiveDate) -> Result<i64>;

    /// 考勤管理方法
    // 批量登记一天的考勤，按 (student_id, date) 幂等覆盖
    async fn upsert_attendances(
        &self,
        user_id: i64,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<i64>;
    async fn list_attendances(
        &self,
        user_id: i64,
        params: AttendanceListParams,
    ) -> Result<Vec<Attendance>>;
    // 某天已登记考勤的学生数
    async fn count_attendance_on(&self, user_id: i64, date: NaiveDate) -> Result<i64>;
    // 某天的出勤 / 缺勤人数
    async fn attendance_counts_on(&self, user_id: i64, date: NaiveDate) -> Result<(i64, i64)>;

    /// 评价管理方法
    // 写入某学生某天的评价，按 (student_id, date) 幂等覆盖
    async fn upsert_evaluation(
        &self,
        user_id: i64,
        student_id: i64,
        date: NaiveDate,
        weekday: &str,
        text: &str,
    ) -> Result<Evaluation>;
    async fn list_evaluations(
        &self,
        user_id: i64,
        params: EvaluationListParams,
    ) -> Result<Vec<Evaluation>>;
    async fn delete_evaluation(&self, user_id: i64, id: i64) -> Result<bool>;
    // 某天已写评价的学生数
    async fn count_evaluations_on(&self, user_id: i64, date: NaiveDate) -> Result<i64>;

    /// 文档管理方法
    async fn insert_document(&self, user_id: i64, doc: NewDocument) -> Result<Document>;
    async fn list_documents(
        &self,
        user_id: i64,
        params: DocumentListParams,
    ) -> Result<Vec<Document>>;
    // 某学生的全部文档，含落盘文件名，删除学生时清理文件用
    async fn list_student_documents(
        &self,
        user_id: i64,
        student_id: i64,
    ) -> Result<Vec<StoredDocument>>;
    // 下载走 token，token 本身即凭证
    async fn get_document_by_token(&self, token: &str) -> Result<Option<StoredDocument>>;
    async fn get_document_by_id(&self, user_id: i64, id: i64) -> Result<Option<StoredDocument>>;
    async fn delete_document(&self, user_id: i64, id: i64) -> Result<bool>;

    /// 学校设置方法
    // 读取设置，不存在时创建空行
    async fn get_or_create_settings(&self, user_id: i64) -> Result<SchoolSettings>;
    async fn update_settings(
        &self,
        user_id: i64,
        update: UpdateSettingsRequest,
    ) -> Result<SchoolSettings>;
    async fn set_settings_logo_url(&self, user_id: i64, url: &str) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
