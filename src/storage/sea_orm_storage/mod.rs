//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendances;
mod documents;
mod evaluations;
mod payments;
mod school_settings;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolAdminError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolAdminError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::{NewDocument, Storage, StoredDocument};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>> {
        self.update_profile_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn set_user_role(&self, id: i64, role: UserRole) -> Result<bool> {
        self.set_user_role_impl(id, role).await
    }

    // 学生模块
    async fn create_student(&self, user_id: i64, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(user_id, student).await
    }

    async fn get_student(&self, user_id: i64, id: i64) -> Result<Option<Student>> {
        self.get_student_impl(user_id, id).await
    }

    async fn list_students_with_pagination(
        &self,
        user_id: i64,
        params: StudentListParams,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(user_id, params)
            .await
    }

    async fn update_student(
        &self,
        user_id: i64,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(user_id, id, update).await
    }

    async fn delete_student(&self, user_id: i64, id: i64) -> Result<bool> {
        self.delete_student_impl(user_id, id).await
    }

    async fn set_student_photo_url(&self, user_id: i64, id: i64, url: &str) -> Result<bool> {
        self.set_student_photo_url_impl(user_id, id, url).await
    }

    async fn count_active_students(&self, user_id: i64) -> Result<i64> {
        self.count_active_students_impl(user_id).await
    }

    async fn recent_students(&self, user_id: i64, limit: u64) -> Result<Vec<Student>> {
        self.recent_students_impl(user_id, limit).await
    }

    // 付款模块
    async fn insert_payments(
        &self,
        user_id: i64,
        student_id: i64,
        due_dates: &[NaiveDate],
        amount_cents: i64,
    ) -> Result<Vec<Payment>> {
        self.insert_payments_impl(user_id, student_id, due_dates, amount_cents)
            .await
    }

    async fn list_payments(&self, user_id: i64, student_id: i64) -> Result<Vec<Payment>> {
        self.list_payments_impl(user_id, student_id).await
    }

    async fn list_payment_months(&self, user_id: i64, student_id: i64) -> Result<Vec<NaiveDate>> {
        self.list_payment_months_impl(user_id, student_id).await
    }

    async fn set_payment_paid(
        &self,
        user_id: i64,
        payment_id: i64,
        paid: bool,
    ) -> Result<Option<Payment>> {
        self.set_payment_paid_impl(user_id, payment_id, paid).await
    }

    async fn delete_payment(&self, user_id: i64, payment_id: i64) -> Result<bool> {
        self.delete_payment_impl(user_id, payment_id).await
    }

    async fn sum_paid_between(&self, user_id: i64, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        self.sum_paid_between_impl(user_id, from, to).await
    }

    // 考勤模块
    async fn upsert_attendances(
        &self,
        user_id: i64,
        date: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<i64> {
        self.upsert_attendances_impl(user_id, date, entries).await
    }

    async fn list_attendances(
        &self,
        user_id: i64,
        params: AttendanceListParams,
    ) -> Result<Vec<Attendance>> {
        self.list_attendances_impl(user_id, params).await
    }

    async fn count_attendance_on(&self, user_id: i64, date: NaiveDate) -> Result<i64> {
        self.count_attendance_on_impl(user_id, date).await
    }

    async fn attendance_counts_on(&self, user_id: i64, date: NaiveDate) -> Result<(i64, i64)> {
        self.attendance_counts_on_impl(user_id, date).await
    }

    // 评价模块
    async fn upsert_evaluation(
        &self,
        user_id: i64,
        student_id: i64,
        date: NaiveDate,
        weekday: &str,
        text: &str,
    ) -> Result<Evaluation> {
        self.upsert_evaluation_impl(user_id, student_id, date, weekday, text)
            .await
    }

    async fn list_evaluations(
        &self,
        user_id: i64,
        params: EvaluationListParams,
    ) -> Result<Vec<Evaluation>> {
        self.list_evaluations_impl(user_id, params).await
    }

    async fn delete_evaluation(&self, user_id: i64, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(user_id, id).await
    }

    async fn count_evaluations_on(&self, user_id: i64, date: NaiveDate) -> Result<i64> {
        self.count_evaluations_on_impl(user_id, date).await
    }

    // 文档模块
    async fn insert_document(&self, user_id: i64, doc: NewDocument) -> Result<Document> {
        self.insert_document_impl(user_id, doc).await
    }

    async fn list_documents(
        &self,
        user_id: i64,
        params: DocumentListParams,
    ) -> Result<Vec<Document>> {
        self.list_documents_impl(user_id, params).await
    }

    async fn list_student_documents(
        &self,
        user_id: i64,
        student_id: i64,
    ) -> Result<Vec<StoredDocument>> {
        self.list_student_documents_impl(user_id, student_id).await
    }

    async fn get_document_by_token(&self, token: &str) -> Result<Option<StoredDocument>> {
        self.get_document_by_token_impl(token).await
    }

    async fn get_document_by_id(&self, user_id: i64, id: i64) -> Result<Option<StoredDocument>> {
        self.get_document_by_id_impl(user_id, id).await
    }

    async fn delete_document(&self, user_id: i64, id: i64) -> Result<bool> {
        self.delete_document_impl(user_id, id).await
    }

    // 学校设置模块
    async fn get_or_create_settings(&self, user_id: i64) -> Result<SchoolSettings> {
        self.get_or_create_settings_impl(user_id).await
    }

    async fn update_settings(
        &self,
        user_id: i64,
        update: UpdateSettingsRequest,
    ) -> Result<SchoolSettings> {
        self.update_settings_impl(user_id, update).await
    }

    async fn set_settings_logo_url(&self, user_id: i64, url: &str) -> Result<bool> {
        self.set_settings_logo_url_impl(user_id, url).await
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::SeaOrmStorage;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::users::requests::CreateUserRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    /// 内存 SQLite 存储，供存储层测试使用
    ///
    /// 限制为单连接，保证内存数据库在整个测试期间存活。
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    pub(crate) async fn seed_tenant(storage: &SeaOrmStorage, name: &str) -> i64 {
        storage
            .create_user_impl(CreateUserRequest {
                username: name.to_string(),
                email: format!("{name}@example.com"),
                password: "$argon2id$test-hash".to_string(),
                display_name: None,
            })
            .await
            .unwrap()
            .id
    }

    pub(crate) fn student_request(name: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            birth_date: None,
            guardian_name: None,
            whatsapp: None,
            email: None,
            school_name: None,
            grade: None,
            class_group: None,
            shift: None,
            observations: None,
        }
    }
}
