use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码，随 ApiResponse.code 返回
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/error_code.ts")]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 4xxx
    BadRequest = 4000,
    NotFound = 4040,
    Forbidden = 4030,
    TooManyRequests = 4290,

    // 认证 401x
    Unauthorized = 4010,
    AuthFailed = 4011,
    RegisterFailed = 4012,

    // 用户 41xx
    UserNameInvalid = 4101,
    UserEmailInvalid = 4102,
    UserNameAlreadyExists = 4103,
    UserEmailAlreadyExists = 4104,
    UserPasswordInvalid = 4105,
    UserNotFound = 4106,
    UserUpdateFailed = 4107,

    // 学生 42xx
    StudentNotFound = 4201,
    StudentCreationFailed = 4202,
    StudentUpdateFailed = 4203,
    StudentDeleteFailed = 4204,

    // 付款 43xx
    PaymentNotFound = 4301,
    PaymentGenerationFailed = 4302,
    PaymentInvalidRange = 4303,

    // 考勤 / 评价 44xx
    AttendanceRegisterFailed = 4401,
    EvaluationNotFound = 4402,
    EvaluationUpsertFailed = 4403,

    // 文件 45xx
    FileNotFound = 4501,
    FileUploadFailed = 4502,
    FileTypeNotAllowed = 4503,
    FileSizeExceeded = 4504,
    MultifileUploadNotAllowed = 4505,
    DocumentNotFound = 4506,

    // 服务器内部错误 5xxx
    InternalServerError = 5000,
}
