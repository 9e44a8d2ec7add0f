//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// 各ドメインのエラー（`AuthError`, `BlogError`）は最終的にこの型へ変換され、
/// HTTP レスポンスになります。元のエラーはここには含めず、変換前にログへ出力します。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Not found").with_code("not_found");
/// assert_eq!(err.code(), "not_found");
/// assert_eq!(err.status_code(), 404);
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    /// クライアントに返すメッセージ
    message: Cow<'static, str>,
    /// 機械可読な理由コード（例: `invalid_token`）
    code: Option<Cow<'static, str>>,
    /// 種別と異なるステータスで返す場合の上書き
    status: Option<u16>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            status: None,
        }
    }

    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// ステータスコードを上書き（例: 所有者不一致を 401 として返す）
    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 上書きがあればそれを優先
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.status.unwrap_or_else(|| self.kind.status_code())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 未設定の場合は種別から導出
    #[inline]
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or_else(|| self.kind.default_code())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.kind, self.message, self.code())
    }
}

impl std::error::Error for AppError {}
