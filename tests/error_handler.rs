use axum::http::StatusCode;
use league_errors::application::error::{
    ApplicationError, ForeignError, OperationalError,
    classify::{DUPLICATE_ENTRY_CODE, EXPIRED_TOKEN_NAME, INVALID_TOKEN_NAME, NO_REFERENCED_ROW_CODE},
};
use serde_json::json;
use std::{error::Error as StdError, fmt};

mod support;

use support::{error_handler, into_json};

#[derive(Debug)]
struct FakeDbError {
    unique: bool,
}

impl fmt::Display for FakeDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for FakeDbError {}

impl FakeDbError {
    fn message(&self) -> &str {
        if self.unique {
            "duplicate key value violates unique constraint \"players_email_key\""
        } else {
            "insert or update violates foreign key constraint \"players_team_id_fkey\""
        }
    }
}

impl sqlx::error::DatabaseError for FakeDbError {
    fn message(&self) -> &str {
        FakeDbError::message(self)
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> sqlx::error::ErrorKind {
        if self.unique {
            sqlx::error::ErrorKind::UniqueViolation
        } else {
            sqlx::error::ErrorKind::ForeignKeyViolation
        }
    }
}

/// JWT 名のエラーは statusCode/message に関係なく 401 になることを確認する
#[tokio::test]
async fn token_names_override_own_status_and_message() {
    let (handler, log) = error_handler(false);

    for (name, message) in [
        (INVALID_TOKEN_NAME, "Invalid token. Please log in again"),
        (EXPIRED_TOKEN_NAME, "Token expired. Please log in again"),
    ] {
        let err: ApplicationError = ForeignError::named(name)
            .with_status(503)
            .with_message("upstream said no")
            .into();
        let (status, body) = into_json(handler.respond(&err)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "status": "error", "message": message }));
    }
    assert!(log.entries().is_empty());
}

/// ドライバーコードが 409 / 400 に変換されることを確認する
#[tokio::test]
async fn driver_codes_map_to_client_errors() {
    let (handler, log) = error_handler(false);

    let dup: ApplicationError = ForeignError::default().with_code(DUPLICATE_ENTRY_CODE).into();
    let (status, body) = into_json(handler.respond(&dup)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Duplicate entry");

    let missing: ApplicationError = ForeignError::default().with_code(NO_REFERENCED_ROW_CODE).into();
    let (status, body) = into_json(handler.respond(&missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Referenced record does not exist");

    assert!(log.entries().is_empty());
}

/// sqlx の制約違反が同じ表で分類されることを確認する
#[tokio::test]
async fn sqlx_constraint_violations_are_classified() {
    let (handler, _log) = error_handler(false);

    let unique = ApplicationError::from(sqlx::Error::Database(Box::new(FakeDbError { unique: true })));
    assert!(matches!(unique, ApplicationError::DuplicateKey(_)));
    assert_eq!(handler.respond(&unique).status(), StatusCode::CONFLICT);

    let fk = ApplicationError::from(sqlx::Error::Database(Box::new(FakeDbError { unique: false })));
    assert!(matches!(fk, ApplicationError::MissingReference(_)));
    assert_eq!(handler.respond(&fk).status(), StatusCode::BAD_REQUEST);
}

/// statusCode を持たない未分類エラーは 500 でログに記録されることを確認する
#[tokio::test]
async fn unclassified_error_is_500_and_logged() {
    let (handler, log) = error_handler(false);

    let err: ApplicationError = ForeignError::default().with_code("ECONNREFUSED").into();
    let (status, body) = into_json(handler.respond(&err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "status": "error", "message": "Something went wrong" }));

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, 500);
    assert!(entries[0].error.contains("ECONNREFUSED"));
    assert!(log.lines()[0].starts_with("[2024-01-01T00:00:00.000Z] Server Error: "));
}

/// 明示的な 5xx の運用エラーもログに記録されることを確認する
#[tokio::test]
async fn explicit_server_error_is_logged_but_4xx_is_not() {
    let (handler, log) = error_handler(false);

    handler.respond(&OperationalError::new(404, "Not found").into());
    handler.respond(&OperationalError::new(429, "Slow down").into());
    assert!(log.entries().is_empty());

    let (status, body) = into_json(handler.respond(&OperationalError::new(503, "Maintenance").into())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Maintenance");
    assert_eq!(log.entries().len(), 1);
    assert!(log.entries()[0].error.starts_with("OperationalError: Maintenance"));
}

/// 範囲外のステータスは 500 として返されログに残ることを確認する
#[tokio::test]
async fn out_of_range_status_is_served_as_500() {
    let (handler, log) = error_handler(false);

    let err: ApplicationError = OperationalError::new(42, "odd").into();
    assert_eq!(err.status_code(), 42);
    let (status, body) = into_json(handler.respond(&err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "odd");
    assert_eq!(log.entries().len(), 1);
}

/// 詳細エラーの有無と開発モードのスタックを確認する
#[tokio::test]
async fn details_and_stack_follow_configuration() {
    let err: ApplicationError = OperationalError::with_details(
        400,
        "Validation failed",
        ["name is required", "email is invalid"],
    )
    .into();

    let (prod, _) = error_handler(false);
    let (_, body) = into_json(prod.respond(&err)).await;
    assert_eq!(body["errors"], json!(["name is required", "email is invalid"]));
    assert!(body.get("stack").is_none());

    let (dev, _) = error_handler(true);
    let (_, body) = into_json(dev.respond(&err)).await;
    assert!(body["stack"].as_str().is_some_and(|s| s.contains("tests/error_handler.rs")));

    let bare: ApplicationError = ForeignError::default().into();
    let (_, body) = into_json(dev.respond(&bare)).await;
    assert!(body["stack"].is_string());
}

/// 運用エラーは名前の衝突で再分類されない (JsonWebTokenError 回帰テスト)
#[tokio::test]
async fn operational_error_is_never_reclassified_by_name() {
    let (handler, _log) = error_handler(false);

    let err: ApplicationError = OperationalError::new(403, INVALID_TOKEN_NAME).into();
    let (status, body) = into_json(handler.respond(&err)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], INVALID_TOKEN_NAME);

    // Foreign shapes still follow the fixed priority order.
    let foreign: ApplicationError = ForeignError::named(INVALID_TOKEN_NAME).with_status(403).into();
    assert_eq!(handler.respond(&foreign).status(), StatusCode::UNAUTHORIZED);
}
