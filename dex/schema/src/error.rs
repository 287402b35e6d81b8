use {
    crate::catalog::DexTable,
    sea_orm::{DbErr, RuntimeErr, SqlErr},
    sqlx::error::ErrorKind,
    std::fmt,
    thiserror::Error,
};

/// Coarse classification of a backend failure.
///
/// Operations never translate errors; callers use this to decide whether a
/// propagated [`DbErr`] is fatal, e.g. accepting a `SchemaConflict` during an
/// idempotent bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    /// The table or index already exists.
    SchemaConflict,
    /// The database could not be reached.
    ConnectivityFailure,
    /// The backend rejected a definition or a value.
    ConstraintRejection,
    Other,
}

/// Postgres `insufficient_privilege`. Shares class `42` with definition errors
/// but says nothing about the definition itself.
const INSUFFICIENT_PRIVILEGE: &str = "42501";

/// SQLSTATE and vendor codes for duplicate schema objects.
const DUPLICATE_OBJECT_CODES: [&str; 4] = [
    "42P07", // postgres duplicate_table
    "42710", // postgres duplicate_object
    "1050",  // mysql ER_TABLE_EXISTS_ERROR
    "1061",  // mysql ER_DUP_KEYNAME
];

impl SchemaErrorKind {
    pub fn of(err: &DbErr) -> Self {
        if let Some(
            SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_),
        ) = err.sql_err()
        {
            return SchemaErrorKind::ConstraintRejection;
        }

        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => SchemaErrorKind::ConnectivityFailure,
            DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
                Self::of_sqlx(e)
            },
            _ => SchemaErrorKind::Other,
        }
    }

    fn of_sqlx(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let code = db_err.code();
                let code = code.as_deref().unwrap_or_default();

                if DUPLICATE_OBJECT_CODES.contains(&code)
                    || db_err.message().contains("already exists")
                {
                    return SchemaErrorKind::SchemaConflict;
                }

                if code == INSUFFICIENT_PRIVILEGE {
                    return SchemaErrorKind::Other;
                }

                if matches!(
                    db_err.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) || code.starts_with("22")
                    || code.starts_with("42")
                {
                    return SchemaErrorKind::ConstraintRejection;
                }

                SchemaErrorKind::Other
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => SchemaErrorKind::ConnectivityFailure,
            _ => SchemaErrorKind::Other,
        }
    }
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            SchemaErrorKind::SchemaConflict => "schema conflict",
            SchemaErrorKind::ConnectivityFailure => "connectivity failure",
            SchemaErrorKind::ConstraintRejection => "constraint rejection",
            SchemaErrorKind::Other => "database error",
        };

        f.write_str(kind)
    }
}

// --------------------------------- BulkError ----------------------------------

/// One catalog entry that failed during a bulk operation.
#[derive(Debug)]
pub struct TableFailure {
    pub table: DexTable,
    pub error: DbErr,
}

impl TableFailure {
    pub fn kind(&self) -> SchemaErrorKind {
        SchemaErrorKind::of(&self.error)
    }
}

#[derive(Debug, Error)]
pub enum BulkError {
    #[error("{} of {attempted} tables failed: {}", .failures.len(), summary(.failures))]
    Partial {
        attempted: usize,
        failures: Vec<TableFailure>,
    },
}

impl BulkError {
    pub fn failures(&self) -> &[TableFailure] {
        match self {
            BulkError::Partial { failures, .. } => failures,
        }
    }
}

fn summary(failures: &[TableFailure]) -> String {
    failures
        .iter()
        .map(|failure| format!("{} ({}: {})", failure.table, failure.kind(), failure.error))
        .collect::<Vec<_>>()
        .join(", ")
}
