use std::{env, fmt};

use diesel::r2d2::ConnectionManager;
use diesel::result::DatabaseErrorKind::UniqueViolation;
use diesel::result::Error::{DatabaseError, NotFound};
use diesel::{RunQueryDsl, SqliteConnection};
use dotenv::dotenv;
use log::debug;

pub type Result<T> = std::result::Result<T, Error>;
pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    age INTEGER NOT NULL,
    income REAL NOT NULL,
    employment_years INTEGER NOT NULL,
    credit_score INTEGER NOT NULL
)";

const CREATE_LOANS: &str = "CREATE TABLE IF NOT EXISTS loans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    amount REAL NOT NULL,
    interest_rate REAL NOT NULL,
    duration INTEGER NOT NULL,
    status TEXT NOT NULL DEFAULT 'Pending',
    remaining_balance REAL NOT NULL,
    FOREIGN KEY(user_id) REFERENCES users(id)
)";

/// Get a pooled connection to the underlying SQLite database
///
/// Reads `DATABASE_URL` from the environment (a `.env` file in the working
/// directory is honored) and falls back to `loan_system.db` when unset.
pub fn connection() -> SqlitePool {
	dotenv().ok();
	let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "loan_system.db".to_string());
	debug!("opening database at {}", database_url);

	let manager = ConnectionManager::<SqliteConnection>::new(&database_url);
	let pool = r2d2::Pool::builder().build(manager)
		.expect("Failed to create pool.");

	pool
}

/// Pool over a private in-memory database with the schema already applied.
///
/// Capped at a single connection: every handle must see the one `:memory:`
/// database, a second connection would open an empty one.
pub fn memory_connection() -> SqlitePool {
	let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
	let pool = r2d2::Pool::builder()
		.max_size(1)
		.build(manager)
		.expect("Failed to create pool.");

	initialize(&pool).expect("creating tables in the in-memory database");
	pool
}

/// Create the `users` and `loans` tables if they are missing.
///
/// Runs on every startup; existing tables and their rows are left alone.
pub fn initialize(pool: &SqlitePool) -> Result<()> {
	let mut conn = pool.get()?;
	diesel::sql_query(CREATE_USERS).execute(&mut conn)?;
	diesel::sql_query(CREATE_LOANS).execute(&mut conn)?;
	Ok(())
}

/// Error that can occur when querying against the database
#[derive(Debug, PartialEq)]
pub enum Error {
	RecordAlreadyExists,
	RecordNotFound,
	Connection(String),
	/// Catch-all for any other diesel failure
	DatabaseError(diesel::result::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::RecordAlreadyExists => write!(f, "record violates a unique constraint"),
			Error::RecordNotFound => write!(f, "record does not exist"),
			Error::Connection(e) => write!(f, "opening database connection: {}", e),
			Error::DatabaseError(e) => write!(f, "database error: {:?}", e),
		}
	}
}

impl From<diesel::result::Error> for Error {
	fn from(e: diesel::result::Error) -> Self {
		match e {
			DatabaseError(UniqueViolation, _) => Error::RecordAlreadyExists,
			NotFound => Error::RecordNotFound,

			_ => Error::DatabaseError(e),
		}
	}
}

impl From<r2d2::Error> for Error {
	fn from(e: r2d2::Error) -> Self {
		Error::Connection(e.to_string())
	}
}
