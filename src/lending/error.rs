use std::error;
use std::fmt;

use crate::db;
use crate::eligibility::Ineligibility;

/// Error for lending operations
#[derive(Debug, PartialEq)]
pub struct Error {
	kind: ErrorKind,
}

impl Error {
	pub fn new(kind: ErrorKind) -> Self {
		Error { kind }
	}

	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
	/// Input rejected before anything is written
	Validation(String),
	/// The email is already taken by a registered user
	DuplicateEmail(String),
	/// No registered user carries the email
	UserNotFound(String),
	/// An eligibility rule turned the application down
	Ineligible(Ineligibility),
	Database(db::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.kind {
			ErrorKind::Validation(msg) => write!(f, "{}", msg),
			ErrorKind::DuplicateEmail(email) => write!(f, "email already registered: {}", email),
			ErrorKind::UserNotFound(email) => write!(f, "no registered user with email: {}", email),
			ErrorKind::Ineligible(reason) => write!(f, "loan application denied: {}", reason),
			ErrorKind::Database(err) => write!(f, "database error: {}", err),
		}
	}
}

impl error::Error for Error {}

impl From<db::Error> for Error {
	fn from(err: db::Error) -> Self {
		Error::new(ErrorKind::Database(err))
	}
}
