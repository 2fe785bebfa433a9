#![allow(warnings)]
#[macro_use]
extern crate diesel;


pub mod schema;
pub mod user;
pub mod loan;
pub mod eligibility;
pub mod credit;
pub mod lending;
pub mod types;
pub mod db;


pub use credit::{CreditScorer, FixedScorer, RandomScorer};
pub use db::SqlitePool;
pub use eligibility::Ineligibility;
pub use lending::error::{Error, ErrorKind};
pub use lending::service::{NewService, Registration, Service};
pub use loan::{Loan, LoanStatus, NewLoan};
pub use types::{Id, Money};
pub use user::{NewUser, User, UserKey};
