use std::str::FromStr;

use diesel::{
	backend::Backend,
	deserialize::{self, FromSql},
	prelude::*,
	serialize,
	serialize::{IsNull, Output, ToSql},
	sql_types::Text,
};
use diesel::sqlite::Sqlite;
use strum_macros::{Display, EnumString};

use crate::db;
use crate::schema::loans;
use crate::types::{Id, Money};
use crate::user::User;

#[derive(Queryable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(belongs_to(User))]
pub struct Loan {
	pub id: Id,
	pub user_id: Id,
	pub amount: Money,
	// percentage value, 5 means 5%
	pub interest_rate: Money,
	pub duration: i32,
	pub status: LoanStatus,
	pub remaining_balance: Money,
}

/// Total amount owed on a loan at creation time.
///
/// The rate arrives as a percentage value (5 means 5%). Interest is applied
/// once up front; the balance is never recomputed over the duration.
pub fn total_payable(amount: Money, rate_percent: Money) -> Money {
	amount * (1.0 + rate_percent / 100.0)
}

#[derive(Insertable)]
#[diesel(table_name = loans)]
pub struct NewLoan {
	pub user_id: Id,
	pub amount: Money,
	pub interest_rate: Money,
	pub duration: i32,
	pub status: LoanStatus,
	pub remaining_balance: Money,
}

#[derive(Debug, AsExpression, FromSqlRow, Eq, PartialEq, EnumString, Display)]
#[diesel(sql_type = Text)]
pub enum LoanStatus {
	Pending,
	Approved,
}

impl Default for LoanStatus {
	fn default() -> Self { LoanStatus::Pending }
}

impl ToSql<Text, Sqlite> for LoanStatus {
	fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
		out.set_value(self.to_string());
		Ok(IsNull::No)
	}
}

impl FromSql<Text, Sqlite> for LoanStatus {
	fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
		let s = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;

		LoanStatus::from_str(&s).map_err(Into::into)
	}
}

/// Data store implementation for operating on loans in the database
pub struct Repo {
	db: db::SqlitePool,
}

impl Repo {
	pub fn new(db: db::SqlitePool) -> Self {
		Repo { db }
	}

	pub fn create(&self, new_loan: NewLoan) -> db::Result<Loan> {
		let mut conn = self.db.get()?;
		diesel::insert_into(loans::table)
			.values(&new_loan)
			.get_result(&mut conn)
			.map_err(Into::into)
	}

	pub fn find_by_id(&self, id: Id) -> db::Result<Loan> {
		let mut conn = self.db.get()?;
		loans::table
			.find(id)
			.select(loans::all_columns)
			.first(&mut conn)
			.map_err(Into::into)
	}

	pub fn find_by_user(&self, user_id: Id) -> db::Result<Vec<Loan>> {
		let mut conn = self.db.get()?;
		loans::table
			.filter(loans::user_id.eq(user_id))
			.select(loans::all_columns)
			.load::<Loan>(&mut conn)
			.map_err(Into::into)
	}

	/// Move the loan with `id` to `status`.
	///
	/// Returns the number of rows touched; an unknown id updates nothing
	/// and reports 0 rather than failing.
	pub fn set_status(&self, id: Id, status: LoanStatus) -> db::Result<usize> {
		let mut conn = self.db.get()?;
		diesel::update(loans::table)
			.filter(loans::id.eq(id))
			.set(loans::status.eq(status))
			.execute(&mut conn)
			.map_err(Into::into)
	}
}
