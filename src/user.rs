use diesel::prelude::*;

use crate::db;
use crate::schema::users;
use crate::types::{Id, Money};

/// A registered loan applicant.
///
/// Rows are written once at registration and never mutated; the credit
/// score is the simulated value drawn when the row was created.
#[derive(Queryable, Identifiable, PartialEq, Debug)]
pub struct User {
	pub id: Id,
	pub name: String,
	pub email: String,
	pub age: i32,
	pub income: Money,
	pub employment_years: i32,
	pub credit_score: i32,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
	pub name: &'a str,
	pub email: &'a str,
	pub age: i32,
	pub income: Money,
	pub employment_years: i32,
	pub credit_score: i32,
}

pub enum UserKey<'a> {
	ID(Id),
	Email(&'a str),
}

/// Data store implementation for operating on users in the database
pub struct Repo {
	db: db::SqlitePool,
}

impl Repo {
	pub fn new(db: db::SqlitePool) -> Self {
		Repo { db }
	}

	pub fn create_user(&self, new_user: NewUser) -> db::Result<User> {
		let mut conn = self.db.get()?;
		diesel::insert_into(users::table)
			.values(&new_user)
			.get_result(&mut conn)
			.map_err(Into::into)
	}

	pub fn find_user(&self, key: UserKey) -> db::Result<User> {
		let mut conn = self.db.get()?;
		match key {
			UserKey::ID(id) => {
				users::table
					.find(id)
					.first::<User>(&mut conn)
					.map_err(Into::into)
			}
			UserKey::Email(email) => {
				users::table
					.filter(users::email.eq(email))
					.first::<User>(&mut conn)
					.map_err(Into::into)
			}
		}
	}
}
