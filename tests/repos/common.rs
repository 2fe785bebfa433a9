use diesel::r2d2::ConnectionManager;
pub use diesel::prelude::*;
use diesel::SqliteConnection;
use r2d2::PooledConnection;

pub use loan_system::*;
pub use loan_system::schema::{loans, users};

pub struct Fixture {
	pub pool: db::SqlitePool,
	pub user_factory: UserFactory,
}

impl Fixture {
	// Every fixture opens its own in-memory database, so tests never
	// see each other's rows.
	pub fn new() -> Self {
		let pool = db::memory_connection();
		let user_factory = UserFactory::new(pool.clone());
		Fixture { pool, user_factory }
	}

	pub fn pool(&self) -> db::SqlitePool {
		self.pool.clone()
	}

	pub fn conn(&self) -> PooledConnection<ConnectionManager<SqliteConnection>> {
		self.pool.get().unwrap()
	}
}

pub struct Suite {
	pub user_repo: user::Repo,
	pub loan_repo: loan::Repo,
}

impl Suite {
	pub fn setup(fixture: &Fixture) -> Self {
		Suite {
			user_repo: user::Repo::new(fixture.pool()),
			loan_repo: loan::Repo::new(fixture.pool()),
		}
	}
}

#[test]
fn test_suite_setup() {
	let fixture = Fixture::new();
	let _suite = Suite::setup(&fixture);
}

pub struct UserFactory {
	pool: db::SqlitePool
}

impl<'a> UserFactory {
	fn new(pool: db::SqlitePool) -> Self {
		UserFactory { pool }
	}

	// An applicant who clears every eligibility rule.
	pub fn defaults() -> NewUser<'a> {
		NewUser {
			name: "Default",
			email: "default@gmail.com",
			age: 30,
			income: 50000.0,
			employment_years: 5,
			credit_score: 720,
		}
	}

	pub fn user(&self, new_user: NewUser) -> User {
		let mut conn = self.pool.get().unwrap();
		diesel::insert_into(users::table)
			.values(new_user)
			.get_result::<User>(&mut conn)
			.unwrap()
	}

	pub fn bob(&self) -> User {
		self.user(NewUser {
			email: "bob@gmail.com",
			name: "Bob Roberts",
			..UserFactory::defaults()
		})
	}

	pub fn lucy(&self) -> User {
		self.user(NewUser {
			email: "lucy@gmail.com",
			name: "Lucy Luke",
			..UserFactory::defaults()
		})
	}
}
