use log::{debug, info};

use crate::credit::CreditScorer;
use crate::db;
use crate::eligibility;
use crate::loan::{self, Loan, LoanStatus, NewLoan};
use crate::types::{Id, Money};
use crate::user::{self, NewUser, User, UserKey};

use super::error::{Error, ErrorKind};

pub type Result<T> = std::result::Result<T, Error>;

/// Service runs the lending operations: registering applicants, taking
/// loan applications, listing a user's loans and approving them.
pub struct Service<'a> {
	user_repo: &'a user::Repo,
	loan_repo: &'a loan::Repo,
	scorer: &'a dyn CreditScorer,
}

/// NewService is a parameter object for building a Service
pub struct NewService<'a> {
	pub user_repo: &'a user::Repo,
	pub loan_repo: &'a loan::Repo,
	pub scorer: &'a dyn CreditScorer,
}

/// A registration request, parsed into typed fields by the caller.
/// The credit score is not part of it; scoring happens during
/// registration.
pub struct Registration<'a> {
	pub name: &'a str,
	pub email: &'a str,
	pub age: i32,
	pub income: Money,
	pub employment_years: i32,
}

impl<'a> Service<'a> {
	pub fn new(v: NewService<'a>) -> Self {
		Service {
			user_repo: v.user_repo,
			loan_repo: v.loan_repo,
			scorer: v.scorer,
		}
	}

	/// Registers a loan applicant and returns the stored row, credit score
	/// included so the caller can report it back.
	///
	/// Minors are turned away before anything is written. The score comes
	/// from the configured scorer and is fixed at registration time.
	pub fn register(&self, registration: Registration) -> Result<User> {
		if registration.age < eligibility::MIN_AGE {
			return Err(Error::new(ErrorKind::Validation(
				"you must be at least 18 years old to register".to_string(),
			)));
		}

		let credit_score = self.scorer.score(&registration);
		let user = match self.user_repo.create_user(NewUser {
			name: registration.name,
			email: registration.email,
			age: registration.age,
			income: registration.income,
			employment_years: registration.employment_years,
			credit_score,
		}) {
			Ok(user) => user,
			Err(db::Error::RecordAlreadyExists) => {
				return Err(Error::new(ErrorKind::DuplicateEmail(
					registration.email.to_string(),
				)));
			}
			Err(err) => return Err(err.into()),
		};

		info!(
			"registered user {} with credit score {}",
			user.id, user.credit_score
		);
		Ok(user)
	}

	/// Takes a loan application for the user registered under `email`.
	///
	/// The eligibility rules gate the application; a denial carries the
	/// first rule that failed. A granted loan starts out Pending and its
	/// remaining balance is set once, to the full amount plus interest.
	/// `interest_rate` is a percentage value (5 means 5%) and is stored
	/// as given.
	pub fn apply_for_loan(
		&self,
		email: &str,
		amount: Money,
		interest_rate: Money,
		duration: i32,
	) -> Result<Loan> {
		let user = self.find_user(email)?;

		if let Err(reason) = eligibility::check(&user) {
			debug!("loan application by user {} denied: {}", user.id, reason);
			return Err(Error::new(ErrorKind::Ineligible(reason)));
		}

		let loan = self.loan_repo.create(NewLoan {
			user_id: user.id,
			amount,
			interest_rate,
			duration,
			status: LoanStatus::Pending,
			remaining_balance: loan::total_payable(amount, interest_rate),
		})?;

		info!("loan {} opened for user {}, awaiting approval", loan.id, user.id);
		Ok(loan)
	}

	/// All loans held by the user registered under `email`, in no
	/// particular order. A user without loans gets an empty list; only an
	/// unknown email is an error.
	pub fn loans_for(&self, email: &str) -> Result<Vec<Loan>> {
		let user = self.find_user(email)?;
		self.loan_repo.find_by_user(user.id).map_err(Into::into)
	}

	/// Marks a loan Approved. The remaining balance stays untouched.
	///
	/// An unknown id updates nothing and still reports success; there is
	/// no administrator identity, so any caller may approve.
	pub fn approve_loan(&self, loan_id: Id) -> Result<()> {
		let updated = self.loan_repo.set_status(loan_id, LoanStatus::Approved)?;
		if updated == 0 {
			debug!("approval of loan {} touched no rows", loan_id);
		} else {
			info!("loan {} approved", loan_id);
		}

		Ok(())
	}

	fn find_user(&self, email: &str) -> Result<User> {
		match self.user_repo.find_user(UserKey::Email(email)) {
			Ok(user) => Ok(user),
			Err(db::Error::RecordNotFound) => {
				Err(Error::new(ErrorKind::UserNotFound(email.to_string())))
			}
			Err(err) => Err(err.into()),
		}
	}
}
