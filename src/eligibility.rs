use std::fmt;

use crate::types::Money;
use crate::user::User;

pub const MIN_AGE: i32 = 18;
pub const MIN_MONTHLY_INCOME: Money = 20000.0;
pub const MIN_EMPLOYMENT_YEARS: i32 = 1;
pub const MIN_CREDIT_SCORE: i32 = 600;

/// Why an applicant does not qualify for a loan.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Ineligibility {
	Underage,
	IncomeTooLow,
	InsufficientEmployment,
	CreditScoreTooLow,
}

impl fmt::Display for Ineligibility {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Ineligibility::Underage => write!(f, "must be at least 18"),
			Ineligibility::IncomeTooLow => write!(f, "income too low"),
			Ineligibility::InsufficientEmployment => write!(f, "insufficient employment history"),
			Ineligibility::CreditScoreTooLow => write!(f, "credit score too low"),
		}
	}
}

/// Decide whether `user` qualifies for a loan.
///
/// Rules run in a fixed order and the first failure is the one reported;
/// each rule stands on its own, they do not accumulate. Reads nothing but
/// the row it is given, so callers may evaluate an applicant without
/// touching the store.
pub fn check(user: &User) -> Result<(), Ineligibility> {
	if user.age < MIN_AGE {
		return Err(Ineligibility::Underage);
	}
	if user.income < MIN_MONTHLY_INCOME {
		return Err(Ineligibility::IncomeTooLow);
	}
	if user.employment_years < MIN_EMPLOYMENT_YEARS {
		return Err(Ineligibility::InsufficientEmployment);
	}
	if user.credit_score < MIN_CREDIT_SCORE {
		return Err(Ineligibility::CreditScoreTooLow);
	}

	Ok(())
}
