use loan_system::loan::NewLoan;

use crate::common::*;

#[test]
fn create_loan() {
	let f = Fixture::new();
	let suite = Suite::setup(&f);
	let bob = f.user_factory.bob();

	let loan = suite.loan_repo.create(NewLoan {
		user_id: bob.id,
		amount: 1000.0,
		interest_rate: 5.0,
		duration: 12,
		status: Default::default(),
		remaining_balance: 1050.0,
	}).unwrap();

	let mut conn = f.conn();
	let got = loans::table.find(loan.id).first::<Loan>(&mut conn).unwrap();
	assert_eq!(got, loan);
	assert_eq!(got.status, LoanStatus::Pending)
}

#[test]
fn find_by_user_returns_only_their_loans() {
	let f = Fixture::new();
	let suite = Suite::setup(&f);
	let bob = f.user_factory.bob();
	let lucy = f.user_factory.lucy();

	let bobs_loan = suite.loan_repo.create(NewLoan {
		user_id: bob.id,
		amount: 1000.0,
		interest_rate: 5.0,
		duration: 12,
		status: Default::default(),
		remaining_balance: 1050.0,
	}).unwrap();
	suite.loan_repo.create(NewLoan {
		user_id: lucy.id,
		amount: 4000.0,
		interest_rate: 10.0,
		duration: 24,
		status: Default::default(),
		remaining_balance: 4400.0,
	}).unwrap();

	let got = suite.loan_repo.find_by_user(bob.id).unwrap();
	assert_eq!(got, vec![bobs_loan])
}

#[test]
fn find_by_user_without_loans_is_empty() {
	let f = Fixture::new();
	let suite = Suite::setup(&f);
	let bob = f.user_factory.bob();

	let got = suite.loan_repo.find_by_user(bob.id).unwrap();
	assert!(got.is_empty())
}

#[test]
fn set_status_reports_how_many_rows_it_touched() {
	let f = Fixture::new();
	let suite = Suite::setup(&f);
	let bob = f.user_factory.bob();

	let loan = suite.loan_repo.create(NewLoan {
		user_id: bob.id,
		amount: 1000.0,
		interest_rate: 5.0,
		duration: 12,
		status: Default::default(),
		remaining_balance: 1050.0,
	}).unwrap();

	let touched = suite.loan_repo.set_status(loan.id, LoanStatus::Approved).unwrap();
	assert_eq!(touched, 1);

	let got = suite.loan_repo.find_by_id(loan.id).unwrap();
	assert_eq!(got.status, LoanStatus::Approved);
	// the balance does not move on approval
	assert_eq!(got.remaining_balance, loan.remaining_balance);

	// an id no loan carries updates nothing
	let touched = suite.loan_repo.set_status(loan.id + 1, LoanStatus::Approved).unwrap();
	assert_eq!(touched, 0)
}
