use std::borrow::Borrow;

use crate::common::*;

#[test]
fn insert_user() {
	let fixture = Fixture::new();
	let suite = Suite::setup(&fixture);
	let user = suite.user_repo.create_user(NewUser {
		email: "tom@gmail.com",
		name: "Tom Riddle",
		..UserFactory::defaults()
	}).unwrap();

	let mut conn = fixture.conn();
	let got_user = users::table.find(user.id).first::<User>(&mut conn).unwrap();
	assert_eq!(got_user, user)
}

#[test]
fn find_user_with_key() {
	let fixture = Fixture::new();
	let suite = Suite::setup(&fixture);
	let user = fixture.user_factory.bob();

	let email = user.email.borrow();
	let id = user.id;

	// test cases using various UserKeys
	let test_cases = vec![
		UserKey::Email(email),
		UserKey::ID(id)
	];

	for user_key in test_cases {
		let got = suite.user_repo.find_user(user_key)
			.expect("found user");

		assert_eq!(user, got)
	}
}

#[test]
fn find_user_without_a_match_reports_record_not_found() {
	let fixture = Fixture::new();
	let suite = Suite::setup(&fixture);

	let got_err = suite.user_repo.find_user(UserKey::Email("ghost@gmail.com")).unwrap_err();
	assert_eq!(got_err, db::Error::RecordNotFound)
}

#[test]
fn inserting_a_taken_email_reports_record_already_exists() {
	let fixture = Fixture::new();
	let suite = Suite::setup(&fixture);
	let bob = fixture.user_factory.bob();

	let got_err = suite.user_repo.create_user(NewUser {
		email: "bob@gmail.com",
		name: "Robert Roberts",
		..UserFactory::defaults()
	}).unwrap_err();
	assert_eq!(got_err, db::Error::RecordAlreadyExists);

	// the first registration is untouched
	let got = suite.user_repo.find_user(UserKey::Email("bob@gmail.com")).unwrap();
	assert_eq!(got, bob)
}
