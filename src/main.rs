use std::env;
use std::io::{self, Write};

use pretty_env_logger;

use loan_system::{db, loan, user};
use loan_system::{ErrorKind, NewService, RandomScorer, Registration, Service};

fn main() {
	if env::var("RUST_LOG").is_err() {
		env::set_var("RUST_LOG", "info");
	}
	pretty_env_logger::init();

	let pool = db::connection();
	db::initialize(&pool).expect("database setup");

	let user_repo = user::Repo::new(pool.clone());
	let loan_repo = loan::Repo::new(pool.clone());
	let scorer = RandomScorer;
	let service = Service::new(NewService {
		user_repo: &user_repo,
		loan_repo: &loan_repo,
		scorer: &scorer,
	});

	loop {
		println!();
		println!("Loan Management System");
		println!("1. Register");
		println!("2. Apply for Loan");
		println!("3. View Loans");
		println!("4. Approve Loan (Admin)");
		println!("5. Exit");

		let choice = match prompt("Enter your choice: ") {
			Some(choice) => choice,
			None => break,
		};

		let outcome = match choice.as_str() {
			"1" => register(&service),
			"2" => apply(&service),
			"3" => view(&service),
			"4" => approve(&service),
			"5" => {
				println!("Exiting...");
				break;
			}
			_ => {
				println!("Invalid choice! Try again.");
				Some(())
			}
		};

		// a closed stdin ends the session like choosing Exit would
		if outcome.is_none() {
			break;
		}
	}
}

/// Prints `label` and reads one trimmed line. None means stdin is closed.
fn prompt(label: &str) -> Option<String> {
	print!("{}", label);
	io::stdout().flush().ok()?;

	let mut line = String::new();
	match io::stdin().read_line(&mut line) {
		Ok(0) | Err(_) => None,
		Ok(_) => Some(line.trim().to_string()),
	}
}

fn register(service: &Service) -> Option<()> {
	let name = prompt("Enter your name: ")?;
	let email = prompt("Enter your email: ")?;
	let age = prompt("Enter your age: ")?;
	let income = prompt("Enter your monthly income: ")?;
	let employment_years = prompt("Enter years of employment: ")?;

	let (age, income, employment_years) =
		match (age.parse(), income.parse(), employment_years.parse()) {
			(Ok(age), Ok(income), Ok(years)) => (age, income, years),
			_ => {
				println!("Invalid number! Try again.");
				return Some(());
			}
		};

	match service.register(Registration {
		name: &name,
		email: &email,
		age,
		income,
		employment_years,
	}) {
		Ok(user) => println!(
			"User registered successfully! Your credit score is {}.",
			user.credit_score
		),
		Err(err) => match err.kind() {
			ErrorKind::DuplicateEmail(_) => println!("Email already exists. Try logging in."),
			_ => println!("{}", err),
		},
	}

	Some(())
}

fn apply(service: &Service) -> Option<()> {
	let email = prompt("Enter your email: ")?;
	let amount = prompt("Enter loan amount: ")?;
	let interest_rate = prompt("Enter interest rate (e.g., 5 for 5%): ")?;
	let duration = prompt("Enter duration (months): ")?;

	let (amount, interest_rate, duration): (f64, f64, i32) =
		match (amount.parse(), interest_rate.parse(), duration.parse()) {
			(Ok(amount), Ok(rate), Ok(duration)) => (amount, rate, duration),
			_ => {
				println!("Invalid number! Try again.");
				return Some(());
			}
		};

	if amount <= 0.0 {
		println!("Loan amount must be greater than 0.");
		return Some(());
	}
	if interest_rate < 0.0 {
		println!("Interest rate cannot be negative.");
		return Some(());
	}
	if duration <= 0 {
		println!("Duration must be at least 1 month.");
		return Some(());
	}

	match service.apply_for_loan(&email, amount, interest_rate, duration) {
		Ok(_) => println!("Loan application submitted. Awaiting approval."),
		Err(err) => match err.kind() {
			ErrorKind::UserNotFound(_) => println!("User not found! Register first."),
			ErrorKind::Ineligible(reason) => println!("Loan application denied: {}.", reason),
			_ => println!("{}", err),
		},
	}

	Some(())
}

fn view(service: &Service) -> Option<()> {
	let email = prompt("Enter your email: ")?;

	match service.loans_for(&email) {
		Ok(loans) if loans.is_empty() => println!("No loans found."),
		Ok(loans) => {
			println!("Your Loans:");
			for loan in loans {
				println!(
					"Loan ID: {}, Amount: {}, Interest Rate: {}%, Duration: {} months, Status: {}, Balance: {}",
					loan.id,
					loan.amount,
					loan.interest_rate,
					loan.duration,
					loan.status,
					loan.remaining_balance,
				);
			}
		}
		Err(err) => match err.kind() {
			ErrorKind::UserNotFound(_) => println!("User not found!"),
			_ => println!("{}", err),
		},
	}

	Some(())
}

fn approve(service: &Service) -> Option<()> {
	let loan_id = match prompt("Enter Loan ID to approve: ")?.parse() {
		Ok(id) => id,
		Err(_) => {
			println!("Invalid number! Try again.");
			return Some(());
		}
	};

	match service.approve_loan(loan_id) {
		Ok(()) => println!("Loan approved successfully!"),
		Err(err) => println!("{}", err),
	}

	Some(())
}
