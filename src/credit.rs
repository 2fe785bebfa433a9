use rand::Rng;

use crate::lending::service::Registration;

pub const CREDIT_SCORE_MIN: i32 = 300;
pub const CREDIT_SCORE_MAX: i32 = 850;

/// Source of credit scores for new applicants.
///
/// There is no real bureau behind this system; an implementation stands in
/// for one at registration time.
pub trait CreditScorer {
	fn score(&self, registration: &Registration) -> i32;
}

/// Draws a uniform score in `[CREDIT_SCORE_MIN, CREDIT_SCORE_MAX]`,
/// ignoring the applicant entirely.
pub struct RandomScorer;

impl CreditScorer for RandomScorer {
	fn score(&self, _registration: &Registration) -> i32 {
		rand::thread_rng().gen_range(CREDIT_SCORE_MIN..=CREDIT_SCORE_MAX)
	}
}

/// Hands every applicant the same score, for tests that need the
/// eligibility outcome pinned down.
pub struct FixedScorer(pub i32);

impl CreditScorer for FixedScorer {
	fn score(&self, _registration: &Registration) -> i32 {
		self.0
	}
}
