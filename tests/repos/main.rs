mod common;
mod loan;
mod user;
