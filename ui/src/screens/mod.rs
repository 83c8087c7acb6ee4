pub mod account;
pub mod credit;
pub mod home;
pub mod loan;
pub mod welcome;
