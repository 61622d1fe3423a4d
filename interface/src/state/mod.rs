mod application_account;

pub use application_account::*;
