// Entity Models - Bank and Account
//
// The bank owns the state every account shares (its name, the account
// number counter). Accounts own their balance and history.

pub mod bank;
pub mod account;

pub use bank::{Bank, BankRenamed, DEFAULT_BANK_NAME};
pub use account::{Account, AccountError, AccountSummary, LedgerEntry, Receipt, TransactionKind};
