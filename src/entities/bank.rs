// 🏦 Bank Entity - Shared state for every account it opens
//
// "The bank name belongs to the BANK, not to each account"
//
// Problem solved:
// - Every account reads the same bank name at display time
// - Renaming the bank is visible through all existing accounts
// - Account numbers are issued from one deterministic counter

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::account::Account;

/// Name every bank starts with unless configured otherwise
pub const DEFAULT_BANK_NAME: &str = "Python National Bank";

/// First account number handed out by a fresh bank
pub const FIRST_ACCOUNT_NUMBER: u64 = 1;

// ============================================================================
// BANK STATE
// ============================================================================

#[derive(Debug)]
struct BankState {
    /// Shared name (one value visible to all accounts)
    name: RwLock<String>,

    /// Next account number to issue
    next_account_number: AtomicU64,
}

// ============================================================================
// BANK HANDLE
// ============================================================================

/// Bank - cheap, cloneable handle to shared bank state
///
/// Every [`Account`] keeps a clone of the handle it was opened through, so a
/// rename through any clone is observed by all of them.
#[derive(Debug, Clone)]
pub struct Bank {
    state: Arc<BankState>,
}

impl Bank {
    /// Create a bank with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Bank {
            state: Arc::new(BankState {
                name: RwLock::new(name.into()),
                next_account_number: AtomicU64::new(FIRST_ACCOUNT_NUMBER),
            }),
        }
    }

    /// Current bank name
    pub fn name(&self) -> String {
        self.state
            .name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change the bank name for every account, existing and future
    pub fn change_name(&self, new_name: impl Into<String>) -> BankRenamed {
        let new_name = new_name.into();
        let previous = {
            let mut name = self
                .state
                .name
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *name, new_name.clone())
        };

        tracing::info!(from = %previous, to = %new_name, "bank renamed");

        BankRenamed {
            previous,
            current: new_name,
        }
    }

    /// Open an account with a zero balance
    pub fn open_account(&self, holder: impl Into<String>) -> Account {
        self.open_account_with_balance(holder, 0.0)
    }

    /// Open an account with an initial balance
    ///
    /// The balance is taken as given (no sign check) but must be finite;
    /// debug builds assert this.
    pub fn open_account_with_balance(&self, holder: impl Into<String>, balance: f64) -> Account {
        Account::open(self.clone(), self.issue_account_number(), holder.into(), balance)
    }

    /// Hand out the next account number (monotonically increasing)
    fn issue_account_number(&self) -> u64 {
        self.state.next_account_number.fetch_add(1, Ordering::Relaxed)
    }

    /// True if both handles point at the same bank
    pub fn same_bank(&self, other: &Bank) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(DEFAULT_BANK_NAME)
    }
}

// ============================================================================
// RENAME NOTICE
// ============================================================================

/// Outcome of [`Bank::change_name`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRenamed {
    pub previous: String,
    pub current: String,
}

impl std::fmt::Display for BankRenamed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bank name changed to: {}", self.current)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_name() {
        let bank = Bank::default();
        assert_eq!(bank.name(), "Python National Bank");
    }

    #[test]
    fn test_change_name() {
        let bank = Bank::new("First Bank");
        let renamed = bank.change_name("Second Bank");

        assert_eq!(renamed.previous, "First Bank");
        assert_eq!(renamed.current, "Second Bank");
        assert_eq!(renamed.to_string(), "Bank name changed to: Second Bank");
        assert_eq!(bank.name(), "Second Bank");
    }

    #[test]
    fn test_rename_visible_through_clones() {
        let bank = Bank::new("First Bank");
        let clone = bank.clone();

        clone.change_name("Renamed Bank");

        assert_eq!(bank.name(), "Renamed Bank");
        assert!(bank.same_bank(&clone));
    }

    #[test]
    fn test_separate_banks_are_independent() {
        let a = Bank::new("Bank A");
        let b = Bank::new("Bank B");

        a.change_name("Bank A2");

        assert_eq!(b.name(), "Bank B");
        assert!(!a.same_bank(&b));
    }

    #[test]
    fn test_account_numbers_increase() {
        let bank = Bank::default();
        let first = bank.open_account("Alice");
        let second = bank.open_account("Bob");
        let third = bank.open_account_with_balance("Carol", 10.0);

        assert_eq!(first.account_number(), FIRST_ACCOUNT_NUMBER);
        assert_eq!(second.account_number(), FIRST_ACCOUNT_NUMBER + 1);
        assert_eq!(third.account_number(), FIRST_ACCOUNT_NUMBER + 2);
    }

    #[test]
    fn test_every_account_number_is_distinct() {
        let bank = Bank::default();
        let accounts: Vec<Account> = (0..50)
            .map(|i| bank.open_account_with_balance(format!("Holder {}", i), 100.0))
            .collect();

        let numbers: std::collections::HashSet<u64> =
            accounts.iter().map(|a| a.account_number()).collect();
        let ids: std::collections::HashSet<&str> = accounts.iter().map(|a| a.id()).collect();

        assert_eq!(numbers.len(), accounts.len());
        assert_eq!(ids.len(), accounts.len());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "opening balance must be finite")]
    fn test_nan_opening_balance_rejected() {
        let bank = Bank::default();
        let _ = bank.open_account_with_balance("Bad Balance", f64::NAN);
    }

    #[test]
    fn test_open_account_defaults_to_zero() {
        let bank = Bank::default();
        let account = bank.open_account("Bob Johnson");
        assert_eq!(account.balance(), 0.0);
    }
}
