//! SQLite storage for currencies, accounts and transactions.

mod models;

pub use models::{Account, AccountType, Currency, Transaction};

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SCHEMA: &str = "
    CREATE TABLE currency (
        currency_id INTEGER PRIMARY KEY NOT NULL,
        name TEXT,
        usdrate REAL
    );

    CREATE TABLE account (
        account_id INTEGER PRIMARY KEY NOT NULL,
        code TEXT,
        name TEXT,
        accounttype INTEGER,
        currency_id INTEGER
    );

    CREATE TABLE trans (
        trans_id INTEGER PRIMARY KEY NOT NULL,
        account_id INTEGER,
        date TEXT,
        \"ref\" TEXT,
        \"desc\" TEXT,
        amt REAL
    );
";

/// Store error type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("file '{}' already exists, can't initialize it", .0.display())]
    AlreadyExists(PathBuf),
    #[error("database file '{}' doesn't exist, create one with --init", .0.display())]
    Missing(PathBuf),
}

/// An open ledger database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::Missing(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        log::info!("opened store {}", path.display());
        Ok(Self { conn })
    }

    /// Create a new database file with the schema and starter data.
    ///
    /// Refuses to touch a file that already exists.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if path.exists() {
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }
        let store = Self {
            conn: Connection::open(path)?,
        };
        if let Err(e) = store.create_tables(true) {
            drop(store);
            if let Err(rm) = std::fs::remove_file(path) {
                log::warn!("could not remove {}: {rm}", path.display());
            }
            return Err(e);
        }
        log::info!("initialized store {}", path.display());
        Ok(store)
    }

    /// An empty in-memory database with the schema in place.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.create_tables(false)?;
        Ok(store)
    }

    /// Schema, plus starter data when `seed` is set, in one transaction.
    fn create_tables(&self, seed: bool) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(SCHEMA)?;
        if seed {
            self.seed()?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Starter currencies and bank accounts.
    pub fn seed(&self) -> Result<(), StoreError> {
        let usd = self.create_currency(&Currency::new("USD", 1.0))?;
        let php = self.create_currency(&Currency::new("PHP", 48.0))?;

        for account in [
            Account::new("bpichecking", "BPI Checking Account", AccountType::Bank, php.id),
            Account::new("bpisavings", "BPI Savings Account", AccountType::Bank, php.id),
            Account::new("bpiusd", "BPI USD", AccountType::Bank, usd.id),
        ] {
            self.create_account(&account)?;
        }
        log::debug!("seeded starter currencies and accounts");
        Ok(())
    }

    // =========================================================================
    // Currencies
    // =========================================================================

    pub fn create_currency(&self, currency: &Currency) -> Result<Currency, StoreError> {
        self.conn.execute(
            "INSERT INTO currency (name, usdrate) VALUES (?, ?)",
            params![&currency.name, currency.usdrate],
        )?;
        Ok(Currency {
            id: self.conn.last_insert_rowid(),
            ..currency.clone()
        })
    }

    pub fn find_currencies(&self) -> Result<Vec<Currency>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT currency_id, name, usdrate FROM currency ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            Ok(Currency {
                id: row.get(0)?,
                name: row.get(1)?,
                usdrate: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub fn create_account(&self, account: &Account) -> Result<Account, StoreError> {
        self.conn.execute(
            "INSERT INTO account (code, name, accounttype, currency_id) VALUES (?, ?, ?, ?)",
            params![
                &account.code,
                &account.name,
                account.account_type.as_i64(),
                account.currency_id
            ],
        )?;
        Ok(Account {
            id: self.conn.last_insert_rowid(),
            ..account.clone()
        })
    }

    /// Every account, grouped by type and then sorted by name.
    pub fn find_accounts(&self) -> Result<Vec<Account>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT account_id, code, name, accounttype, currency_id
             FROM account ORDER BY accounttype, name",
        )?;
        let rows = stmt.query_map([], account_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    pub fn get_account(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT account_id, code, name, accounttype, currency_id
             FROM account WHERE account_id = ?",
        )?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(account_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Sum of the account's transaction amounts; 0 when it has none.
    pub fn balance(&self, account_id: i64) -> Result<f64, StoreError> {
        let balance = self.conn.query_row(
            "SELECT COALESCE(SUM(amt), 0.0) FROM trans WHERE account_id = ?",
            [account_id],
            |row| row.get(0),
        )?;
        Ok(balance)
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    pub fn create_transaction(&self, trans: &Transaction) -> Result<Transaction, StoreError> {
        self.conn.execute(
            "INSERT INTO trans (account_id, date, \"ref\", \"desc\", amt) VALUES (?, ?, ?, ?, ?)",
            params![
                trans.account_id,
                trans.date.format(DATE_FORMAT).to_string(),
                &trans.reference,
                &trans.description,
                trans.amount
            ],
        )?;
        Ok(Transaction {
            id: self.conn.last_insert_rowid(),
            ..trans.clone()
        })
    }

    /// An account's transactions, oldest first.
    pub fn find_transactions(&self, account_id: i64) -> Result<Vec<Transaction>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT trans_id, account_id, date, \"ref\", \"desc\", amt
             FROM trans WHERE account_id = ? ORDER BY date, trans_id",
        )?;
        let rows = stmt.query_map([account_id], |row| {
            let date: String = row.get(2)?;
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?;
            Ok(Transaction {
                id: row.get(0)?,
                account_id: row.get(1)?,
                date,
                reference: row.get(3)?,
                description: row.get(4)?,
                amount: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    let raw_type: i64 = row.get(3)?;
    let account_type = AccountType::from_i64(raw_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Integer,
            format!("unknown account type {raw_type}").into(),
        )
    })?;
    Ok(Account {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        account_type,
        currency_id: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Store {
        let store = Store::open_in_memory().unwrap();
        store.seed().unwrap();
        store
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_seed_data() {
        let store = seeded();

        let currencies = store.find_currencies().unwrap();
        let names: Vec<_> = currencies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["PHP", "USD"]);
        assert_eq!(currencies[0].usdrate, 48.0);

        let accounts = store.find_accounts().unwrap();
        let codes: Vec<_> = accounts.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, ["bpichecking", "bpisavings", "bpiusd"]);
        assert!(accounts.iter().all(|a| a.account_type == AccountType::Bank));
    }

    #[test]
    fn test_accounts_ordered_by_type_then_name() {
        let store = seeded();
        store
            .create_account(&Account::new("wallet", "A Wallet", AccountType::Cash, 1))
            .unwrap();
        store
            .create_account(&Account::new("amex", "Amex", AccountType::CreditCard, 1))
            .unwrap();
        store
            .create_account(&Account::new("bdo", "BDO Checking", AccountType::Bank, 1))
            .unwrap();

        let accounts = store.find_accounts().unwrap();
        let codes: Vec<_> = accounts.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(
            codes,
            ["bdo", "bpichecking", "bpisavings", "bpiusd", "amex", "wallet"]
        );
    }

    #[test]
    fn test_balance_sums_transactions() {
        let store = seeded();
        let checking = store.find_accounts().unwrap().remove(0);
        assert_eq!(store.balance(checking.id).unwrap(), 0.0);

        for (day, amount) in [("2024-01-02", 1500.0), ("2024-01-05", -250.5)] {
            store
                .create_transaction(&Transaction::new(
                    checking.id,
                    date(day),
                    "",
                    "test",
                    amount,
                ))
                .unwrap();
        }
        assert_eq!(store.balance(checking.id).unwrap(), 1249.5);
    }

    #[test]
    fn test_transactions_round_trip_dates() {
        let store = seeded();
        let saved = store
            .create_transaction(&Transaction::new(1, date("2024-03-09"), "chk 12", "rent", -90.0))
            .unwrap();
        store
            .create_transaction(&Transaction::new(1, date("2024-02-01"), "", "salary", 300.0))
            .unwrap();

        let found = store.find_transactions(1).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].description, "salary");
        assert_eq!(found[1], saved);
    }

    #[test]
    fn test_get_account() {
        let store = seeded();
        let account = store.get_account(3).unwrap().unwrap();
        assert_eq!(account.code, "bpiusd");
        assert!(store.get_account(99).unwrap().is_none());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.db");

        Store::init(&path).unwrap();
        assert!(matches!(
            Store::init(&path),
            Err(StoreError::AlreadyExists(_))
        ));

        let reopened = Store::open(&path).unwrap();
        assert_eq!(reopened.find_accounts().unwrap().len(), 3);
    }

    fn has_table(store: &Store, name: &str) -> bool {
        store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
                [name],
                |row| row.get::<_, i64>(0),
            )
            .unwrap()
            > 0
    }

    #[test]
    fn test_failed_seed_rolls_back_schema() {
        let store = Store {
            conn: Connection::open_in_memory().unwrap(),
        };
        // Shadows the main table for unqualified inserts, so seeding fails.
        store
            .conn
            .execute_batch("CREATE TEMP TABLE currency (x INTEGER)")
            .unwrap();

        assert!(matches!(
            store.create_tables(true),
            Err(StoreError::Database(_))
        ));
        assert!(!has_table(&store, "currency"));
        assert!(!has_table(&store, "account"));
        assert!(!has_table(&store, "trans"));
    }

    #[test]
    fn test_init_creates_seeded_tables() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::init(dir.path().join("ledger.db")).unwrap();

        assert!(has_table(&store, "trans"));
        assert_eq!(store.find_currencies().unwrap().len(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Store::open(dir.path().join("nope.db"));
        assert!(matches!(result, Err(StoreError::Missing(_))));
    }
}
