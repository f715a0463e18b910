//! Accounts screen: every account with its balance, a status line and a
//! popup menu.

use std::cell::RefCell;
use std::rc::Rc;

use cellkit::{
    Backend, Border, CellValue, Color, Column, Event, EventKind, Item, Label, Margin, Menu,
    Props, Rect, Rgb, Row, ScreenContext, Table, Widget, WidgetEvent,
};

use crate::store::{Store, StoreError};

const NAME_WIDTH: i32 = 40;
const BALANCE_WIDTH: i32 = 12;
const HINT: &str = "m: menu  q: quit";

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Redraw,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Refresh,
    Close,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [MenuAction::Refresh, MenuAction::Close, MenuAction::Quit];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::Refresh => "Refresh",
            MenuAction::Close => "Close",
            MenuAction::Quit => "Quit",
        }
    }

    fn from_id(id: i64) -> Option<Self> {
        Self::ALL.get(usize::try_from(id).ok()?).copied()
    }
}

/// Written by widget callbacks, read back after each event.
#[derive(Debug, Default)]
struct Shared {
    status: String,
    menu_action: Option<MenuAction>,
}

pub struct AccountsScreen {
    store: Store,
    screen: ScreenContext,
    table: Table,
    status: Label,
    menu: Option<Menu>,
    shared: Rc<RefCell<Shared>>,
}

impl AccountsScreen {
    pub fn new(store: Store, screen: ScreenContext) -> Result<Self, StoreError> {
        let shared = Rc::new(RefCell::new(Shared::default()));
        let rows = account_rows(&store)?;
        let table = accounts_table(screen, rows, &shared);
        let status = status_label(screen);

        let mut accounts = Self {
            store,
            screen,
            table,
            status,
            menu: None,
            shared,
        };
        accounts.sync_status();
        Ok(accounts)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn status(&self) -> &str {
        self.status.text()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Lay everything out again for a new screen size.
    pub fn resize(&mut self, screen: ScreenContext) -> Result<(), StoreError> {
        self.screen = screen;
        let rows = account_rows(&self.store)?;
        self.table = accounts_table(screen, rows, &self.shared);
        self.status = status_label(screen);
        self.menu = None;
        self.sync_status();
        Ok(())
    }

    /// Reload accounts and balances from the store.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        let rows = account_rows(&self.store)?;
        log::debug!("refreshed {} accounts", rows.len());
        self.table.set_rows(rows);
        if self.table.selected_row().is_none() {
            self.shared.borrow_mut().status.clear();
        }
        self.sync_status();
        Ok(())
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<Outcome, StoreError> {
        if let Event::Resize { width, height } = *event {
            self.resize(ScreenContext::new(width, height))?;
            return Ok(Outcome::Redraw);
        }

        // An open menu takes every key until it closes.
        if let Some(menu) = self.menu.as_mut() {
            let consumed = menu.handle_event(event);
            let action = self.shared.borrow_mut().menu_action.take();
            let Some(action) = action else {
                return Ok(if consumed {
                    Outcome::Redraw
                } else {
                    Outcome::Ignored
                });
            };
            self.menu = None;
            log::debug!("menu action {action:?}");
            return match action {
                MenuAction::Refresh => {
                    self.refresh()?;
                    Ok(Outcome::Redraw)
                }
                MenuAction::Close => Ok(Outcome::Redraw),
                MenuAction::Quit => Ok(Outcome::Quit),
            };
        }

        match event.printable() {
            Some('q') => return Ok(Outcome::Quit),
            Some('m') => {
                self.menu = Some(self.popup_menu());
                return Ok(Outcome::Redraw);
            }
            _ => {}
        }

        if self.table.handle_event(event) {
            self.sync_status();
            return Ok(Outcome::Redraw);
        }
        Ok(Outcome::Ignored)
    }

    pub fn draw(&self, backend: &mut dyn Backend) {
        self.table.draw(backend);
        self.status.draw(backend);
        if let Some(menu) = &self.menu {
            menu.draw(backend);
        }
    }

    fn sync_status(&mut self) {
        let shared = self.shared.borrow();
        self.status.set_text(format!("{}  {HINT}", shared.status));
    }

    fn popup_menu(&self) -> Menu {
        let items = MenuAction::ALL
            .iter()
            .enumerate()
            .map(|(id, action)| Item::new(id as i64, action.label(), action.label()))
            .collect();

        let shared = self.shared.clone();
        let props = Props::new(Rect::default())
            .margin(Margin::X)
            .color(Color::GREEN)
            .border(Border::Double)
            .on_event(move |event: &WidgetEvent<'_>| {
                let action = match event.kind {
                    EventKind::Enter => event.item().and_then(|item| MenuAction::from_id(item.id)),
                    EventKind::Escape => Some(MenuAction::Close),
                    EventKind::SelectionChanged => None,
                };
                if action.is_some() {
                    shared.borrow_mut().menu_action = action;
                }
            });
        Menu::centered(props, items, self.screen)
    }
}

fn account_rows(store: &Store) -> Result<Vec<Row>, StoreError> {
    store
        .find_accounts()?
        .into_iter()
        .map(|account| {
            let balance = store.balance(account.id)?;
            Ok(Row::new(
                account.id,
                account.code,
                vec![CellValue::from(account.name), CellValue::from(balance)],
            ))
        })
        .collect()
}

fn status_text(row: &Row) -> String {
    let name = row.cells.first().map(ToString::to_string).unwrap_or_default();
    format!("{name} [{}]", row.alias)
}

fn accounts_table(screen: ScreenContext, rows: Vec<Row>, shared: &Rc<RefCell<Shared>>) -> Table {
    let columns = vec![
        Column::new(0, NAME_WIDTH).pattern("%s"),
        Column::new(NAME_WIDTH, BALANCE_WIDTH).pattern("%7.2f"),
    ];
    let headings = vec!["Name".to_string(), "Balance".to_string()];
    let rect = Rect::new(0, 0, screen.width as i32, (screen.height as i32 - 1).max(1));

    let shared = shared.clone();
    let props = Props::new(rect)
        .margin(Margin::ONE)
        .color(Color::BW)
        .on_event(move |event: &WidgetEvent<'_>| {
            let Some(row) = event.row() else { return };
            match event.kind {
                EventKind::SelectionChanged => {
                    shared.borrow_mut().status = status_text(row);
                }
                EventKind::Enter => {
                    log::info!("account enter, id: {}, alias: {}", row.id, row.alias);
                    shared.borrow_mut().status = format!("viewing {}", status_text(row));
                }
                EventKind::Escape => {}
            }
        });

    Table::new(props, columns, headings, rows).heading_color(Color::new().foreground(Rgb::GOLD1))
}

fn status_label(screen: ScreenContext) -> Label {
    let rect = Rect::new(0, screen.height as i32 - 1, screen.width as i32, 1);
    Label::new(
        Props::new(rect)
            .margin(Margin::X)
            .color(Color::new().foreground(Rgb::GREY39)),
        "",
    )
}

#[cfg(test)]
mod tests {
    use cellkit::{Buffer, Key};
    use chrono::NaiveDate;

    use super::*;
    use crate::store::Transaction;

    fn screen() -> AccountsScreen {
        let store = Store::open_in_memory().unwrap();
        store.seed().unwrap();
        AccountsScreen::new(store, ScreenContext::new(60, 12)).unwrap()
    }

    fn key(screen: &mut AccountsScreen, key: Key) -> Outcome {
        screen.handle_event(&Event::key(key)).unwrap()
    }

    #[test]
    fn test_lists_accounts_with_balances() {
        let accounts = screen();
        let mut buf = Buffer::new(60, 12);
        accounts.draw(&mut buf);

        // Margin of one around the table content.
        assert_eq!(&buf.line(1)[1..5], "Name");
        assert_eq!(&buf.line(1)[41..48], "Balance");
        assert!(buf.line(2).starts_with(" BPI Checking Account"));
        assert_eq!(&buf.line(2)[41..48], "   0.00");
        assert!(buf.line(4).starts_with(" BPI USD"));
        assert_eq!(accounts.table().rows().len(), 3);
    }

    #[test]
    fn test_status_follows_selection() {
        let mut accounts = screen();
        assert!(accounts.status().starts_with("BPI Checking Account [bpichecking]"));

        assert_eq!(key(&mut accounts, Key::Down), Outcome::Redraw);
        assert!(accounts.status().starts_with("BPI Savings Account [bpisavings]"));

        key(&mut accounts, Key::Enter);
        assert!(accounts.status().starts_with("viewing BPI Savings Account"));

        let mut buf = Buffer::new(60, 12);
        accounts.draw(&mut buf);
        assert!(buf.line(11).starts_with(" viewing BPI Savings Account"));
    }

    #[test]
    fn test_quit_key() {
        let mut accounts = screen();
        assert_eq!(key(&mut accounts, Key::Char('x')), Outcome::Ignored);
        assert_eq!(key(&mut accounts, Key::Char('q')), Outcome::Quit);
    }

    #[test]
    fn test_menu_takes_focus_until_closed() {
        let mut accounts = screen();
        assert_eq!(key(&mut accounts, Key::Char('m')), Outcome::Redraw);
        assert!(accounts.menu_open());

        // Keys go to the menu, not the table.
        key(&mut accounts, Key::Down);
        assert_eq!(accounts.table().selected_index(), Some(0));
        assert_eq!(key(&mut accounts, Key::Char('q')), Outcome::Ignored);

        assert_eq!(key(&mut accounts, Key::Escape), Outcome::Redraw);
        assert!(!accounts.menu_open());
    }

    #[test]
    fn test_menu_quit() {
        let mut accounts = screen();
        key(&mut accounts, Key::Char('m'));
        key(&mut accounts, Key::Up);
        assert_eq!(key(&mut accounts, Key::Enter), Outcome::Quit);
    }

    #[test]
    fn test_menu_drawn_over_table() {
        let mut accounts = screen();
        key(&mut accounts, Key::Char('m'));
        let mut buf = Buffer::new(60, 12);
        accounts.draw(&mut buf);

        let text: String = (0..12).map(|y| buf.line(y)).collect();
        assert!(text.contains("Refresh"));
        assert!(text.contains('╔'));
    }

    #[test]
    fn test_menu_refresh_reloads_balances() {
        let mut accounts = screen();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        accounts
            .store
            .create_transaction(&Transaction::new(1, date, "", "deposit", 1500.25))
            .unwrap();

        key(&mut accounts, Key::Char('m'));
        assert_eq!(key(&mut accounts, Key::Enter), Outcome::Redraw);
        assert!(!accounts.menu_open());

        let row = &accounts.table().rows()[0];
        assert_eq!(row.cells[1], CellValue::Float(1500.25));
    }

    #[test]
    fn test_refresh_keeps_status_of_selected_account() {
        let mut accounts = screen();
        key(&mut accounts, Key::Up);
        assert!(accounts.status().starts_with("BPI USD [bpiusd]"));

        accounts.refresh().unwrap();
        assert!(accounts.status().starts_with("BPI USD [bpiusd]"));
        assert_eq!(accounts.table().selected_index(), Some(2));
    }

    #[test]
    fn test_resize_relayouts() {
        let mut accounts = screen();
        let outcome = accounts
            .handle_event(&Event::Resize {
                width: 80,
                height: 20,
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Redraw);
        assert_eq!(accounts.table().rect(), Rect::new(0, 0, 80, 19));
    }
}
