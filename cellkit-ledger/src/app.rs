//! Terminal session: one event in, one redraw out.

use cellkit::{Backend, InputReader, ScreenContext, Terminal};
use thiserror::Error;

use crate::accounts::{AccountsScreen, Outcome};
use crate::store::{Store, StoreError};

/// App error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Terminal(#[from] cellkit::Error),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Terminal(cellkit::Error::Io(e))
    }
}

/// Run the accounts screen until the user quits.
pub fn run(store: Store) -> Result<(), AppError> {
    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let input = InputReader::spawn();

    let mut screen = AccountsScreen::new(store, ScreenContext::new(width, height))?;
    redraw(&mut term, &screen)?;

    loop {
        let event = input.next()?;
        if let cellkit::Event::Resize { width, height } = event {
            term.resize(width, height);
        }
        match screen.handle_event(&event)? {
            Outcome::Quit => break,
            Outcome::Redraw => redraw(&mut term, &screen)?,
            Outcome::Ignored => {}
        }
    }

    log::info!("quit");
    term.close()?;
    Ok(())
}

fn redraw(term: &mut Terminal, screen: &AccountsScreen) -> std::io::Result<()> {
    term.clear();
    screen.draw(term);
    term.flush()
}
