//! Site chrome shared by every page: navbar, footer, cursor, spinner and
//! the scroll reveal container.

mod cursor;
mod footer;
mod navbar;
mod reveal;
mod spinner;

pub use cursor::Cursor;
pub use footer::Footer;
pub use navbar::Navbar;
pub use reveal::RevealGroup;
pub use spinner::Spinner;
