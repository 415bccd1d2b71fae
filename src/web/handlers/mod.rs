//! HTML template rendering handlers.

mod tarot;
mod yesno;

pub use tarot::tarot_page_handler;
pub use yesno::yesno_page_handler;
