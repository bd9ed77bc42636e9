//! UI Components

mod day_row;
mod new_todo_form;
mod theme_selector;
mod todo_card;
mod week_view;

pub use day_row::*;
pub use new_todo_form::*;
pub use theme_selector::*;
pub use todo_card::*;
pub use week_view::*;
