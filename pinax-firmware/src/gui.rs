//! Boot screen setup
//!
//! Populates the UI with the static content shown after power-on: a
//! solid background and one centered greeting label.

use pinax_core::label::{Align, Label};
use pinax_core::ui::{Ui, UiError};

use crate::config;

/// Builds the boot screen. The whole screen starts dirty, so the first
/// render pass after this paints everything.
pub fn build(ui: &mut Ui<'_>) -> Result<(), UiError> {
    ui.set_background(config::BACKGROUND);

    let mut greeting = Label::new(config::GREETING, config::GREETING_FONT, config::TEXT_COLOR);
    greeting.align(Align::Center, 0, 0);
    ui.add_label(greeting)?;

    Ok(())
}
