//! Screen implementations.

pub mod agenda;
pub mod spotlight;

use std::time::Duration;

use crate::screen::{Screen, ScreenId};

/// Create the screens behind the tab bar.
pub fn create_screens(advance_interval: Duration) -> Vec<(ScreenId, Box<dyn Screen>)> {
    vec![
        (
            ScreenId::Spotlight,
            Box::new(spotlight::SpotlightScreen::new(advance_interval)),
        ),
        (ScreenId::Agenda, Box::new(agenda::AgendaScreen::new())),
    ]
}
