use crate::core::bookmark::View;
use crate::core::settings::Settings;

#[derive(Debug)]
pub struct UIState {
    pub settings: Settings,
    pub view: View,
}

impl UIState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            view: View::default(),
        }
    }
}
