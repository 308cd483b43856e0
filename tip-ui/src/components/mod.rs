pub mod tip_calculator;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::button::{Button, ButtonVariants};

pub use tip_calculator::TipCalculatorView;

use crate::config::WindowConfig;

const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl WindowPreferences {
    /// Sizes below the minimum are raised to it.
    pub fn new(
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            size: Size {
                width: px(width.max(MIN_WINDOW_WIDTH)),
                height: px(height.max(MIN_WINDOW_HEIGHT)),
            },
        }
    }

    pub fn min_size() -> Size<Pixels> {
        Size {
            width: px(MIN_WINDOW_WIDTH),
            height: px(MIN_WINDOW_HEIGHT),
        }
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

/// Creates one segment of a segmented selector.
///
/// The selected segment is drawn as a primary button, the rest as ghosts.
pub fn make_segment(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    selected: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(id.into())
        .flex_1()
        .label(label.into())
        .on_click(on_click);

    if selected {
        button.primary()
    } else {
        button.ghost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_follow_config() {
        let prefs = WindowPreferences::from(&WindowConfig {
            width: 600.0,
            height: 900.0,
            ..WindowConfig::default()
        });

        assert_eq!(prefs.size.width, px(600.0));
        assert_eq!(prefs.size.height, px(900.0));
    }

    #[test]
    fn preferences_clamp_to_minimum() {
        let prefs = WindowPreferences::new(10.0, -5.0);

        assert_eq!(prefs.size, WindowPreferences::min_size());
    }
}
