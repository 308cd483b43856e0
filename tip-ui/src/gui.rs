use anyhow::Context as _;
use gpui::{
    AnyView, App, AppContext, Application, Bounds, Context, KeyBinding, Menu, MenuItem,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::{Root, Theme, ThemeMode};
use tip_core::TipForm;
use tracing::{error, info};

use crate::{
    Quit,
    components::{TipCalculatorView, WindowPreferences},
    config::{AppConfig, ThemePreference},
    quit,
};

pub const WINDOW_TITLE: &str = "Tip Calculator";

pub fn setup_app(
    app_cx: &mut App,
    theme: ThemePreference,
) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    match theme {
        ThemePreference::System => {}
        ThemePreference::Light => Theme::change(ThemeMode::Light, None, app_cx),
        ThemePreference::Dark => Theme::change(ThemeMode::Dark, None, app_cx),
    }

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, seeded with `form`.
///
/// gpui-component widgets expect a [`Root`] at the top of the window, so the
/// calculator view is wrapped in one.
pub fn open_main_window(
    form: TipForm,
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        window_min_size: Some(WindowPreferences::min_size()),
        ..Default::default()
    };

    app_cx
        .open_window(options, |window, cx| {
            let view = cx.new(|view_cx: &mut Context<TipCalculatorView>| {
                TipCalculatorView::new(form, window, view_cx)
            });
            let view: AnyView = view.into();
            cx.new(|root_cx| Root::new(view, window, root_cx))
        })
        .context("failed to open calculator window")?;

    info!("Calculator window opened");
    Ok(())
}

/// Runs the desktop application until the user quits.
pub fn launch(
    form: TipForm,
    config: &AppConfig,
) {
    let preferences = WindowPreferences::from(&config.window);
    let theme = config.window.theme;

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |app_cx: &mut App| {
            setup_app(app_cx, theme);

            if let Err(e) = open_main_window(form, preferences, app_cx) {
                error!(error = ?e, "cannot start the calculator");
                app_cx.quit();
            }
        });
}
