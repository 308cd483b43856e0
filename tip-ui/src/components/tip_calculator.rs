use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window, div, px,
};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    v_flex,
};
use tip_core::{TipForm, TipPercentage};
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;
use crate::components::make_segment;

const INVALID_NUMBER_WARNING: &str = "Please enter a valid number";

/// The calculator screen.
///
/// Owns the [`TipForm`]. Text inputs live in gpui-component input entities;
/// their contents are copied into the form at the start of every render, so
/// the form's validity flags only change when the text does.
pub struct TipCalculatorView {
    form: TipForm,
    bill_amount: Entity<InputState>,
    custom_tip_amount: Entity<InputState>,
    _window_close_subscription: Subscription,
}

impl TipCalculatorView {
    pub fn new(
        form: TipForm,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let bill_amount =
            make_amount_input_state("Enter Bill Amount", form.bill_amount(), window, cx);
        let custom_tip_amount = make_amount_input_state(
            "Enter Custom Tip Amount",
            form.custom_tip_amount(),
            window,
            cx,
        );

        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        info!(%form, "Calculator view constructed");
        Self {
            form,
            bill_amount,
            custom_tip_amount,
            _window_close_subscription: subscription,
        }
    }

    /// Copies the input widgets' text into the form.
    fn sync_inputs(
        &mut self,
        cx: &App,
    ) {
        let bill = self.bill_amount.read(cx).value().to_string();
        self.form.set_bill_amount(bill);

        let custom_tip = self.custom_tip_amount.read(cx).value().to_string();
        self.form.set_custom_tip_amount(custom_tip);
    }

    fn select_percentage(
        &mut self,
        percentage: TipPercentage,
        cx: &mut Context<Self>,
    ) {
        self.form.set_tip_percentage(percentage);
        cx.notify();
    }

    fn change_people(
        &mut self,
        increment: bool,
        cx: &mut Context<Self>,
    ) {
        if increment {
            self.form.increment_people();
        } else {
            self.form.decrement_people();
        }
        cx.notify();
    }

    fn render_percentage_selector(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let selected = self.form.tip_percentage();
        let mut segments = Vec::with_capacity(TipPercentage::ALL.len());
        for percentage in TipPercentage::ALL {
            segments.push(make_segment(
                format!("tip-{}", percentage.percent()),
                percentage.label(),
                percentage == selected,
                cx.listener(move |this, _: &ClickEvent, _, cx| {
                    this.select_percentage(percentage, cx)
                }),
            ));
        }

        h_flex().gap_1().w_full().children(segments)
    }

    fn render_people_stepper(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        h_flex()
            .items_center()
            .justify_between()
            .child(self.form.people_label())
            .child(
                h_flex()
                    .gap_1()
                    .child(
                        Button::new("people-decrement")
                            .icon(IconName::Minus)
                            .small()
                            .ghost()
                            .disabled(self.form.number_of_people() <= 1)
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.change_people(false, cx)
                            })),
                    )
                    .child(
                        Button::new("people-increment")
                            .icon(IconName::Plus)
                            .small()
                            .ghost()
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.change_people(true, cx)
                            })),
                    ),
            )
    }
}

impl Render for TipCalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        self.sync_inputs(cx);

        let summary = self.form.summary();
        let danger = cx.theme().danger;
        let secondary = cx.theme().muted_foreground;
        let accent = cx.theme().primary;

        let mut percentage_section = make_section("Tip Percentage")
            .child(self.render_percentage_selector(cx));
        if summary.show_tip_amount {
            percentage_section = percentage_section
                .child(div().text_color(secondary).child(summary.tip_amount_label()));
        }

        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(make_section("Bill Amount").child(Input::new(&self.bill_amount)))
            .children(
                self.form
                    .is_invalid_bill_amount()
                    .then(|| make_warning(danger)),
            )
            .child(make_section("Custom Tip Amount").child(Input::new(&self.custom_tip_amount)))
            .children(
                self.form
                    .is_invalid_custom_tip_amount()
                    .then(|| make_warning(danger)),
            )
            .child(percentage_section)
            .child(make_section("Number of People").child(self.render_people_stepper(cx)))
            .child(
                make_section("Total")
                    .child(summary.total_amount_label())
                    .child(
                        div()
                            .text_color(accent)
                            .child(summary.total_per_person_label()),
                    ),
            )
    }
}

fn make_amount_input_state(
    placeholder: impl Into<SharedString>,
    initial_text: &str,
    window: &mut Window,
    cx: &mut Context<TipCalculatorView>,
) -> Entity<InputState> {
    let initial_text = SharedString::from(initial_text.to_string());

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .placeholder(placeholder.into())
            .default_value(initial_text)
    })
}

/// A bordered form section with a header, laid out vertically.
fn make_section(title: impl Into<SharedString>) -> Div {
    v_flex()
        .gap_2()
        .p(px(8.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .child(title.into()),
        )
}

fn make_warning(color: gpui::Hsla) -> Div {
    div()
        .pl(px(8.))
        .text_color(color)
        .child(INVALID_NUMBER_WARNING)
}
