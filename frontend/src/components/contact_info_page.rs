use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::{AuthSession, BookingContext};
use tutor_booking::{
    ContactField, ContactInfoScreen, InputKind, Route, CONTINUE_LABEL, SCREEN_SUBTITLE,
    SCREEN_TITLE,
};

use crate::services::config::load_config;
use crate::services::router::{BrowserAlerts, NavigationEvent, QueuedNavigator};

type Screen = ContactInfoScreen<QueuedNavigator, BrowserAlerts>;

#[derive(Properties, PartialEq)]
pub struct ContactInfoPageProps {
    pub context: BookingContext,
    pub session: AuthSession,

    // Event handlers
    pub on_continue: Callback<Route>,
    pub on_back: Callback<()>,
}

#[function_component(ContactInfoPage)]
pub fn contact_info_page(props: &ContactInfoPageProps) -> Html {
    let screen = {
        let context = props.context.clone();
        let session = props.session.clone();
        use_mut_ref(move || {
            Screen::mount_with_config(
                load_config(),
                context,
                &session,
                QueuedNavigator::default(),
                BrowserAlerts,
            )
        })
    };
    let force_update = use_force_update();

    // Forward navigation events once the screen is no longer borrowed
    let dispatch = {
        let on_continue = props.on_continue.clone();
        let on_back = props.on_back.clone();
        move |events: Vec<NavigationEvent>| {
            for event in events {
                match event {
                    NavigationEvent::Forward(route) => on_continue.emit(route),
                    NavigationEvent::Back => on_back.emit(()),
                }
            }
        }
    };

    // Re-apply profile values whenever the session changes
    use_effect_with(props.session.clone(), {
        let screen = screen.clone();
        let force_update = force_update.clone();
        move |session: &AuthSession| {
            screen.borrow_mut().session_changed(session);
            force_update.force_update();
            || ()
        }
    });

    let on_field_input = |field: ContactField| {
        let screen = screen.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field.input_kind() {
                InputKind::Multiline(_) => {
                    e.target_unchecked_into::<HtmlTextAreaElement>().value()
                }
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            screen.borrow_mut().set_field(field, value);
            force_update.force_update();
        })
    };

    let on_submit = {
        let screen = screen.clone();
        let force_update = force_update.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let events = {
                let mut screen = screen.borrow_mut();
                if let Err(e) = screen.submit() {
                    gloo::console::log!(format!("Contact details not accepted: {}", e));
                }
                screen.navigator_mut().drain()
            };
            dispatch(events);
            force_update.force_update();
        })
    };

    let on_back_click = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| {
            let events = {
                let mut screen = screen.borrow_mut();
                screen.go_back();
                screen.navigator_mut().drain()
            };
            dispatch(events);
        })
    };

    let current = screen.borrow();
    let summary = current.booking_summary();

    let fields = ContactField::ALL
        .iter()
        .map(|field| {
            let field = *field;
            let value = current.value(field).to_string();
            let input = match field.input_kind() {
                InputKind::Multiline(rows) => html! {
                    <textarea
                        id={field.param_key()}
                        class="input text-area"
                        rows={rows.to_string()}
                        placeholder={field.placeholder()}
                        value={value}
                        oninput={on_field_input(field)}
                    />
                },
                kind => {
                    let input_type = match kind {
                        InputKind::Email => "email",
                        InputKind::Phone => "tel",
                        _ => "text",
                    };
                    html! {
                        <input
                            id={field.param_key()}
                            type={input_type}
                            class="input"
                            placeholder={field.placeholder()}
                            autocapitalize={if field.auto_capitalize() { "words" } else { "none" }}
                            required={field.is_required()}
                            value={value}
                            oninput={on_field_input(field)}
                        />
                    }
                }
            };

            html! {
                <div class="input-group" key={field.param_key()}>
                    <label class="label" for={field.param_key()}>{field.label()}</label>
                    {input}
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="contact-info">
            <div class="header">
                <button type="button" class="back-button" onclick={on_back_click}>{"←"}</button>
                <h1 class="title">{SCREEN_TITLE}</h1>
            </div>

            <div class="content">
                <p class="subtitle">{SCREEN_SUBTITLE}</p>

                <form class="contact-form" novalidate={true} onsubmit={on_submit}>
                    {fields}

                    <div class="summary">
                        <h2 class="summary-title">{summary.title}</h2>
                        {for summary.rows.iter().map(|row| html! {
                            <div class="summary-item">
                                <span class="summary-label">{row.label}</span>
                                <span class={classes!("summary-value", row.emphasized.then_some("price"))}>
                                    {row.value.clone()}
                                </span>
                            </div>
                        })}
                    </div>

                    <button type="submit" class="btn btn-primary continue-button">
                        {CONTINUE_LABEL}
                    </button>
                </form>
            </div>
        </section>
    }
}
