use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

mod components;
mod services;

use components::ContactInfoPage;
use services::router::{booking_context_from_location, go_back, open_route};
use services::session::load_session;

#[function_component(App)]
fn app() -> Html {
    let context = use_memo((), |_| booking_context_from_location());
    let session = use_state(load_session);

    // Another tab signing in or out updates local storage
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "storage", move |_| {
                session.set(load_session());
            });
            move || drop(listener)
        });
    }

    let on_continue = Callback::from(|route: tutor_booking::Route| open_route(&route));
    let on_back = Callback::from(|_: ()| go_back());

    html! {
        <ContactInfoPage
            context={(*context).clone()}
            session={(*session).clone()}
            {on_continue}
            {on_back}
        />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
