use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "الرئيسية"),
    ("services", "خدماتنا"),
    ("team", "أطباؤنا"),
    ("booking", "حجز موعد"),
    ("contact", "اتصل بنا"),
];

/// Scroll the page to a section by element id. Smoothness comes from the
/// `scroll-behavior` CSS rule, not from here.
pub(crate) fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        element.scroll_into_view();
    }
}

/// Fixed top navigation with a mobile menu
#[component]
pub fn SiteNavbar() -> impl IntoView {
    let (active, set_active) = signal("home".to_string());
    let (mobile_open, set_mobile_open) = signal(false);

    let go = move |id: &'static str| {
        set_active.set(id.to_string());
        set_mobile_open.set(false);
        scroll_to_section(id);
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav__inner">
                <div class="site-nav__brand" on:click=move |_| go("home")>
                    <div class="site-nav__logo">{icon("heart-filled")}</div>
                    <div>
                        <h1 class="site-nav__title">"عيادة النّسيم"</h1>
                        <span class="site-nav__subtitle">"Clinique Naissance"</span>
                    </div>
                </div>

                <div class="site-nav__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(id, label)| view! {
                            <button
                                class=move || {
                                    if active.get() == id {
                                        "site-nav__link site-nav__link--active"
                                    } else {
                                        "site-nav__link"
                                    }
                                }
                                on:click=move |_| go(id)
                            >
                                {label}
                            </button>
                        })
                        .collect_view()}
                    <Button class="site-nav__cta" on_click=Callback::new(move |_| go("booking"))>
                        "احجزي الآن"
                    </Button>
                </div>

                <button
                    class="site-nav__burger"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="site-nav__mobile">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(id, label)| view! {
                            <button class="site-nav__mobile-link" on:click=move |_| go(id)>
                                {label}
                            </button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
