use crate::shared::icons::icon;
use leptos::prelude::*;

/// Floating WhatsApp link, visible on every public page section
#[component]
pub fn WhatsappButton() -> impl IntoView {
    view! {
        <a
            href="https://wa.me/212770077340"
            target="_blank"
            rel="noreferrer"
            class="whatsapp-float"
        >
            {icon("whatsapp")}
            <span class="whatsapp-float__label">"تواصلي معنا"</span>
        </a>
    }
}
