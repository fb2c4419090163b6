use super::footer::SiteFooter;
use super::hero::HeroSection;
use super::navbar::SiteNavbar;
use super::services::ServicesSection;
use super::whatsapp::WhatsappButton;
use crate::domain::appointment::ui::booking::BookingSection;
use crate::domain::doctor::ui::TeamSection;
use contracts::domain::doctor::Doctor;
use leptos::prelude::*;

/// The public marketing site: navigation, hero, services, team, booking,
/// contact. The doctor directory is fetched once and shared by the team
/// grid and the booking form select.
#[component]
pub fn PublicSite() -> impl IntoView {
    let (doctors, set_doctors) = signal(Vec::<Doctor>::new());

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::doctor::api::get_doctors().await {
                Ok(list) => set_doctors.set(list),
                Err(e) => {
                    log::error!("Failed to load doctors: {}", e);
                }
            }
        });
    });

    view! {
        <div class="site">
            <SiteNavbar />
            <HeroSection />
            <ServicesSection />
            <TeamSection doctors=doctors />
            <BookingSection doctors=doctors />
            <WhatsappButton />
            <SiteFooter />
        </div>
    }
}
