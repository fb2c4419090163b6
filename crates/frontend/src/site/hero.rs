use super::navbar::scroll_to_section;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <div class="hero__copy">
                    <span class="hero__eyebrow">"رعاية طبية متكاملة للأم والطفل"</span>
                    <h1 class="hero__title">
                        "رعاية حمل وولادة"
                        <br />
                        <span class="hero__title-accent">"آمنة وحنونة"</span>
                    </h1>
                    <p class="hero__pitch">
                        "في عيادة النّسيم، نرافقكِ في أجمل رحلة في العمر. فريق طبي متمرّس يضمن لكِ ولطفلكِ أقصى درجات العناية والراحة، من الحمل وحتى الولادة."
                    </p>
                    <div class="hero__actions">
                        <Button on_click=Callback::new(move |_| scroll_to_section("booking"))>
                            "احجزي موعدك الآن"
                        </Button>
                        <Button
                            variant="outline"
                            on_click=Callback::new(move |_| scroll_to_section("services"))
                        >
                            "اكتشفي خدماتنا"
                        </Button>
                    </div>
                </div>

                <div class="hero__visual">
                    <div class="hero__photo">
                        <img
                            src="https://images.unsplash.com/photo-1555252333-9f8e92e65df9?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                            alt="Pregnant woman smiling"
                        />
                    </div>
                    <div class="hero__badge">
                        <div class="hero__badge-icon">{icon("activity")}</div>
                        <div>
                            <p class="hero__badge-caption">"خبرة أكثر من"</p>
                            <p class="hero__badge-value">"15 سنة"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
