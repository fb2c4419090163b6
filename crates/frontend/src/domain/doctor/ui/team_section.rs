use crate::shared::components::ui::Button;
use contracts::domain::doctor::Doctor;
use leptos::prelude::*;

/// Doctor cards grid for the public site
#[component]
pub fn TeamSection(#[prop(into)] doctors: Signal<Vec<Doctor>>) -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-head__title">"فريقنا الطبي"</h2>
                    <p class="section-head__subtitle">"نخبة من الأطباء والمختصين في طب النساء والتوليد."</p>
                </div>

                <div class="team__grid">
                    <For
                        each=move || doctors.get()
                        key=|doc| doc.id.clone()
                        children=move |doc: Doctor| {
                            view! {
                                <div class="team-card">
                                    <div class="team-card__photo">
                                        <img src=doc.image alt=doc.name.clone() />
                                    </div>
                                    <h3 class="team-card__name">{doc.name}</h3>
                                    <p class="team-card__speciality">{doc.speciality}</p>
                                    <Button variant="outline" full_width=true class="team-card__profile">
                                        "عرض الملف الشخصي"
                                    </Button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
