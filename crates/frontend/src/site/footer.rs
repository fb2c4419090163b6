use super::navbar::scroll_to_section;
use crate::shared::icons::icon;
use leptos::prelude::*;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("home", "الرئيسية"),
    ("services", "خدماتنا"),
    ("team", "الأطباء"),
    ("booking", "حجز موعد"),
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact" class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__about">
                    <div class="site-footer__brand">
                        <div class="site-footer__logo">{icon("heart-filled")}</div>
                        <span class="site-footer__name">"عيادة النّسيم"</span>
                    </div>
                    <p class="site-footer__pitch">
                        "نسعى لتقديم أفضل خدمات الرعاية الصحية للأم والطفل في بيئة آمنة ومريحة."
                    </p>
                </div>

                <div>
                    <h4 class="site-footer__heading">"روابط سريعة"</h4>
                    <ul class="site-footer__links">
                        {QUICK_LINKS
                            .into_iter()
                            .map(|(id, label)| view! {
                                <li>
                                    <button on:click=move |_| scroll_to_section(id)>{label}</button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="site-footer__heading">"اتصل بنا"</h4>
                    <ul class="site-footer__contacts">
                        <li>
                            {icon("phone")}
                            <span dir="ltr">"07 70 07 73 40"</span>
                        </li>
                        <li>
                            {icon("map-pin")}
                            <span>"ولاد برحيل الشارع الرئيسي عمارة الهدى الطابق الاول"</span>
                        </li>
                        <li>
                            {icon("clock")}
                            <span>"الإثنين - الجمعة: 9:00 - 18:00"</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="site-footer__copyright">
                {format!("© {} Clinique Naissance. جميع الحقوق محفوظة.", year)}
            </div>
        </footer>
    }
}
