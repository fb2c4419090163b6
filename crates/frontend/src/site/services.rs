use crate::shared::icons::icon;
use leptos::prelude::*;

/// (icon, accent, title, description) for each static service card
const SERVICES: [(&str, &str, &str, &str); 6] = [
    (
        "baby",
        "rose",
        "متابعة الحمل",
        "فحوصات دورية شاملة للاطمئنان على صحة الأم ونمو الجنين بانتظام.",
    ),
    (
        "activity",
        "sky",
        "الولادة (طبيعية/قيصرية)",
        "تجهيزات متكاملة لاستقبال مولودك في بيئة آمنة ومعقمة بإشراف مختصين.",
    ),
    (
        "stethoscope",
        "indigo",
        "رعاية حديثي الولادة",
        "الفحص الأول للمولود، التحصينات، ومتابعة النمو في الأشهر الأولى.",
    ),
    (
        "heart",
        "red",
        "التخطيط للحمل",
        "استشارات ما قبل الحمل وفحوصات الخصوبة لضمان بداية سليمة.",
    ),
    (
        "activity",
        "teal",
        "السونار (Ultrasound)",
        "أحدث أجهزة التصوير ثلاثي ورباعي الأبعاد لرؤية الجنين بوضوح.",
    ),
    (
        "clock",
        "orange",
        "طوارئ نسائية 24/7",
        "فريقنا جاهز لاستقبال الحالات الطارئة في أي وقت لضمان سلامتكم.",
    ),
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-head__title">"خدماتنا الطبية"</h2>
                    <p class="section-head__subtitle">
                        "نقدم لكِ مجموعة شاملة من الخدمات الطبية لضمان صحتكِ وسلامة مولودكِ."
                    </p>
                </div>

                <div class="services__grid">
                    {SERVICES
                        .into_iter()
                        .map(|(icon_name, accent, title, desc)| view! {
                            <div class="service-card">
                                <div class=format!("service-card__icon service-card__icon--{}", accent)>
                                    {icon(icon_name)}
                                </div>
                                <h3 class="service-card__title">{title}</h3>
                                <p class="service-card__desc">{desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
