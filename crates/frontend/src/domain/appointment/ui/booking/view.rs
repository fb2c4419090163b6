use super::view_model::BookingViewModel;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::doctor::Doctor;
use leptos::prelude::*;

#[component]
pub fn BookingSection(#[prop(into)] doctors: Signal<Vec<Doctor>>) -> impl IntoView {
    let vm = BookingViewModel::new();

    // Preselect the first doctor once the directory arrives, and again after
    // the post-submit reset empties the form.
    Effect::new(move |_| {
        let list = doctors.get();
        if vm.form.get().doctor_id.is_empty() {
            if let Some(first) = list.first() {
                vm.form.update(|f| f.doctor_id = first.id.clone());
            }
        }
    });

    let doctor_options = Signal::derive(move || {
        doctors
            .get()
            .into_iter()
            .map(|d| (d.id.clone(), format!("{} ({})", d.name, d.speciality)))
            .collect::<Vec<_>>()
    });

    view! {
        <section id="booking" class="booking">
            <div class="booking__container">
                <div class="booking-card">
                    <div class="booking-card__info">
                        <h3 class="booking-card__title">"حجز موعد جديد"</h3>
                        <p class="booking-card__pitch">
                            "املئي الاستمارة وسنقوم بتأكيد موعدك في أقرب وقت. نحن هنا لراحتك."
                        </p>
                        <div class="booking-card__contacts">
                            <div class="booking-card__contact">
                                {icon("phone")}
                                <span dir="ltr">"07 70 07 73 40"</span>
                            </div>
                            <div class="booking-card__contact">
                                {icon("map-pin")}
                                <span>"ولاد برحيل الشارع الرئيسي عمارة الهدى الطابق الاول"</span>
                            </div>
                        </div>
                    </div>

                    <div class="booking-card__body">
                        <Show
                            when=move || vm.submitted.get()
                            fallback=move || view! { <BookingForm vm=vm doctor_options=doctor_options /> }
                        >
                            <div class="booking-confirmation">
                                <div class="booking-confirmation__icon">{icon("check-circle")}</div>
                                <h3 class="booking-confirmation__title">"تم استلام طلبك!"</h3>
                                <p class="booking-confirmation__text">
                                    {move || format!(
                                        "شكراً لكِ، {}. سنتواصل معكِ قريباً عبر الهاتف أو الواتساب لتأكيد الموعد.",
                                        vm.form.get().patient_name
                                    )}
                                </p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BookingForm(
    vm: BookingViewModel,
    #[prop(into)] doctor_options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <form
            class="booking-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command()();
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                label="الاسم الكامل"
                placeholder="مثال: ليلى العلمي"
                value=Signal::derive(move || vm.form.get().patient_name)
                on_input=Callback::new(move |v| vm.form.update(|f| f.patient_name = v))
                required=true
            />
            <Input
                label="رقم الهاتف"
                placeholder="06 XX XX XX XX"
                input_type="tel"
                value=Signal::derive(move || vm.form.get().patient_phone)
                on_input=Callback::new(move |v| vm.form.update(|f| f.patient_phone = v))
                required=true
            />
            <Select
                label="اختيار الطبيب"
                value=Signal::derive(move || vm.form.get().doctor_id)
                options=doctor_options
                on_change=Callback::new(move |v| vm.form.update(|f| f.doctor_id = v))
            />
            <Input
                label="التاريخ المفضل"
                input_type="datetime-local"
                value=Signal::derive(move || vm.form.get().date)
                on_input=Callback::new(move |v| vm.form.update(|f| f.date = v))
                required=true
            />
            <Textarea
                label="سبب الزيارة (اختياري)"
                placeholder="مثال: فحص دوري، استشارة ولادة..."
                rows=4
                value=Signal::derive(move || vm.form.get().reason.clone().unwrap_or_default())
                on_input=Callback::new(move |v| vm.form.update(|f| f.reason = Some(v)))
            />

            <Button button_type="submit" full_width=true class="booking-form__submit">
                "إرسال الطلب"
            </Button>

            <p class="booking-form__consent">
                "بإرسال هذا النموذج، توافقين على سياسة الخصوصية الخاصة بنا."
            </p>
        </form>
    }
}
