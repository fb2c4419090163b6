use super::super::api;
use crate::shared::components::StatCard;
use crate::shared::date_utils::{format_date, format_datetime, format_time};
use crate::shared::icons::icon;
use contracts::dashboards::overview::ClinicStats;
use contracts::domain::appointment::{Appointment, AppointmentId};
use contracts::domain::common::AggregateId;
use contracts::domain::doctor::Doctor;
use contracts::enums::AppointmentStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Staff triage dashboard: pending requests, upcoming visits, clinic counters
#[component]
pub fn StaffDashboard() -> impl IntoView {
    let (appointments, set_appointments) = signal(Vec::<Appointment>::new());
    let (stats, set_stats) = signal(None::<ClinicStats>);
    let (doctors, set_doctors) = signal(Vec::<Doctor>::new());
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    // Load the doctor directory once for the greeting and the avatar
    Effect::new(move |_| {
        spawn_local(async move {
            match crate::domain::doctor::api::get_doctors().await {
                Ok(list) => set_doctors.set(list),
                Err(e) => {
                    log::error!("Failed to load doctors: {}", e);
                }
            }
        });
    });

    // Load appointments and counters on mount and after every status change
    Effect::new(move |_| {
        reload.get();
        spawn_local(async move {
            match api::get_appointments().await {
                Ok(items) => {
                    set_error.set(None);
                    set_appointments.set(items);
                }
                Err(e) => set_error.set(Some(e)),
            }
            match api::get_stats().await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    log::error!("Failed to load clinic stats: {}", e);
                }
            }
        });
    });

    let on_update = Callback::new(move |(id, status): (AppointmentId, AppointmentStatus)| {
        spawn_local(async move {
            match api::update_status(&id.as_string(), status).await {
                Ok(_) => set_reload.update(|n| *n += 1),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let pending = Signal::derive(move || {
        appointments
            .get()
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .collect::<Vec<_>>()
    });
    let confirmed = Signal::derive(move || {
        appointments
            .get()
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Confirmed)
            .collect::<Vec<_>>()
    });

    let greeting = move || {
        doctors
            .get()
            .first()
            .map(|d| format!("مرحباً, {}", d.name))
            .unwrap_or_else(|| "مرحباً".to_string())
    };
    let avatar = move || doctors.get().first().map(|d| d.image.clone()).unwrap_or_default();

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <div class="sidebar-brand">
                    <div class="sidebar-brand__mark">"CN"</div>
                    <div>
                        <h1 class="sidebar-brand__name">"Clinique Naissance"</h1>
                        <p class="sidebar-brand__caption">"لوحة الإدارة"</p>
                    </div>
                </div>

                <nav class="sidebar-nav">
                    <a href="#" class="sidebar-nav__link sidebar-nav__link--active">
                        {icon("calendar")}
                        "الحجوزات"
                    </a>
                    <a href="#" class="sidebar-nav__link">
                        {icon("users")}
                        "ملفات المرضى"
                    </a>
                    <a href="#" class="sidebar-nav__link">
                        {icon("settings")}
                        "الإعدادات"
                    </a>
                </nav>

                <div class="sidebar-footer">
                    <button class="sidebar-footer__logout">
                        {icon("log-out")}
                        "تسجيل الخروج"
                    </button>
                </div>
            </aside>

            <main class="dashboard__main">
                <div class="dashboard__topbar">
                    <div>
                        <h2 class="dashboard__greeting">{greeting}</h2>
                        <p class="dashboard__hint">"إليك ملخص الحجوزات لليوم"</p>
                    </div>
                    <div class="dashboard__topbar-side">
                        <div class="dashboard__search">
                            <span class="dashboard__search-icon">{icon("search")}</span>
                            <input type="text" placeholder="بحث عن مريضة..." />
                        </div>
                        <div class="dashboard__avatar">
                            <img src=avatar alt="Profile" />
                        </div>
                    </div>
                </div>

                {move || error.get().map(|e| view! { <div class="dashboard__error">{e}</div> })}

                <div class="dashboard__grid">
                    <div class="dashboard__column dashboard__column--wide">
                        <div class="stats-row">
                            <StatCard
                                label="حجوزات جديدة".to_string()
                                accent="rose"
                                value=Signal::derive(move || stats.get().map(|s| s.pending))
                            />
                            <StatCard
                                label="مواعيد مؤكدة".to_string()
                                accent="sky"
                                value=Signal::derive(move || {
                                    stats.get().map(|s| s.total_appointments - s.pending - s.completed)
                                })
                            />
                            <StatCard
                                label="تمت المعاينة".to_string()
                                accent="emerald"
                                value=Signal::derive(move || stats.get().map(|s| s.completed))
                            />
                        </div>

                        <PendingPanel appointments=pending on_update=on_update />
                        <UpcomingPanel appointments=confirmed on_update=on_update />
                    </div>

                    <div class="dashboard__column">
                        <StatusChart
                            pending=Signal::derive(move || pending.get().len())
                            confirmed=Signal::derive(move || confirmed.get().len())
                            completed=Signal::derive(move || {
                                stats.get().map(|s| s.completed).unwrap_or(0)
                            })
                        />

                        <div class="reminders-card">
                            <h4 class="reminders-card__title">"رسائل التذكير"</h4>
                            <p class="reminders-card__text">
                                "تم إرسال 15 رسالة تذكير للمواعيد القادمة غداً تلقائياً."
                            </p>
                            <button class="reminders-card__manage">"إدارة الرسائل"</button>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// New booking requests waiting for a confirm / reject decision
#[component]
fn PendingPanel(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    on_update: Callback<(AppointmentId, AppointmentStatus)>,
) -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel__header">
                <h3 class="panel__title">"طلبات الحجز الجديدة"</h3>
                <span class="panel__badge">{move || appointments.get().len()}</span>
            </div>
            <div class="panel__list">
                <Show
                    when=move || !appointments.get().is_empty()
                    fallback=|| view! { <div class="panel__empty">"لا توجد طلبات حجز جديدة"</div> }
                >
                    <For
                        each=move || appointments.get()
                        key=|apt| apt.to_string_id()
                        children=move |apt: Appointment| {
                            let id = apt.id;
                            let initial = apt.patient_name.chars().next().map(String::from).unwrap_or_default();
                            view! {
                                <div class="request-row">
                                    <div class="request-row__top">
                                        <div class="request-row__patient">
                                            <div class="request-row__initial">{initial}</div>
                                            <div>
                                                <div class="request-row__name">{apt.patient_name.clone()}</div>
                                                <div class="request-row__meta">
                                                    <span>{icon("phone")} {apt.patient_phone.clone()}</span>
                                                    <span>{icon("clock")} {format_datetime(&apt.date)}</span>
                                                </div>
                                                {apt.reason.clone().map(|reason| view! {
                                                    <div class="request-row__reason">
                                                        <span class="request-row__reason-label">"السبب:"</span>
                                                        {reason}
                                                    </div>
                                                })}
                                            </div>
                                        </div>
                                        <div class="request-row__id">{format!("#{}", apt.id.short())}</div>
                                    </div>
                                    <div class="request-row__actions">
                                        <button
                                            class="action-button action-button--confirm"
                                            on:click=move |_| on_update.run((id, AppointmentStatus::Confirmed))
                                        >
                                            {icon("check-circle")}
                                            "تأكيد الموعد"
                                        </button>
                                        <button
                                            class="action-button action-button--reject"
                                            on:click=move |_| on_update.run((id, AppointmentStatus::Cancelled))
                                        >
                                            {icon("x-circle")}
                                            "رفض"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

/// Confirmed visits waiting to happen
#[component]
fn UpcomingPanel(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    on_update: Callback<(AppointmentId, AppointmentStatus)>,
) -> impl IntoView {
    view! {
        <div class="panel">
            <div class="panel__header">
                <h3 class="panel__title">"المواعيد القادمة"</h3>
            </div>
            <div class="panel__list">
                <Show
                    when=move || !appointments.get().is_empty()
                    fallback=|| view! { <div class="panel__empty">"لا توجد مواعيد مؤكدة"</div> }
                >
                    <For
                        each=move || appointments.get()
                        key=|apt| apt.to_string_id()
                        children=move |apt: Appointment| {
                            let id = apt.id;
                            view! {
                                <div class="visit-row">
                                    <div class="visit-row__patient">
                                        <div class="visit-row__marker"></div>
                                        <div>
                                            <div class="visit-row__name">{apt.patient_name.clone()}</div>
                                            <div class="visit-row__when">
                                                {icon("calendar")}
                                                {format_date(&apt.date)}
                                                <span class="visit-row__sep">"|"</span>
                                                {format_time(&apt.date)}
                                            </div>
                                        </div>
                                    </div>
                                    <div class="visit-row__actions">
                                        <button
                                            class="icon-button icon-button--complete"
                                            title="تمت الزيارة"
                                            on:click=move |_| on_update.run((id, AppointmentStatus::Completed))
                                        >
                                            {icon("check-circle")}
                                        </button>
                                        <button
                                            class="icon-button icon-button--cancel"
                                            title="إلغاء"
                                            on:click=move |_| on_update.run((id, AppointmentStatus::Cancelled))
                                        >
                                            {icon("x-circle")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

/// Status distribution as a plain CSS bar chart
#[component]
fn StatusChart(
    #[prop(into)] pending: Signal<usize>,
    #[prop(into)] confirmed: Signal<usize>,
    #[prop(into)] completed: Signal<usize>,
) -> impl IntoView {
    let max = Signal::derive(move || pending.get().max(confirmed.get()).max(completed.get()));

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">"أداء العيادة"</h3>
            <div class="chart">
                <div class="chart__item">
                    <span class="chart__value">{move || pending.get()}</span>
                    <div
                        class="chart__bar chart__bar--rose"
                        style:height=move || bar_height(pending.get(), max.get())
                    ></div>
                    <span class="chart__label">"جديدة"</span>
                </div>
                <div class="chart__item">
                    <span class="chart__value">{move || confirmed.get()}</span>
                    <div
                        class="chart__bar chart__bar--sky"
                        style:height=move || bar_height(confirmed.get(), max.get())
                    ></div>
                    <span class="chart__label">"مؤكدة"</span>
                </div>
                <div class="chart__item">
                    <span class="chart__value">{move || completed.get()}</span>
                    <div
                        class="chart__bar chart__bar--emerald"
                        style:height=move || bar_height(completed.get(), max.get())
                    ></div>
                    <span class="chart__label">"مكتملة"</span>
                </div>
            </div>
        </div>
    }
}

/// Bar height as a percentage of the tallest bar
fn bar_height(value: usize, max: usize) -> String {
    format!("{}%", (value * 100) / max.max(1))
}

#[cfg(test)]
mod tests {
    use super::bar_height;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(3, 4), "75%");
        assert_eq!(bar_height(5, 5), "100%");
        assert_eq!(bar_height(0, 7), "0%");
    }

    #[test]
    fn test_bar_height_empty_chart() {
        assert_eq!(bar_height(0, 0), "0%");
    }
}
