use crate::dashboards::StaffDashboard;
use crate::site::PublicSite;
use leptos::prelude::*;

/// Which face of the app is on screen: the patient-facing site or the
/// staff dashboard.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Public,
    Staff,
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the view mode to the whole app via context.
    let mode = RwSignal::new(ViewMode::Public);
    provide_context(mode);

    view! {
        <Show
            when=move || mode.get() == ViewMode::Staff
            fallback=|| view! { <PublicSite /> }
        >
            <StaffDashboard />
        </Show>
        <ModeToggle />
    }
}

/// Discreet corner button that swaps between the two faces. Stands in for a
/// real login screen.
#[component]
fn ModeToggle() -> impl IntoView {
    let mode = expect_context::<RwSignal<ViewMode>>();

    let label = move || match mode.get() {
        ViewMode::Public => "Clinic Login",
        ViewMode::Staff => "View Site",
    };
    let class = move || match mode.get() {
        ViewMode::Public => "mode-toggle mode-toggle--public",
        ViewMode::Staff => "mode-toggle mode-toggle--staff",
    };

    view! {
        <button
            class=class
            on:click=move |_| {
                mode.update(|m| {
                    *m = match m {
                        ViewMode::Public => ViewMode::Staff,
                        ViewMode::Staff => ViewMode::Public,
                    }
                })
            }
        >
            {label}
        </button>
    }
}
