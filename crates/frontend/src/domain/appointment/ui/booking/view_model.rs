use super::model;
use contracts::domain::appointment::BookAppointmentRequest;
use leptos::prelude::*;

/// ViewModel for the public booking form
#[derive(Clone, Copy)]
pub struct BookingViewModel {
    pub form: RwSignal<BookAppointmentRequest>,
    /// True while the thank-you panel replaces the form
    pub submitted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl BookingViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BookAppointmentRequest::default()),
            submitted: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Same presence checks the backend runs. The inputs carry `required`
    /// attributes, so this only catches submits the browser let through;
    /// those are dropped silently. The doctor is preselected and therefore
    /// not checked here either.
    fn form_is_complete(request: &BookAppointmentRequest) -> bool {
        !request.patient_name.trim().is_empty()
            && !request.patient_phone.trim().is_empty()
            && !request.date.trim().is_empty()
    }

    /// Send the booking. On success the confirmation panel shows for five
    /// seconds, then the form comes back empty (the doctor select is
    /// re-preselected by the view).
    pub fn submit_command(&self) -> impl Fn() + '_ {
        move || {
            let this = *self;
            let request = this.form.get();
            if !Self::form_is_complete(&request) {
                return;
            }
            leptos::task::spawn_local(async move {
                match model::submit_booking(&request).await {
                    Ok(_) => {
                        this.error.set(None);
                        this.submitted.set(true);
                        gloo_timers::future::TimeoutFuture::new(5000).await;
                        this.submitted.set(false);
                        this.form.set(BookAppointmentRequest::default());
                    }
                    Err(e) => this.error.set(Some(e)),
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> BookAppointmentRequest {
        BookAppointmentRequest {
            patient_name: "ليلى العلمي".to_string(),
            patient_phone: "0612345678".to_string(),
            doctor_id: "dr-nadia".to_string(),
            date: "2026-09-01T10:00".to_string(),
            reason: None,
        }
    }

    #[test]
    fn test_form_completeness() {
        assert!(BookingViewModel::form_is_complete(&filled_request()));
        assert!(!BookingViewModel::form_is_complete(
            &BookAppointmentRequest::default()
        ));

        let mut blank_phone = filled_request();
        blank_phone.patient_phone = "   ".to_string();
        assert!(!BookingViewModel::form_is_complete(&blank_phone));
    }
}
