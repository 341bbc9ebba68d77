//! Message catalogue

use reservation_core::{EventType, ReservationType};

/// Every user-facing string for one language
#[derive(Debug)]
pub struct Messages {
    // API responses
    pub reservation_submitted: &'static str,
    pub missing_fields: &'static str,
    pub invalid_email: &'static str,
    pub invalid_date: &'static str,
    pub date_in_past: &'static str,
    pub invalid_time: &'static str,
    pub invalid_guests: &'static str,
    pub invalid_attendees: &'static str,
    pub invalid_reservation_type: &'static str,
    pub invalid_request: &'static str,
    pub save_failed: &'static str,
    pub unexpected_error: &'static str,

    // Field labels
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub date_label: &'static str,
    pub time_label: &'static str,
    pub guests_label: &'static str,
    pub message_label: &'static str,
    pub reservation_type_label: &'static str,
    pub event_type_label: &'static str,
    pub attendees_label: &'static str,
    pub event_description_label: &'static str,

    // Reservation kinds
    pub table: &'static str,
    pub event: &'static str,
    /// Indexed like [`EventType::ALL`]
    pub event_types: [&'static str; 6],

    // Staff email
    pub email_heading: &'static str,
    pub email_event_heading: &'static str,
    pub email_subject_table: &'static str,
    pub email_subject_event: &'static str,
    pub email_footer: &'static str,
    pub not_provided: &'static str,

    // Form page
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
    pub select_placeholder: &'static str,
    pub optional_hint: &'static str,
    pub submit_button: &'static str,
    pub submitting_button: &'static str,
    pub error_notice: &'static str,
    pub connection_error: &'static str,
}

impl Messages {
    /// Label for a reservation kind
    #[must_use]
    pub fn reservation_type(&self, kind: ReservationType) -> &'static str {
        match kind {
            ReservationType::Table => self.table,
            ReservationType::Event => self.event,
        }
    }

    /// Label for an event kind
    #[must_use]
    pub fn event_type(&self, kind: EventType) -> &'static str {
        EventType::ALL
            .iter()
            .position(|t| *t == kind)
            .map_or(self.event_types[5], |i| self.event_types[i])
    }

    /// Localized text for a stable error code, if there is one
    #[must_use]
    pub fn error_message(&self, code: &str) -> Option<&'static str> {
        let text = match code {
            "MISSING_FIELDS" => self.missing_fields,
            "INVALID_EMAIL" => self.invalid_email,
            "INVALID_DATE" => self.invalid_date,
            "DATE_IN_PAST" => self.date_in_past,
            "INVALID_TIME" => self.invalid_time,
            "INVALID_GUESTS" => self.invalid_guests,
            "INVALID_ATTENDEES" => self.invalid_attendees,
            "INVALID_RESERVATION_TYPE" => self.invalid_reservation_type,
            "INVALID_REQUEST_FORMAT" => self.invalid_request,
            "DATABASE_ERROR" => self.save_failed,
            "INTERNAL_ERROR" => self.unexpected_error,
            _ => return None,
        };
        Some(text)
    }
}

pub(super) static ES: Messages = Messages {
    reservation_submitted: "Reservación enviada con éxito. Nos pondremos en contacto pronto.",
    missing_fields: "Por favor complete todos los campos requeridos.",
    invalid_email: "El correo electrónico no es válido.",
    invalid_date: "La fecha no es válida.",
    date_in_past: "La fecha de la reserva no puede ser anterior a hoy.",
    invalid_time: "La hora no es válida.",
    invalid_guests: "El número de invitados debe ser un entero entre 1 y 500.",
    invalid_attendees: "El número de asistentes debe ser un entero entre 1 y 500.",
    invalid_reservation_type: "El tipo de reserva no es válido.",
    invalid_request: "La solicitud no tiene un formato válido.",
    save_failed: "No se pudo guardar la reserva. Por favor intente de nuevo más tarde.",
    unexpected_error: "Ocurrió un error inesperado. Por favor intente de nuevo más tarde.",

    name_label: "Nombre",
    email_label: "Correo electrónico",
    phone_label: "Teléfono",
    date_label: "Fecha",
    time_label: "Hora",
    guests_label: "Invitados",
    message_label: "Mensaje",
    reservation_type_label: "Tipo de reserva",
    event_type_label: "Tipo de evento",
    attendees_label: "Asistentes",
    event_description_label: "Detalles del evento",

    table: "Mesa",
    event: "Evento",
    event_types: [
        "Cumpleaños",
        "Aniversario",
        "Boda",
        "Evento corporativo",
        "Graduación",
        "Otro",
    ],

    email_heading: "Se ha recibido una nueva reserva",
    email_event_heading: "Detalles del evento",
    email_subject_table: "Nueva reserva de mesa",
    email_subject_event: "Nueva reserva de evento",
    email_footer: "Enviado desde el formulario de reservas de",
    not_provided: "No proporcionado",

    form_title: "Hacer una reserva",
    form_subtitle: "Reserve su mesa o celebre su evento con nosotros.",
    select_placeholder: "Seleccione una opción",
    optional_hint: "(opcional)",
    submit_button: "Enviar reserva",
    submitting_button: "Enviando...",
    error_notice: "Error al enviar la reservación. Por favor intente de nuevo.",
    connection_error: "Error de conexión. Por favor intente de nuevo más tarde.",
};

pub(super) static EN: Messages = Messages {
    reservation_submitted: "Reservation sent successfully. We will contact you soon.",
    missing_fields: "Please fill in all required fields.",
    invalid_email: "The email address is not valid.",
    invalid_date: "The date is not valid.",
    date_in_past: "The reservation date cannot be earlier than today.",
    invalid_time: "The time is not valid.",
    invalid_guests: "The number of guests must be a whole number between 1 and 500.",
    invalid_attendees: "The number of attendees must be a whole number between 1 and 500.",
    invalid_reservation_type: "The reservation type is not valid.",
    invalid_request: "The request is not in a valid format.",
    save_failed: "The reservation could not be saved. Please try again later.",
    unexpected_error: "An unexpected error occurred. Please try again later.",

    name_label: "Name",
    email_label: "Email",
    phone_label: "Phone",
    date_label: "Date",
    time_label: "Time",
    guests_label: "Guests",
    message_label: "Message",
    reservation_type_label: "Reservation type",
    event_type_label: "Event type",
    attendees_label: "Attendees",
    event_description_label: "Event details",

    table: "Table",
    event: "Event",
    event_types: [
        "Birthday",
        "Anniversary",
        "Wedding",
        "Corporate event",
        "Graduation",
        "Other",
    ],

    email_heading: "A new reservation has been received",
    email_event_heading: "Event details",
    email_subject_table: "New table reservation",
    email_subject_event: "New event reservation",
    email_footer: "Sent from the reservation form of",
    not_provided: "Not provided",

    form_title: "Make a reservation",
    form_subtitle: "Book your table or celebrate your event with us.",
    select_placeholder: "Select an option",
    optional_hint: "(optional)",
    submit_button: "Send reservation",
    submitting_button: "Sending...",
    error_notice: "Error sending the reservation. Please try again.",
    connection_error: "Connection error. Please try again later.",
};
