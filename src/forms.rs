//! Lead-capture forms: the contact inquiry and the course enrollment modal.
//!
//! Nothing is sent anywhere. A valid submission produces an
//! [`Acknowledgement`] (the record as JSON for the console plus the alert
//! text) and the form resets.

use serde::Serialize;
use thiserror::Error;

use crate::clock::Countdown;

/// Simulated request latency of the enrollment form.
pub const ENROLL_DELAY_MS: f64 = 1500.0;
/// Simulated request latency of the contact page's form.
pub const CONTACT_DELAY_MS: f64 = 1500.0;

pub const CONTACT_THANKS: &str = "Thank you for your inquiry! We will contact you soon.";

const COURSE_OPTIONS: &[(&str, &str)] = &[
    ("ielts", "IELTS"),
    ("spoken-english", "Spoken English"),
    ("programming", "Programming Languages"),
    ("competitive", "Competitive Exams"),
    ("personality", "Personality Development"),
    ("corporate", "Corporate Communication"),
    ("other", "Other"),
];

const EDUCATION_OPTIONS: &[(&str, &str)] = &[
    ("high-school", "High School"),
    ("diploma", "Diploma"),
    ("bachelors", "Bachelor's Degree"),
    ("masters", "Master's Degree"),
    ("phd", "PhD"),
    ("other", "Other"),
];

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{value:?} is not a valid email address")]
    InvalidEmail { value: String },
    #[error("{field} must be a date (YYYY-MM-DD)")]
    InvalidDate { field: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    /// `(value, label)` pairs; an empty value means nothing chosen.
    Select(&'static [(&'static str, &'static str)]),
    LongText,
}

#[derive(Clone, Debug)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl Field {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
        }
    }

    /// What the field shows: the option label for selects, the raw text otherwise.
    pub fn display(&self) -> &str {
        match self.kind {
            FieldKind::Select(options) => options
                .iter()
                .find(|(v, _)| *v == self.value)
                .map(|(_, label)| *label)
                .unwrap_or(""),
            _ => &self.value,
        }
    }

    fn check(&self) -> Result<(), FormError> {
        let value = self.value.trim();
        if value.is_empty() {
            return if self.required {
                Err(FormError::Required { field: self.label })
            } else {
                Ok(())
            };
        }
        match self.kind {
            FieldKind::Email if !is_email(value) => Err(FormError::InvalidEmail {
                value: value.to_string(),
            }),
            FieldKind::Date if !is_date(value) => Err(FormError::InvalidDate { field: self.label }),
            _ => Ok(()),
        }
    }
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn is_date(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    let [y, m, d] = parts[..] else {
        return false;
    };
    let digits = |p: &str, n: usize| p.len() == n && p.bytes().all(|b| b.is_ascii_digit());
    if !(digits(y, 4) && digits(m, 2) && digits(d, 2)) {
        return false;
    }
    let month: u32 = m.parse().unwrap_or(0);
    let day: u32 = d.parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// A set of fields with one focused.
#[derive(Clone, Debug)]
pub struct Form {
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl Form {
    pub fn contact() -> Self {
        Self {
            fields: vec![
                Field::new("name", "Full Name", FieldKind::Text, true),
                Field::new("email", "Email Address", FieldKind::Email, true),
                Field::new("phone", "Phone Number", FieldKind::Phone, true),
                Field::new("course", "Interested Course", FieldKind::Select(COURSE_OPTIONS), true),
                Field::new("message", "Message", FieldKind::LongText, false),
            ],
            focus: 0,
        }
    }

    pub fn enrollment() -> Self {
        Self {
            fields: vec![
                Field::new("fullName", "Full Name", FieldKind::Text, true),
                Field::new("dateOfBirth", "Date of Birth", FieldKind::Date, true),
                Field::new("email", "Email Address", FieldKind::Email, true),
                Field::new("phone", "Phone Number", FieldKind::Phone, true),
                Field::new("education", "Education Level", FieldKind::Select(EDUCATION_OPTIONS), true),
                Field::new("preferredStartDate", "Preferred Start Date", FieldKind::Date, true),
                Field::new("message", "Additional Message", FieldKind::LongText, false),
            ],
            focus: 0,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    #[cfg(test)]
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.name == name) {
            f.value = value.to_string();
        }
    }

    #[cfg(test)]
    pub fn focused(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focus_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Type into the focused field. Selects ignore free text.
    pub fn type_char(&mut self, c: char) {
        if let Some(f) = self.fields.get_mut(self.focus) {
            if !matches!(f.kind, FieldKind::Select(_)) && !c.is_control() {
                f.value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(f) = self.fields.get_mut(self.focus) {
            match f.kind {
                FieldKind::Select(_) => f.value.clear(),
                _ => {
                    f.value.pop();
                }
            }
        }
    }

    /// Step the focused select through its options (wrapping through "none").
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(f) = self.fields.get_mut(self.focus) else {
            return;
        };
        let FieldKind::Select(options) = f.kind else {
            return;
        };
        // slot 0 is the placeholder, options occupy 1..=len
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|(v, _)| *v == f.value)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        f.value = match next {
            0 => String::new(),
            i => options[i - 1].0.to_string(),
        };
    }

    /// First failing field in display order.
    pub fn validate(&self) -> Result<(), FormError> {
        self.fields.iter().try_for_each(Field::check)
    }

    /// Index of the first invalid field, for moving focus there.
    pub fn first_invalid(&self) -> Option<usize> {
        self.fields.iter().position(|f| f.check().is_err())
    }

    pub fn reset(&mut self) {
        for f in self.fields.iter_mut() {
            f.value.clear();
        }
        self.focus = 0;
    }
}

#[derive(Serialize)]
struct ContactRecord<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    course: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrollmentRecord<'a> {
    full_name: &'a str,
    email: &'a str,
    phone: &'a str,
    date_of_birth: &'a str,
    education: &'a str,
    preferred_start_date: &'a str,
    message: &'a str,
    course: &'a str,
}

/// What a successful submission surfaces: a console record and an alert.
#[derive(Clone, Debug, PartialEq)]
pub struct Acknowledgement {
    pub record_json: String,
    pub message: String,
}

/// Validate the contact form; on failure the first bad field takes focus.
pub fn check_contact(form: &mut Form) -> Result<(), FormError> {
    if let Err(e) = form.validate() {
        if let Some(i) = form.first_invalid() {
            form.focus_field(i);
        }
        return Err(e);
    }
    Ok(())
}

/// Record and thank-you for a contact form already validated; resets it.
pub fn acknowledge_contact(form: &mut Form) -> Acknowledgement {
    let record = ContactRecord {
        name: form.value("name"),
        email: form.value("email"),
        phone: form.value("phone"),
        course: form.value("course"),
        message: form.value("message"),
    };
    let record_json = serde_json::to_string(&record).unwrap_or_default();
    form.reset();
    Acknowledgement {
        record_json,
        message: CONTACT_THANKS.to_string(),
    }
}

/// The enrollment dialog for one course.
pub struct EnrollmentModal {
    pub course: &'static str,
    pub form: Form,
    submitting: Option<Countdown>,
}

impl EnrollmentModal {
    pub fn open(course: &'static str) -> Self {
        Self {
            course,
            form: Form::enrollment(),
            submitting: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Start the simulated request. Edits are ignored until it finishes.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Ok(());
        }
        if let Err(e) = self.form.validate() {
            if let Some(i) = self.form.first_invalid() {
                self.form.focus_field(i);
            }
            return Err(e);
        }
        self.submitting = Some(Countdown::new(ENROLL_DELAY_MS));
        Ok(())
    }

    /// Advance the pending request; yields the acknowledgement when it lands.
    /// The caller closes the modal after that.
    pub fn tick(&mut self, delta_ms: f64) -> Option<Acknowledgement> {
        let done = self.submitting.as_mut()?.advance(delta_ms);
        if !done {
            return None;
        }
        self.submitting = None;

        let f = &self.form;
        let record = EnrollmentRecord {
            full_name: f.value("fullName"),
            email: f.value("email"),
            phone: f.value("phone"),
            date_of_birth: f.value("dateOfBirth"),
            education: f.value("education"),
            preferred_start_date: f.value("preferredStartDate"),
            message: f.value("message"),
            course: self.course,
        };
        let record_json = serde_json::to_string(&record).unwrap_or_default();
        self.form.reset();
        Some(Acknowledgement {
            record_json,
            message: format!(
                "Thank you for enrolling in {}! We will contact you soon.",
                self.course
            ),
        })
    }
}
