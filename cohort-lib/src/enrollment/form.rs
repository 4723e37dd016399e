//! Enrollment form state and submit validation.

use std::fmt;

use chrono::Datelike;
use chrono::NaiveDate;

use crate::error::EnrollmentError;

/// Input format accepted by the date setters.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Courses offered in the course selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    FrontendBootcamp,
    BackendBootcamp,
}

impl Course {
    /// All selectable courses, in menu order.
    pub const ALL: [Course; 2] = [Course::FrontendBootcamp, Course::BackendBootcamp];

    /// Option value submitted by the selector.
    pub fn value(self) -> &'static str {
        match self {
            Course::FrontendBootcamp => "frontend-bootcamp",
            Course::BackendBootcamp => "backend-bootcamp",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Course::FrontendBootcamp => "웹 개발 초격차 프론트엔드 부트캠프",
            Course::BackendBootcamp => "웹 개발 초격차 백엔드 부트캠프",
        }
    }

    /// Look up a course by option value. The empty placeholder maps to `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated enrollment produced by [`EnrollmentForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub course: Course,
    pub term: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Enrollment {
    /// Start date in long Korean form, e.g. `2025년 6월 11일`.
    pub fn formatted_start(&self) -> String {
        format_korean_date(self.start_date)
    }

    /// End date in long Korean form.
    pub fn formatted_end(&self) -> String {
        format_korean_date(self.end_date)
    }
}

/// Format a date as `YYYY년 M월 D일`.
pub fn format_korean_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// Form state behind the enrollment modal.
///
/// Every field starts empty and is required on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentForm {
    pub course: Option<Course>,
    pub term: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EnrollmentForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the course from a selector value. Unknown values clear it.
    pub fn set_course_value(&mut self, value: &str) {
        self.course = Course::from_value(value);
    }

    /// Set the term from numeric-input text.
    ///
    /// Empty input clears the term. Otherwise the leading digits are read,
    /// so `"14th"` gives 14.
    pub fn set_term_input(&mut self, input: &str) -> Result<(), EnrollmentError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.term = None;
            return Ok(());
        }

        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let term = trimmed[..digits_end]
            .parse::<u32>()
            .map_err(|_| EnrollmentError::invalid_term(input))?;
        self.term = Some(term);
        Ok(())
    }

    /// Set the start date from `YYYY-MM-DD` text. Empty input clears it.
    pub fn set_start_input(&mut self, input: &str) -> Result<(), EnrollmentError> {
        self.start_date = parse_date_input(input)?;
        Ok(())
    }

    /// Set the end date from `YYYY-MM-DD` text. Empty input clears it.
    pub fn set_end_input(&mut self, input: &str) -> Result<(), EnrollmentError> {
        self.end_date = parse_date_input(input)?;
        Ok(())
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the form and produce an enrollment.
    ///
    /// A term of zero counts as missing. On success the form is reset; on
    /// failure it is left as is.
    pub fn submit(&mut self) -> Result<Enrollment, EnrollmentError> {
        let course = self.course.ok_or_else(|| EnrollmentError::missing("course"))?;
        let term = self
            .term
            .filter(|t| *t != 0)
            .ok_or_else(|| EnrollmentError::missing("term"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| EnrollmentError::missing("start_date"))?;
        let end_date = self.end_date.ok_or_else(|| EnrollmentError::missing("end_date"))?;

        self.reset();
        Ok(Enrollment {
            course,
            term,
            start_date,
            end_date,
        })
    }
}

fn parse_date_input(input: &str) -> Result<Option<NaiveDate>, EnrollmentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| EnrollmentError::invalid_date(input))
}
