//! Interactive session state: one table and one enrollment modal.

use std::io::{self, Write};

use cohort_lib::enrollment::EnrollmentModal;
use cohort_lib::error::EnrollmentError;
use cohort_lib::render::{RenderOptions, render_table};
use cohort_lib::{Row, TableController, TableDefinition, TableEvent};

use crate::command::{Command, HELP};

pub struct Session {
    table: TableController,
    source_rows: Vec<Row>,
    modal: EnrollmentModal,
    options: RenderOptions,
}

impl Session {
    pub fn new(definition: TableDefinition) -> Self {
        let source_rows = definition.rows.clone();
        Self {
            table: TableController::from_definition(definition),
            source_rows,
            modal: EnrollmentModal::new(),
            options: RenderOptions::default(),
        }
    }

    /// Print the current table.
    pub fn show(&self, out: &mut impl Write) -> io::Result<()> {
        for line in render_table(&self.table.view(), self.options) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Run one command and print its result.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        let event = match command {
            Command::Show => None,
            Command::Sort(key) => {
                let event = self.table.sort_by(&key);
                if event.is_none() {
                    writeln!(out, "'{}' is not sortable", key)?;
                }
                event
            }
            Command::Next => Some(self.table.next_page()),
            Command::Prev => Some(self.table.prev_page()),
            Command::Check(id) => Some(self.table.toggle_key(&id, true)),
            Command::Uncheck(id) => Some(self.table.toggle_key(&id, false)),
            Command::All => Some(self.table.toggle_all_on_page(true)),
            Command::Clear => Some(self.table.toggle_all_on_page(false)),
            Command::Reload => Some(self.table.set_rows(self.source_rows.clone())),
            Command::Enroll {
                course,
                term,
                start,
                end,
            } => {
                match self.enroll(&course, &term, &start, &end) {
                    Ok(summary) => writeln!(out, "{}", summary)?,
                    Err(e) => writeln!(out, "enrollment rejected: {}", e)?,
                }
                return Ok(());
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        if let Some(event) = event {
            log::info!("{:?}", event);
            if let Some(note) = describe(&event) {
                writeln!(out, "{}", note)?;
            }
        }
        self.show(out)
    }

    /// Open the modal, fill the form and submit it. The modal is closed again
    /// whether or not the enrollment goes through.
    fn enroll(
        &mut self,
        course: &str,
        term: &str,
        start: &str,
        end: &str,
    ) -> Result<String, EnrollmentError> {
        self.modal.state.open();
        let result = self.fill_and_submit(course, term, start, end);
        if result.is_err() {
            self.modal.state.close();
            self.modal.form.reset();
        }
        result
    }

    fn fill_and_submit(
        &mut self,
        course: &str,
        term: &str,
        start: &str,
        end: &str,
    ) -> Result<String, EnrollmentError> {
        let form = &mut self.modal.form;
        form.set_course_value(course);
        form.set_term_input(term)?;
        form.set_start_input(start)?;
        form.set_end_input(end)?;

        let enrollment = self.modal.submit()?;
        Ok(format!(
            "enrolled: {} term {} ({} ~ {})",
            enrollment.course,
            enrollment.term,
            enrollment.formatted_start(),
            enrollment.formatted_end()
        ))
    }
}

fn describe(event: &TableEvent) -> Option<String> {
    match event {
        TableEvent::Sorted { deselected, .. } | TableEvent::PageChanged { deselected, .. }
            if !deselected.is_empty() =>
        {
            Some(format!("cleared selection: {}", deselected.join(", ")))
        }
        TableEvent::SelectionChanged { added, removed } if !added.is_empty() || !removed.is_empty() => {
            Some(format!("checked: {:?}, unchecked: {:?}", added, removed))
        }
        _ => None,
    }
}
