//! Interactive session loop for the planner console.
//!
//! # Responsibility
//! - Render the fixed menu, read user choices, and dispatch to the catalog
//!   loader and query service.
//! - Own every user-facing sentence; lower layers return typed results.
//!
//! # Invariants
//! - The loop is an explicit state machine over `SessionState`; `Exit` is
//!   the only terminal state.
//! - Each operation runs to completion before the next prompt is shown.
//! - End of input ends the session quietly; only option 9 prints the
//!   farewell notice.

use crate::catalog::loader::load_catalog;
use crate::catalog::source::LineSource;
use crate::model::course::Course;
use crate::service::query_service::{QueryError, QueryService};
use crate::store::course_store::CourseStore;
use log::{info, warn};
use std::io::{self, BufRead, Write};

const INVALID_MENU_NOTICE: &str = "Invalid input. Please enter a numeric menu option.";
const NO_DATA_NOTICE: &str = "No data loaded. Please select Option 1 to load the file first.";
const EMPTY_COURSE_NOTICE: &str = "No course number entered. Please try again.";
const FAREWELL_NOTICE: &str = "Thank you for using the course planner!";

/// Session loop states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Rendering the menu and waiting for an option choice.
    Menu,
    /// Waiting for a course identifier after option 3.
    AwaitCourseQuery,
    /// Terminal state; the loop stops.
    Exit,
}

/// One interactive planning session over generic console handles.
///
/// The input/output handles are generic so scripted tests can drive a full
/// session without a terminal; the binary passes locked stdin/stdout.
pub struct Session<S, R, W>
where
    S: LineSource,
    R: BufRead,
    W: Write,
{
    source: S,
    input: R,
    output: W,
    store: CourseStore,
    state: SessionState,
}

impl<S, R, W> Session<S, R, W>
where
    S: LineSource,
    R: BufRead,
    W: Write,
{
    /// Creates a session with an empty, unloaded store.
    pub fn new(source: S, input: R, output: W) -> Self {
        Self {
            source,
            input,
            output,
            store: CourseStore::new(),
            state: SessionState::Menu,
        }
    }

    /// Current loop state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read access to the session store.
    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    /// Runs the loop until exit or end of input.
    ///
    /// # Errors
    /// - Propagates console read/write failures only; user-level problems
    ///   are reported as console notices and keep the loop alive.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=session_start module=session status=ok");
        loop {
            match self.state {
                SessionState::Menu => self.menu_round()?,
                SessionState::AwaitCourseQuery => self.course_query_round()?,
                SessionState::Exit => break,
            }
        }
        info!("event=session_end module=session status=ok");
        Ok(())
    }

    fn menu_round(&mut self) -> io::Result<()> {
        self.write_menu()?;
        let Some(line) = self.read_line()? else {
            self.state = SessionState::Exit;
            return Ok(());
        };
        self.state = self.apply_menu_choice(line.trim())?;
        Ok(())
    }

    /// Transition function for the `Menu` state.
    fn apply_menu_choice(&mut self, choice: &str) -> io::Result<SessionState> {
        let Ok(option) = choice.parse::<i32>() else {
            warn!("event=menu_choice module=session status=invalid");
            writeln!(self.output, "{INVALID_MENU_NOTICE}")?;
            return Ok(SessionState::Menu);
        };

        match option {
            1 => {
                info!("event=menu_choice module=session status=ok option=1");
                self.load_round()?;
                Ok(SessionState::Menu)
            }
            2 => {
                info!("event=menu_choice module=session status=ok option=2");
                self.list_round()?;
                Ok(SessionState::Menu)
            }
            3 => {
                info!("event=menu_choice module=session status=ok option=3");
                Ok(SessionState::AwaitCourseQuery)
            }
            9 => {
                info!("event=menu_choice module=session status=ok option=9");
                writeln!(self.output, "{FAREWELL_NOTICE}")?;
                Ok(SessionState::Exit)
            }
            other => {
                warn!("event=menu_choice module=session status=unknown option={other}");
                writeln!(self.output, "{other} is not a valid option.")?;
                Ok(SessionState::Menu)
            }
        }
    }

    fn load_round(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Loading data from {}.", self.source.label())?;

        match load_catalog(&self.source, &mut self.store) {
            Ok(report) => {
                for skipped in &report.skipped {
                    writeln!(
                        self.output,
                        "Warning: Invalid line {} ignored.",
                        skipped.line_number
                    )?;
                }
                writeln!(
                    self.output,
                    "Successfully loaded {} courses from {}.",
                    report.loaded,
                    self.source.label()
                )?;
            }
            Err(err) => {
                writeln!(self.output, "Error: Unable to open file '{}'.", err.label())?;
            }
        }
        Ok(())
    }

    fn list_round(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Here is a sample schedule:")?;

        match QueryService::new(&self.store).sorted_courses() {
            Ok(courses) => {
                writeln!(self.output, "Alphanumeric list of all courses:")?;
                for course in courses {
                    writeln!(self.output, "{}: {}", course.identifier, course.title)?;
                }
            }
            Err(err) => write_query_notice(&mut self.output, &err)?,
        }
        Ok(())
    }

    fn course_query_round(&mut self) -> io::Result<()> {
        write!(self.output, "What course do you want to know about? ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            self.state = SessionState::Exit;
            return Ok(());
        };

        let entered = line.trim();
        if entered.is_empty() {
            writeln!(self.output, "{EMPTY_COURSE_NOTICE}")?;
            self.state = SessionState::Menu;
            return Ok(());
        }

        match QueryService::new(&self.store).course_details(entered) {
            Ok(course) => write_course_details(&mut self.output, course)?,
            Err(err) => write_query_notice(&mut self.output, &err)?,
        }
        self.state = SessionState::Menu;
        Ok(())
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, " Welcome to the course planner.")?;
        writeln!(self.output, "1. Load file data into the data structure.")?;
        writeln!(self.output, "2. Print an alphanumeric list of all courses.")?;
        writeln!(self.output, "3. Print a specific course.")?;
        writeln!(self.output, "9. Exit")?;
        write!(self.output, "What would you like to do? ")?;
        self.output.flush()
    }

    /// Reads one input line; `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            info!("event=session_eof module=session status=ok");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn write_course_details<W: Write>(output: &mut W, course: &Course) -> io::Result<()> {
    writeln!(output, "Course Number: {}", course.identifier)?;
    writeln!(output, "Course Title : {}", course.title)?;
    if course.has_prerequisites() {
        writeln!(output, "Prerequisites: {}", course.prerequisites.join(", "))
    } else {
        writeln!(output, "Prerequisites: None")
    }
}

fn write_query_notice<W: Write>(output: &mut W, error: &QueryError) -> io::Result<()> {
    match error {
        QueryError::NotLoaded => writeln!(output, "{NO_DATA_NOTICE}"),
        QueryError::NotFound(identifier) => writeln!(output, "Course '{identifier}' not found."),
    }
}
