use anyhow::Result;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::roster::{parse_identifier, Roster, RosterError, SortKey, MAX_COURSES, MAX_STUDENTS};

use super::forms::{confirm, prompt_count, prompt_record};
use super::helpers::heading;
use super::screens;
use super::terminal::{Console, InputClosed, MessageKind};

/// Selections offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Instructions,
    EnterData,
    CourseStatistics,
    StudentStatistics,
    SortDescending,
    SortAscending,
    SortById,
    SortByName,
    SearchById,
    SearchByName,
    GradeDistribution,
    DisplayAll,
}

impl MenuChoice {
    /// Map a raw menu line to a selection; anything outside `0..=12` is `None`.
    pub fn from_input(raw: &str) -> Option<Self> {
        let choice = match raw.trim().parse::<i64>().ok()? {
            0 => MenuChoice::Exit,
            1 => MenuChoice::Instructions,
            2 => MenuChoice::EnterData,
            3 => MenuChoice::CourseStatistics,
            4 => MenuChoice::StudentStatistics,
            5 => MenuChoice::SortDescending,
            6 => MenuChoice::SortAscending,
            7 => MenuChoice::SortById,
            8 => MenuChoice::SortByName,
            9 => MenuChoice::SearchById,
            10 => MenuChoice::SearchByName,
            11 => MenuChoice::GradeDistribution,
            12 => MenuChoice::DisplayAll,
            _ => return None,
        };
        Some(choice)
    }

    /// Whether the selection needs a populated roster before it can run.
    pub fn requires_data(self) -> bool {
        !matches!(
            self,
            MenuChoice::Exit | MenuChoice::Instructions | MenuChoice::EnterData
        )
    }

    fn sort_key(self) -> Option<(SortKey, &'static str)> {
        match self {
            MenuChoice::SortDescending => {
                Some((SortKey::TotalDescending, "SORTED BY HIGHEST SCORES:"))
            }
            MenuChoice::SortAscending => {
                Some((SortKey::TotalAscending, "SORTED BY LOWEST SCORES:"))
            }
            MenuChoice::SortById => Some((SortKey::Id, "SORTED BY STUDENT ID:")),
            MenuChoice::SortByName => Some((SortKey::Name, "SORTED BY STUDENT NAME:")),
            _ => None,
        }
    }
}

/// Session state: the roster plus the flag recording whether an entry pass
/// has completed. Report, sort and search selections are gated on the flag.
pub struct App {
    roster: Roster,
    data_populated: bool,
}

impl App {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            data_populated: false,
        }
    }

    /// Print the banner and size the roster, prompting for whichever counts
    /// the configuration left open.
    pub fn start(console: &mut dyn Console, config: &SessionConfig) -> Result<Self> {
        console.line(&format!("\n{}", screens::banner()))?;

        let students = match config.students {
            Some(students) => students,
            None => {
                console.write("\n")?;
                prompt_count(console, "students", MAX_STUDENTS)?
            }
        };
        let courses = match config.courses {
            Some(courses) => courses,
            None => prompt_count(console, "courses", MAX_COURSES)?,
        };

        info!(students, courses, "session configured");
        Ok(Self::new(Roster::new(students, courses)))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn data_populated(&self) -> bool {
        self.data_populated
    }

    /// Run one selection. Returns `true` when the session should end.
    pub fn handle_choice(&mut self, choice: MenuChoice, console: &mut dyn Console) -> Result<bool> {
        debug!(?choice, "dispatching selection");

        if choice.requires_data() && !self.data_populated {
            debug!(?choice, "selection requires student data");
            console.write("\n")?;
            console.message(
                MessageKind::Error,
                "Please enter student data first (Option 2).",
            )?;
            return Ok(false);
        }

        match choice {
            MenuChoice::Exit => {
                console.line("\nThank you for using the Student Management System.")?;
                return Ok(true);
            }
            MenuChoice::Instructions => console.line(&screens::instructions())?,
            MenuChoice::EnterData => self.enter_data(console)?,
            MenuChoice::CourseStatistics => {
                let stats = self.roster.all_course_statistics();
                report(console, stats, |stats| screens::course_statistics(&stats))?;
            }
            MenuChoice::StudentStatistics => {
                let summaries = self.roster.student_statistics();
                report(console, summaries, |summaries| {
                    screens::student_statistics(&summaries)
                })?;
            }
            MenuChoice::SortDescending
            | MenuChoice::SortAscending
            | MenuChoice::SortById
            | MenuChoice::SortByName => {
                if let Some((key, title)) = choice.sort_key() {
                    self.roster.sort(key);
                    console.line(&format!("\n{title}"))?;
                    self.display_all(console)?;
                }
            }
            MenuChoice::SearchById => self.search_by_id(console)?,
            MenuChoice::SearchByName => self.search_by_name(console)?,
            MenuChoice::GradeDistribution => {
                let distributions = self.roster.all_grade_distributions();
                report(console, distributions, |distributions| {
                    screens::grade_distribution(&distributions)
                })?;
            }
            MenuChoice::DisplayAll => self.display_all(console)?,
        }
        Ok(false)
    }

    /// Run a full entry pass and commit it. Re-entering data over an existing
    /// roster needs confirmation; declining leaves the roster as it was.
    fn enter_data(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.data_populated {
            console.line("\nWARNING: Student data already exists!")?;
            console.line("Entering new data will overwrite existing records.")?;
            if !confirm(console, "Do you want to continue?")? {
                info!("overwrite declined");
                console.message(MessageKind::Info, "Data entry cancelled.")?;
                return Ok(());
            }
        }

        let title = heading("ENTER STUDENT INFORMATION").join("\n");
        console.line(&format!("\n{title}"))?;

        let mut pass = self.roster.begin_entry();
        while !pass.is_complete() {
            let record = prompt_record(console, &pass)?;
            pass.push(record)?;
        }

        let saved = self.roster.commit(pass)?;
        self.data_populated = true;
        console.write("\n")?;
        console.message(
            MessageKind::Success,
            &format!("{saved} student records have been saved."),
        )
    }

    fn display_all(&self, console: &mut dyn Console) -> Result<()> {
        let records = self.roster.populated_records();
        let course_count = self.roster.course_count();
        report(console, records, |records| {
            screens::records_table(records, course_count)
        })
    }

    fn search_by_id(&self, console: &mut dyn Console) -> Result<()> {
        let raw = console.ask("\nEnter Student ID to search: ")?;
        let Ok(id) = parse_identifier(&raw) else {
            return console.message(MessageKind::Error, "Invalid input.");
        };
        let found = self.roster.find_by_id(id);
        report(console, found, screens::student_found)
    }

    fn search_by_name(&self, console: &mut dyn Console) -> Result<()> {
        let name = console.ask("\nEnter Student Name to search: ")?;
        let found = self.roster.find_by_name(&name);
        report(console, found, |records| {
            records
                .into_iter()
                .map(screens::student_found)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

/// Print a derived view, or the roster error that prevented computing it.
fn report<T>(
    console: &mut dyn Console,
    result: Result<T, RosterError>,
    render: impl FnOnce(T) -> String,
) -> Result<()> {
    match result {
        Ok(value) => console.line(&render(value)),
        Err(err) => {
            debug!(%err, "report unavailable");
            console.write("\n")?;
            console.message(MessageKind::Error, &err.to_string())
        }
    }
}

/// Drive the menu loop until the user exits. After every selection other than
/// exit the user acknowledges before the menu is shown again.
pub fn run_app(app: &mut App, console: &mut dyn Console) -> Result<()> {
    loop {
        console.write(&screens::menu())?;
        let raw = console.ask("Enter your choice (0-12): ")?;

        match MenuChoice::from_input(&raw) {
            Some(choice) => {
                if app.handle_choice(choice, console)? {
                    return Ok(());
                }
            }
            None => {
                debug!(input = %raw, "invalid menu selection");
                console.write("\n")?;
                console.message(
                    MessageKind::Error,
                    "Invalid choice. Please enter a number from 0 to 12.",
                )?;
            }
        }

        console.ask("\nPress Enter to continue...")?;
    }
}

/// Configure the roster and run the menu loop. A closed input stream at any
/// prompt ends the session normally.
pub fn run_session(console: &mut dyn Console, config: &SessionConfig) -> Result<()> {
    let result = App::start(console, config).and_then(|mut app| run_app(&mut app, console));
    match result {
        Err(err) if err.downcast_ref::<InputClosed>().is_some() => {
            info!("input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::ScriptedConsole;

    #[test]
    fn menu_input_parsing() {
        assert_eq!(MenuChoice::from_input("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input(" 12 "), Some(MenuChoice::DisplayAll));
        assert_eq!(MenuChoice::from_input("13"), None);
        assert_eq!(MenuChoice::from_input("-1"), None);
        assert_eq!(MenuChoice::from_input("two"), None);
    }

    #[test]
    fn only_instructions_entry_and_exit_are_ungated() {
        assert!(!MenuChoice::Exit.requires_data());
        assert!(!MenuChoice::Instructions.requires_data());
        assert!(!MenuChoice::EnterData.requires_data());
        assert!(MenuChoice::DisplayAll.requires_data());
        assert!(MenuChoice::SearchByName.requires_data());
    }

    #[test]
    fn gated_selection_without_data_prints_hint() {
        let mut app = App::new(Roster::new(1, 1));
        let mut console = ScriptedConsole::default();
        let exit = app
            .handle_choice(MenuChoice::CourseStatistics, &mut console)
            .unwrap();
        assert!(!exit);
        assert!(console
            .output()
            .contains("ERROR: Please enter student data first (Option 2)."));
        assert!(app.roster().is_empty());
    }

    #[test]
    fn entry_pass_sets_the_populated_flag() {
        let mut app = App::new(Roster::new(1, 2));
        let mut console = ScriptedConsole::new(["1001", "Ann", "100", "100"]);
        app.handle_choice(MenuChoice::EnterData, &mut console)
            .unwrap();
        assert!(app.data_populated());
        assert_eq!(app.roster().len(), 1);
        assert!(console
            .output()
            .contains("SUCCESS: 1 student records have been saved."));
    }

    #[test]
    fn declined_overwrite_keeps_roster() {
        let mut app = App::new(Roster::new(1, 1));
        let mut console = ScriptedConsole::new(["1001", "Ann", "90", "n"]);
        app.handle_choice(MenuChoice::EnterData, &mut console)
            .unwrap();
        app.handle_choice(MenuChoice::EnterData, &mut console)
            .unwrap();
        assert!(console.output().contains("(y/n): Data entry cancelled.\n"));
        assert_eq!(app.roster().records()[0].id(), 1001);
    }

    #[test]
    fn start_uses_configured_counts() {
        let config = SessionConfig {
            students: Some(2),
            courses: None,
            color: false,
        };
        let mut console = ScriptedConsole::new(["9", "3"]);
        let app = App::start(&mut console, &config).unwrap();
        assert_eq!(app.roster().capacity(), 2);
        assert_eq!(app.roster().course_count(), 3);
        assert!(!console.output().contains("number of students"));
    }

    #[test]
    fn closed_input_ends_session_cleanly() {
        let mut console = ScriptedConsole::new(["2", "2", "1"]);
        let config = SessionConfig::default();
        assert!(run_session(&mut console, &config).is_ok());
        assert!(console.output().contains("INSTRUCTIONS"));
    }
}
