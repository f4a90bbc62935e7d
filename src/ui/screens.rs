//! Text screens shown by the session. Each function turns already-derived
//! roster data into printable text; none of them look at session state.

use crate::models::{CourseStats, GradeBand, GradeDistribution, StudentRecord, StudentSummary};
use crate::roster::{MAX_COURSES, MAX_STUDENTS};

use super::helpers::{heading, render_table, rule, table_width};

const ID_WIDTH: u16 = 12;
const NAME_WIDTH: u16 = 20;
const COURSE_WIDTH: u16 = 10;
const TOTAL_WIDTH: u16 = 9;
const AVERAGE_WIDTH: u16 = 9;

pub(crate) fn banner() -> String {
    heading("STUDENT MANAGEMENT SYSTEM").join("\n")
}

pub(crate) fn menu() -> String {
    let mut lines = heading("STUDENT MANAGEMENT SYSTEM");
    lines.extend(
        [
            "1. Show Instructions",
            "2. Enter Student Data",
            "3. Show Course Statistics",
            "4. Show Student Statistics",
            "5. Sort: Highest to Lowest Scores",
            "6. Sort: Lowest to Highest Scores",
            "7. Sort by Student ID",
            "8. Sort by Student Name",
            "9. Search by Student ID",
            "10. Search by Student Name",
            "11. Show Grade Distribution",
            "12. Display All Students",
            "0. Exit Program",
        ]
        .map(String::from),
    );
    lines.push(rule(44));
    format!("\n{}\n", lines.join("\n"))
}

pub(crate) fn instructions() -> String {
    let mut lines = heading("INSTRUCTIONS");
    lines.extend([
        format!("1. Maximum {MAX_STUDENTS} students and {MAX_COURSES} courses"),
        "2. Student ID must be 4 digits (1000-9999)".to_string(),
        "3. Student name: letters, spaces and hyphens only".to_string(),
        "4. Scores must be between 0 and 100".to_string(),
        "5. Data is kept until the program ends".to_string(),
        "6. You can use menu options in any order".to_string(),
    ]);
    lines.push(rule(44));
    format!("\n{}", lines.join("\n"))
}

/// Full roster table with a footer summarizing its dimensions.
pub(crate) fn records_table(records: &[StudentRecord], course_count: usize) -> String {
    let mut widths = vec![ID_WIDTH, NAME_WIDTH];
    widths.extend(std::iter::repeat(COURSE_WIDTH).take(course_count));
    widths.extend([TOTAL_WIDTH, AVERAGE_WIDTH]);

    let mut header = vec!["Student ID".to_string(), "Student Name".to_string()];
    header.extend((1..=course_count).map(|course| format!("Course {course}")));
    header.extend(["Total".to_string(), "Average".to_string()]);

    let rows = records
        .iter()
        .map(|record| {
            let mut row = vec![record.id().to_string(), record.name().to_string()];
            row.extend(record.scores().iter().map(|score| format!("{score:>8.1}")));
            row.push(format!("{:>9.1}", record.total()));
            row.push(format!("{:>9.2}", record.average()));
            row
        })
        .collect();

    let width = table_width(&widths) as usize;
    let mut lines = vec![String::new(), rule(width)];
    lines.push(format!("{}STUDENT RECORDS", " ".repeat(width.saturating_sub(15) / 2)));
    lines.push(rule(width));
    lines.extend(render_table(header, rows, &widths));
    lines.push(rule(width));
    lines.push(format!(
        "Total Students: {}, Total Courses: {}",
        records.len(),
        course_count
    ));
    lines.join("\n")
}

pub(crate) fn course_statistics(stats: &[CourseStats]) -> String {
    let mut lines = vec![String::new()];
    lines.extend(heading("COURSE STATISTICS"));
    for course in stats {
        lines.push(String::new());
        lines.push(format!("Course {}:", course.course + 1));
        lines.push(format!("  Average Score: {:.2}", course.average));
        lines.push(format!("  Highest Score: {:.2}", course.highest));
        lines.push(format!("  Lowest Score:  {:.2}", course.lowest));
        lines.push(format!("  Total Score:   {:.2}", course.total));
    }
    lines.join("\n")
}

pub(crate) fn student_statistics(summaries: &[StudentSummary]) -> String {
    let mut lines = vec![String::new()];
    lines.extend(heading("STUDENT STATISTICS"));
    for summary in summaries {
        lines.push(String::new());
        lines.push(format!("ID: {}, Name: {}", summary.id, summary.name));
        lines.push(format!(
            "  Total Score: {:.1}, Average: {:.2}",
            summary.total, summary.average
        ));
    }
    lines.join("\n")
}

/// Detail block printed for each search hit.
pub(crate) fn student_found(record: &StudentRecord) -> String {
    let scores: Vec<String> = record
        .scores()
        .iter()
        .enumerate()
        .map(|(course, score)| format!("Course {}: {score:.1}", course + 1))
        .collect();

    [
        String::new(),
        "STUDENT FOUND:".to_string(),
        format!("  ID: {}", record.id()),
        format!("  Name: {}", record.name()),
        format!("  Scores: {}", scores.join("  ")),
        format!(
            "  Total: {:.1}, Average: {:.2}",
            record.total(),
            record.average()
        ),
    ]
    .join("\n")
}

pub(crate) fn grade_distribution(distributions: &[GradeDistribution]) -> String {
    let mut lines = vec![String::new()];
    lines.extend(heading("GRADE DISTRIBUTION"));
    for distribution in distributions {
        lines.push(String::new());
        lines.push(format!("Course {}:", distribution.course + 1));
        for band in GradeBand::ALL {
            let label = format!("{band} ({}):", band.range_label());
            lines.push(format!(
                "  {label:<13} {:>2} students",
                distribution.count(band)
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new(1001, "Ann", vec![100.0, 100.0]),
            StudentRecord::new(1002, "Bo", vec![50.0, 70.0]),
        ]
    }

    #[test]
    fn menu_lists_every_selection() {
        let menu = menu();
        for number in 0..=12 {
            assert!(menu.contains(&format!("\n{number}. ")), "missing {number}");
        }
    }

    #[test]
    fn records_table_has_header_rows_and_footer() {
        let table = records_table(&records(), 2);
        let lines: Vec<&str> = table.lines().collect();
        let header = lines
            .iter()
            .find(|line| line.starts_with("Student ID"))
            .unwrap();
        assert!(header.contains("Course 1"));
        assert!(header.contains("Course 2"));
        assert!(header.contains("Average"));

        let ann = lines.iter().find(|line| line.starts_with("1001")).unwrap();
        assert!(ann.contains("Ann"));
        assert!(ann.contains("100.0"));
        assert!(ann.contains("200.0"));
        assert!(ann.ends_with("100.00"));

        assert!(table.ends_with("Total Students: 2, Total Courses: 2"));
    }

    #[test]
    fn course_statistics_use_two_decimals() {
        let text = course_statistics(&[CourseStats {
            course: 0,
            average: 75.0,
            highest: 100.0,
            lowest: 50.0,
            total: 150.0,
        }]);
        assert!(text.contains("Course 1:"));
        assert!(text.contains("Average Score: 75.00"));
        assert!(text.contains("Lowest Score:  50.00"));
    }

    #[test]
    fn student_found_lists_scores() {
        let text = student_found(&records()[1]);
        assert!(text.contains("  ID: 1002"));
        assert!(text.contains("Course 1: 50.0  Course 2: 70.0"));
        assert!(text.contains("Total: 120.0, Average: 60.00"));
    }

    #[test]
    fn grade_distribution_lists_bands_from_a_to_f() {
        let text = grade_distribution(&[GradeDistribution {
            course: 0,
            a: 1,
            f: 1,
            ..GradeDistribution::default()
        }]);
        let a = text.find("A (90-100):").unwrap();
        let f = text.find("F (0-59):").unwrap();
        assert!(a < f);
        assert!(text.contains("A (90-100):    1 students"));
        assert!(text.contains("D (60-69):     0 students"));
    }
}
