//! Derived views over a populated roster: per-course aggregates, per-student
//! summaries, and grade band counts. Every function reports
//! [`RosterError::NoData`] instead of computing over an empty roster.

use super::error::RosterError;
use super::store::Roster;
use super::{MAX_SCORE, MIN_SCORE};
use crate::models::{CourseStats, GradeBand, GradeDistribution, StudentRecord, StudentSummary};

impl Roster {
    /// Aggregates for one zero-based course index. `highest` starts at the
    /// lowest possible score and `lowest` at the highest possible score, so the
    /// reported bounds always come from actual records.
    pub fn course_statistics(&self, course: usize) -> Result<CourseStats, RosterError> {
        let records = self.course_records(course)?;

        let mut total = 0.0;
        let mut highest = MIN_SCORE;
        let mut lowest = MAX_SCORE;
        for score in records.iter().filter_map(|record| record.score(course)) {
            total += score;
            if score > highest {
                highest = score;
            }
            if score < lowest {
                lowest = score;
            }
        }

        Ok(CourseStats {
            course,
            average: total / records.len() as f64,
            highest,
            lowest,
            total,
        })
    }

    /// Statistics for every configured course, in course order.
    pub fn all_course_statistics(&self) -> Result<Vec<CourseStats>, RosterError> {
        (0..self.course_count())
            .map(|course| self.course_statistics(course))
            .collect()
    }

    /// Per-student totals and averages in current roster order.
    pub fn student_statistics(&self) -> Result<Vec<StudentSummary>, RosterError> {
        Ok(self
            .populated_records()?
            .iter()
            .map(StudentRecord::summary)
            .collect())
    }

    pub fn grade_distribution(&self, course: usize) -> Result<GradeDistribution, RosterError> {
        let records = self.course_records(course)?;

        let mut distribution = GradeDistribution {
            course,
            ..GradeDistribution::default()
        };
        for score in records.iter().filter_map(|record| record.score(course)) {
            distribution.record(GradeBand::for_score(score));
        }
        Ok(distribution)
    }

    pub fn all_grade_distributions(&self) -> Result<Vec<GradeDistribution>, RosterError> {
        (0..self.course_count())
            .map(|course| self.grade_distribution(course))
            .collect()
    }

    fn course_records(&self, course: usize) -> Result<&[StudentRecord], RosterError> {
        let records = self.populated_records()?;
        if course >= self.course_count() {
            return Err(RosterError::CourseOutOfRange(course));
        }
        Ok(records)
    }
}
