//! Record store. The roster owns the records for the whole session; an entry
//! pass collects a replacement set on the side so a half-finished pass never
//! shows up in reports.

use tracing::info;

use super::error::{RosterError, ValidationError};
use super::validation::validate_identifier;
use crate::models::StudentRecord;

/// Fixed-capacity roster. Capacity and course count are chosen once at
/// start-up; the records are only ever replaced wholesale by committing an
/// [`EntryPass`].
#[derive(Debug, Clone)]
pub struct Roster {
    /// Number of records every committed pass must contain.
    capacity: usize,
    /// Number of scores every record must carry.
    course_count: usize,
    /// Populated entries in roster order. Empty until the first commit.
    pub(super) records: Vec<StudentRecord>,
}

impl Roster {
    /// Create an empty roster. Both sizes are fixed for the roster's lifetime.
    pub fn new(capacity: usize, course_count: usize) -> Self {
        Self {
            capacity,
            course_count,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Configured number of students.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configured number of courses per student.
    pub fn course_count(&self) -> usize {
        self.course_count
    }

    /// Logical length: zero until the first entry pass is committed, then
    /// always equal to the capacity.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True until an entry pass has been committed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in current roster order; empty before the first commit.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// The records, or [`RosterError::NoData`] when nothing has been entered.
    pub fn populated_records(&self) -> Result<&[StudentRecord], RosterError> {
        if self.records.is_empty() {
            Err(RosterError::NoData)
        } else {
            Ok(&self.records)
        }
    }

    /// Start a fresh entry pass sized for this roster. The pass does not see
    /// the current records, so identifiers from an earlier pass may be reused.
    pub fn begin_entry(&self) -> EntryPass {
        EntryPass::new(self.capacity, self.course_count)
    }

    /// Replace every record with the contents of a completed pass. An
    /// incomplete pass is rejected and leaves the roster untouched.
    pub fn commit(&mut self, pass: EntryPass) -> Result<usize, RosterError> {
        if pass.capacity != self.capacity {
            return Err(RosterError::CapacityMismatch {
                expected: self.capacity,
                actual: pass.capacity,
            });
        }
        if pass.course_count != self.course_count {
            return Err(RosterError::CourseCountMismatch {
                expected: self.course_count,
                actual: pass.course_count,
            });
        }
        if !pass.is_complete() {
            return Err(RosterError::CapacityMismatch {
                expected: self.capacity,
                actual: pass.records.len(),
            });
        }

        self.records = pass.records;
        info!(
            records = self.records.len(),
            courses = self.course_count,
            "roster replaced"
        );
        Ok(self.records.len())
    }
}

/// Records collected during one bulk entry operation. Identifier uniqueness is
/// enforced against the records accepted so far in this pass only.
#[derive(Debug, Clone)]
pub struct EntryPass {
    capacity: usize,
    course_count: usize,
    records: Vec<StudentRecord>,
}

impl EntryPass {
    /// Empty pass for `capacity` records of `course_count` scores each.
    pub fn new(capacity: usize, course_count: usize) -> Self {
        Self {
            capacity,
            course_count,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Number of scores each record in this pass must carry.
    pub fn course_count(&self) -> usize {
        self.course_count
    }

    /// Zero-based index of the slot being filled next.
    pub fn next_slot(&self) -> usize {
        self.records.len()
    }

    /// True once every slot holds a record; only then can the pass be committed.
    pub fn is_complete(&self) -> bool {
        self.records.len() == self.capacity
    }

    /// Identifiers accepted so far in this pass, in entry order.
    pub fn accepted_ids(&self) -> Vec<u32> {
        self.records.iter().map(StudentRecord::id).collect()
    }

    /// Validate a candidate identifier for the next slot.
    pub fn check_identifier(&self, id: i64) -> Result<u32, ValidationError> {
        validate_identifier(id, &self.accepted_ids())
    }

    /// Append a fully validated record. The score count must match the
    /// configured course count and the pass must still have room.
    pub fn push(&mut self, record: StudentRecord) -> Result<(), RosterError> {
        if self.is_complete() {
            return Err(RosterError::CapacityMismatch {
                expected: self.capacity,
                actual: self.records.len() + 1,
            });
        }
        if record.scores().len() != self.course_count {
            return Err(RosterError::CourseCountMismatch {
                expected: self.course_count,
                actual: record.scores().len(),
            });
        }
        self.records.push(record);
        Ok(())
    }
}
