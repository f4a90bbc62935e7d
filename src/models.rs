//! Domain models shared by the roster engines and the console screens. These
//! types stay light-weight data holders; the only logic they carry keeps the
//! derived fields of a record consistent with its scores.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// One student row in the roster. `total` and `average` are derived from the
/// scores and are recomputed every time the scores change, which is why the
/// fields are private and only exposed through accessors.
pub struct StudentRecord {
    id: u32,
    name: String,
    scores: Vec<f64>,
    total: f64,
    average: f64,
}

impl StudentRecord {
    /// Build a record and compute its total and average. The course count is
    /// the number of scores supplied.
    pub fn new(id: u32, name: impl Into<String>, scores: Vec<f64>) -> Self {
        let mut record = Self {
            id,
            name: name.into(),
            scores: Vec::new(),
            total: 0.0,
            average: 0.0,
        };
        record.set_scores(scores);
        record
    }

    /// Replace every score at once and refresh the derived fields.
    pub fn set_scores(&mut self, scores: Vec<f64>) {
        self.total = scores.iter().sum();
        self.average = if scores.is_empty() {
            0.0
        } else {
            self.total / scores.len() as f64
        };
        self.scores = scores;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Score for a zero-based course index, if the record has that course.
    pub fn score(&self, course: usize) -> Option<f64> {
        self.scores.get(course).copied()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    /// Project the record onto the fields shown by the student statistics
    /// report.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            id: self.id,
            name: self.name.clone(),
            total: self.total,
            average: self.average,
        }
    }
}

/// Per-student row of the student statistics report.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub id: u32,
    pub name: String,
    /// Sum of the student's scores.
    pub total: f64,
    /// `total` divided by the course count.
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Aggregates for one course across the whole roster.
pub struct CourseStats {
    /// Zero-based course index.
    pub course: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Letter grade bands. Lower bounds are inclusive, so a score sitting exactly
/// on a threshold lands in the higher band.
pub enum GradeBand {
    A,
    B,
    C,
    D,
    F,
}

impl GradeBand {
    /// Bands in the order the distribution report prints them.
    pub const ALL: [GradeBand; 5] = [
        GradeBand::A,
        GradeBand::B,
        GradeBand::C,
        GradeBand::D,
        GradeBand::F,
    ];

    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            GradeBand::A
        } else if score >= 80.0 {
            GradeBand::B
        } else if score >= 70.0 {
            GradeBand::C
        } else if score >= 60.0 {
            GradeBand::D
        } else {
            GradeBand::F
        }
    }

    /// Score range label used in the report, e.g. `90-100`.
    pub fn range_label(self) -> &'static str {
        match self {
            GradeBand::A => "90-100",
            GradeBand::B => "80-89",
            GradeBand::C => "70-79",
            GradeBand::D => "60-69",
            GradeBand::F => "0-59",
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            GradeBand::A => "A",
            GradeBand::B => "B",
            GradeBand::C => "C",
            GradeBand::D => "D",
            GradeBand::F => "F",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-band head counts for one course.
pub struct GradeDistribution {
    /// Zero-based course index.
    pub course: usize,
    /// Students in band A; `b` through `f` follow the same pattern.
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
    pub f: usize,
}

impl GradeDistribution {
    pub fn record(&mut self, band: GradeBand) {
        match band {
            GradeBand::A => self.a += 1,
            GradeBand::B => self.b += 1,
            GradeBand::C => self.c += 1,
            GradeBand::D => self.d += 1,
            GradeBand::F => self.f += 1,
        }
    }

    pub fn count(&self, band: GradeBand) -> usize {
        match band {
            GradeBand::A => self.a,
            GradeBand::B => self.b,
            GradeBand::C => self.c,
            GradeBand::D => self.d,
            GradeBand::F => self.f,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d + self.f
    }
}
