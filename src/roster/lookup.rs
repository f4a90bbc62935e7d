//! Searches over a populated roster.

use super::error::RosterError;
use super::store::Roster;
use crate::models::StudentRecord;

impl Roster {
    /// Identifiers are unique, so the first match is the only one.
    pub fn find_by_id(&self, id: i64) -> Result<&StudentRecord, RosterError> {
        self.populated_records()?
            .iter()
            .find(|record| i64::from(record.id()) == id)
            .ok_or(RosterError::IdNotFound(id))
    }

    /// Every record whose full name equals `name` ignoring ASCII case, in
    /// roster order.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<&StudentRecord>, RosterError> {
        let matches: Vec<&StudentRecord> = self
            .populated_records()?
            .iter()
            .filter(|record| record.name().eq_ignore_ascii_case(name))
            .collect();

        if matches.is_empty() {
            Err(RosterError::NameNotFound(name.to_string()))
        } else {
            Ok(matches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let rows = [
            (1001, "Ann", 90.0),
            (1002, "Bo", 70.0),
            (1003, "ann", 40.0),
        ];
        let mut roster = Roster::new(rows.len(), 1);
        let mut pass = roster.begin_entry();
        for (id, name, score) in rows {
            pass.push(StudentRecord::new(id, name, vec![score])).unwrap();
        }
        roster.commit(pass).unwrap();
        roster
    }

    #[test]
    fn find_by_id_returns_the_matching_record() {
        let roster = roster();
        let found = roster.find_by_id(1002).unwrap();
        assert_eq!(found.id(), 1002);
        assert_eq!(found.name(), "Bo");
    }

    #[test]
    fn find_by_id_reports_missing_identifier() {
        assert_eq!(roster().find_by_id(4242), Err(RosterError::IdNotFound(4242)));
    }

    #[test]
    fn find_by_name_returns_every_case_insensitive_match() {
        let roster = roster();
        let found = roster.find_by_name("ANN").unwrap();
        let ids: Vec<u32> = found.iter().map(|record| record.id()).collect();
        assert_eq!(ids, vec![1001, 1003]);
    }

    #[test]
    fn find_by_name_is_not_a_substring_search() {
        assert_eq!(
            roster().find_by_name("An"),
            Err(RosterError::NameNotFound("An".to_string()))
        );
    }

    #[test]
    fn lookups_on_empty_roster_report_no_data() {
        let roster = Roster::new(2, 1);
        assert_eq!(roster.find_by_id(1001), Err(RosterError::NoData));
        assert_eq!(roster.find_by_name("Ann"), Err(RosterError::NoData));
    }
}
