//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod roster_error_tests {
    use super::*;

    #[test]
    fn test_database_error_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let sql_error = conn.execute("SELECT * FROM missing_table", []).unwrap_err();
        let error = RosterError::from(sql_error);

        match error {
            RosterError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = RosterError::from(json_error);

        match error {
            RosterError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        let error = RosterError::from(io_error);

        match error {
            RosterError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "seven".parse::<i64>().unwrap_err();
        let error = RosterError::from(parse_error);

        match error {
            RosterError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_team_message() {
        let error = RosterError::MissingTeam {
            last_name: "Young".to_string(),
        };
        assert_eq!(error.to_string(), "Player Young has no owning team");
    }

    #[test]
    fn test_duplicate_team_message() {
        let error = RosterError::DuplicateTeam {
            name: "Miami Heat".to_string(),
        };
        assert!(error.to_string().contains("Miami Heat"));
        assert!(error.to_string().contains("already exists"));
    }

    #[test]
    fn test_already_persisted_message() {
        let error = RosterError::AlreadyPersisted {
            kind: "Player",
            id: 4,
        };
        assert_eq!(error.to_string(), "Player with id 4 is already persisted");
    }

    #[test]
    fn test_wrong_query_kind_message() {
        let error = RosterError::WrongQueryKind {
            query: "Team.delete",
        };
        assert!(error.to_string().contains("Team.delete"));
    }
}

#[cfg(test)]
mod constraint_tests {
    use super::*;

    #[test]
    fn test_domain_constraints_are_violations() {
        assert!(RosterError::MissingTeam {
            last_name: "Young".to_string()
        }
        .is_constraint_violation());
        assert!(RosterError::TransientTeam {
            team: "Miami Heat".to_string()
        }
        .is_constraint_violation());
        assert!(RosterError::DuplicateTeam {
            name: "Miami Heat".to_string()
        }
        .is_constraint_violation());
    }

    #[test]
    fn test_sqlite_constraint_is_violation() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (name TEXT NOT NULL)", [])
            .unwrap();
        let err = conn
            .execute("INSERT INTO t (name) VALUES (NULL)", [])
            .unwrap_err();

        assert!(RosterError::from(err).is_constraint_violation());
    }

    #[test]
    fn test_other_errors_are_not_violations() {
        assert!(!RosterError::InvalidCacheSize.is_constraint_violation());
        assert!(!RosterError::NotPersisted { kind: "Team" }.is_constraint_violation());
    }
}
