use chrono::{Local, TimeZone};
use rusers_application::use_cases::{HostReport, UserMatch};
use rusers_domain::tally::UserSessions;
use rusers_domain::SessionRecord;
use serde::Serialize;

#[derive(Serialize)]
struct HostJson<'a> {
    machine: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    sessions: Vec<&'a SessionRecord>,
}

#[derive(Serialize)]
struct MatchJson<'a> {
    machine: &'a str,
    session: &'a SessionRecord,
}

pub fn print_reports(reports: &[HostReport]) {
    for report in reports {
        if let Ok(records) = &report.outcome {
            for record in records {
                println!("{}", session_line(record));
            }
        }
    }
}

pub fn print_reports_json(reports: &[HostReport]) -> anyhow::Result<()> {
    let rows: Vec<HostJson> = reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(records) => HostJson {
                machine: &report.machine.name,
                error: None,
                sessions: records.iter().collect(),
            },
            Err(error) => HostJson {
                machine: &report.machine.name,
                error: Some(error.to_string()),
                sessions: Vec::new(),
            },
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub fn print_tallies(tallies: &[UserSessions]) {
    for tally in tallies {
        println!("{:<8} {:>4}", tally.record.username, tally.sessions);
    }
}

pub fn print_tallies_json(tallies: &[UserSessions]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(tallies)?);
    Ok(())
}

pub fn print_matches(matches: &[UserMatch]) {
    for user_match in matches {
        // Machine's Display ignores width specs, pad the rendered string
        println!(
            "{:<12} {}",
            user_match.machine.to_string(),
            session_line(&user_match.record)
        );
    }
}

pub fn print_matches_json(matches: &[UserMatch]) -> anyhow::Result<()> {
    let rows: Vec<MatchJson> = matches
        .iter()
        .map(|user_match| MatchJson {
            machine: &user_match.machine.name,
            session: &user_match.record,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// One session in the classic listing shape, origin in parens when known.
fn session_line(record: &SessionRecord) -> String {
    let login = format_login(record.login_time);
    let idle = format_idle(record.idle_time);

    if record.remote_origin.is_empty() {
        format!(
            "{:<8} {:<16} {} {:>6}",
            record.username, record.hostname, login, idle
        )
    } else {
        format!(
            "{:<8} {:<16} {} {:>6}  ({})",
            record.username, record.hostname, login, idle, record.remote_origin
        )
    }
}

fn format_login(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(when) => when.format("%b %e %H:%M").to_string(),
        _ => "unknown".to_string(),
    }
}

/// Idle seconds as hours:minutes.
fn format_idle(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}:{:02}", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(origin: &str) -> SessionRecord {
        SessionRecord {
            hostname: "alice-desktop".to_string(),
            username: "bob".to_string(),
            remote_origin: origin.to_string(),
            login_time: 1_700_000_000,
            idle_time: 7_380,
        }
    }

    #[test]
    fn test_format_idle_renders_hours_and_minutes() {
        assert_eq!(format_idle(0), "0:00");
        assert_eq!(format_idle(59), "0:00");
        assert_eq!(format_idle(60), "0:01");
        assert_eq!(format_idle(7_380), "2:03");
        assert_eq!(format_idle(36_000), "10:00");
    }

    #[test]
    fn test_session_line_shows_origin_in_parens() {
        let line = session_line(&record("console"));

        assert!(line.starts_with("bob"));
        assert!(line.contains("alice-desktop"));
        assert!(line.ends_with("(console)"));
    }

    #[test]
    fn test_session_line_omits_empty_origin() {
        let line = session_line(&record(""));

        assert!(!line.contains('('));
    }
}
