use crate::use_cases::QueryHostsUseCase;
use regex::Regex;
use rusers_domain::{Machine, SessionRecord};
use std::sync::Arc;

/// A session whose username matched one of the search patterns.
#[derive(Debug, Clone)]
pub struct UserMatch {
    pub machine: Machine,
    pub record: SessionRecord,
}

pub struct FindUserUseCase {
    query_hosts: Arc<QueryHostsUseCase>,
}

impl FindUserUseCase {
    pub fn new(query_hosts: Arc<QueryHostsUseCase>) -> Self {
        Self { query_hosts }
    }

    /// Sweep `machines` and return the sessions whose username matches any
    /// of `patterns`. With `exact` a pattern must cover the whole username,
    /// otherwise a substring match is enough. Hosts that fail to answer are
    /// skipped, the sweep already logged them.
    pub async fn execute(
        &self,
        patterns: &[String],
        machines: &[Machine],
        exact: bool,
    ) -> Result<Vec<UserMatch>, regex::Error> {
        let matcher = build_matcher(patterns, exact)?;
        let reports = self.query_hosts.execute(machines).await;

        let mut matches = Vec::new();
        for report in reports {
            let records = match report.outcome {
                Ok(records) => records,
                Err(_) => continue,
            };
            for record in records {
                if matcher.is_match(&record.username) {
                    matches.push(UserMatch {
                        machine: report.machine.clone(),
                        record,
                    });
                }
            }
        }

        Ok(matches)
    }
}

/// Each pattern is grouped before joining so alternation never leaks across
/// the anchors.
fn build_matcher(patterns: &[String], exact: bool) -> Result<Regex, regex::Error> {
    let alternatives = patterns
        .iter()
        .map(|pattern| format!("(?:{})", pattern))
        .collect::<Vec<_>>()
        .join("|");

    if exact {
        Regex::new(&format!("^(?:{})$", alternatives))
    } else {
        Regex::new(&format!("^.*(?:{}).*$", alternatives))
    }
}
