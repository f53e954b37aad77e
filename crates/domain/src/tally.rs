use serde::Serialize;

use crate::SessionRecord;

/// All sessions one user holds on a host, collapsed to the first record
/// seen plus a count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSessions {
    pub record: SessionRecord,
    pub sessions: usize,
}

/// Group records by username, keeping the first record for each name.
/// Output order follows first appearance, which is the remote reply order.
pub fn tally_by_username(records: &[SessionRecord]) -> Vec<UserSessions> {
    let mut tallies: Vec<UserSessions> = Vec::new();

    for record in records {
        match tallies
            .iter_mut()
            .find(|t| t.record.username == record.username)
        {
            Some(tally) => tally.sessions += 1,
            None => tallies.push(UserSessions {
                record: record.clone(),
                sessions: 1,
            }),
        }
    }

    tallies
}
