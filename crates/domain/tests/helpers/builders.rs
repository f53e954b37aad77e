#![allow(dead_code)]
use rusers_domain::{SessionEntry, SessionRecord};

pub struct SessionEntryBuilder {
    line: Vec<u8>,
    name: Vec<u8>,
    host: Vec<u8>,
    time: i64,
    idle: u32,
}

impl SessionEntryBuilder {
    pub fn new() -> Self {
        Self {
            line: b"tty1".to_vec(),
            name: b"bob".to_vec(),
            host: b"console".to_vec(),
            time: 1_700_000_000,
            idle: 5,
        }
    }

    pub fn line(mut self, line: &[u8]) -> Self {
        self.line = line.to_vec();
        self
    }

    pub fn name(mut self, name: &[u8]) -> Self {
        self.name = name.to_vec();
        self
    }

    pub fn host(mut self, host: &[u8]) -> Self {
        self.host = host.to_vec();
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    pub fn idle(mut self, idle: u32) -> Self {
        self.idle = idle;
        self
    }

    pub fn build(self) -> SessionEntry {
        SessionEntry::new(self.line, self.name, self.host, self.time, self.idle)
    }
}

pub struct SessionRecordBuilder {
    hostname: String,
    username: String,
    remote_origin: String,
    login_time: i64,
    idle_time: u32,
}

impl SessionRecordBuilder {
    pub fn new() -> Self {
        Self {
            hostname: "alice-desktop".to_string(),
            username: "bob".to_string(),
            remote_origin: "tty1".to_string(),
            login_time: 1_700_000_000,
            idle_time: 5,
        }
    }

    pub fn hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.to_string();
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn remote_origin(mut self, origin: &str) -> Self {
        self.remote_origin = origin.to_string();
        self
    }

    pub fn login_time(mut self, time: i64) -> Self {
        self.login_time = time;
        self
    }

    pub fn idle_time(mut self, idle: u32) -> Self {
        self.idle_time = idle;
        self
    }

    pub fn build(self) -> SessionRecord {
        SessionRecord::new(
            self.hostname,
            self.username,
            self.remote_origin,
            self.login_time,
            self.idle_time,
        )
    }
}
