/// Fixed text-field widths of the version-2 rusers wire format, in bytes.
pub const LINE_WIDTH: usize = 8;
pub const NAME_WIDTH: usize = 8;
pub const HOST_WIDTH: usize = 16;

/// One decoded entry of a `utmpidlearr` reply, before any shaping.
///
/// Text fields hold exactly the bytes the wire carried for them; NUL
/// trimming and width truncation happen when the entry is mapped into a
/// [`SessionRecord`](crate::SessionRecord).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    /// Terminal device the session is attached to (`ut_line`).
    pub line: Vec<u8>,
    /// Login name (`ut_name`).
    pub name: Vec<u8>,
    /// Host the session originates from, empty for local logins (`ut_host`).
    pub host: Vec<u8>,
    /// Login timestamp, seconds since epoch on the remote clock (`ut_time`).
    pub time: i64,
    /// Seconds since the session's last activity (`ui_idle`).
    pub idle: u32,
}

impl SessionEntry {
    pub fn new(line: Vec<u8>, name: Vec<u8>, host: Vec<u8>, time: i64, idle: u32) -> Self {
        Self {
            line,
            name,
            host,
            time,
            idle,
        }
    }
}

/// Cut a wire text field at its first NUL byte, C-string style.
pub fn trim_nul(field: &[u8]) -> &[u8] {
    match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

/// First `width` bytes of a field; identity for fields already within width.
pub fn truncate(field: &[u8], width: usize) -> &[u8] {
    &field[..field.len().min(width)]
}
