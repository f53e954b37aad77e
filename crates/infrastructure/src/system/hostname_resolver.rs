use async_trait::async_trait;
use rusers_application::ports::HostnameResolver;
use rusers_domain::QueryError;
use std::ffi::CStr;
use std::net::IpAddr;
use tracing::debug;

/// Reverse lookup through the platform resolver, the same sources the C
/// library consults for `getnameinfo` (hosts file, then DNS per nsswitch).
pub struct SystemHostnameResolver;

impl SystemHostnameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemHostnameResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostnameResolver for SystemHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, QueryError> {
        // getnameinfo blocks, keep it off the async workers
        match tokio::task::spawn_blocking(move || lookup_name(ip)).await {
            Ok(Some(name)) => {
                debug!(ip = %ip, hostname = %name, "Reverse lookup resolved");
                Ok(Some(name))
            }
            Ok(None) => {
                debug!(ip = %ip, "Reverse lookup found no name");
                Ok(None)
            }
            Err(error) => {
                debug!(ip = %ip, error = %error, "Reverse lookup task failed");
                Ok(None)
            }
        }
    }
}

fn lookup_name(ip: IpAddr) -> Option<String> {
    let mut host = [0 as libc::c_char; libc::NI_MAXHOST as usize];

    let rc = match ip {
        IpAddr::V4(v4) => {
            let mut sa: libc::sockaddr_in = unsafe { std::mem::zeroed() };
            sa.sin_family = libc::AF_INET as libc::sa_family_t;
            sa.sin_addr.s_addr = u32::from_be_bytes(v4.octets()).to_be();
            unsafe {
                libc::getnameinfo(
                    &sa as *const libc::sockaddr_in as *const libc::sockaddr,
                    std::mem::size_of::<libc::sockaddr_in>() as libc::socklen_t,
                    host.as_mut_ptr(),
                    host.len() as libc::socklen_t,
                    std::ptr::null_mut(),
                    0,
                    libc::NI_NAMEREQD,
                )
            }
        }
        IpAddr::V6(v6) => {
            let mut sa: libc::sockaddr_in6 = unsafe { std::mem::zeroed() };
            sa.sin6_family = libc::AF_INET6 as libc::sa_family_t;
            sa.sin6_addr.s6_addr = v6.octets();
            unsafe {
                libc::getnameinfo(
                    &sa as *const libc::sockaddr_in6 as *const libc::sockaddr,
                    std::mem::size_of::<libc::sockaddr_in6>() as libc::socklen_t,
                    host.as_mut_ptr(),
                    host.len() as libc::socklen_t,
                    std::ptr::null_mut(),
                    0,
                    libc::NI_NAMEREQD,
                )
            }
        }
    };

    if rc != 0 {
        return None;
    }

    let name = unsafe { CStr::from_ptr(host.as_ptr()) };
    name.to_str().ok().map(|s| s.to_string())
}
