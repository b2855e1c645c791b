use std::net::SocketAddr;

/// Dashboard server configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Address the HTTP dashboard binds to.
    pub listen_addr: SocketAddr,
    /// Allow any origin/method/header. The board is read-only, so the
    /// permissive layer is on by default.
    pub permissive_cors: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            // SAFETY: This is a hardcoded valid address that will always parse
            listen_addr: "127.0.0.1:8080"
                .parse()
                .expect("default listen address is valid"),
            permissive_cors: true,
        }
    }
}

impl BoardConfig {
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            ..Default::default()
        }
    }

    pub fn with_cors(mut self, permissive: bool) -> Self {
        self.permissive_cors = permissive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_config_default() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.listen_addr.to_string(), "127.0.0.1:8080");
        assert!(cfg.permissive_cors);
    }

    #[test]
    fn board_config_new() {
        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let cfg = BoardConfig::new(addr);
        assert_eq!(cfg.listen_addr, addr);
        assert!(cfg.permissive_cors);
    }

    #[test]
    fn board_config_with_cors() {
        let cfg = BoardConfig::default().with_cors(false);
        assert!(!cfg.permissive_cors);
    }
}
